//! In-memory catalog store.
//!
//! Holds the two catalog sequences: bands (with their nested albums), fixed
//! after seeding, and songs, mutable at runtime. The store is shared across
//! requests as `Arc<CatalogStore>`; the song sequence sits behind an
//! `RwLock` so concurrent resolvers see a consistent sequence.

mod seed;

pub use seed::{SeedCatalog, load_seed_file, seed_bands, seed_songs};

use std::sync::{PoisonError, RwLock};

use crate::error::{DiscographError, Result};
use crate::model::{Album, Band, Song};

pub struct CatalogStore {
    bands: Vec<Band>,
    songs: RwLock<Vec<Song>>,
}

impl CatalogStore {
    pub fn new(bands: Vec<Band>, songs: Vec<Song>) -> Self {
        Self {
            bands,
            songs: RwLock::new(songs),
        }
    }

    /// Store seeded with the built-in catalog.
    pub fn seeded() -> Self {
        Self::new(seed_bands(), seed_songs())
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Snapshot of the song sequence in store order.
    pub fn songs(&self) -> Vec<Song> {
        self.read_songs().clone()
    }

    pub fn song_count(&self) -> usize {
        self.read_songs().len()
    }

    /// First song with a matching id, if any.
    pub fn song(&self, id: i32) -> Option<Song> {
        self.read_songs().iter().find(|s| s.id == id).cloned()
    }

    /// Every band's albums flattened into one sequence, per-band order
    /// preserved, bands in store order.
    pub fn albums(&self) -> Vec<Album> {
        self.bands
            .iter()
            .flat_map(|band| band.albums.iter().cloned())
            .collect()
    }

    /// First album with a matching id, scanning bands in store order.
    pub fn album(&self, id: i32) -> Option<Album> {
        self.bands
            .iter()
            .flat_map(|band| band.albums.iter())
            .find(|album| album.id == id)
            .cloned()
    }

    /// The band owning the album with the given id, if any.
    pub fn band_of_album(&self, album_id: i32) -> Option<Band> {
        self.bands
            .iter()
            .find(|band| band.albums.iter().any(|album| album.id == album_id))
            .cloned()
    }

    /// Append a new song with id = current count + 1.
    ///
    /// Ids are not re-checked against the existing sequence, so a delete
    /// followed by an add can produce a duplicate id. Legacy behavior,
    /// kept as-is.
    pub fn add_song(&self, name: String, album_id: i32) -> Song {
        let mut songs = self.write_songs();
        let song = Song::new(songs.len() as i32 + 1, name, album_id);
        songs.push(song.clone());
        song
    }

    /// Update a song in place and return the updated value.
    ///
    /// An empty `name` or an `album_id` of 0 counts as absent and leaves
    /// the stored value untouched.
    pub fn edit_song(&self, id: i32, name: Option<String>, album_id: Option<i32>) -> Result<Song> {
        let mut songs = self.write_songs();
        let song = songs
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(DiscographError::SongNotFound(id))?;

        if let Some(name) = name.filter(|n| !n.is_empty()) {
            song.name = name;
        }
        if let Some(album_id) = album_id.filter(|&a| a != 0) {
            song.album_id = album_id;
        }
        Ok(song.clone())
    }

    /// Remove the first song with a matching id and return its pre-deletion
    /// value.
    pub fn delete_song(&self, id: i32) -> Result<Song> {
        let mut songs = self.write_songs();
        let index = songs
            .iter()
            .position(|s| s.id == id)
            .ok_or(DiscographError::SongNotFound(id))?;
        Ok(songs.remove(index))
    }

    fn read_songs(&self) -> std::sync::RwLockReadGuard<'_, Vec<Song>> {
        self.songs.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_songs(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Song>> {
        self.songs.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> CatalogStore {
        let bands = vec![
            Band::new(1, "The Wormholes")
                .with_albums(vec![Album::new(1, "Event Horizon"), Album::new(2, "Redshift")]),
            Band::new(2, "Static Garden").with_albums(vec![Album::new(3, "Overgrowth")]),
        ];
        let songs = vec![
            Song::new(1, "Collapse", 1),
            Song::new(2, "Drift", 2),
            Song::new(3, "Pollen", 3),
        ];
        CatalogStore::new(bands, songs)
    }

    #[test]
    fn song_lookup_finds_existing_and_misses_unknown() {
        let store = test_store();
        assert_eq!(store.song(2).unwrap().name, "Drift");
        assert!(store.song(99).is_none());
    }

    #[test]
    fn albums_flattens_all_bands_in_order() {
        let store = test_store();
        let albums = store.albums();
        let expected: usize = store.bands().iter().map(|b| b.albums.len()).sum();
        assert_eq!(albums.len(), expected);
        let ids: Vec<i32> = albums.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn album_lookup_tolerates_dangling_reference() {
        let store = test_store();
        assert!(store.album(42).is_none());
        assert!(store.band_of_album(42).is_none());
    }

    #[test]
    fn band_of_album_finds_owner() {
        let store = test_store();
        assert_eq!(store.band_of_album(3).unwrap().name, "Static Garden");
    }

    #[test]
    fn add_song_appends_with_count_plus_one_id() {
        let store = test_store();
        let before = store.song_count();
        let song = store.add_song("Spores".to_string(), 3);
        assert_eq!(song.id, before as i32 + 1);
        assert_eq!(song.album_id, 3);
        assert_eq!(store.song_count(), before + 1);
    }

    #[test]
    fn add_song_after_delete_can_reuse_an_id() {
        let store = test_store();
        store.delete_song(3).unwrap();
        let song = store.add_song("Echo".to_string(), 1);
        // Known fragility: id is count + 1, not max + 1.
        assert_eq!(song.id, 3);
    }

    #[test]
    fn edit_song_ignores_empty_name_and_zero_album_id() {
        let store = test_store();
        let song = store.edit_song(1, Some(String::new()), Some(0)).unwrap();
        assert_eq!(song.name, "Collapse");
        assert_eq!(song.album_id, 1);
    }

    #[test]
    fn edit_song_changes_only_the_given_field() {
        let store = test_store();
        let song = store.edit_song(1, Some("Singularity".to_string()), None).unwrap();
        assert_eq!(song.name, "Singularity");
        assert_eq!(song.album_id, 1);

        let song = store.edit_song(1, None, Some(2)).unwrap();
        assert_eq!(song.name, "Singularity");
        assert_eq!(song.album_id, 2);
    }

    #[test]
    fn edit_song_unknown_id_is_not_found() {
        let store = test_store();
        assert!(matches!(
            store.edit_song(99, Some("x".to_string()), None),
            Err(DiscographError::SongNotFound(99))
        ));
    }

    #[test]
    fn delete_song_removes_first_match_and_returns_it() {
        let store = test_store();
        let removed = store.delete_song(2).unwrap();
        assert_eq!(removed.name, "Drift");
        assert!(store.song(2).is_none());
        assert_eq!(store.song_count(), 2);
    }

    #[test]
    fn delete_song_unknown_id_is_not_found() {
        let store = test_store();
        assert!(matches!(
            store.delete_song(99),
            Err(DiscographError::SongNotFound(99))
        ));
    }

    #[test]
    fn seeded_store_is_consistent() {
        let store = CatalogStore::seeded();
        assert!(!store.bands().is_empty());
        // Every seeded song points at a real album.
        for song in store.songs() {
            assert!(store.album(song.album_id).is_some(), "song {} dangles", song.id);
        }
    }
}
