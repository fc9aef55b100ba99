//! Seed data for the catalog.
//!
//! The built-in seed matches what ships with the server; a YAML seed file
//! can replace it via the `catalog.seed` config key.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DiscographError, Result};
use crate::model::{Album, Band, Song};

/// On-disk shape of a seed file: top-level `bands:` and `songs:` lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedCatalog {
    #[serde(default)]
    pub bands: Vec<Band>,

    #[serde(default)]
    pub songs: Vec<Song>,
}

pub fn load_seed_file(path: &Path) -> Result<SeedCatalog> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        DiscographError::Seed(format!("Cannot read seed file {}: {}", path.display(), e))
    })?;
    let catalog: SeedCatalog = serde_yaml::from_str(&content)?;
    Ok(catalog)
}

pub fn seed_bands() -> Vec<Band> {
    vec![
        Band::new(1, "Led Zeppelin").with_albums(vec![
            Album::new(1, "Led Zeppelin IV"),
            Album::new(2, "Physical Graffiti"),
        ]),
        Band::new(2, "Pink Floyd").with_albums(vec![
            Album::new(3, "The Dark Side of the Moon"),
            Album::new(4, "Wish You Were Here"),
        ]),
        Band::new(3, "Queen").with_albums(vec![Album::new(5, "A Night at the Opera")]),
    ]
}

pub fn seed_songs() -> Vec<Song> {
    vec![
        Song::new(1, "Stairway to Heaven", 1),
        Song::new(2, "Black Dog", 1),
        Song::new(3, "Kashmir", 2),
        Song::new(4, "Time", 3),
        Song::new(5, "Money", 3),
        Song::new(6, "Wish You Were Here", 4),
        Song::new(7, "Bohemian Rhapsody", 5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_file_round_trip() {
        let catalog = SeedCatalog {
            bands: seed_bands(),
            songs: seed_songs(),
        };
        let yaml = serde_yaml::to_string(&catalog).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.yml");
        std::fs::write(&path, yaml).unwrap();

        let loaded = load_seed_file(&path).unwrap();
        assert_eq!(loaded.bands, seed_bands());
        assert_eq!(loaded.songs, seed_songs());
    }

    #[test]
    fn missing_seed_file_is_an_error() {
        let err = load_seed_file(Path::new("/nonexistent/seed.yml")).unwrap_err();
        assert!(matches!(err, DiscographError::Seed(_)));
    }

    #[test]
    fn partial_seed_file_defaults_missing_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.yml");
        std::fs::write(&path, "bands:\n  - id: 1\n    name: Solo Act\n").unwrap();

        let loaded = load_seed_file(&path).unwrap();
        assert_eq!(loaded.bands.len(), 1);
        assert!(loaded.bands[0].albums.is_empty());
        assert!(loaded.songs.is_empty());
    }
}
