use std::sync::Arc;

use async_graphql::{ComplexObject, Context, SimpleObject};

use crate::model::{Album as ModelAlbum, Band as ModelBand, Song as ModelSong};
use crate::store::CatalogStore;

#[derive(SimpleObject)]
pub struct Band {
    pub id: i32,
    pub name: String,
    /// The band's own albums, in catalog order.
    pub albums: Vec<Album>,
}

impl From<ModelBand> for Band {
    fn from(b: ModelBand) -> Self {
        Self {
            id: b.id,
            name: b.name,
            albums: b.albums.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Album {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Album {
    /// The band owning this album, or null when no band lists it.
    async fn band(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Band>> {
        let store = ctx.data::<Arc<CatalogStore>>()?;
        Ok(store.band_of_album(self.id).map(Into::into))
    }
}

impl From<ModelAlbum> for Album {
    fn from(a: ModelAlbum) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Song {
    pub id: i32,
    pub name: String,
    pub album_id: i32,
}

#[ComplexObject]
impl Song {
    /// The album this song references, or null when the reference dangles.
    async fn album(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Album>> {
        let store = ctx.data::<Arc<CatalogStore>>()?;
        Ok(store.album(self.album_id).map(Into::into))
    }
}

impl From<ModelSong> for Song {
    fn from(s: ModelSong) -> Self {
        Self {
            id: s.id,
            name: s.name,
            album_id: s.album_id,
        }
    }
}
