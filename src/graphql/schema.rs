use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema};

use crate::error::DiscographError;
use crate::store::CatalogStore;

use super::types::*;

pub type DiscographSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<CatalogStore>) -> DiscographSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<CatalogStore>> {
    ctx.data::<Arc<CatalogStore>>()
}

/// Convert a store error into a GraphQL error; not-found gets a structured
/// extension code instead of surfacing as an opaque failure.
fn to_graphql_error(err: DiscographError) -> async_graphql::Error {
    if matches!(err, DiscographError::SongNotFound(_)) {
        err.extend_with(|_, e| e.set("code", "NOT_FOUND"))
    } else {
        err.into()
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single song by id
    async fn song(&self, ctx: &Context<'_>, id: Option<i32>) -> async_graphql::Result<Option<Song>> {
        let store = get_store(ctx)?;
        Ok(id.and_then(|id| store.song(id)).map(Into::into))
    }

    /// All songs, in catalog order
    async fn songs(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Song>> {
        let store = get_store(ctx)?;
        Ok(store.songs().into_iter().map(Into::into).collect())
    }

    /// All bands, in catalog order
    async fn bands(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Band>> {
        let store = get_store(ctx)?;
        Ok(store.bands().iter().cloned().map(Into::into).collect())
    }

    /// Every band's albums flattened into one list
    async fn albums(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Album>> {
        let store = get_store(ctx)?;
        Ok(store.albums().into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a song to the catalog
    async fn add_song(
        &self,
        ctx: &Context<'_>,
        name: String,
        album_id: i32,
    ) -> async_graphql::Result<Song> {
        let store = get_store(ctx)?;
        Ok(store.add_song(name, album_id).into())
    }

    /// Edit a song's name and/or album reference.
    ///
    /// An empty name or an albumId of 0 is treated as absent and the stored
    /// value is kept.
    async fn edit_song(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: Option<String>,
        album_id: Option<i32>,
    ) -> async_graphql::Result<Song> {
        let store = get_store(ctx)?;
        store
            .edit_song(id, name, album_id)
            .map(Into::into)
            .map_err(to_graphql_error)
    }

    /// Remove a song from the catalog, returning its last value
    async fn delete_song(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Song> {
        let store = get_store(ctx)?;
        store
            .delete_song(id)
            .map(Into::into)
            .map_err(to_graphql_error)
    }
}
