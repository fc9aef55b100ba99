//! GraphQL schema and resolvers for the catalog.
//!
//! Exposes bands, albums, and songs for querying, and the song sequence for
//! mutation. Cross-references between the three types are resolved by
//! scanning the catalog store.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! discograph serve --port 4000
//!
//! # Execute a query from the CLI
//! discograph query '{ albums { name band { name } } }'
//!
//! # Execute a mutation from the CLI
//! discograph mutate 'addSong(name: "Echoes", albumId: 3) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `song`, `songs`, `bands`, `albums`
//! - **Mutations**: `addSong`, `editSong`, `deleteSong`

mod schema;
mod server;
mod types;

pub use schema::{DiscographSchema, build_schema};
pub use server::run_server;
pub use types::*;
