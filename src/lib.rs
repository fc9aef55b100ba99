//! # Discograph - a GraphQL music catalog server
//!
//! Discograph exposes an in-memory catalog of bands, albums, and songs over a
//! GraphQL API. Bands (and their albums) are seeded at startup and stay
//! read-only; songs can be added, edited, and deleted at runtime through
//! mutations. Nothing is persisted: a restart resets the catalog to its seed.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server (GraphiQL at http://localhost:4000/graphql)
//! discograph serve --port 4000
//!
//! # Execute a query from the CLI, no server needed
//! discograph query '{ songs { id name } }'
//!
//! # Execute a mutation
//! discograph mutate 'addSong(name: "Echoes", albumId: 2) { id }'
//!
//! # Print the SDL
//! discograph schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and HTTP server shell
//! - [`model`]: Data models (Band, Album, Song)
//! - [`store`]: In-memory catalog store and seed data

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `discograph.yml` configuration files.
pub mod config;

/// Error types and result aliases.
///
/// Defines `DiscographError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and the axum server shell.
pub mod graphql;

/// Data models for the catalog.
///
/// Includes `Band`, `Album`, and `Song`.
pub mod model;

/// In-memory catalog store.
///
/// Holds the seeded bands and the mutable song sequence.
pub mod store;

pub mod logging;
