//! # Bookshelf - a small GraphQL server for authors and books
//!
//! Two in-memory collections, authors and books, exposed through GraphQL
//! query and mutation resolvers. Books link to authors by id; the reverse
//! relation (an author's books) is computed at read time.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on 0.0.0.0:5000, GraphiQL at /graphql
//! bookshelf
//!
//! # One-off query against a freshly seeded store
//! bookshelf query '{ book(id: 1) { name author { name } } }'
//!
//! # Print the schema
//! bookshelf schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and discovery
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (`Author`, `Book`)
//! - [`storage`]: Repository trait and in-memory store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bookshelf.yml` configuration files and discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `LibraryError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
pub mod graphql;

pub mod logging;

/// Data models for authors and books.
pub mod model;

/// Storage layer behind the `LibraryRepository` trait.
pub mod storage;
