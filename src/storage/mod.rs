//! Storage layer for authors and books.
//!
//! All state lives in process memory and is lost on restart. Resolvers only
//! see the [`LibraryRepository`] trait, so a durable backend can be swapped in
//! without touching the GraphQL layer.
//!
//! ## Components
//!
//! - [`LibraryRepository`]: read and append operations over both collections
//! - [`InMemoryRepository`]: lock-guarded `Vec` implementation
//! - [`seed_authors`] / [`seed_books`]: the fixture data used at startup

mod fixtures;
mod in_memory;
mod repository;

pub use fixtures::{seed_authors, seed_books};
pub use in_memory::InMemoryRepository;
pub use repository::{LibraryRepository, SharedRepository};
