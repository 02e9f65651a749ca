//! Data models for the library.
//!
//! - [`Author`]: a writer, identified by a sequential integer id
//! - [`Book`]: a title written by an author, linked through `author_id`

mod author;
mod book;

pub use author::Author;
pub use book::Book;

/// Integer identifier shared by authors and books.
pub type EntityId = i32;
