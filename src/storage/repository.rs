use crate::error::Result;
use crate::model::{Author, Book, EntityId};
use std::sync::Arc;

/// Read and append access to the author and book collections.
///
/// Lookups return `Ok(None)` for an unknown id. `Err` is reserved for
/// backend faults. Listing operations preserve insertion order.
pub trait LibraryRepository: Send + Sync {
    fn get_author(&self, id: EntityId) -> Result<Option<Author>>;

    fn get_book(&self, id: EntityId) -> Result<Option<Book>>;

    fn list_authors(&self) -> Result<Vec<Author>>;

    fn list_books(&self) -> Result<Vec<Book>>;

    /// All books whose `author_id` equals `author_id`. Empty when none match.
    fn books_by_author(&self, author_id: EntityId) -> Result<Vec<Book>>;

    /// Append a new author. Its id is the current author count plus one.
    fn add_author(&self, name: String) -> Result<Author>;

    /// Append a new book. Its id is the current book count plus one;
    /// `author_id` is stored as given.
    fn add_book(&self, name: String, author_id: EntityId) -> Result<Book>;
}

pub type SharedRepository = Arc<dyn LibraryRepository>;
