use super::fixtures::{seed_authors, seed_books};
use super::repository::LibraryRepository;
use crate::{
    error::{LibraryError, Result},
    model::{Author, Book, EntityId},
};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Collections {
    authors: Vec<Author>,
    books: Vec<Book>,
}

/// Next id for a collection of `len` records.
///
/// Ids are `len + 1`, not `max(id) + 1`. Nothing is ever deleted, so this
/// stays unique; a delete operation would need a monotonic counter instead.
fn next_id(len: usize) -> Result<EntityId> {
    EntityId::try_from(len + 1)
        .map_err(|_| LibraryError::Storage("Id space exhausted".to_string()))
}

/// Process-lifetime store backed by two vectors under a single lock.
///
/// Appends hold the write lock across id assignment and push, so concurrent
/// mutations never observe the same collection length.
#[derive(Default)]
pub struct InMemoryRepository {
    data: RwLock<Collections>,
}

impl InMemoryRepository {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the fixture authors and books.
    pub fn seeded() -> Self {
        Self {
            data: RwLock::new(Collections {
                authors: seed_authors(),
                books: seed_books(),
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>> {
        self.data
            .read()
            .map_err(|_| LibraryError::Storage("Store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>> {
        self.data
            .write()
            .map_err(|_| LibraryError::Storage("Store lock poisoned".to_string()))
    }
}

impl LibraryRepository for InMemoryRepository {
    fn get_author(&self, id: EntityId) -> Result<Option<Author>> {
        let data = self.read()?;
        Ok(data.authors.iter().find(|a| a.id == id).cloned())
    }

    fn get_book(&self, id: EntityId) -> Result<Option<Book>> {
        let data = self.read()?;
        Ok(data.books.iter().find(|b| b.id == id).cloned())
    }

    fn list_authors(&self) -> Result<Vec<Author>> {
        Ok(self.read()?.authors.clone())
    }

    fn list_books(&self) -> Result<Vec<Book>> {
        Ok(self.read()?.books.clone())
    }

    fn books_by_author(&self, author_id: EntityId) -> Result<Vec<Book>> {
        let data = self.read()?;
        Ok(data
            .books
            .iter()
            .filter(|b| b.is_by(author_id))
            .cloned()
            .collect())
    }

    fn add_author(&self, name: String) -> Result<Author> {
        let mut data = self.write()?;
        let author = Author::new(next_id(data.authors.len())?, name);
        tracing::info!(id = author.id, name = %author.name, "Adding author");
        data.authors.push(author.clone());
        Ok(author)
    }

    fn add_book(&self, name: String, author_id: EntityId) -> Result<Book> {
        let mut data = self.write()?;
        let book = Book::new(next_id(data.books.len())?, name, author_id);
        tracing::info!(id = book.id, name = %book.name, author_id, "Adding book");
        data.books.push(book.clone());
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_seeded_authors_in_order() {
        let repo = InMemoryRepository::seeded();
        let names: Vec<_> = repo
            .list_authors()
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, ["J. K. Rowling", "J. R. R. Tolkien", "Brent Weeks"]);
        assert_eq!(repo.list_books().unwrap().len(), 8);
    }

    #[test]
    fn test_empty_store() {
        let repo = InMemoryRepository::new();
        assert!(repo.list_authors().unwrap().is_empty());
        assert!(repo.list_books().unwrap().is_empty());
        assert_eq!(repo.get_author(1).unwrap(), None);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let repo = InMemoryRepository::seeded();
        assert_eq!(repo.get_book(99).unwrap(), None);
        assert_eq!(repo.get_author(0).unwrap(), None);
        assert_eq!(repo.get_author(-1).unwrap(), None);
    }

    #[test]
    fn test_get_is_idempotent() {
        let repo = InMemoryRepository::seeded();
        let first = repo.get_book(4).unwrap();
        let second = repo.get_book(4).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.unwrap().name, "The Fellowship of the Ring");
    }

    #[test]
    fn test_books_by_author_exact_and_ordered() {
        let repo = InMemoryRepository::seeded();
        repo.add_book("The Hobbit".to_string(), 2).unwrap();

        let books = repo.books_by_author(2).unwrap();
        let ids: Vec<_> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, [4, 5, 6, 9]);
        assert!(books.iter().all(|b| b.author_id == 2));
    }

    #[test]
    fn test_books_by_author_none_match() {
        let repo = InMemoryRepository::seeded();
        assert!(repo.books_by_author(42).unwrap().is_empty());
    }

    #[test]
    fn test_add_author_id_is_count_plus_one() {
        let repo = InMemoryRepository::seeded();
        let before = repo.list_authors().unwrap().len();

        let first = repo.add_author("New Author".to_string()).unwrap();
        let second = repo.add_author("Another".to_string()).unwrap();

        assert_eq!(first.id, before as EntityId + 1);
        assert_eq!(second.id, 5);
        assert_eq!(repo.list_authors().unwrap().len(), before + 2);
    }

    #[test]
    fn test_add_book_with_dangling_author() {
        let repo = InMemoryRepository::seeded();
        let book = repo.add_book("Orphan".to_string(), 77).unwrap();
        assert_eq!(book.id, 9);
        assert_eq!(book.author_id, 77);
        assert_eq!(repo.get_author(book.author_id).unwrap(), None);
    }

    #[test]
    fn test_add_accepts_empty_and_long_names() {
        let repo = InMemoryRepository::seeded();
        let empty = repo.add_author(String::new()).unwrap();
        assert_eq!(empty.id, 4);
        assert_eq!(empty.name, "");

        let long = "x".repeat(10_000);
        let book = repo.add_book(long.clone(), 1).unwrap();
        assert_eq!(book.id, 9);
        assert_eq!(repo.get_book(9).unwrap().unwrap().name, long);
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let repo = InMemoryRepository::new();
        let a = repo.add_author("Same".to_string()).unwrap();
        let b = repo.add_author("Same".to_string()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_concurrent_appends_get_distinct_ids() {
        let repo = Arc::new(InMemoryRepository::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = Arc::clone(&repo);
                std::thread::spawn(move || {
                    (0..25)
                        .map(|j| repo.add_author(format!("Author {}-{}", i, j)).unwrap().id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<EntityId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=200).collect::<Vec<_>>());
    }
}
