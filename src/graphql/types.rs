use crate::model::{self, EntityId};
use async_graphql::{ComplexObject, Context, SimpleObject};

use super::schema::get_repo;

/// This represents a author of a book
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex)]
pub struct Author {
    pub id: EntityId,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// Books written by this author
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Book>>> {
        let repo = get_repo(ctx)?;
        let books = repo.books_by_author(self.id)?;
        Ok(Some(books.into_iter().map(Book::from).collect()))
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}

/// This represents a book written by an author
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex)]
pub struct Book {
    pub id: EntityId,
    pub name: String,
    pub author_id: EntityId,
}

#[ComplexObject]
impl Book {
    /// The author of this book, or null when `authorId` matches no author
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let repo = get_repo(ctx)?;
        Ok(repo.get_author(self.author_id)?.map(Author::from))
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self {
            id: b.id,
            name: b.name,
            author_id: b.author_id,
        }
    }
}
