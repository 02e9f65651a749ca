use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::model::EntityId;
use crate::storage::{LibraryRepository, SharedRepository};

use super::types::*;

pub type LibrarySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Compose the root resolvers over `repo`. The repository is the only state
/// the resolvers can reach.
pub fn build_schema<R>(repo: R) -> LibrarySchema
where
    R: LibraryRepository + 'static,
{
    build_schema_shared(Arc::new(repo))
}

pub fn build_schema_shared(repo: SharedRepository) -> LibrarySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(repo)
        .finish()
}

pub(crate) fn get_repo<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedRepository> {
    ctx.data::<SharedRepository>()
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// A Single Book
    async fn book(
        &self,
        ctx: &Context<'_>,
        id: Option<EntityId>,
    ) -> async_graphql::Result<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let repo = get_repo(ctx)?;
        Ok(repo.get_book(id)?.map(Book::from))
    }

    /// List of All Books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Book>>> {
        let repo = get_repo(ctx)?;
        let books = repo.list_books()?;
        Ok(Some(books.into_iter().map(Book::from).collect()))
    }

    /// A Single Author
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<EntityId>,
    ) -> async_graphql::Result<Option<Author>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let repo = get_repo(ctx)?;
        Ok(repo.get_author(id)?.map(Author::from))
    }

    /// List of All Authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Author>>> {
        let repo = get_repo(ctx)?;
        let authors = repo.list_authors()?;
        Ok(Some(authors.into_iter().map(Author::from).collect()))
    }
}

pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: EntityId,
    ) -> async_graphql::Result<Option<Book>> {
        let repo = get_repo(ctx)?;
        let book = repo.add_book(name, author_id)?;
        Ok(Some(book.into()))
    }

    /// Add an author
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<Author>> {
        let repo = get_repo(ctx)?;
        let author = repo.add_author(name)?;
        Ok(Some(author.into()))
    }
}
