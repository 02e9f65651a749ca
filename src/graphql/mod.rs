//! GraphQL schema, resolvers and HTTP transport for the library.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on GET /graphql)
//! bookshelf serve --port 5000
//!
//! # Execute a query from the CLI
//! bookshelf query '{ authors { name books { name } } }'
//!
//! # Execute a mutation from the CLI
//! bookshelf mutate 'addBook(name: "Test", authorId: 1) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `books`, `author`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`

mod schema;
mod server;
mod types;

pub use schema::{LibrarySchema, MutationRoot, QueryRoot, build_schema, build_schema_shared};
pub use server::{router, run_server};
pub use types::*;
