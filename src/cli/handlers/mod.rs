mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::LibraryConfig;
use crate::graphql::LibrarySchema;
use crate::storage::{InMemoryRepository, SharedRepository};
use anyhow::Result;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: LibraryConfig,
    pub repo: SharedRepository,
}

impl CommandContext {
    pub fn new(config: LibraryConfig) -> Self {
        let repo: SharedRepository = if config.store.seed {
            Arc::new(InMemoryRepository::seeded())
        } else {
            Arc::new(InMemoryRepository::new())
        };
        Self { config, repo }
    }
}

fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    Ok(match variables {
        Some(v) => serde_json::from_str(&v)?,
        None => async_graphql::Variables::default(),
    })
}

/// Run one request to completion and print the JSON response.
fn execute_and_print(
    schema: &LibrarySchema,
    query: &str,
    variables: Option<String>,
) -> Result<()> {
    let vars = parse_variables(variables)?;
    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "Request finished with errors");
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
