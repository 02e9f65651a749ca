use crate::graphql::build_schema_shared;
use anyhow::Result;

use super::{CommandContext, execute_and_print};

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let schema = build_schema_shared(ctx.repo);
    execute_and_print(&schema, &query, variables)
}
