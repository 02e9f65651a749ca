use crate::graphql::build_schema_shared;
use anyhow::Result;

use super::CommandContext;

pub fn handle_schema(ctx: CommandContext) -> Result<()> {
    let schema = build_schema_shared(ctx.repo);
    print!("{}", schema.sdl());
    Ok(())
}
