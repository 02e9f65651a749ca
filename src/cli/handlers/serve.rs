use crate::config::ServerSettings;
use crate::graphql::{build_schema_shared, run_server};
use anyhow::{Context, Result};

use super::CommandContext;

fn apply_overrides(settings: &mut ServerSettings, host: Option<String>, port: Option<u16>) {
    if let Some(h) = host {
        settings.host = h;
    }
    if let Some(p) = port {
        settings.port = p;
    }
}

pub fn handle_serve(mut ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    apply_overrides(&mut ctx.config.server, host, port);

    let schema = build_schema_shared(ctx.repo);
    let settings = ctx.config.server;

    tokio::runtime::Runtime::new()?
        .block_on(run_server(schema, &settings))
        .with_context(|| format!("GraphQL server on {} failed", settings.bind_address()))?;
    Ok(())
}
