use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::LibraryConfig;
use bookshelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file);

    let cwd = std::env::current_dir()?;
    let config = LibraryConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load bookshelf configuration")?;
    let ctx = CommandContext::new(config);

    match cli.command {
        None => handle_serve(ctx, None, None),
        Some(Commands::Serve { host, port }) => handle_serve(ctx, host, port),
        Some(Commands::Query { query, variables }) => handle_query(ctx, query, variables),
        Some(Commands::Mutate {
            mutation,
            variables,
        }) => handle_mutate(ctx, mutation, variables),
        Some(Commands::Schema) => handle_schema(ctx),
    }
}
