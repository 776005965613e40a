mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            database_dir,
            output,
        } => {
            commands::extract::handle(&database_dir, &output)?;
        }

        Commands::List { tables, manifest } => {
            commands::query::list(&manifest, tables)?;
        }

        Commands::Table { key, manifest } => {
            commands::query::table(&manifest, &key)?;
        }
    }

    Ok(())
}
