//! CLI argument definitions for lootdex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lootdex")]
#[command(about = "AtlasLoot addon data extractor", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract loot tables from an AtlasLoot Database directory
    #[command(visible_alias = "x")]
    Extract {
        /// Path to the addon's Database directory (holds Instances.lua,
        /// TableRegister.lua, ...)
        database_dir: PathBuf,

        /// Output path for the extracted document
        #[arg(short, long, default_value = "data/atlasloot.json")]
        output: PathBuf,
    },

    /// List categories and modules from an extracted document
    #[command(visible_alias = "l")]
    List {
        /// List every table with its display name instead of the
        /// category/module summary
        #[arg(long)]
        tables: bool,

        /// Path to an extracted document
        #[arg(long, default_value = "data/atlasloot.json")]
        manifest: PathBuf,
    },

    /// Show one loot table's items by key
    #[command(visible_alias = "t")]
    Table {
        /// Table key (e.g. "MCRagnaros")
        key: String,

        /// Path to an extracted document
        #[arg(long, default_value = "data/atlasloot.json")]
        manifest: PathBuf,
    },
}
