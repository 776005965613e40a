//! # lootdex
//!
//! Extraction pipeline for AtlasLoot addon data.
//!
//! The AtlasLoot addon describes its loot tables in a fixed, non-standard
//! Lua table-literal dialect: one file per category (`Instances.lua`,
//! `Sets.lua`, ...) holding the tables themselves, plus a registry file
//! (`TableRegister.lua`) holding human-readable names for some of them.
//! This crate parses that dialect with a narrow line-oriented scanner and
//! produces a normalized Category → Module → Table → Item document.
//!
//! Pipeline stages, leaves first:
//! 1. [`register::parse_table_register`] - registry file → partial key → name map
//! 2. [`extract::TableExtractor`] - category source → ordered raw tables
//! 3. [`extract::TableSet::remove_compact_variants`] - drop duplicate "compact" aliases
//! 4. [`names::NameResolver`] - final display name per table
//! 5. [`grouping::group_by_instance`] - bucket instance tables by key prefix
//! 6. [`pipeline::build_document`] - assemble the final ordered document
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let document = lootdex::build_document("addons/AtlasLoot/Database".as_ref());
//! lootdex::document::save(&document, "data/atlasloot.json".as_ref())?;
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod extract;
pub mod grouping;
pub mod names;
pub mod pipeline;
pub mod reference;
pub mod register;

pub use document::{Category, Document, DropEntry, LootTable, Module};
pub use extract::{TableExtractor, TableSet};
pub use names::NameResolver;
pub use pipeline::build_document;

/// Errors from document I/O
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
