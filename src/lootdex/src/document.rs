//! The assembled loot document and its wire shape
//!
//! Category → Module → Table → Item, serialized exactly as the downstream
//! importer expects it. Every sequence keeps the order the pipeline produced;
//! no stage sorts, so serialization order equals extraction order.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Result;

/// One item row inside a loot table
///
/// Order within the owning table is meaningful and equals the source
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEntry {
    /// Item id (always positive; id 0 rows are dropped at extraction)
    pub id: u32,
    /// Drop-rate label as written in the source (e.g. "25%"), or empty
    pub drop_rate: String,
}

/// A named, ordered list of item rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootTable {
    /// Table identifier, unique within its source file (e.g. "BWLNefarian")
    pub key: String,
    /// Resolved display name (registry hit or heuristic)
    pub name: String,
    /// Item rows in source order
    pub items: Vec<DropEntry>,
}

/// A group of tables below a category: an instance, or the category's
/// single implicit bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub key: String,
    pub name: String,
    pub tables: Vec<LootTable>,
}

/// A fixed top-level section (Instances, Sets, Factions, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub name: String,
    pub sort: u32,
    pub modules: Vec<Module>,
}

/// The full document: ordered categories
pub type Document = Vec<Category>;

/// Write a document as pretty-printed JSON
pub fn save(document: &Document, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load a previously written document
pub fn load(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
