//! Loot table extraction from category source files
//!
//! The source dialect declares one table per identifier:
//!
//! ```lua
//! MCRagnaros = {
//!     { 19019, "INV_Sword_39", "=q5=Thunderfury", "=ds=One-Hand, Sword", "25%" },
//!     { 17204 },
//! };
//! ```
//!
//! This is not parsed as Lua. A line-oriented scanner with a single active
//! table context recognizes table starts, item rows, and the `};` terminator;
//! everything else on a line is structural noise and is skipped. Nesting
//! deeper than one level is not modeled.

use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::document::DropEntry;

/// An extracted table before name resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Identifier the table was declared under
    pub key: String,
    /// Item rows in declaration order
    pub entries: Vec<DropEntry>,
}

/// Insertion-ordered set of extracted tables with by-key lookup
///
/// Iteration order is the order tables were committed by the scanner; later
/// stages depend on it, so the backing store is a Vec with a key index on
/// the side rather than a map.
#[derive(Debug, Default)]
pub struct TableSet {
    tables: Vec<RawTable>,
    index: HashMap<String, usize>,
}

impl TableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a table. A re-declared key replaces its entries in place and
    /// keeps the original position.
    pub fn insert(&mut self, key: String, entries: Vec<DropEntry>) {
        if let Some(&i) = self.index.get(&key) {
            self.tables[i].entries = entries;
        } else {
            self.index.insert(key.clone(), self.tables.len());
            self.tables.push(RawTable { key, entries });
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&RawTable> {
        self.index.get(key).map(|&i| &self.tables[i])
    }

    /// Tables in commit order
    pub fn iter(&self) -> impl Iterator<Item = &RawTable> {
        self.tables.iter()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Remove duplicate "compact" aliases: every key ending in `marker`
    /// whose stripped base key is also present is dropped whole. Entry
    /// lists are never merged.
    pub fn remove_compact_variants(&mut self, marker: char) {
        let doomed: HashSet<String> = self
            .tables
            .iter()
            .filter_map(|t| {
                let base = t.key.strip_suffix(marker)?;
                if self.index.contains_key(base) {
                    Some(t.key.clone())
                } else {
                    None
                }
            })
            .collect();

        if doomed.is_empty() {
            return;
        }

        self.tables.retain(|t| !doomed.contains(&t.key));
        self.index.clear();
        for (i, t) in self.tables.iter().enumerate() {
            self.index.insert(t.key.clone(), i);
        }
    }
}

/// Line scanner for loot table source files
pub struct TableExtractor {
    table_start: Regex,
    item_with_rate: Regex,
    item_bare: Regex,
}

impl TableExtractor {
    pub fn new() -> Self {
        Self {
            // TableName = {
            table_start: Regex::new(r"^\s*(\w+)\s*=\s*\{").unwrap(),
            // { 12345, ..., "10%" } - last quoted segment ends in a percent sign
            item_with_rate: Regex::new(r#"\{\s*(\d+)\s*,.*?"([^"]*%)"#).unwrap(),
            // { 12345, ... } - bare row, no drop-rate label
            item_bare: Regex::new(r"\{\s*(\d+)\s*,").unwrap(),
        }
    }

    /// Scan one source file's content into a [`TableSet`]
    ///
    /// A new table start flushes the previous context if it holds entries;
    /// a `};` line commits a non-empty context and discards an empty one.
    /// A table still open at end of input is dropped silently, entries and
    /// all; real source files always terminate their tables, and downstream
    /// stages assume well-terminated input.
    pub fn extract(&self, content: &str) -> TableSet {
        let mut tables = TableSet::new();
        let mut current: Option<(String, Vec<DropEntry>)> = None;

        for line in content.lines() {
            if let Some(caps) = self.table_start.captures(line) {
                if let Some((key, entries)) = current.take() {
                    if !entries.is_empty() {
                        tables.insert(key, entries);
                    }
                }
                current = Some((caps[1].to_string(), Vec::new()));
                continue;
            }

            if line.contains('{') {
                if let Some((_, entries)) = current.as_mut() {
                    // Priority order: percent-annotated row first, bare row second
                    if let Some(caps) = self.item_with_rate.captures(line) {
                        if let Some(entry) = make_entry(&caps[1], caps[2].to_string()) {
                            entries.push(entry);
                        }
                    } else if let Some(caps) = self.item_bare.captures(line) {
                        if let Some(entry) = make_entry(&caps[1], String::new()) {
                            entries.push(entry);
                        }
                    }
                }
            }

            if line.contains("};") {
                if let Some((key, entries)) = current.take() {
                    if !entries.is_empty() {
                        tables.insert(key, entries);
                    }
                }
            }
        }

        tables
    }
}

impl Default for TableExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an entry from a captured id, rejecting id 0 and out-of-range ids
fn make_entry(id: &str, drop_rate: String) -> Option<DropEntry> {
    let id: u32 = id.parse().ok()?;
    if id == 0 {
        return None;
    }
    Some(DropEntry { id, drop_rate })
}
