//! Extract command handler

use anyhow::{Context, Result};
use std::path::Path;

use lootdex::document;

/// Run the extraction pipeline and write the document as JSON
pub fn handle(database_dir: &Path, output: &Path) -> Result<()> {
    println!(
        "Extracting AtlasLoot data from {}...",
        database_dir.display()
    );

    let doc = lootdex::build_document(database_dir);

    let mut total_tables = 0;
    let mut total_items = 0;
    for category in &doc {
        let tables: usize = category.modules.iter().map(|m| m.tables.len()).sum();
        let items: usize = category
            .modules
            .iter()
            .flat_map(|m| &m.tables)
            .map(|t| t.items.len())
            .sum();
        println!(
            "  {}: {} modules, {} tables, {} items",
            category.name,
            category.modules.len(),
            tables,
            items
        );
        total_tables += tables;
        total_items += items;
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    document::save(&doc, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "\nWrote {} ({} tables, {} items)",
        output.display(),
        total_tables,
        total_items
    );

    Ok(())
}
