//! List and table query handlers over an extracted document

use anyhow::{Context, Result};
use std::path::Path;

use lootdex::document::{self, Document};

fn load(manifest_path: &Path) -> Result<Document> {
    document::load(manifest_path).with_context(|| {
        format!(
            "Failed to load {} (run `lootdex extract` first?)",
            manifest_path.display()
        )
    })
}

/// List categories and modules, or every table with its display name
pub fn list(manifest_path: &Path, list_tables: bool) -> Result<()> {
    let doc = load(manifest_path)?;

    if list_tables {
        for category in &doc {
            for module in &category.modules {
                for table in &module.tables {
                    println!(
                        "{:<24} {:<40} {:>5} items",
                        table.key,
                        table.name,
                        table.items.len()
                    );
                }
            }
        }
    } else {
        for category in &doc {
            println!("{} ({} modules)", category.name, category.modules.len());
            for module in &category.modules {
                println!("  {:<30} {:>4} tables", module.name, module.tables.len());
            }
        }
    }

    Ok(())
}

/// Print one loot table's resolved name and item rows
pub fn table(manifest_path: &Path, key: &str) -> Result<()> {
    let doc = load(manifest_path)?;

    for category in &doc {
        for module in &category.modules {
            if let Some(table) = module.tables.iter().find(|t| t.key == key) {
                println!("{} ({} / {})", table.name, category.name, module.name);
                println!("{:<8} {:>6}", "Item", "Drop");
                println!("{}", "-".repeat(16));
                for item in &table.items {
                    println!(
                        "{:<8} {:>6}",
                        item.id,
                        if item.drop_rate.is_empty() {
                            "-"
                        } else {
                            item.drop_rate.as_str()
                        }
                    );
                }
                return Ok(());
            }
        }
    }

    println!("No table found for key '{}'", key);
    println!("\nTry `lootdex list --tables` to see all table keys");
    Ok(())
}
