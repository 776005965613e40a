//! Pipeline orchestration: source files in, assembled document out
//!
//! Runs fully synchronously over an addon `Database/` directory: registry
//! first, then each category in roster order. A missing or unreadable source
//! file degrades to an empty result for that unit with a warning; nothing
//! here aborts the run.

use std::collections::HashMap;
use std::path::Path;

use crate::document::{Category, Document, LootTable, Module};
use crate::extract::{TableExtractor, TableSet};
use crate::grouping::group_by_instance;
use crate::names::NameResolver;
use crate::reference;
use crate::register::parse_table_register;

/// Build the full document from an AtlasLoot `Database/` directory
///
/// Infallible by design: every recoverable condition degrades to "no data
/// for this unit". Output is deterministic for byte-identical inputs; every
/// ordered sequence comes from insertion-ordered containers or fixed
/// declared-order lists.
pub fn build_document(database_dir: &Path) -> Document {
    let register_path = database_dir.join(reference::TABLE_REGISTER_FILE);
    let registry = match std::fs::read_to_string(&register_path) {
        Ok(content) => parse_table_register(&content, reference::REGISTER_STOPLIST),
        Err(err) => {
            eprintln!(
                "Warning: failed to read {}: {}",
                register_path.display(),
                err
            );
            HashMap::new()
        }
    };

    let resolver = NameResolver::new(
        &registry,
        reference::NAME_PREFIXES,
        reference::CLASS_NAMES,
        reference::DIRECTIONAL_PREFIXES,
    );
    let extractor = TableExtractor::new();

    reference::CATEGORIES
        .iter()
        .map(|cat| {
            let tables = load_category_tables(&extractor, database_dir, cat.file);
            let groups = group_category(cat.key, cat.name, &tables);

            Category {
                key: cat.key.to_string(),
                name: cat.name.to_string(),
                sort: cat.sort,
                modules: assemble_modules(groups, &tables, &resolver),
            }
        })
        .collect()
}

/// Extract and compact-filter one category's tables
///
/// A missing source file yields an empty set; the category still appears in
/// the document, with zero modules.
fn load_category_tables(extractor: &TableExtractor, database_dir: &Path, file: &str) -> TableSet {
    let path = database_dir.join(file);
    let mut tables = match std::fs::read_to_string(&path) {
        Ok(content) => extractor.extract(&content),
        Err(err) => {
            eprintln!("Warning: failed to read {}: {}", path.display(), err);
            TableSet::new()
        }
    };
    tables.remove_compact_variants(reference::COMPACT_MARKER);
    tables
}

/// Bucket a category's table keys into module groups
///
/// Only the instances category is grouped by prefix; everything else gets a
/// single implicit module named after the category, emitted only when at
/// least one table survived extraction.
fn group_category(
    category_key: &str,
    category_name: &str,
    tables: &TableSet,
) -> Vec<(String, Vec<String>)> {
    if category_key == reference::INSTANCES_CATEGORY_KEY {
        group_by_instance(tables, reference::INSTANCE_PREFIXES, reference::OTHER_GROUP)
    } else if tables.is_empty() {
        Vec::new()
    } else {
        vec![(
            category_name.to_string(),
            tables.iter().map(|t| t.key.clone()).collect(),
        )]
    }
}

/// Materialize module groups, resolving each table's display name
fn assemble_modules(
    groups: Vec<(String, Vec<String>)>,
    tables: &TableSet,
    resolver: &NameResolver<'_>,
) -> Vec<Module> {
    groups
        .into_iter()
        .map(|(group_name, keys)| Module {
            key: group_name.clone(),
            name: group_name,
            tables: keys
                .into_iter()
                .filter_map(|key| {
                    let raw = tables.get(&key)?;
                    Some(LootTable {
                        name: resolver.resolve(&key),
                        items: raw.entries.clone(),
                        key,
                    })
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const INSTANCES_LUA: &str = r#"
MCLucifron = {
    { 16865, "INV_Shoulder", "=q4=Pauldrons of Might", "=ds=Shoulder", "21%" },
    { 17109, "INV_Misc_Cape", "=q4=Choker of Enlightenment", "=ds=Neck" },
};
MCLucifronC = {
    { 16865, "INV_Shoulder" },
};
OnyHead = {
    { 18423, "INV_Misc_Head", "=q4=Head of Onyxia", "=ds=Quest Item" },
};
XyzMystery = {
    { 11111, "INV_Misc" },
};
"#;

    const SETS_LUA: &str = r#"
MCDruidSet = {
    { 16795, "INV_Helmet", "=q4=Arcanist Crown", "=ds=Head" },
};
"#;

    const REGISTER_LUA: &str = r#"
["MCLucifron"] = {
    { AL["Lucifron"], "AtlasLootItems" },
},
"#;

    fn fixture_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Instances.lua"), INSTANCES_LUA).unwrap();
        fs::write(dir.path().join("Sets.lua"), SETS_LUA).unwrap();
        fs::write(dir.path().join("TableRegister.lua"), REGISTER_LUA).unwrap();
        dir
    }

    #[test]
    fn test_full_pipeline_shape() {
        let dir = fixture_dir();
        let doc = build_document(dir.path());

        // Every rostered category appears, in roster order
        assert_eq!(doc.len(), reference::CATEGORIES.len());
        assert_eq!(doc[0].key, "AtlasLootInstances");
        assert_eq!(doc[0].sort, 1);

        // Instances: Molten Core, Onyxia's Lair, then Other
        let names: Vec<&str> = doc[0].modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Molten Core", "Onyxia's Lair", "Other"]);

        // Registry hit resolves the name; compact alias is gone
        let mc = &doc[0].modules[0];
        assert_eq!(mc.tables.len(), 1);
        assert_eq!(mc.tables[0].key, "MCLucifron");
        assert_eq!(mc.tables[0].name, "Lucifron");
        assert_eq!(mc.tables[0].items.len(), 2);
        assert_eq!(mc.tables[0].items[1].drop_rate, "");
        assert_eq!(mc.tables[0].items[0].drop_rate, "21%");
    }

    #[test]
    fn test_non_instance_category_gets_implicit_module() {
        let dir = fixture_dir();
        let doc = build_document(dir.path());

        let sets = doc.iter().find(|c| c.key == "AtlasLootSets").unwrap();
        assert_eq!(sets.modules.len(), 1);
        assert_eq!(sets.modules[0].key, "Sets");
        assert_eq!(sets.modules[0].name, "Sets");
        assert_eq!(sets.modules[0].tables[0].name, "Druid Set");
    }

    #[test]
    fn test_missing_file_yields_empty_category() {
        let dir = fixture_dir();
        let doc = build_document(dir.path());

        // No PvP.lua in the fixture: category present, zero modules
        let pvp = doc.iter().find(|c| c.key == "AtlasLootPvP").unwrap();
        assert!(pvp.modules.is_empty());
    }

    #[test]
    fn test_missing_registry_falls_back_to_heuristics() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Instances.lua"), INSTANCES_LUA).unwrap();

        let doc = build_document(dir.path());
        let mc = &doc[0].modules[0];
        assert_eq!(mc.tables[0].name, "Lucifron");

        // "Ony" is in the name prefix list; the remainder is the name
        let ony = &doc[0].modules[1];
        assert_eq!(ony.tables[0].key, "OnyHead");
        assert_eq!(ony.tables[0].name, "Head");
    }

    #[test]
    fn test_reruns_are_byte_identical() {
        let dir = fixture_dir();
        let first = serde_json::to_string(&build_document(dir.path())).unwrap();
        let second = serde_json::to_string(&build_document(dir.path())).unwrap();
        assert_eq!(first, second);
    }
}
