//! Display-name registry parsing (`TableRegister.lua`)
//!
//! The registry declares, per table key, a nested structure that may span
//! several lines:
//!
//! ```lua
//! ["BWLNefarian"] = {
//!     { AL["Blackwing Lair"], AL["Nefarian"], "AtlasLootItems" },
//! },
//! ```
//!
//! Entries are accumulated line by line until the buffered text contains an
//! "AtlasLoot...Items" marker, at which point the display name is resolved
//! from the localization-wrapper arguments seen so far. Coverage is partial:
//! most table keys never appear here and fall back to heuristic naming.

use regex::Regex;
use std::collections::HashMap;

/// Parse a registry file's content into a partial key → display name map
///
/// `stoplist` holds wrapper arguments that qualify a table rather than name
/// it ("Rare", "Quest", ...); they are discarded before joining the rest
/// with `" - "`. When every wrapper argument is stopped out, the first
/// quoted string opening an inline table literal is used instead. Keys that
/// yield neither get no entry.
pub fn parse_table_register(content: &str, stoplist: &[&str]) -> HashMap<String, String> {
    // ["TableName"] =
    let key_pattern = Regex::new(r#"\["(\w+)"\]\s*="#).unwrap();
    // The declaration that marks an entry as a loot table
    let marker_pattern = Regex::new(r#""AtlasLoot\w*Items""#).unwrap();
    // AL["Localized Name"]
    let wrapper_pattern = Regex::new(r#"AL\["([^"]+)"\]"#).unwrap();
    // { "Plain Name"
    let quoted_pattern = Regex::new(r#"\{\s*"([^"]+)""#).unwrap();

    let mut display_names = HashMap::new();
    let mut current_key: Option<String> = None;
    let mut buffer = String::new();

    for line in content.lines() {
        if let Some(caps) = key_pattern.captures(line) {
            current_key = Some(caps[1].to_string());
            buffer.clear();
            buffer.push_str(line);
        } else if current_key.is_some() {
            buffer.push(' ');
            buffer.push_str(line.trim());
        }

        if let Some(key) = current_key.as_ref() {
            if marker_pattern.is_match(&buffer) {
                if let Some(name) =
                    resolve_entry_name(&buffer, &wrapper_pattern, &quoted_pattern, stoplist)
                {
                    display_names.insert(key.clone(), name);
                }
                current_key = None;
                buffer.clear();
            }
        }
    }

    display_names
}

/// Resolve one accumulated registry entry to a display name
fn resolve_entry_name(
    buffer: &str,
    wrapper_pattern: &Regex,
    quoted_pattern: &Regex,
    stoplist: &[&str],
) -> Option<String> {
    let parts: Vec<&str> = wrapper_pattern
        .captures_iter(buffer)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
        .filter(|part| !stoplist.contains(part))
        .collect();

    if !parts.is_empty() {
        return Some(parts.join(" - "));
    }

    quoted_pattern
        .captures(buffer)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::REGISTER_STOPLIST;

    #[test]
    fn test_single_wrapper_argument() {
        let src = r#"
["MCRagnaros"] = {
    { AL["Ragnaros"], "AtlasLootItems" },
},
"#;
        let names = parse_table_register(src, REGISTER_STOPLIST);
        assert_eq!(names.get("MCRagnaros").unwrap(), "Ragnaros");
    }

    #[test]
    fn test_multiple_wrapper_arguments_join() {
        let src = r#"
["BWLNefarian"] = {
    { AL["Blackwing Lair"], AL["Nefarian"], "AtlasLootItems" },
},
"#;
        let names = parse_table_register(src, REGISTER_STOPLIST);
        assert_eq!(
            names.get("BWLNefarian").unwrap(),
            "Blackwing Lair - Nefarian"
        );
    }

    #[test]
    fn test_stoplist_arguments_are_discarded() {
        let src = r#"
["MCTrash"] = {
    { AL["Rare"], AL["Bindings of the Windseeker"], "AtlasLootItems" },
},
"#;
        let names = parse_table_register(src, REGISTER_STOPLIST);
        assert_eq!(names.get("MCTrash").unwrap(), "Bindings of the Windseeker");
    }

    #[test]
    fn test_quoted_fallback_when_all_stopped() {
        let src = r#"
["ZGEnchants"] = {
    { "Zul'Gurub Enchants", AL["Enchants"], "AtlasLootItems" },
},
"#;
        let names = parse_table_register(src, REGISTER_STOPLIST);
        assert_eq!(names.get("ZGEnchants").unwrap(), "Zul'Gurub Enchants");
    }

    #[test]
    fn test_marker_on_opening_line() {
        // Whole entry on the key line; the marker test must fire before any
        // continuation line is appended
        let src = r#"["MCGeddon"] = { { AL["Baron Geddon"], "AtlasLootItems" } },"#;
        let names = parse_table_register(src, REGISTER_STOPLIST);
        assert_eq!(names.get("MCGeddon").unwrap(), "Baron Geddon");
    }

    #[test]
    fn test_entry_without_marker_is_skipped() {
        let src = r#"
["NotALootTable"] = {
    { AL["Something"], "SomeOtherHandler" },
},
"#;
        let names = parse_table_register(src, REGISTER_STOPLIST);
        assert!(names.is_empty());
    }

    #[test]
    fn test_marker_spanning_multiple_lines() {
        let src = r#"
["UldArchaedas"] = {
    {
        AL["Archaedas"],
        "AtlasLootItems",
    },
},
"#;
        let names = parse_table_register(src, REGISTER_STOPLIST);
        assert_eq!(names.get("UldArchaedas").unwrap(), "Archaedas");
    }

    #[test]
    fn test_no_name_yields_no_entry() {
        let src = r#"
["Anonymous"] = {
    { AL["Rare"], "AtlasLootItems" },
},
"#;
        let names = parse_table_register(src, REGISTER_STOPLIST);
        assert!(!names.contains_key("Anonymous"));
    }
}
