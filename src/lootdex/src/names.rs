//! Display name resolution for loot tables
//!
//! Registry hits win; everything else is derived from the table key by
//! stripping a known instance prefix and spacing the camel-case remainder.
//! A handful of fix-up rules run on top in a fixed order: class name
//! augmentation, the legacy compact-suffix rewrite, and the Dire Maul wing
//! suffixes.

use regex::Regex;
use std::collections::HashMap;

/// Resolves final display names for table keys
///
/// All fixed lists are borrowed from the caller (see [`crate::reference`]);
/// the prefix list is scanned in declared order and only the first match is
/// stripped.
pub struct NameResolver<'a> {
    registry: &'a HashMap<String, String>,
    prefixes: &'a [&'a str],
    classes: &'a [&'a str],
    directions: &'a [(&'a str, &'a str)],
    camel_word: Regex,
    camel_break: Regex,
}

impl<'a> NameResolver<'a> {
    pub fn new(
        registry: &'a HashMap<String, String>,
        prefixes: &'a [&'a str],
        classes: &'a [&'a str],
        directions: &'a [(&'a str, &'a str)],
    ) -> Self {
        Self {
            registry,
            prefixes,
            classes,
            directions,
            // Two-pass camel-case spacing: first break before capitalized
            // words, then between a lowercase/digit run and a capital
            camel_word: Regex::new(r"(.)([A-Z][a-z]+)").unwrap(),
            camel_break: Regex::new(r"([a-z0-9])([A-Z])").unwrap(),
        }
    }

    /// Resolve the display name for a table key
    pub fn resolve(&self, key: &str) -> String {
        let mut name = match self.registry.get(key) {
            Some(registered) => registered.clone(),
            None => self.clean_key(key),
        };

        // A class mentioned in the key but not in the name gets prefixed,
        // once, regardless of whether the name looks like a set/tier name
        for class in self.classes {
            if key.contains(class) && !name.contains(class) {
                name = format!("{} {}", class, name);
                break;
            }
        }

        // Legacy: compact aliases used to reach this stage. They are removed
        // by the compact filter now, so this rewrite is normally dead, but
        // it stays for inputs that skip the filter.
        if let Some(base) = name.strip_suffix(" C") {
            name = format!("{} (Compact)", base);
        }

        for (code, direction) in self.directions {
            if key.starts_with(code) && !name.contains(direction) {
                name = format!("{} ({})", name, direction);
                break;
            }
        }

        name
    }

    /// Heuristic name for a key with no registry entry
    fn clean_key(&self, key: &str) -> String {
        let mut rest = key;
        for prefix in self.prefixes {
            if let Some(stripped) = rest.strip_prefix(prefix) {
                rest = stripped;
                break;
            }
        }

        let spaced = self.camel_word.replace_all(rest, "$1 $2");
        let spaced = self.camel_break.replace_all(&spaced, "$1 $2");
        spaced.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{CLASS_NAMES, DIRECTIONAL_PREFIXES, NAME_PREFIXES};

    fn resolver(registry: &HashMap<String, String>) -> NameResolver<'_> {
        NameResolver::new(registry, NAME_PREFIXES, CLASS_NAMES, DIRECTIONAL_PREFIXES)
    }

    #[test]
    fn test_registry_entry_wins() {
        let mut registry = HashMap::new();
        registry.insert("MCRagnaros".to_string(), "Ragnaros".to_string());
        assert_eq!(resolver(&registry).resolve("MCRagnaros"), "Ragnaros");
    }

    #[test]
    fn test_heuristic_strips_prefix_and_spaces_words() {
        let registry = HashMap::new();
        assert_eq!(resolver(&registry).resolve("BWLChromaggus"), "Chromaggus");
        assert_eq!(resolver(&registry).resolve("MCCoreHounds"), "Core Hounds");
    }

    #[test]
    fn test_only_first_prefix_is_stripped() {
        let registry = HashMap::new();
        // "MC" matches first; the "ST" inside the remainder must survive
        assert_eq!(resolver(&registry).resolve("MCSTNode"), "ST Node");
    }

    #[test]
    fn test_digit_boundary_gets_spaced() {
        let registry = HashMap::new();
        assert_eq!(resolver(&registry).resolve("Tier2Sets"), "Tier2 Sets");
    }

    #[test]
    fn test_class_name_added_exactly_once() {
        let registry = HashMap::new();
        let name = resolver(&registry).resolve("MCDruidSet");
        assert_eq!(name, "Druid Set");
        assert_eq!(name.matches("Druid").count(), 1);
    }

    #[test]
    fn test_class_name_added_to_registry_hit() {
        let mut registry = HashMap::new();
        registry.insert("T2Warlock".to_string(), "Nemesis Raiment".to_string());
        assert_eq!(
            resolver(&registry).resolve("T2Warlock"),
            "Warlock Nemesis Raiment"
        );
    }

    #[test]
    fn test_compact_suffix_rewrite() {
        // Dead on the normal pipeline path (the compact filter runs first)
        // but kept for raw inputs
        let mut registry = HashMap::new();
        registry.insert("ZGCoinsC".to_string(), "Coins C".to_string());
        assert_eq!(resolver(&registry).resolve("ZGCoinsC"), "Coins (Compact)");
    }

    #[test]
    fn test_dire_maul_wing_suffixes() {
        let registry = HashMap::new();
        let r = resolver(&registry);
        // The name prefix list strips "DM", leaving the wing letter in the
        // spaced name; the wing itself comes back as a suffix
        assert_eq!(r.resolve("DMETribute"), "E Tribute (East)");
        assert_eq!(r.resolve("DMNKingGordok"), "N King Gordok (North)");
        assert_eq!(r.resolve("DMWImmolThar"), "W Immol Thar (West)");
    }

    #[test]
    fn test_wing_suffix_not_duplicated() {
        let mut registry = HashMap::new();
        registry.insert("DMEAlzzin".to_string(), "Alzzin (East)".to_string());
        assert_eq!(resolver(&registry).resolve("DMEAlzzin"), "Alzzin (East)");
    }
}
