//! Fixed reference data for AtlasLoot extraction
//!
//! Hardcoded tables: the category roster, instance prefix mappings, name
//! cleaning prefixes, class names, and the registry stoplist. Every list
//! that is scanned first-match is stored in its load-bearing declared
//! order; none of them may be sorted.

// ============================================================================
// Categories
// ============================================================================

/// One top-level category and the source file that declares its tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpec {
    pub key: &'static str,
    pub name: &'static str,
    pub file: &'static str,
    pub sort: u32,
}

/// All categories in output order
pub const CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        key: "AtlasLootInstances",
        name: "Instances",
        file: "Instances.lua",
        sort: 1,
    },
    CategorySpec {
        key: "AtlasLootSets",
        name: "Sets",
        file: "Sets.lua",
        sort: 2,
    },
    CategorySpec {
        key: "AtlasLootFactions",
        name: "Factions",
        file: "Factions.lua",
        sort: 3,
    },
    CategorySpec {
        key: "AtlasLootPvP",
        name: "PvP",
        file: "PvP.lua",
        sort: 4,
    },
    CategorySpec {
        key: "AtlasLootWorldBosses",
        name: "World Bosses",
        file: "WorldBosses.lua",
        sort: 5,
    },
    CategorySpec {
        key: "AtlasLootWorldEvents",
        name: "World Events",
        file: "WorldEvents.lua",
        sort: 6,
    },
    CategorySpec {
        key: "AtlasLootCrafting",
        name: "Crafting",
        file: "Crafting.lua",
        sort: 7,
    },
];

/// Key of the one category whose tables are grouped by instance prefix
pub const INSTANCES_CATEGORY_KEY: &str = "AtlasLootInstances";

// ============================================================================
// Instance grouping
// ============================================================================

/// Instance prefix → instance name pairs, scanned first-match in this order.
///
/// The order is not specificity-sorted: a shorter, earlier prefix shadows a
/// longer one later in the list (e.g. "DM" wins over "DM2"). Legacy behavior;
/// downstream data depends on it. DM2 and VC both map to Deadmines.
pub const INSTANCE_PREFIXES: &[(&str, &str)] = &[
    ("MC", "Molten Core"),
    ("Ony", "Onyxia's Lair"),
    ("BWL", "Blackwing Lair"),
    ("ZG", "Zul'Gurub"),
    ("AQ20", "Ruins of Ahn'Qiraj"),
    ("AQ40", "Temple of Ahn'Qiraj"),
    ("NAX", "Naxxramas"),
    ("BRD", "Blackrock Depths"),
    ("LBRS", "Lower Blackrock Spire"),
    ("UBRS", "Upper Blackrock Spire"),
    ("Strat", "Stratholme"),
    ("Scholo", "Scholomance"),
    ("DM", "Dire Maul"),
    ("ST", "Sunken Temple"),
    ("Mara", "Maraudon"),
    ("Uld", "Uldaman"),
    ("RFK", "Razorfen Kraul"),
    ("RFD", "Razorfen Downs"),
    ("SM", "Scarlet Monastery"),
    ("WC", "Wailing Caverns"),
    ("SFK", "Shadowfang Keep"),
    ("RFC", "Ragefire Chasm"),
    ("DM2", "Deadmines"),
    ("VC", "Deadmines"),
];

/// Bucket name for instance tables matching no prefix
pub const OTHER_GROUP: &str = "Other";

// ============================================================================
// Compact aliases
// ============================================================================

/// Trailing marker on duplicate "compact" table aliases
pub const COMPACT_MARKER: char = 'C';

// ============================================================================
// Name resolution
// ============================================================================

/// Prefixes stripped (first match only) before camel-case spacing.
///
/// Deliberately shorter than [`INSTANCE_PREFIXES`]; keys from the newer
/// dungeons keep their prefix in the derived name.
pub const NAME_PREFIXES: &[&str] = &[
    "MC", "BWL", "Ony", "ZG", "AQ20", "AQ40", "NAX", "BRD", "LBRS", "UBRS", "Strat", "Scholo",
    "DM", "ST", "Mara", "Uld",
];

/// Player class names checked as key substrings for name augmentation
pub const CLASS_NAMES: &[&str] = &[
    "Druid", "Hunter", "Mage", "Paladin", "Priest", "Rogue", "Shaman", "Warlock", "Warrior",
];

/// Key prefix → direction for the Dire Maul wings
pub const DIRECTIONAL_PREFIXES: &[(&str, &str)] = &[
    ("DME", "East"),
    ("DMN", "North"),
    ("DMW", "West"),
];

// ============================================================================
// Registry parsing
// ============================================================================

/// Localization-wrapper arguments that are qualifiers, not display names
pub const REGISTER_STOPLIST: &[&str] = &["Rare", "Summon", "Quest", "Enchants"];

/// Registry file name inside the addon's Database directory
pub const TABLE_REGISTER_FILE: &str = "TableRegister.lua";
