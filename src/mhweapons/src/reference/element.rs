//! Element type definitions

/// Element type information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementType {
    pub name: &'static str,
    pub abbr: &'static str,
    /// Status elements build up an ailment rather than dealing damage
    pub status: bool,
}

/// All element types
pub const ELEMENT_TYPES: &[ElementType] = &[
    ElementType {
        name: "Fire",
        abbr: "Fi",
        status: false,
    },
    ElementType {
        name: "Water",
        abbr: "Wa",
        status: false,
    },
    ElementType {
        name: "Thunder",
        abbr: "Th",
        status: false,
    },
    ElementType {
        name: "Ice",
        abbr: "Ic",
        status: false,
    },
    ElementType {
        name: "Dragon",
        abbr: "Dr",
        status: false,
    },
    ElementType {
        name: "Poison",
        abbr: "Po",
        status: true,
    },
    ElementType {
        name: "Paralysis",
        abbr: "Pa",
        status: true,
    },
    ElementType {
        name: "Sleep",
        abbr: "Sl",
        status: true,
    },
    ElementType {
        name: "Blastblight",
        abbr: "Bl",
        status: true,
    },
];

/// Misspelling found in older published data
const BLASTBLIGHT_LEGACY: &str = "Blashblight";

/// Get element by display name
pub fn element_by_name(name: &str) -> Option<&'static ElementType> {
    let name = if name == BLASTBLIGHT_LEGACY {
        "Blastblight"
    } else {
        name
    };
    ELEMENT_TYPES.iter().find(|e| e.name == name)
}

/// Get element by abbreviation (reverse lookup, case-insensitive)
pub fn element_by_abbr(abbr: &str) -> Option<&'static ElementType> {
    ELEMENT_TYPES.iter().find(|e| e.abbr.eq_ignore_ascii_case(abbr))
}

/// Get the short display form of an element name
pub fn element_abbr(name: &str) -> Option<&'static str> {
    element_by_name(name).map(|e| e.abbr)
}
