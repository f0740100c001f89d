//! Weapon type definitions

/// Weapon type information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponType {
    pub name: &'static str,
    pub abbr: &'static str,
    /// Ranged weapons have no sharpness gauge
    pub gunner: bool,
}

/// All weapon types
pub const WEAPON_TYPES: &[WeaponType] = &[
    WeaponType {
        name: "Great Sword",
        abbr: "GS",
        gunner: false,
    },
    WeaponType {
        name: "Long Sword",
        abbr: "LS",
        gunner: false,
    },
    WeaponType {
        name: "Sword and Shield",
        abbr: "Sw",
        gunner: false,
    },
    WeaponType {
        name: "Dual Blades",
        abbr: "DB",
        gunner: false,
    },
    WeaponType {
        name: "Hammer",
        abbr: "Ha",
        gunner: false,
    },
    WeaponType {
        name: "Hunting Horn",
        abbr: "HH",
        gunner: false,
    },
    WeaponType {
        name: "Lance",
        abbr: "La",
        gunner: false,
    },
    WeaponType {
        name: "Gunlance",
        abbr: "GL",
        gunner: false,
    },
    WeaponType {
        name: "Switch Axe",
        abbr: "SA",
        gunner: false,
    },
    WeaponType {
        name: "Charge Blade",
        abbr: "CB",
        gunner: false,
    },
    WeaponType {
        name: "Insect Glaive",
        abbr: "IG",
        gunner: false,
    },
    WeaponType {
        name: "Light Bowgun",
        abbr: "LBG",
        gunner: true,
    },
    WeaponType {
        name: "Heavy Bowgun",
        abbr: "HBG",
        gunner: true,
    },
    WeaponType {
        name: "Bow",
        abbr: "Bow",
        gunner: true,
    },
];

/// Get weapon type by display name
pub fn weapon_type_by_name(name: &str) -> Option<&'static WeaponType> {
    WEAPON_TYPES.iter().find(|w| w.name == name)
}

/// Get weapon type by abbreviation (reverse lookup, case-insensitive)
pub fn weapon_type_by_abbr(abbr: &str) -> Option<&'static WeaponType> {
    WEAPON_TYPES.iter().find(|w| w.abbr.eq_ignore_ascii_case(abbr))
}

/// Get the short display form of a weapon type name
pub fn weapon_type_abbr(name: &str) -> Option<&'static str> {
    weapon_type_by_name(name).map(|w| w.abbr)
}

/// Whether a weapon type is ranged (bowguns and bow); unknown names are not
pub fn is_gunner(name: &str) -> bool {
    weapon_type_by_name(name).is_some_and(|w| w.gunner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_type_lookup() {
        assert_eq!(weapon_type_abbr("Great Sword"), Some("GS"));
        assert_eq!(weapon_type_abbr("Sword and Shield"), Some("Sw"));
        assert_eq!(weapon_type_abbr("Bow"), Some("Bow"));
        assert_eq!(weapon_type_abbr("Tonfa"), None);
    }

    #[test]
    fn test_weapon_type_by_abbr() {
        assert_eq!(weapon_type_by_abbr("hbg").map(|w| w.name), Some("Heavy Bowgun"));
        assert_eq!(weapon_type_by_abbr("IG").map(|w| w.name), Some("Insect Glaive"));
        assert!(weapon_type_by_abbr("XX").is_none());
    }

    #[test]
    fn test_gunner_types() {
        let gunners: Vec<_> = WEAPON_TYPES
            .iter()
            .filter(|w| w.gunner)
            .map(|w| w.abbr)
            .collect();
        assert_eq!(gunners, vec!["LBG", "HBG", "Bow"]);
    }

    #[test]
    fn test_is_gunner() {
        assert!(is_gunner("Heavy Bowgun"));
        assert!(is_gunner("Bow"));
        assert!(!is_gunner("Great Sword"));
        assert!(!is_gunner("Tonfa"));
    }
}
