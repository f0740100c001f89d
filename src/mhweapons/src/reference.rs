//! Reference data for Monster Hunter weapons
//!
//! Hardcoded reference data for weapon types, elements and sharpness
//! colours. This data is used for display and categorization purposes.

mod element;
mod sharpness;
mod weapon;

pub use element::{element_abbr, element_by_abbr, element_by_name, ElementType, ELEMENT_TYPES};
pub use sharpness::{max_level, SharpnessLevel};
pub use weapon::{
    is_gunner, weapon_type_abbr, weapon_type_by_abbr, weapon_type_by_name, WeaponType,
    WEAPON_TYPES,
};
