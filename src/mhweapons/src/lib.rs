//! # mhweapons
//!
//! Monster Hunter weapon catalog library - display fields and ranking.
//!
//! This library provides functionality to:
//! - Canonicalize free-text item and weapon names
//! - Format sharpness gauges for display
//! - Decode bow shot and coating data (legacy strings or pre-split arrays)
//! - Resolve hunting horn melodies from note codes
//! - Build Calculating Palico setup strings and links
//! - Rank weapons by attack, sharpness, element, affinity, slots and defense
//!
//! ## Example
//!
//! ```no_run
//! use std::fs;
//!
//! # fn main() -> anyhow::Result<()> {
//! let catalog = mhweapons::WeaponCatalog::from_json(
//!     &fs::read_to_string("jsonapi/weapon/_index_name.json")?,
//!     &fs::read_to_string("jsonapi/weapon/_index_id.json")?,
//! )?;
//! let tables = mhweapons::ReferenceTables::new().with_melodies(
//!     mhweapons::MelodyTable::from_json(&fs::read_to_string("horn_melodies.json")?)?,
//! );
//!
//! let mut horns: Vec<_> = catalog.of_type("Hunting Horn").into_iter().cloned().collect();
//! for failure in mhweapons::annotate_all(&mut horns, &tables) {
//!     eprintln!("{:?}", failure);
//! }
//! mhweapons::rank(&mut horns);
//!
//! for horn in &horns {
//!     println!("{} {:?}", horn.name, horn.derived.horn_melodies_title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod bow;
pub mod catalog;
pub mod compare;
pub mod derive;
pub mod melody;
pub mod names;
pub mod palico;
pub mod record;
pub mod reference;
pub mod sharpness;
pub mod totals;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use bow::{BowError, BowSummary};
#[doc(inline)]
pub use catalog::{CatalogError, WeaponCatalog};
#[doc(inline)]
pub use compare::{compare, compare_weapons, rank, sort_key, SortKey, SortValue};
#[doc(inline)]
pub use derive::{annotate, annotate_all, DeriveError, DerivedFields, ReferenceTables};
#[doc(inline)]
pub use melody::MelodyTable;
#[doc(inline)]
pub use names::canonicalize;
#[doc(inline)]
pub use palico::{build_uri, build_uri_for_monster, encode_setup, PalicoIdTable};
#[doc(inline)]
pub use record::{Melody, ShotType, WeaponRecord};
#[doc(inline)]
pub use sharpness::SharpnessTitles;

// Reference data (weapon types, elements, sharpness colours)
#[doc(inline)]
pub use reference::{
    element_abbr, is_gunner, max_level, weapon_type_abbr, weapon_type_by_name, ElementType,
    SharpnessLevel, WeaponType, ELEMENT_TYPES, WEAPON_TYPES,
};
