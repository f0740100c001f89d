//! Calculating Palico setup strings
//!
//! The Calculating Palico damage calculator accepts weapon setups through its
//! `s` query parameter: a JSON array of period-delimited setup strings of the
//! form `<class>.<id>.<max sharpness index>.<options>`.
//!
//! See <https://github.com/mrmin123/the-calculating-palico>

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::catalog::CatalogError;
use crate::record::{scalar_text, WeaponRecord};

/// Calculator page
pub const CALCULATOR_BASE: &str = "http://minyoung.ch/calculatingpalico/";

/// Reference monster for generated links (Great Jaggi)
pub const DEFAULT_MONSTER_ID: u32 = 31;

/// Trailing calculation options appended to every setup
pub const SETUP_OPTIONS: &str = "0.1.awk,shp";

/// Weapon name -> calculator weapon id (`"<class>.<id>"`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PalicoIdTable(HashMap<String, String>);

/// Entry of the calculator's own weapon list
#[derive(Debug, Clone, Deserialize)]
pub struct PalicoWeapon {
    pub name: String,
    pub class: Value,
    pub id: Value,
}

impl PalicoIdTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a name -> id map
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the map from the calculator's weapon list JSON
    pub fn from_weapon_list(json: &str) -> Result<Self, CatalogError> {
        let weapons: Vec<PalicoWeapon> = serde_json::from_str(json)?;
        Ok(weapons.into_iter().collect())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, id: impl Into<String>) {
        self.0.insert(name.into(), id.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<PalicoWeapon> for PalicoIdTable {
    fn from_iter<I: IntoIterator<Item = PalicoWeapon>>(iter: I) -> Self {
        PalicoIdTable(
            iter.into_iter()
                .map(|w| {
                    let id = format!("{}.{}", scalar_text(&w.class), scalar_text(&w.id));
                    (w.name, id)
                })
                .collect(),
        )
    }
}

/// Last gauge index before the first empty segment, `-1` if the first is empty
///
/// Segments after the first zero are never inspected.
pub fn max_sharpness_index(gauge: &[u32]) -> i32 {
    gauge
        .iter()
        .take_while(|&&points| points != 0)
        .count() as i32
        - 1
}

/// Setup string for a weapon, empty when the calculator doesn't know it
pub fn encode_setup(record: &WeaponRecord, table: &PalicoIdTable) -> String {
    let Some(id) = table.get(&record.name) else {
        warn!(weapon = %record.name, "No calculator id");
        return String::new();
    };

    let max_sharpness = max_sharpness_index(record.sharpness_plus_gauge().unwrap_or_default());
    format!("{id}.{max_sharpness}.{SETUP_OPTIONS}")
}

/// Calculator link for a set of setups against the default monster
pub fn build_uri<I, S>(setups: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build_uri_for_monster(setups, DEFAULT_MONSTER_ID)
}

/// Calculator link for a set of setups against a given monster
pub fn build_uri_for_monster<I, S>(setups: I, monster_id: u32) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let setups: Value = setups
        .into_iter()
        .map(|s| Value::from(s.as_ref()))
        .collect();
    format!(
        "{CALCULATOR_BASE}?m={monster_id}&s={}",
        urlencoding::encode(&setups.to_string())
    )
}
