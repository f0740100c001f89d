//! Weapon records as published in the catalog JSON indexes
//!
//! Records are type-dependent: blademaster weapons carry sharpness gauges,
//! bows carry shot and coating data (in either the legacy pipe-delimited
//! form or pre-split arrays), and hunting horns carry a note code or a
//! pre-resolved melody list. Fields this crate does not interpret are kept
//! in [`WeaponRecord::extra`] so records round-trip through JSON.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::derive::DerivedFields;

/// Weapon type name for bows
pub const BOW: &str = "Bow";

/// Weapon type name for hunting horns
pub const HUNTING_HORN: &str = "Hunting Horn";

/// A single bow charge level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotType {
    /// Shot type name, e.g. "Rapid", "Pierce", "Spread"
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(deserialize_with = "level_from_number_or_text")]
    pub level: u8,

    /// True when the charge level requires the Load Up skill
    #[serde(default)]
    pub requires_loading: bool,
}

/// A hunting horn melody entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Melody {
    pub song: String,
    pub effect1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<Value>,
}

impl Melody {
    pub fn new(song: impl Into<String>, effect1: impl Into<String>) -> Self {
        Melody {
            song: song.into(),
            effect1: effect1.into(),
            effect2: None,
            duration: None,
            extension: None,
        }
    }
}

/// A weapon as found in the catalog id index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub wtype: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affinity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_slots: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_attack: Option<f64>,

    // Sharpness gauges, worst colour first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharpness: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharpness_plus: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharpness_plus2: Option<Vec<u32>>,

    // Bow, legacy form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charges: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coatings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recoil: Option<String>,

    // Bow, pre-split form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shot_types: Option<Vec<ShotType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ammo: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arc_type: Option<String>,

    // Hunting horn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horn_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horn_melodies: Option<Vec<Melody>>,

    /// Display fields attached by [`crate::annotate`]
    #[serde(flatten)]
    pub derived: DerivedFields,

    /// Fields not interpreted by this crate
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WeaponRecord {
    /// Parse a single record from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_bow(&self) -> bool {
        self.wtype == BOW
    }

    pub fn is_horn(&self) -> bool {
        self.wtype == HUNTING_HORN
    }

    /// Base sharpness gauge, if the weapon has one
    pub fn sharpness_gauge(&self) -> Option<&[u32]> {
        non_empty(self.sharpness.as_deref())
    }

    /// Sharpness gauge with Sharpness+1, falling back to the base gauge
    pub fn sharpness_plus_gauge(&self) -> Option<&[u32]> {
        non_empty(self.sharpness_plus.as_deref()).or_else(|| self.sharpness_gauge())
    }

    /// Second upgrade tier gauge, only present on some weapons
    pub fn sharpness_plus2_gauge(&self) -> Option<&[u32]> {
        non_empty(self.sharpness_plus2.as_deref())
    }
}

fn non_empty(gauge: Option<&[u32]>) -> Option<&[u32]> {
    gauge.filter(|g| !g.is_empty())
}

/// Render a JSON scalar the way it appears in ids and keys (strings unquoted)
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn level_from_number_or_text<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawLevel {
        Number(u8),
        Text(String),
    }

    match RawLevel::deserialize(deserializer)? {
        RawLevel::Number(n) => Ok(n),
        RawLevel::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid shot level: {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blademaster_record() {
        let record = WeaponRecord::from_json(
            r#"{"name": "Iron Sword", "wtype": "Great Sword", "attack": 80,
                "affinity": 0, "num_slots": 1, "defense": 0,
                "sharpness": [5, 10, 5], "sharpness_plus": [5, 10, 10],
                "rarity": 1}"#,
        )
        .unwrap();

        assert_eq!(record.name, "Iron Sword");
        assert_eq!(record.attack, Some(80.0));
        assert_eq!(record.sharpness_gauge(), Some(&[5, 10, 5][..]));
        assert_eq!(record.sharpness_plus2_gauge(), None);
        assert_eq!(record.extra.get("rarity"), Some(&Value::from(1)));
    }

    #[test]
    fn test_sharpness_plus_falls_back_to_base() {
        let record = WeaponRecord {
            sharpness: Some(vec![1, 2, 3]),
            sharpness_plus: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(record.sharpness_plus_gauge(), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn test_shot_level_accepts_text() {
        let shot: ShotType =
            serde_json::from_str(r#"{"type": "Rapid", "level": "3", "requires_loading": true}"#)
                .unwrap();
        assert_eq!(shot.level, 3);
        assert!(shot.requires_loading);

        let shot: ShotType = serde_json::from_str(r#"{"type": "Spread", "level": 2}"#).unwrap();
        assert_eq!(shot.level, 2);
        assert!(!shot.requires_loading);
    }

    #[test]
    fn test_shot_level_rejects_garbage() {
        let result: Result<ShotType, _> =
            serde_json::from_str(r#"{"type": "Rapid", "level": "L"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let json = r#"{"name":"Hunter's Horn","wtype":"Hunting Horn","horn_notes":"WPR","awaken":true}"#;
        let record = WeaponRecord::from_json(json).unwrap();
        assert!(record.is_horn());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["awaken"], Value::Bool(true));
        assert_eq!(value["horn_notes"], Value::from("WPR"));
        assert!(value.get("sharpness").is_none());
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(&Value::from("GS")), "GS");
        assert_eq!(scalar_text(&Value::from(42)), "42");
    }
}
