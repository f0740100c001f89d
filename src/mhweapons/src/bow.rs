//! Bow shot and coating decoding
//!
//! Older catalogs store bow data as pipe-delimited strings:
//!
//! - `charges`: `"Rapid L2|Pierce L1*"`, one `<type> L<level>` segment per
//!   charge level, with a trailing `*` when the level needs Load Up
//! - `coatings`: `"Power 1|-|Poison"`, `-` marking an unavailable coating
//! - `recoil`: the charge arc
//!
//! Newer catalogs ship pre-split `shot_types`/`ammo`/`arc_type`. Both forms
//! decode into the same [`BowSummary`].

use serde::Serialize;

use crate::record::{ShotType, WeaponRecord};

/// Coating segment meaning "not available"
const NO_COATING: &str = "-";

const POWER_PREFIX: &str = "Power ";
const ELEMENT_PREFIX: &str = "Element ";

/// Errors from malformed legacy bow strings
#[derive(Debug, thiserror::Error)]
pub enum BowError {
    #[error("Malformed charge segment {segment:?}: {reason}")]
    MalformedCharge {
        segment: String,
        reason: &'static str,
    },

    #[error("Charges present without coatings")]
    MissingCoatings,
}

/// Decoded bow data and its compact text forms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BowSummary {
    pub shot_types: Vec<ShotType>,
    pub ammo: Vec<String>,
    /// e.g. `"R2 (P1)"`
    pub bow_shots_text: String,
    /// e.g. `"P1 Poi Par"`
    pub bow_coatings_text: String,
    pub arc_type: Option<String>,
}

/// Decode the bow fields of a record
///
/// Returns `Ok(None)` for anything that isn't a bow.
pub fn decode(record: &WeaponRecord) -> Result<Option<BowSummary>, BowError> {
    if !record.is_bow() {
        return Ok(None);
    }

    let (shot_types, ammo, arc_type) = match legacy_charges(record) {
        Some(charges) => {
            let coatings = record.coatings.as_deref().ok_or(BowError::MissingCoatings)?;
            (
                parse_charges(charges)?,
                parse_coatings(coatings),
                record.recoil.clone(),
            )
        }
        None => (
            record.shot_types.clone().unwrap_or_default(),
            record.ammo.clone().unwrap_or_default(),
            record.arc_type.clone(),
        ),
    };

    Ok(Some(BowSummary {
        bow_shots_text: shots_text(&shot_types),
        bow_coatings_text: coatings_text(&ammo),
        shot_types,
        ammo,
        arc_type,
    }))
}

/// Decode and write the normalized fields back onto the record
///
/// After this the record carries `shot_types`, `ammo` and `arc_type` even
/// when it was loaded from the legacy string form.
pub fn apply(record: &mut WeaponRecord) -> Result<Option<BowSummary>, BowError> {
    let summary = decode(record)?;
    if let Some(summary) = &summary {
        record.shot_types = Some(summary.shot_types.clone());
        record.ammo = Some(summary.ammo.clone());
        record.arc_type = summary.arc_type.clone();
        record.derived.bow_shots_text = Some(summary.bow_shots_text.clone());
        record.derived.bow_coatings_text = Some(summary.bow_coatings_text.clone());
    }
    Ok(summary)
}

fn legacy_charges(record: &WeaponRecord) -> Option<&str> {
    record.charges.as_deref().filter(|c| !c.is_empty())
}

/// Parse a pipe-delimited charge string, e.g. `"Rapid L2|Pierce L1*"`
pub fn parse_charges(charges: &str) -> Result<Vec<ShotType>, BowError> {
    charges.split('|').map(parse_charge).collect()
}

fn parse_charge(segment: &str) -> Result<ShotType, BowError> {
    let malformed = |reason| BowError::MalformedCharge {
        segment: segment.to_string(),
        reason,
    };

    let mut parts = segment.split(' ');
    let (kind, level_token) = match (parts.next(), parts.next(), parts.next()) {
        (Some(kind), Some(level), None) => (kind, level),
        _ => return Err(malformed("expected `<type> <level>`")),
    };
    if kind.is_empty() {
        return Err(malformed("empty shot type"));
    }

    let level = level_token
        .chars()
        .nth(1)
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| malformed("level token has no digit in second position"))?;

    Ok(ShotType {
        kind: kind.to_string(),
        level: level as u8,
        requires_loading: level_token.ends_with('*'),
    })
}

/// Parse a pipe-delimited coating string, dropping unavailable (`-`) entries
pub fn parse_coatings(coatings: &str) -> Vec<String> {
    coatings
        .split('|')
        .filter(|c| *c != NO_COATING)
        .map(String::from)
        .collect()
}

/// Compact shot list, loading-only levels in parentheses
pub fn shots_text(shots: &[ShotType]) -> String {
    shots
        .iter()
        .map(|shot| {
            let initial: String = shot.kind.chars().take(1).collect();
            let text = format!("{initial}{}", shot.level);
            if shot.requires_loading {
                format!("({text})")
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compact coating list
pub fn coatings_text(ammo: &[String]) -> String {
    ammo.iter()
        .map(|c| abbreviate_coating(c))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"Power 2"` -> `"P2"`, `"Element 1"` -> `"E1"`, otherwise the first
/// three characters. Short names are truncated, never padded.
pub fn abbreviate_coating(coating: &str) -> String {
    if let Some(rest) = coating.strip_prefix(POWER_PREFIX) {
        format!("P{}", rest.chars().take(1).collect::<String>())
    } else if let Some(rest) = coating.strip_prefix(ELEMENT_PREFIX) {
        format!("E{}", rest.chars().take(1).collect::<String>())
    } else {
        coating.chars().take(3).collect()
    }
}
