//! Display fields attached to weapon records
//!
//! [`annotate`] runs every formatter that applies to a record and stores the
//! results on [`WeaponRecord::derived`], which serializes flat alongside the
//! record's own fields for templates. Lookup tables are owned by the caller
//! and passed in as [`ReferenceTables`].

use serde::{Deserialize, Serialize};

use crate::bow::{self, BowError};
use crate::melody::{self, MelodyTable};
use crate::palico::{self, PalicoIdTable};
use crate::record::WeaponRecord;
use crate::sharpness;

/// Derived display strings; `None` when the field doesn't apply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharpness_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharpness_plus_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharpness_plus2_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharpness_all_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bow_shots_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bow_coatings_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horn_melodies_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palico_setup: Option<String>,
}

/// Read-only lookup tables loaded once per session
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    pub melodies: Option<MelodyTable>,
    pub palico: Option<PalicoIdTable>,
}

impl ReferenceTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_melodies(mut self, melodies: MelodyTable) -> Self {
        self.melodies = Some(melodies);
        self
    }

    pub fn with_palico(mut self, palico: PalicoIdTable) -> Self {
        self.palico = Some(palico);
        self
    }
}

/// Errors deriving display fields for one record
#[derive(Debug, thiserror::Error)]
pub enum DeriveError {
    #[error("Bad bow data for {weapon}: {source}")]
    Bow {
        weapon: String,
        #[source]
        source: BowError,
    },
}

/// Compute and attach all display fields for a record
///
/// Bows get their legacy string fields normalized (see [`bow::apply`]) and
/// horns may have their note code corrected (see [`melody::resolve`]).
pub fn annotate(record: &mut WeaponRecord, tables: &ReferenceTables) -> Result<(), DeriveError> {
    let titles = sharpness::format(record);
    record.derived.sharpness_title = Some(titles.title);
    record.derived.sharpness_plus_title = Some(titles.plus_title);
    record.derived.sharpness_plus2_title =
        Some(titles.plus2_title).filter(|t| !t.is_empty());
    record.derived.sharpness_all_title = Some(titles.all_title);

    bow::apply(record).map_err(|source| DeriveError::Bow {
        weapon: record.name.clone(),
        source,
    })?;

    if record.is_horn() {
        let title = melody::resolve(record, tables.melodies.as_ref());
        record.derived.horn_melodies_title = Some(title);
    }

    if let Some(table) = &tables.palico {
        let setup = palico::encode_setup(record, table);
        record.derived.palico_setup = Some(setup).filter(|s| !s.is_empty());
    }

    Ok(())
}

/// Annotate every record, collecting failures instead of stopping
///
/// Returns the index and error of each record that could not be annotated.
pub fn annotate_all(
    records: &mut [WeaponRecord],
    tables: &ReferenceTables,
) -> Vec<(usize, DeriveError)> {
    records
        .iter_mut()
        .enumerate()
        .filter_map(|(i, record)| annotate(record, tables).err().map(|e| (i, e)))
        .collect()
}
