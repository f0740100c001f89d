//! Weapon catalog indexes
//!
//! The published catalog is two JSON files:
//!
//! - `_index_name.json`: weapon name -> list of catalog ids
//! - `_index_id.json`: catalog id -> list of records; the first record is
//!   the weapon itself, the rest are variants
//!
//! Loading and caching the files is up to the caller.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;
use tracing::warn;

use crate::record::{scalar_text, WeaponRecord};

/// Errors from decoding catalog and lookup-table JSON
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Name and id indexes over the weapon catalog
#[derive(Debug, Clone, Default)]
pub struct WeaponCatalog {
    by_name: HashMap<String, Vec<String>>,
    by_id: BTreeMap<String, Vec<WeaponRecord>>,
}

impl WeaponCatalog {
    /// Parse both index files
    pub fn from_json(name_index: &str, id_index: &str) -> Result<Self, CatalogError> {
        let raw_names: HashMap<String, Vec<Value>> = serde_json::from_str(name_index)?;
        let by_id: BTreeMap<String, Vec<WeaponRecord>> = serde_json::from_str(id_index)?;

        let by_name = raw_names
            .into_iter()
            .map(|(name, ids)| (name, ids.iter().map(scalar_text).collect()))
            .collect();

        Ok(WeaponCatalog { by_name, by_id })
    }

    /// Build a catalog from records keyed by id, deriving the name index
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, WeaponRecord)>,
    {
        let mut catalog = WeaponCatalog::default();
        for (id, record) in records {
            catalog
                .by_name
                .entry(record.name.clone())
                .or_default()
                .push(id.clone());
            catalog.by_id.entry(id).or_default().push(record);
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Canonical record for a catalog id
    pub fn get(&self, id: &str) -> Option<&WeaponRecord> {
        self.by_id.get(id).and_then(|records| records.first())
    }

    /// All records (weapon and variants) for a catalog id
    pub fn variants(&self, id: &str) -> &[WeaponRecord] {
        self.by_id.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Catalog ids for a weapon name
    pub fn ids_for_name(&self, name: &str) -> &[String] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// First record whose name matches
    pub fn find_by_name(&self, name: &str) -> Option<&WeaponRecord> {
        self.ids_for_name(name).iter().find_map(|id| self.get(id))
    }

    /// Sorted names of weapons accepted by `predicate`
    ///
    /// Records without a name are skipped with a warning.
    pub fn names_matching<F>(&self, mut predicate: F) -> Vec<&str>
    where
        F: FnMut(&WeaponRecord) -> bool,
    {
        let mut names: Vec<&str> = self
            .records_matching(&mut predicate)
            .into_iter()
            .filter_map(|(id, record)| {
                if record.name.is_empty() {
                    warn!(id, "Weapon with no name");
                    None
                } else {
                    Some(record.name.as_str())
                }
            })
            .collect();
        names.sort_unstable();
        names
    }

    /// `(id, record)` pairs accepted by `predicate`, in id order
    pub fn records_matching<F>(&self, mut predicate: F) -> Vec<(&str, &WeaponRecord)>
    where
        F: FnMut(&WeaponRecord) -> bool,
    {
        self.by_id
            .iter()
            .filter_map(|(id, records)| records.first().map(|r| (id.as_str(), r)))
            .filter(|(_, record)| predicate(*record))
            .collect()
    }

    /// Canonical records of every weapon of a type
    pub fn of_type(&self, wtype: &str) -> Vec<&WeaponRecord> {
        self.records_matching(|r| r.wtype == wtype)
            .into_iter()
            .map(|(_, r)| r)
            .collect()
    }
}
