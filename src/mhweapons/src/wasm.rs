//! WebAssembly bindings for mhweapons
//!
//! This module provides JavaScript-friendly bindings for the catalog pages.
//! Records and tables cross the boundary as JSON strings.

use crate::compare::compare_weapons;
use crate::derive::{annotate, ReferenceTables};
use crate::melody::MelodyTable;
use crate::names::canonicalize;
use crate::palico::{build_uri, PalicoIdTable};
use crate::record::WeaponRecord;
use wasm_bindgen::prelude::*;

fn parse_record(json: &str) -> Result<WeaponRecord, JsValue> {
    WeaponRecord::from_json(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid weapon record: {}", e)))
}

/// Canonical display form of an item or weapon name
#[wasm_bindgen(js_name = canonicalizeName)]
pub fn canonicalize_name(raw: &str) -> String {
    canonicalize(raw)
}

/// Attach display fields to a weapon record
///
/// # Arguments
/// * `record_json` - The weapon record as JSON
/// * `melodies_json` - Optional melody table JSON
/// * `palico_json` - Optional calculator id map JSON
///
/// # Returns
/// The annotated record as JSON
#[wasm_bindgen(js_name = annotateWeapon)]
pub fn annotate_weapon(
    record_json: &str,
    melodies_json: Option<String>,
    palico_json: Option<String>,
) -> Result<String, JsValue> {
    let mut record = parse_record(record_json)?;

    let mut tables = ReferenceTables::new();
    if let Some(json) = melodies_json {
        tables.melodies = Some(
            MelodyTable::from_json(&json)
                .map_err(|e| JsValue::from_str(&format!("Invalid melody table: {}", e)))?,
        );
    }
    if let Some(json) = palico_json {
        tables.palico = Some(
            PalicoIdTable::from_json(&json)
                .map_err(|e| JsValue::from_str(&format!("Invalid palico map: {}", e)))?,
        );
    }

    annotate(&mut record, &tables)
        .map_err(|e| JsValue::from_str(&format!("Annotate failed: {}", e)))?;
    serde_json::to_string(&record)
        .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
}

/// Compare two weapon records for ranking
///
/// # Returns
/// -1, 0 or 1
#[wasm_bindgen(js_name = compareWeapons)]
pub fn compare_weapons_json(a_json: &str, b_json: &str) -> Result<i32, JsValue> {
    let a = parse_record(a_json)?;
    let b = parse_record(b_json)?;
    Ok(compare_weapons(&a, &b) as i32)
}

/// Calculating Palico link for a JSON array of setup strings
#[wasm_bindgen(js_name = palicoUri)]
pub fn palico_uri(setups_json: &str) -> Result<String, JsValue> {
    let setups: Vec<String> = serde_json::from_str(setups_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid setups: {}", e)))?;
    Ok(build_uri(&setups))
}

/// Setup string for one weapon
#[wasm_bindgen(js_name = palicoSetup)]
pub fn palico_setup(record_json: &str, palico_json: &str) -> Result<String, JsValue> {
    let record = parse_record(record_json)?;
    let table = PalicoIdTable::from_json(palico_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid palico map: {}", e)))?;
    Ok(crate::palico::encode_setup(&record, &table))
}
