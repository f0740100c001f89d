//! Hunting horn melody resolution
//!
//! A horn's note code (e.g. `"WPR"`) selects the melodies it can play. The
//! published melody table and the weapon data disagree on note order for
//! some horns, so a miss is retried once with the second and third notes
//! swapped. A successful retry rewrites the record's note code.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::CatalogError;
use crate::record::{Melody, WeaponRecord};

/// Non-breaking space as it appears in tooltip markup
pub const NBSP: &str = "&nbsp;";

/// Line break inside a `title` attribute
pub const LINE_BREAK: &str = "&#10;";

/// Column width the song code is padded to
pub const SONG_COLUMN_WIDTH: usize = 5;

/// Note code -> melodies playable with those notes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MelodyTable(HashMap<String, Vec<Melody>>);

impl MelodyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the published melody table JSON
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, notes: &str) -> Option<&[Melody]> {
        self.0.get(notes).map(Vec::as_slice)
    }

    pub fn insert(&mut self, notes: impl Into<String>, melodies: Vec<Melody>) {
        self.0.insert(notes.into(), melodies);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<Melody>)> for MelodyTable {
    fn from_iter<I: IntoIterator<Item = (K, Vec<Melody>)>>(iter: I) -> Self {
        MelodyTable(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Outcome of a table lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a> {
    /// Found under the record's own note code
    Direct(&'a [Melody]),
    /// Found after swapping the second and third notes
    Transposed { notes: String, melodies: &'a [Melody] },
    /// Not found; `tried` is the last code looked up
    Miss { tried: String },
}

/// Look up a note code, retrying once with notes two and three swapped
pub fn lookup<'a>(table: &'a MelodyTable, notes: &str) -> Lookup<'a> {
    if let Some(melodies) = table.get(notes) {
        return Lookup::Direct(melodies);
    }

    match transpose(notes) {
        Some(swapped) => match table.get(&swapped) {
            Some(melodies) => Lookup::Transposed {
                notes: swapped,
                melodies,
            },
            None => Lookup::Miss { tried: swapped },
        },
        None => Lookup::Miss {
            tried: notes.to_string(),
        },
    }
}

/// Swap the second and third notes; `None` for codes shorter than three
pub fn transpose(notes: &str) -> Option<String> {
    let mut chars: Vec<char> = notes.chars().collect();
    if chars.len() < 3 {
        return None;
    }
    chars.swap(1, 2);
    Some(chars.into_iter().collect())
}

/// Build the melody tooltip for a record
///
/// With a table, the record's note code is looked up (see [`lookup`]) and a
/// transposed hit rewrites `record.horn_notes`. Without a table, or when the
/// record has no note code, its pre-resolved `horn_melodies` are rendered.
/// Unresolvable codes produce `"Unknown melodies for <code>"`.
pub fn resolve(record: &mut WeaponRecord, table: Option<&MelodyTable>) -> String {
    let notes = record.horn_notes.clone().filter(|n| !n.is_empty());

    match (notes, table) {
        (None, _) => record
            .horn_melodies
            .as_deref()
            .map(render)
            .unwrap_or_default(),
        (Some(notes), None) => match record.horn_melodies.as_deref() {
            Some(melodies) => render(melodies),
            None => unknown(&record.name, &notes),
        },
        (Some(notes), Some(table)) => match lookup(table, &notes) {
            Lookup::Direct(melodies) => render(melodies),
            Lookup::Transposed {
                notes: corrected,
                melodies,
            } => {
                debug!(weapon = %record.name, from = %notes, to = %corrected, "Corrected horn note order");
                record.horn_notes = Some(corrected);
                render(melodies)
            }
            Lookup::Miss { tried } => unknown(&record.name, &tried),
        },
    }
}

fn unknown(weapon: &str, notes: &str) -> String {
    let msg = format!("Unknown melodies for {notes}");
    warn!(weapon = %weapon, "{msg}");
    msg
}

/// Render melodies as padded song code + primary effect, one per line
pub fn render(melodies: &[Melody]) -> String {
    melodies
        .iter()
        .map(|melody| {
            let pad = SONG_COLUMN_WIDTH.saturating_sub(melody.song.chars().count());
            format!("{}{}{}", melody.song, NBSP.repeat(pad), melody.effect1)
        })
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}
