//! Weapon catalog command handlers
//!
//! Show, rank, list and count weapons from the published catalog indexes.

use anyhow::{bail, Context, Result};
use mhweapons::melody::{LINE_BREAK, NBSP};
use mhweapons::reference::{weapon_type_by_abbr, WeaponType};
use mhweapons::totals::{add_values, object_as_text};
use mhweapons::{
    annotate, annotate_all, element_abbr, is_gunner, max_level, weapon_type_abbr,
    weapon_type_by_name, ReferenceTables, WeaponCatalog, WeaponRecord,
};
use std::collections::HashMap;

use crate::cli::{DataArgs, OutputFormat, WeaponCommand};
use crate::config::Config;
use crate::file_io::{load_catalog, load_tables, DataPaths};

/// Handle a weapon subcommand
pub fn handle(data: &DataArgs, command: WeaponCommand) -> Result<()> {
    let config = Config::load()?;
    let paths = DataPaths::resolve(data, &config)?;
    let catalog = load_catalog(&paths.data_dir)?;

    match command {
        WeaponCommand::Show { name, format } => {
            let tables = load_tables(&paths)?;
            show(&catalog, &tables, &name, format)
        }
        WeaponCommand::Rank {
            wtype,
            limit,
            format,
        } => {
            let tables = load_tables(&paths)?;
            rank(&catalog, &tables, &wtype, limit, format)
        }
        WeaponCommand::List { wtype } => list(&catalog, wtype.as_deref()),
        WeaponCommand::Count => {
            println!("{}", count_by_type(&catalog));
            Ok(())
        }
    }
}

fn show(
    catalog: &WeaponCatalog,
    tables: &ReferenceTables,
    raw_name: &str,
    format: OutputFormat,
) -> Result<()> {
    let name = mhweapons::canonicalize(raw_name);
    let mut record = catalog
        .find_by_name(&name)
        .cloned()
        .with_context(|| format!("Weapon not found: {}", name))?;

    annotate(&mut record, tables)?;

    match format {
        OutputFormat::Text => print!("{}", format_weapon(&record)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
    }
    Ok(())
}

fn rank(
    catalog: &WeaponCatalog,
    tables: &ReferenceTables,
    wtype: &str,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let wtype = resolve_wtype(wtype)?;
    let mut records: Vec<WeaponRecord> =
        catalog.of_type(wtype.name).into_iter().cloned().collect();

    for (i, err) in annotate_all(&mut records, tables) {
        tracing::warn!(weapon = %records[i].name, "{}", err);
    }
    mhweapons::rank(&mut records);
    records.truncate(limit.unwrap_or(records.len()));

    match format {
        OutputFormat::Text => {
            for (i, record) in records.iter().enumerate() {
                println!("{}", format_rank_row(i + 1, record));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }
    Ok(())
}

fn list(catalog: &WeaponCatalog, wtype: Option<&str>) -> Result<()> {
    let names = match wtype {
        Some(wtype) => {
            let wtype = resolve_wtype(wtype)?;
            catalog.names_matching(|r| r.wtype == wtype.name)
        }
        None => catalog.names_matching(|_| true),
    };

    for name in names {
        println!("{}", name);
    }
    Ok(())
}

/// Accept a weapon type by name or abbreviation
pub fn resolve_wtype(input: &str) -> Result<&'static WeaponType> {
    if let Some(wtype) = weapon_type_by_name(input).or_else(|| weapon_type_by_abbr(input)) {
        return Ok(wtype);
    }
    match weapon_type_by_name(&mhweapons::canonicalize(input)) {
        Some(wtype) => Ok(wtype),
        None => bail!("Unknown weapon type: {}", input),
    }
}

/// Weapon counts keyed by type abbreviation, e.g. `"Bow 12, GS 40"`
pub fn count_by_type(catalog: &WeaponCatalog) -> String {
    let mut totals: HashMap<String, u32> = HashMap::new();
    for (_, record) in catalog.records_matching(|_| true) {
        let key = weapon_type_abbr(&record.wtype).unwrap_or(record.wtype.as_str());
        add_values(&mut totals, &HashMap::from([(key.to_string(), 1)]));
    }
    object_as_text(&totals)
}

/// Convert tooltip markup to plain terminal text
pub fn tooltip_to_text(title: &str) -> String {
    title.replace(NBSP, " ").replace(LINE_BREAK, "\n")
}

fn element_text(record: &WeaponRecord) -> Option<String> {
    let element = record.element.as_deref().filter(|e| !e.is_empty())?;
    let abbr = element_abbr(element).unwrap_or(element);
    Some(match record.element_attack {
        Some(value) => format!("{} {}", abbr, value),
        None => abbr.to_string(),
    })
}

fn push_line(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        out.push_str(&format!("{:<12}{}\n", label, value));
    }
}

/// Multi-line description of an annotated weapon
pub fn format_weapon(record: &WeaponRecord) -> String {
    let mut out = String::new();
    let number = |n: Option<f64>| n.map(|n| n.to_string()).unwrap_or_default();

    push_line(&mut out, "Name:", &record.name);
    push_line(&mut out, "Type:", &record.wtype);
    push_line(&mut out, "Attack:", &number(record.attack));
    push_line(&mut out, "Element:", &element_text(record).unwrap_or_default());
    push_line(&mut out, "Affinity:", &number(record.affinity));
    push_line(
        &mut out,
        "Slots:",
        &record.num_slots.map(|n| n.to_string()).unwrap_or_default(),
    );
    push_line(&mut out, "Defense:", &number(record.defense));

    let derived = &record.derived;
    if let Some(gauge) = record.sharpness_gauge().filter(|_| !is_gunner(&record.wtype)) {
        let best = max_level(gauge).map(|l| l.name()).unwrap_or("-");
        let all_title = derived.sharpness_all_title.as_deref().unwrap_or_default();
        push_line(&mut out, "Sharpness:", &format!("{} [{}]", all_title, best));
    }
    push_line(&mut out, "Shots:", derived.bow_shots_text.as_deref().unwrap_or_default());
    push_line(
        &mut out,
        "Coatings:",
        derived.bow_coatings_text.as_deref().unwrap_or_default(),
    );
    push_line(&mut out, "Arc:", record.arc_type.as_deref().unwrap_or_default());
    push_line(&mut out, "Notes:", record.horn_notes.as_deref().unwrap_or_default());
    if let Some(title) = derived.horn_melodies_title.as_deref().filter(|t| !t.is_empty()) {
        out.push_str("Melodies:\n");
        for melody in tooltip_to_text(title).lines() {
            push_line(&mut out, "", melody);
        }
    }
    push_line(&mut out, "Palico:", derived.palico_setup.as_deref().unwrap_or_default());

    out
}

/// One line of ranking output
pub fn format_rank_row(position: usize, record: &WeaponRecord) -> String {
    let number = |n: Option<f64>| n.map(|n| n.to_string()).unwrap_or_else(|| "-".into());
    let sharpness = record
        .derived
        .sharpness_title
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("-");

    format!(
        "{:>3}. {:<28} atk {:>4}  sharp {:<18} elem {:<8} aff {:>4}  slots {}  def {}",
        position,
        record.name,
        number(record.attack),
        sharpness,
        element_text(record).unwrap_or_else(|| "-".into()),
        number(record.affinity),
        record.num_slots.unwrap_or(0),
        number(record.defense),
    )
}
