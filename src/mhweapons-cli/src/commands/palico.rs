//! Calculating Palico link command handler

use anyhow::{bail, Context, Result};
use mhweapons::{PalicoIdTable, WeaponCatalog};

use crate::cli::DataArgs;
use crate::config::Config;
use crate::file_io::{load_catalog, load_palico, DataPaths};

/// Print a calculator link comparing the named weapons
pub fn handle(data: &DataArgs, monster: Option<u32>, names: &[String]) -> Result<()> {
    let config = Config::load()?;
    let paths = DataPaths::resolve(data, &config)?;
    let palico_path = paths.palico_map.as_deref().context(
        "Palico map not provided. Run 'mhweapons configure --palico-map PATH' to set a default.",
    )?;

    let catalog = load_catalog(&paths.data_dir)?;
    let table = load_palico(palico_path)?;

    let setups = collect_setups(&catalog, &table, names);
    if setups.is_empty() {
        bail!("None of the named weapons are known to the calculator");
    }

    let monster_id = monster.unwrap_or_else(|| config.monster_id());
    println!("{}", mhweapons::build_uri_for_monster(&setups, monster_id));
    Ok(())
}

/// Setup strings for each known weapon, skipping unknown names with a warning
pub fn collect_setups(
    catalog: &WeaponCatalog,
    table: &PalicoIdTable,
    names: &[String],
) -> Vec<String> {
    names
        .iter()
        .filter_map(|raw| {
            let name = mhweapons::canonicalize(raw);
            let Some(record) = catalog.find_by_name(&name) else {
                tracing::warn!(weapon = %name, "Weapon not found");
                return None;
            };
            let setup = mhweapons::encode_setup(record, table);
            (!setup.is_empty()).then_some(setup)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mhweapons::WeaponRecord;

    #[test]
    fn test_collect_setups() {
        let catalog = WeaponCatalog::from_records([
            (
                "4".to_string(),
                WeaponRecord {
                    name: "Buster Sword".into(),
                    wtype: "Great Sword".into(),
                    sharpness_plus: Some(vec![5, 5, 5, 0]),
                    ..Default::default()
                },
            ),
            (
                "5".to_string(),
                WeaponRecord {
                    name: "Iron Sword".into(),
                    wtype: "Great Sword".into(),
                    ..Default::default()
                },
            ),
        ]);
        let mut table = PalicoIdTable::new();
        table.insert("Buster Sword", "GS.4");

        let names = vec![
            "buster sword".to_string(),
            "iron sword".to_string(),
            "nothing".to_string(),
        ];
        let setups = collect_setups(&catalog, &table, &names);
        assert_eq!(setups, vec!["GS.4.2.0.1.awk,shp"]);
    }
}
