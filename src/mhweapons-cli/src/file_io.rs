//! Loading catalog data and lookup tables from disk

use anyhow::{Context, Result};
use mhweapons::{MelodyTable, PalicoIdTable, ReferenceTables, WeaponCatalog};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::DataArgs;
use crate::config::Config;

/// Name index, relative to the data directory
pub const NAME_INDEX: &str = "weapon/_index_name.json";

/// Id index, relative to the data directory
pub const ID_INDEX: &str = "weapon/_index_id.json";

/// Data locations after merging command-line flags over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct DataPaths {
    pub data_dir: PathBuf,
    pub melody_table: Option<PathBuf>,
    pub palico_map: Option<PathBuf>,
}

impl DataPaths {
    pub fn resolve(args: &DataArgs, config: &Config) -> Result<Self> {
        let data_dir = args
            .data_dir
            .clone()
            .or_else(|| config.data_dir.clone())
            .context(
                "Data directory not provided. Run 'mhweapons configure --data-dir PATH' to set a default.",
            )?;

        Ok(DataPaths {
            data_dir,
            melody_table: args.melody_table.clone().or_else(|| config.melody_table.clone()),
            palico_map: args.palico_map.clone().or_else(|| config.palico_map.clone()),
        })
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Load the weapon name and id indexes
pub fn load_catalog(data_dir: &Path) -> Result<WeaponCatalog> {
    let name_path = data_dir.join(NAME_INDEX);
    let id_path = data_dir.join(ID_INDEX);

    let catalog = WeaponCatalog::from_json(&read(&name_path)?, &read(&id_path)?)
        .with_context(|| format!("Failed to parse weapon indexes in {}", data_dir.display()))?;
    tracing::debug!(weapons = catalog.len(), "Loaded weapon catalog");

    Ok(catalog)
}

/// Load whichever lookup tables are configured
pub fn load_tables(paths: &DataPaths) -> Result<ReferenceTables> {
    let mut tables = ReferenceTables::new();

    if let Some(path) = &paths.melody_table {
        let melodies = MelodyTable::from_json(&read(path)?)
            .with_context(|| format!("Failed to parse melody table {}", path.display()))?;
        tables.melodies = Some(melodies);
    }

    if let Some(path) = &paths.palico_map {
        tables.palico = Some(load_palico(path)?);
    }

    Ok(tables)
}

/// Load the palico id map
pub fn load_palico(path: &Path) -> Result<PalicoIdTable> {
    PalicoIdTable::from_json(&read(path)?)
        .with_context(|| format!("Failed to parse palico map {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_catalog(dir: &Path) {
        fs::create_dir_all(dir.join("weapon")).unwrap();
        fs::write(dir.join(NAME_INDEX), r#"{"Buster Sword": [4]}"#).unwrap();
        fs::write(
            dir.join(ID_INDEX),
            r#"{"4": [{"name": "Buster Sword", "wtype": "Great Sword", "attack": 624}]}"#,
        )
        .unwrap();
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            data_dir: Some(PathBuf::from("/from/config")),
            melody_table: Some(PathBuf::from("/config/melodies.json")),
            ..Default::default()
        };
        let args = DataArgs {
            data_dir: Some(PathBuf::from("/from/flag")),
            ..Default::default()
        };

        let paths = DataPaths::resolve(&args, &config).unwrap();
        assert_eq!(paths.data_dir, PathBuf::from("/from/flag"));
        assert_eq!(paths.melody_table, Some(PathBuf::from("/config/melodies.json")));
        assert_eq!(paths.palico_map, None);
    }

    #[test]
    fn test_missing_data_dir() {
        let result = DataPaths::resolve(&DataArgs::default(), &Config::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_catalog() {
        let dir = tempfile::tempdir().unwrap();
        write_catalog(dir.path());

        let catalog = load_catalog(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find_by_name("Buster Sword").is_some());
    }

    #[test]
    fn test_load_catalog_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_load_tables() {
        let dir = tempfile::tempdir().unwrap();
        let melody_path = dir.path().join("melodies.json");
        let palico_path = dir.path().join("palico.json");
        fs::write(&melody_path, r#"{"WPR": [{"song": "WW", "effect1": "Self-improvement"}]}"#)
            .unwrap();
        fs::write(&palico_path, r#"{"Buster Sword": "GS.4"}"#).unwrap();

        let paths = DataPaths {
            data_dir: dir.path().to_path_buf(),
            melody_table: Some(melody_path),
            palico_map: Some(palico_path),
        };
        let tables = load_tables(&paths).unwrap();
        assert_eq!(tables.melodies.map(|m| m.len()), Some(1));
        assert_eq!(
            tables.palico.as_ref().and_then(|p| p.get("Buster Sword")),
            Some("GS.4")
        );
    }
}
