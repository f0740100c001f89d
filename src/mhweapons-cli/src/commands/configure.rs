//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up mhweapons CLI defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Values to store; `None` leaves the current setting alone
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub data_dir: Option<PathBuf>,
    pub melody_table: Option<PathBuf>,
    pub palico_map: Option<PathBuf>,
    pub monster_id: Option<u32>,
}

impl ConfigUpdate {
    fn is_empty(&self) -> bool {
        self.data_dir.is_none()
            && self.melody_table.is_none()
            && self.palico_map.is_none()
            && self.monster_id.is_none()
    }

    /// Apply to a config, returning true if anything changed
    fn apply(self, config: &mut Config) -> bool {
        let before = config.clone();
        if let Some(dir) = self.data_dir {
            config.data_dir = Some(dir);
        }
        if let Some(path) = self.melody_table {
            config.melody_table = Some(path);
        }
        if let Some(path) = self.palico_map {
            config.palico_map = Some(path);
        }
        if let Some(id) = self.monster_id {
            config.monster_id = Some(id);
        }
        *config != before
    }
}

/// Handle the configure command
///
/// # Arguments
/// * `update` - Settings to store
/// * `show` - If true, show current configuration
pub fn handle(update: ConfigUpdate, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if update.is_empty() {
        show_usage();
        return Ok(());
    }

    if update.apply(&mut config) {
        config.save()?;
        println!("Configuration updated");
    }
    show_config(&config);

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    let path_or_unset = |p: &Option<PathBuf>| {
        p.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    };

    println!("Data directory: {}", path_or_unset(&config.data_dir));
    println!("Melody table:   {}", path_or_unset(&config.melody_table));
    println!("Palico map:     {}", path_or_unset(&config.palico_map));
    println!("Monster id:     {}", config.monster_id());

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: mhweapons configure --data-dir PATH [--melody-table PATH] [--palico-map PATH]");
    println!("   or: mhweapons configure --show");
    println!();
    println!("Note: the data directory is the published jsonapi directory containing");
    println!("      weapon/_index_name.json and weapon/_index_id.json.");
}
