//! Core CLI definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::weapon::WeaponCommand;

#[derive(Parser)]
#[command(name = "mhweapons")]
#[command(about = "Monster Hunter weapon catalog browser", long_about = None)]
pub struct Cli {
    /// Show debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to find catalog data (uses configured defaults if not provided)
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Directory containing weapon/_index_name.json and weapon/_index_id.json
    #[arg(long, env = "MHWEAPONS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Hunting horn melody table JSON
    #[arg(long)]
    pub melody_table: Option<PathBuf>,

    /// Calculating Palico weapon id map JSON
    #[arg(long)]
    pub palico_map: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the canonical form of item or weapon names
    #[command(visible_alias = "n")]
    Name {
        /// Names to canonicalize
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Weapon catalog operations (show, rank, list, count)
    #[command(visible_alias = "w")]
    Weapon {
        #[command(flatten)]
        data: DataArgs,

        #[command(subcommand)]
        command: WeaponCommand,
    },

    /// Build a Calculating Palico link comparing weapons
    #[command(visible_alias = "p")]
    Palico {
        #[command(flatten)]
        data: DataArgs,

        /// Reference monster id (default 31, Great Jaggi)
        #[arg(short, long)]
        monster: Option<u32>,

        /// Weapon names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default catalog data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Set default melody table path
        #[arg(long)]
        melody_table: Option<PathBuf>,

        /// Set default palico id map path
        #[arg(long)]
        palico_map: Option<PathBuf>,

        /// Set default reference monster for calculator links
        #[arg(long)]
        monster_id: Option<u32>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
