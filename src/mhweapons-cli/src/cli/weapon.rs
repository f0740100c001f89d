//! Weapon command CLI definitions

use clap::{Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum WeaponCommand {
    /// Show a weapon with its derived display fields
    Show {
        /// Weapon name (canonicalized before lookup)
        name: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Rank weapons of a type, best first
    Rank {
        /// Weapon type name or abbreviation (e.g. "Great Sword", "GS")
        #[arg(short = 't', long)]
        wtype: String,

        /// Show at most this many weapons
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List weapon names, optionally filtered by type
    List {
        /// Weapon type name or abbreviation
        #[arg(short = 't', long)]
        wtype: Option<String>,
    },

    /// Count weapons per type
    Count,
}
