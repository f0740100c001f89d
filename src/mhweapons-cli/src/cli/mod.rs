//! CLI argument definitions for mhweapons
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod weapon;

pub use core::{Cli, Commands, DataArgs};
pub use weapon::{OutputFormat, WeaponCommand};
