//! Command handlers for mhweapons CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod name;
pub mod palico;
pub mod weapon;
