//! Name canonicalization command handler

use anyhow::Result;

/// Print the canonical form of each name, one per line
pub fn handle(names: &[String]) -> Result<()> {
    for name in names {
        println!("{}", mhweapons::canonicalize(name));
    }
    Ok(())
}
