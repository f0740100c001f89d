mod cli;
mod commands;
mod config;
mod file_io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;
use commands::configure::ConfigUpdate;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "mhweapons=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Name { names } => {
            commands::name::handle(&names)?;
        }

        Commands::Weapon { data, command } => {
            commands::weapon::handle(&data, command)?;
        }

        Commands::Palico {
            data,
            monster,
            names,
        } => {
            commands::palico::handle(&data, monster, &names)?;
        }

        Commands::Configure {
            data_dir,
            melody_table,
            palico_map,
            monster_id,
            show,
        } => {
            let update = ConfigUpdate {
                data_dir,
                melody_table,
                palico_map,
                monster_id,
            };
            commands::configure::handle(update, show)?;
        }
    }

    Ok(())
}
