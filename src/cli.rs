// ABOUTME: CLI argument parsing and catalog printing for bookstand
//
// Provides command-line interface for:
// - Launching the booking TUI (tui, default)
// - Printing the mock catalogs (catalog shops|services|slots)
// - Printing the config file path (config-path)

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::catalog;
use crate::config;

/// Barber shop booking wizard in your terminal
#[derive(Parser)]
#[command(name = "bookstand")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// Print the built-in catalogs
    Catalog {
        #[command(subcommand)]
        which: CatalogCommand,
    },

    /// Print the path of the configuration file
    ConfigPath,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// Barber shops
    Shops,
    /// Services with prices and durations
    Services,
    /// Daily appointment slots
    Slots,
}

pub fn print_catalog(which: &CatalogCommand) {
    match which {
        CatalogCommand::Shops => {
            for shop in catalog::SHOPS {
                println!(
                    "{:<2} {:<24} {:<30} ★ {:.1}  {}",
                    shop.id, shop.name, shop.address, shop.rating, shop.distance
                );
            }
        }
        CatalogCommand::Services => {
            for service in catalog::SERVICES {
                println!(
                    "{:<2} {:<18} {:>8} {:>6}",
                    service.id, service.name, service.duration, service.price
                );
            }
        }
        CatalogCommand::Slots => {
            for slot in catalog::TIME_SLOTS {
                let status = if slot.available { "available" } else { "booked" };
                println!("{:<3} {:<9} {}", slot.id, slot.label, status);
            }
        }
    }
}

pub fn print_config_path() -> Result<()> {
    let path = config::config_path()?;
    println!("{}", path.display());
    Ok(())
}
