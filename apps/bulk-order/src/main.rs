//! # Bulk Order CLI
//!
//! Prices a bulk order from the command line and prints the summary panel
//! as JSON.
//!
//! ## Usage
//! ```bash
//! # Price three orders from the built-in sample catalog
//! cargo run -p sunline-bulk-order --bin bulk-order -- --select ORD-1001,ORD-1003,ORD-1006
//!
//! # Price every order in a catalog file
//! cargo run -p sunline-bulk-order --bin bulk-order -- --catalog ./orders.json --all
//!
//! # Try a different tier table
//! SUNLINE_DISCOUNT_TIERS="3-6:500,6+:900" cargo run -p sunline-bulk-order --bin bulk-order -- --all
//! ```
//!
//! Logs go to stderr, the summary to stdout. Any error exits with status 1.

use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use sunline_bulk_order::commands::selection::select_order;
use sunline_bulk_order::commands::summary::get_order_summary;
use sunline_bulk_order::state::ConfigState;
use sunline_bulk_order::{init_tracing, BulkOrderApp};
use tracing::{error, info};

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "Bulk order failed");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    let mut catalog_path: Option<PathBuf> = None;
    let mut selected: Vec<String> = Vec::new();
    let mut select_all = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" | "-c" => {
                let path = args.get(i + 1).ok_or("--catalog needs a PATH")?;
                catalog_path = Some(PathBuf::from(path));
                i += 1;
            }
            "--select" | "-s" => {
                let ids = args.get(i + 1).ok_or("--select needs a list of order ids")?;
                selected.extend(
                    ids.split(',')
                        .map(str::trim)
                        .filter(|id| !id.is_empty())
                        .map(String::from),
                );
                i += 1;
            }
            "--all" | "-a" => select_all = true,
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => return Err(format!("unknown argument: {other}").into()),
        }
        i += 1;
    }

    let mut config = ConfigState::from_env()?;
    if catalog_path.is_some() {
        config.catalog_path = catalog_path;
    }

    let app = BulkOrderApp::bootstrap(config)?;

    if select_all {
        selected = app.catalog.items().iter().map(|item| item.id.clone()).collect();
    }

    for id in &selected {
        select_order(&app.catalog, &app.selection, &app.config, id)?;
    }
    info!(count = selected.len(), "Orders selected");

    let view = get_order_summary(&app.selection, &app.config);
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}

fn print_help() {
    println!("Sunline Bulk Order Pricing");
    println!();
    println!("Usage: bulk-order [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --catalog <PATH>   Catalog JSON file (default: $SUNLINE_CATALOG_PATH or built-in sample)");
    println!("  -s, --select <IDS>     Comma-separated order ids to select (repeatable)");
    println!("  -a, --all              Select every order in the catalog");
    println!("  -h, --help             Show this help message");
    println!();
    println!("Environment:");
    println!("  SUNLINE_DISCOUNT_TIERS   Tier table, e.g. 5-10:1000,10-15:1200,15-20:1500,20+:2000");
    println!("  SUNLINE_CURRENCY_SYMBOL  Currency symbol for formatted amounts");
    println!("  SUNLINE_FRANCHISE_NAME   Franchise name shown in logs");
    println!("  RUST_LOG                 Log filter (default: info,sunline=debug)");
}
