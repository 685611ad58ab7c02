//! Command line driver for the AutoParts Manager engine
//!
//! Runs the in-memory inventory ledger from a terminal: print the stock
//! report, validate or apply spreadsheet imports, and write template or
//! export files.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use auto_parts_engine::config::Config;
use auto_parts_engine::export;
use auto_parts_engine::import::{validate_inventory_file_capped, ImportReport};
use auto_parts_engine::ledger::InventoryLedger;
use auto_parts_engine::sample;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apm_cli=debug,auto_parts_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::load()?;

    tracing::info!("Starting AutoParts Manager CLI");
    tracing::info!("Environment: {}", config.environment);

    let mut ledger = InventoryLedger::new();
    ledger.set_default_min_stock_level(config.inventory.default_min_stock_level);
    if config.inventory.seed_sample_data {
        sample::seed(&mut ledger)?;
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("report") => {
            print_report(&ledger, &config);
            Ok(())
        }
        Some("validate") => {
            let path = file_argument(&args)?;
            let report = validate_file(&path, config.import.max_rows)?;
            if args.iter().any(|a| a == "--json") {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_validation(&report);
            }
            Ok(())
        }
        Some("import") => {
            let path = file_argument(&args)?;
            let report = validate_file(&path, config.import.max_rows)?;
            print_validation(&report);
            if report.records.is_empty() {
                println!("Nothing to import");
            } else {
                let summary = ledger.apply_import(&report.records)?;
                println!(
                    "Applied import: {} added, {} updated",
                    summary.added, summary.updated
                );
                print_report(&ledger, &config);
            }
            Ok(())
        }
        Some("template") => {
            let path = output_path(&args, export::template_filename(Utc::now().date_naive()));
            let bytes = export::write_import_template()?;
            std::fs::write(&path, bytes)
                .with_context(|| format!("Could not write {}", path.display()))?;
            println!("Wrote import template to {}", path.display());
            Ok(())
        }
        Some("export") => {
            let path = output_path(&args, export::export_filename(Utc::now().date_naive()));
            let bytes = export::export_inventory(ledger.items())?;
            std::fs::write(&path, bytes)
                .with_context(|| format!("Could not write {}", path.display()))?;
            println!(
                "Exported {} items to {}",
                ledger.items().len(),
                path.display()
            );
            Ok(())
        }
        Some(other) => {
            print_usage();
            anyhow::bail!("Unknown command: {}", other);
        }
    }
}

fn file_argument(args: &[String]) -> anyhow::Result<PathBuf> {
    args.get(1)
        .filter(|a| !a.starts_with("--"))
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("Expected a file path, e.g. apm-cli validate inventory.csv"))
}

fn output_path(args: &[String], default_name: String) -> PathBuf {
    args.get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default_name))
}

fn validate_file(path: &Path, max_rows: usize) -> anyhow::Result<ImportReport> {
    let file =
        File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
    Ok(validate_inventory_file_capped(file, max_rows))
}

fn print_report(ledger: &InventoryLedger, config: &Config) {
    println!();
    println!(
        "Inventory: {} items, stock value {} {}",
        ledger.items().len(),
        ledger.stock_value(),
        config.currency
    );
    for item in ledger.items() {
        println!(
            "  [{:>3}] {:<10} {:<30} stock {:>4}  min {:>3}  {}",
            item.id, item.part_number, item.name, item.stock, item.min_stock_level, item.status
        );
    }

    let alerts = ledger.alerts();
    if alerts.is_empty() {
        println!("No stock alerts");
    } else {
        println!("Stock alerts:");
        for alert in alerts {
            println!(
                "  {:<12} {:<10} {} of {} left",
                alert.severity.to_string(),
                alert.part_number,
                alert.current_stock,
                alert.min_stock_level
            );
        }
    }

    if !ledger.transactions().is_empty() {
        println!("Recent transactions:");
        for transaction in ledger.transactions().iter().take(10) {
            println!(
                "  #{:<4} {:<10} {:<10} qty {:>4} @ {:>10}  {}",
                transaction.id,
                transaction.transaction_type.to_string(),
                transaction.part_number,
                transaction.quantity,
                transaction.unit_price,
                transaction.reference
            );
        }
    }
}

fn print_validation(report: &ImportReport) {
    if report.is_valid {
        println!(
            "File is valid: {} of {} rows ready to import",
            report.valid_rows, report.total_rows
        );
    } else {
        println!(
            "File has problems: {} of {} rows valid, {} errors",
            report.valid_rows,
            report.total_rows,
            report.errors.len()
        );
        for error in &report.errors {
            println!("  {}", error);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: apm-cli [report]");
    eprintln!("       apm-cli validate <file.csv> [--json]");
    eprintln!("       apm-cli import <file.csv>");
    eprintln!("       apm-cli template [path]");
    eprintln!("       apm-cli export [path]");
}
