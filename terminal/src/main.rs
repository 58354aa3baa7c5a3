//! RetailX terminal
//!
//! Line-oriented front end to the RetailX assistant:
//! - a numbered menu (the default)
//! - a free-text chat loop with a transcript
//! - JSON export and dataset status commands

mod chat;
mod menu;

#[cfg(test)]
mod test_support;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use retailx_api::adapters::{export_json, verify_export};
use retailx_api::app::{AssistantService, DatasetReport, FrontEnd, Session};
use retailx_api::config::Config;
use retailx_api::domain::entities::DatasetTables;
use retailx_api::domain::StoreCounts;
use retailx_api::render::{render_export_summary, render_load_report};

#[derive(Parser)]
#[command(name = "retailx")]
#[command(about = "RetailX retail assistant", version)]
struct Cli {
    /// Directory containing the dataset files (overrides RETAILX_DATA_DIR)
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Numbered menu of lookups
    Menu,
    /// Free-text conversation
    Chat {
        /// keyword, phrase or auto (overrides RETAILX_FRONT_END)
        #[arg(long)]
        front_end: Option<FrontEnd>,
    },
    /// Write the four tables to a JSON file and read it back
    Export {
        /// Output path (overrides RETAILX_EXPORT_PATH)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show per-dataset load status and record counts
    Status {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout is the conversation
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let session = Session::open(&config).context("failed to load datasets")?;

    let stdin = io::stdin();
    let stdout = io::stdout();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let assistant = AssistantService::from_config(session.store, &config);
            menu::run_menu(&assistant, &mut stdin.lock(), &mut stdout.lock())?;
        }
        Commands::Chat { front_end } => {
            if let Some(front_end) = front_end {
                config.front_end = front_end;
            }
            let assistant = AssistantService::from_config(session.store, &config);
            chat::run_chat(&assistant, &mut stdin.lock(), &mut stdout.lock())?;
        }
        Commands::Export { output } => {
            let path = output.unwrap_or(config.export_path);
            print!("{}", export(&session.data.tables, &path)?);
        }
        Commands::Status { json } => {
            print!(
                "{}",
                status(&session.data.report, session.store.counts(), json)?
            );
        }
    }

    Ok(())
}

/// Write the export, read it back and render the summary
fn export(tables: &DatasetTables, path: &Path) -> Result<String> {
    export_json(tables, path).with_context(|| format!("failed to write {}", path.display()))?;
    let summary =
        verify_export(path).with_context(|| format!("failed to verify {}", path.display()))?;
    tracing::info!(path = %path.display(), counts = ?summary.counts, "Export verified");
    Ok(render_export_summary(&summary))
}

fn status(report: &[DatasetReport], counts: StoreCounts, json: bool) -> Result<String> {
    if json {
        let value = serde_json::json!({ "datasets": report, "counts": counts });
        Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
    } else {
        Ok(render_load_report(report, &counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retailx_api::domain::entities::{CellValue, DatasetKind, Table};
    use retailx_api::domain::ports::LoadStatus;

    #[test]
    fn export_writes_and_summarises() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("retailx_data.json");

        let mut products = Table::new(vec!["Product Name".to_string(), "Price".to_string()]);
        products.push_cells([CellValue::from_text("Kurta"), CellValue::from_text("799")]);
        let tables = DatasetTables {
            products,
            ..DatasetTables::default()
        };

        let summary = export(&tables, &path).unwrap();
        assert!(path.exists());
        assert!(summary.contains("- products: 1 records"), "{}", summary);
        assert!(summary.contains("- orders: 0 records"), "{}", summary);
        assert!(summary.contains("Kurta"), "{}", summary);
    }

    #[test]
    fn status_as_json() {
        let report = vec![DatasetReport {
            kind: DatasetKind::Customers,
            dataset: "customers_indian".to_string(),
            status: LoadStatus::Missing,
        }];
        let counts = StoreCounts {
            products: 0,
            stores: 0,
            customers: 0,
            orders: 0,
        };
        let out = status(&report, counts, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["datasets"][0]["status"], "missing");
        assert_eq!(value["counts"]["customers"], 0);

        let text = status(&report, counts, false).unwrap();
        assert!(text.contains("customers (customers_indian)"));
    }
}
