//! Argument parsing and command dispatch.

use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use saldo_core::{BusinessId, CounterpartyId, Period};
use saldo_ledger::{build_statement, StatementRequest};

use crate::config::CliConfig;
use crate::load::load_records;
use crate::render;

#[derive(Debug, Parser)]
#[command(
    name = "saldo",
    version,
    about = "Counterparty statement reconstruction over CSV exports"
)]
pub struct Cli {
    /// Path to a saldo.toml config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Directory containing the CSV exports.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
    /// Business (tenant) id the exports belong to.
    #[arg(long, global = true)]
    pub business: Option<u64>,
    /// Decimal digits per major currency unit in the export amounts.
    #[arg(long, global = true)]
    pub scale: Option<u32>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reconstruct one counterparty's statement for a period.
    Statement {
        /// Counterparty id to reconstruct.
        #[arg(long)]
        counterparty: u64,
        /// First day of the period (YYYY-MM-DD).
        #[arg(long)]
        from: NaiveDate,
        /// Last day of the period, inclusive.
        #[arg(long)]
        to: NaiveDate,
        /// Emit the full statement as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Normalize every counterparty's history and report bad records.
    Check,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;
    let data_dir = cli.data_dir.unwrap_or(config.data_dir);
    let business = BusinessId(cli.business.unwrap_or(config.business));
    let scale = cli.scale.unwrap_or(config.amount_scale);

    match cli.command {
        Command::Statement {
            counterparty,
            from,
            to,
            json,
        } => {
            let period = Period::new(from, to)?;
            let source = load_records(&data_dir, scale, business)?;
            let request = StatementRequest {
                business,
                counterparty: CounterpartyId(counterparty),
                period,
            };
            let statement = build_statement(&source, request).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&statement)?);
            } else {
                print!("{}", render::statement_table(&statement, scale));
            }
        }
        Command::Check => {
            let source = load_records(&data_dir, scale, business)?;
            let everything = Period::new(NaiveDate::MIN, NaiveDate::MAX)?;
            let mut failures = 0usize;
            for id in source.counterparty_ids(business) {
                let request = StatementRequest {
                    business,
                    counterparty: id,
                    period: everything,
                };
                match build_statement(&source, request).await {
                    Ok(statement) => {
                        info!(counterparty = %id, entries = statement.entries.len(), "history ok");
                    }
                    Err(err) => {
                        failures += 1;
                        error!(counterparty = %id, %err, "invalid history");
                    }
                }
            }
            if failures > 0 {
                bail!("{failures} counterparties failed validation");
            }
            println!("all counterparties clean");
        }
    }
    Ok(())
}
