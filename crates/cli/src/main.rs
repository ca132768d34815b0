//! # nftotal-cli
//!
//! Command-line shell for the invoice totals calculator: takes the report
//! files, runs one batch, and prints the two totals.

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use nftotal_core::{calculate_totals, format_brl, Totals};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// nftotal - issued/received invoice totals from RelatorioNotas reports
#[derive(Parser)]
#[command(name = "nftotal")]
#[command(author, version, about = "Invoice totals calculator", long_about = None)]
struct Cli {
    /// Report files, classified by filename: 'emitida' marks the issued
    /// report, 'recebida' the received one, 'nfc' the consumer receipts
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Issued invoices report (NF Emitidas, .xlsx or .xls)
    #[arg(long = "emitidas", value_name = "FILE")]
    emitidas: Option<PathBuf>,

    /// Received invoices report (NF Recebidas, .xlsx or .xls)
    #[arg(long = "recebidas", value_name = "FILE")]
    recebidas: Option<PathBuf>,

    /// Issued consumer receipts report (NFC Emitidas)
    #[arg(long = "nfc", value_name = "FILE")]
    nfc: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'f', long = "format", default_value = "text")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for results.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable currency output (default)
    #[default]
    Text,
    /// JSON output
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            print_hints();
            ExitCode::FAILURE
        }
    }
}

/// The three report slots of one batch, after flag and filename
/// classification.
#[derive(Debug, PartialEq)]
struct ReportSet {
    emitidas: Option<PathBuf>,
    recebidas: Option<PathBuf>,
    nfc: Option<PathBuf>,
}

impl ReportSet {
    /// Resolve the report slots from explicit flags and positional files.
    ///
    /// Positional files are classified by their (lower-cased) filename:
    /// 'emitida' marks the issued report unless the name also contains
    /// 'nfc', 'recebida' the received report, 'nfc' the consumer
    /// receipts. At least one of the issued/received slots must end up
    /// filled; the aggregator treats the other as empty.
    fn from_cli(cli: &Cli) -> Result<ReportSet> {
        let mut set = ReportSet {
            emitidas: cli.emitidas.clone(),
            recebidas: cli.recebidas.clone(),
            nfc: cli.nfc.clone(),
        };

        for file in &cli.files {
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().to_lowercase())
                .unwrap_or_default();

            let slot = if name.contains("emitida") && !name.contains("nfc") {
                &mut set.emitidas
            } else if name.contains("recebida") {
                &mut set.recebidas
            } else if name.contains("nfc") {
                &mut set.nfc
            } else {
                bail!(
                    "Cannot classify '{}'; name it with 'emitida', 'recebida' or 'nfc', \
                     or pass it via --emitidas/--recebidas/--nfc",
                    file.display()
                );
            };

            if let Some(taken) = slot {
                bail!(
                    "'{}' and '{}' both classify as the same report type",
                    taken.display(),
                    file.display()
                );
            }
            *slot = Some(file.clone());
        }

        if set.emitidas.is_none() && set.recebidas.is_none() {
            bail!("Provide at least one invoice report (NF Emitidas or NF Recebidas)");
        }

        Ok(set)
    }
}

/// Run one batch calculation and print the result.
fn run(cli: &Cli) -> Result<()> {
    let reports = ReportSet::from_cli(cli)?;
    let totals = calculate_totals(
        reports.emitidas.as_ref(),
        reports.recebidas.as_ref(),
        reports.nfc.as_ref(),
    )
    .context("Batch calculation aborted")?;

    print_totals(&totals, cli.format)
}

/// Print the totals in the selected format.
fn print_totals(totals: &Totals, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!(
                "{} {}",
                "Total NF Emitidas (com devolucoes e NFC):".cyan().bold(),
                format_brl(totals.total_issued)
            );
            println!(
                "{} {}",
                "Total NF Recebidas (com devolucoes):".cyan().bold(),
                format_brl(totals.total_received)
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(totals)?);
        }
    }
    Ok(())
}

/// Generic remediation hints for load failures.
fn print_hints() {
    eprintln!("Check that:");
    eprintln!("  - the file is a valid .xlsx or .xls report");
    eprintln!("  - it contains a worksheet named 'RelatorioNotas'");
    eprintln!("  - the worksheet has the columns 'Valor N.F.', 'Situacao' and 'Operacao'");
}
