//! # Rental Statement Printer
//!
//! Prints the statement for a rental sheet.
//!
//! ## Usage
//! ```bash
//! # Reference run (customer "A", one rental per category), text + HTML
//! rental-statement --format all
//!
//! # Statement for a sheet
//! rental-statement --sheet ./rentals.toml --format html
//!
//! # JSON summary, verbose logs on stderr
//! RUST_LOG=debug rental-statement -s ./rentals.json -f json
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr)
//! 2. Parse arguments
//! 3. Load config (file → env → flags)
//! 4. Load the rental sheet and build the customer
//! 5. Print the requested statements to stdout

mod config;
mod error;
mod sheet;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use rental_core::Customer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, FlagOverrides, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::sheet::RentalSheet;

/// Printed between statements when more than one format is requested.
const STATEMENT_SEPARATOR: &str = "\n\n\n\n";

const HELP: &str = "\
Rental Statement Printer

Usage: rental-statement [OPTIONS]

Options:
  -s, --sheet <PATH>     Rental sheet, TOML or .json (default: built-in reference sheet)
  -f, --format <FORMAT>  text | html | json | all (default: text)
  -c, --config <PATH>    Config file (default: ./rental-statement.toml if present)
  -h, --help             Show this help message

Environment:
  RENTAL_FORMAT, RENTAL_SHEET   override the config file
  RUST_LOG                      log filter (logs go to stderr)";

/// Parsed command-line flags.
#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    sheet: Option<PathBuf>,
    format: Option<OutputFormat>,
    config: Option<PathBuf>,
    help: bool,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> CliResult<Self> {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--sheet" | "-s" => {
                    parsed.sheet = Some(PathBuf::from(value_for(&arg, args.next())?));
                }
                "--format" | "-f" => {
                    parsed.format = Some(value_for(&arg, args.next())?.parse()?);
                }
                "--config" | "-c" => {
                    parsed.config = Some(PathBuf::from(value_for(&arg, args.next())?));
                }
                "--help" | "-h" => parsed.help = true,
                other => {
                    return Err(CliError::InvalidArgument(format!(
                        "unexpected argument '{}'",
                        other
                    )))
                }
            }
        }

        Ok(parsed)
    }
}

fn value_for(flag: &str, value: Option<String>) -> CliResult<String> {
    value.ok_or_else(|| CliError::InvalidArgument(format!("{} requires a value", flag)))
}

fn main() -> ExitCode {
    init_tracing();

    match CliArgs::parse(env::args().skip(1)).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> CliResult<()> {
    if args.help {
        println!("{}", HELP);
        return Ok(());
    }

    let flags = FlagOverrides {
        sheet: args.sheet,
        format: args.format,
    };
    let config = CliConfig::load(args.config.as_deref(), &flags)?;
    info!(format = %config.format, sheet = ?config.sheet, "Configuration loaded");

    let sheet = match &config.sheet {
        Some(path) => RentalSheet::load(path)?,
        None => RentalSheet::reference(),
    };
    let customer = sheet.build()?;
    let output = render_output(&customer, config.format)?;

    info!(
        customer = %customer.name(),
        rentals = customer.rental_count(),
        total = %customer.total_charge(),
        "Statement rendered"
    );

    println!("{}", output);
    Ok(())
}

/// Renders every statement `format` asks for, in order.
fn render_output(customer: &Customer, format: OutputFormat) -> CliResult<String> {
    let outputs = format
        .statement_formats()
        .into_iter()
        .map(|format| customer.render(format))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(outputs.join(STATEMENT_SEPARATOR))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: warnings, plus info for this binary
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,statement_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
