//! # emi: Loan EMI Calculator CLI
//!
//! The rendering collaborator for emi-core. All calculation lives in the
//! core crate; this binary only parses flags, calls the two core entry
//! points, and presents what comes back.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  emi --amount "₹1,00,000" --rate 10 --tenure 1 --unit year             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Initialize tracing (RUST_LOG overrides, default: warn)             │
//! │  2. LoanInput::from_raw  ── normalize + validate all three fields      │
//! │  3. input.compute()      ── the EMI engine                             │
//! │  4. Render:                                                             │
//! │     • default: result panel with rounded, grouped amounts              │
//! │     • --json:  the EmiBreakdown payload, camelCase, unrounded          │
//! │  5. On error: {code, message} to stderr (JSON with --json), exit 1     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Raw flag values go to the core as-is: currency symbols and grouping
//! commas are the normalizer's job, not clap's.

mod error;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use emi_core::format::{format_inr, format_percent};
use emi_core::{EmiBreakdown, LoanInput, TenureUnit};
use error::CliError;

#[derive(Parser, Debug)]
#[command(name = "emi", version, about = "Loan EMI calculator")]
struct Cli {
    /// Loan amount in rupees; currency symbols and grouping commas are fine
    #[arg(long, short = 'a')]
    amount: String,

    /// Annual interest rate in percent (0.1 to 50)
    #[arg(long, short = 'r')]
    rate: String,

    /// Loan tenure, interpreted per --unit
    #[arg(long, short = 't')]
    tenure: String,

    /// Unit of the tenure value
    #[arg(long, short = 'u', value_enum, default_value = "year")]
    unit: UnitArg,

    /// Emit the raw result payload as JSON instead of the panel
    #[arg(long)]
    json: bool,
}

/// Tenure unit as a CLI flag value.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum UnitArg {
    Year,
    Month,
}

impl From<UnitArg> for TenureUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Year => TenureUnit::Year,
            UnitArg::Month => TenureUnit::Month,
        }
    }
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        if cli.json {
            // Scripts parsing --json output get errors in the same shape
            match serde_json::to_string(&err) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("error[{}]: {}", err.code, err.message),
            }
        } else {
            eprintln!("error[{}]: {}", err.code, err.message);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let input = LoanInput::from_raw(&cli.amount, &cli.rate, &cli.tenure, cli.unit.into())?;
    debug!(?input, "input normalized");

    let breakdown = input.compute()?;
    debug!(
        emi = breakdown.emi,
        total_payment = breakdown.total_payment,
        "EMI calculated"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        render_panel(&input, &breakdown);
    }
    Ok(())
}

/// Prints the human-readable result panel.
///
/// Amounts are rounded to whole rupees HERE, at render time; the breakdown
/// itself stays exact.
fn render_panel(input: &LoanInput, breakdown: &EmiBreakdown) {
    let line = "─".repeat(34);
    println!("  Loan EMI");
    println!("  {line}");
    println!("  {:<18}{:>14}", "Principal", format_inr(input.principal));
    println!(
        "  {:<18}{:>14}",
        "Interest rate",
        format_percent(input.annual_rate_percent)
    );
    println!(
        "  {:<18}{:>14}",
        "Tenure",
        format!("{} months", input.tenure_months())
    );
    println!("  {line}");
    println!("  {:<18}{:>14}", "Monthly EMI", format_inr(breakdown.emi));
    println!(
        "  {:<18}{:>14}",
        "Total interest",
        format_inr(breakdown.total_interest)
    );
    println!(
        "  {:<18}{:>14}",
        "Total payment",
        format_inr(breakdown.total_payment)
    );
}

/// Initializes tracing with an env-filter.
///
/// Default is quiet (`warn`); `RUST_LOG=emi_cli=debug,emi_core=debug` turns
/// on the per-step logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
