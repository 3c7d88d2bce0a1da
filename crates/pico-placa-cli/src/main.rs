//! `picoplaca` CLI — check whether a vehicle may circulate under Pico y Placa.
//!
//! ## Usage
//!
//! ```sh
//! # Check a plate at a given date and time
//! picoplaca --plate ABC-121 --date 2023-10-02 --time 08:00
//!
//! # Date and time default to today / now in Quito
//! picoplaca -p PBX-1234
//!
//! # Use a custom JSON rule table instead of the built-in Quito rules
//! picoplaca -p ABC-124 -d 2023-10-07 -t 10:30 --rules weekend.json
//!
//! # Machine-readable output
//! picoplaca -p ABC-121 -d 2023-10-02 -t 08:00 --json
//!
//! # Log rule evaluation to stderr
//! picoplaca -p ABC-121 -d 2023-10-02 -t 08:00 --verbose
//! ```
//!
//! Validation failures print `Error: <message>` on stdout and exit with
//! status 1.

use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::Tz;
use clap::Parser;
use pico_placa::error::Result as PredictResult;
use pico_placa::policy::{self, RuleTable};
use pico_placa::{output, Prediction, Predictor, RuleSet};
use std::process;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "picoplaca",
    version,
    about = "Check if a vehicle is restricted from circulation according to Pico y Placa rules"
)]
struct Cli {
    /// The license plate number in format XXX-### or XXX-####
    #[arg(short, long)]
    plate: String,

    /// Date to check, YYYY-MM-DD (defaults to today in --timezone)
    #[arg(short, long)]
    date: Option<String>,

    /// Time to check, HH:MM (defaults to now in --timezone)
    #[arg(short, long)]
    time: Option<String>,

    /// JSON rule table to use instead of the built-in Quito rules
    #[arg(long)]
    rules: Option<String>,

    /// IANA timezone used to compute the date/time defaults
    #[arg(long, default_value = policy::DEFAULT_TIMEZONE)]
    timezone: String,

    /// Print the prediction as JSON
    #[arg(long)]
    json: bool,

    /// Log rule registration and evaluation to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let tz: Tz = cli
        .timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("Unknown timezone: '{}'", cli.timezone))?;
    let now = Utc::now().with_timezone(&tz);
    let date = cli
        .date
        .unwrap_or_else(|| now.format("%Y-%m-%d").to_string());
    let time = cli.time.unwrap_or_else(|| now.format("%H:%M").to_string());

    let rules = load_rules(cli.rules.as_deref())?;
    let predictor = Predictor::new(&rules);
    let outcome = predictor.predict(&cli.plate, &date, &time);

    if cli.json {
        println!("{}", render_json(&outcome)?);
    } else {
        println!("{}", output::render(&outcome));
    }

    if outcome.is_err() {
        process::exit(1);
    }
    Ok(())
}

/// Install a stderr subscriber. `--verbose` forces `debug`; otherwise
/// `RUST_LOG` is honored, falling back to `warn`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build the rule set from `--rules`, or the Quito table when omitted.
fn load_rules(path: Option<&str>) -> Result<RuleSet> {
    let Some(path) = path else {
        let rules = policy::quito_default();
        info!(rules = rules.len(), "using built-in Quito rule table");
        return Ok(rules);
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rule table: {}", path))?;
    let rules = RuleTable::from_json(&json)
        .and_then(RuleTable::into_rule_set)
        .with_context(|| format!("Invalid rule table: {}", path))?;

    if rules.is_empty() {
        warn!(path, "rule table defines no rules");
    }
    info!(rules = rules.len(), path, "loaded rule table");
    Ok(rules)
}

fn render_json(outcome: &PredictResult<Prediction>) -> Result<String> {
    let value = match outcome {
        Ok(prediction) => serde_json::to_value(prediction)?,
        Err(err) => serde_json::json!({ "error": err.to_string() }),
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
