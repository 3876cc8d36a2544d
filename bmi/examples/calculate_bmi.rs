use clap::Parser;
use serde_json::Value;
use thiserror::Error;

use bmi::{evaluate, evaluate_report, BmiError};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "BMI CLI - Evaluate a weight (kg) and height (m) into a health category")]
struct Cli {
    /// Weight in kilograms (a JSON literal; quoted strings are rejected)
    #[arg(default_value = "70")]
    weight: String,

    /// Height in meters (a JSON literal; quoted strings are rejected)
    #[arg(default_value = "1.75")]
    height: String,

    /// Print the structured evaluation as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Evaluation(#[from] BmiError),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a command-line token as a JSON value, keeping bare text as a string
fn token_value(token: &str) -> Value {
    serde_json::from_str(token).unwrap_or_else(|_| Value::String(token.to_string()))
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let weight = token_value(&cli.weight);
    let height = token_value(&cli.height);

    if cli.json {
        let report = evaluate_report(&weight, &height)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", evaluate(&weight, &height)?);
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
