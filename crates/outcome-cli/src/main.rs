//! Outcome CLI
//!
//! Converts integer literals to hexadecimal, chaining each conversion through
//! an [`Outcome`]: parse, optionally fall back to a default, then format.
//!
//! # Usage
//!
//! ```bash
//! outcome-cli 42 0b101 oops --fallback 255
//! ```

use std::num::ParseIntError;
use std::process::ExitCode;

use clap::Parser;
use outcome::Outcome;
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "outcome-cli")]
#[command(about = "Convert integer literals to hexadecimal")]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Literal to convert in place of any input that fails to parse
    #[arg(long)]
    fallback: Option<String>,

    /// Stop at the first input that cannot be converted
    #[arg(long)]
    strict: bool,

    /// Integer literals (decimal, or prefixed with 0x, 0o or 0b)
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum CliError {
    #[error("invalid integer `{input}`: {source}")]
    Parse {
        input: String,
        source: ParseIntError,
    },

    #[error("sign must precede the radix prefix in `{0}`")]
    MisplacedSign(String),

    #[error("negative value {0} has no hexadecimal form")]
    Negative(i64),
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        "outcome_cli=trace,outcome=trace"
    } else {
        "outcome_cli=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Aborting: {}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    info!("Converting {} value(s)", args.values.len());

    for input in &args.values {
        let outcome = convert(input, args.fallback.as_deref());

        if args.strict {
            let hex = outcome.get_or_fail()?;
            println!("{}\t{}", input, hex);
        } else {
            let line = outcome.fold(
                |hex| hex,
                |cause| {
                    warn!("Could not convert '{}': {}", input, cause);
                    format!("error: {}", cause)
                },
            );
            println!("{}\t{}", input, line);
        }
    }

    Ok(())
}

/// Parses `input`, falls back to `fallback` if parsing fails, and formats the
/// result as lowercase hexadecimal.
fn convert(input: &str, fallback: Option<&str>) -> Outcome<String, CliError> {
    let parsed = Outcome::run(|| parse_integer(input));

    let parsed = match fallback {
        Some(fallback) => parsed.get_or_else_try(|| {
            debug!("Trying fallback '{}' for '{}'", fallback, input);
            parse_integer(fallback)
        }),
        None => parsed,
    };

    parsed.map(to_hex)
}

/// Parses an optionally signed literal. The sign goes before the radix
/// prefix (`-0x2a`); a sign after the prefix (`0x-2a`) is rejected.
fn parse_integer(input: &str) -> Result<i64, CliError> {
    let trimmed = input.trim();
    let (sign, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
        ("-", rest)
    } else {
        ("", trimmed.strip_prefix('+').unwrap_or(trimmed))
    };

    let (digits, radix) = if let Some(rest) = unsigned.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = unsigned.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = unsigned.strip_prefix("0b") {
        (rest, 2)
    } else {
        (unsigned, 10)
    };

    if digits.starts_with(['+', '-']) {
        return Err(CliError::MisplacedSign(input.to_string()));
    }

    i64::from_str_radix(&format!("{}{}", sign, digits), radix).map_err(|source| {
        CliError::Parse {
            input: input.to_string(),
            source,
        }
    })
}

fn to_hex(value: i64) -> Result<String, CliError> {
    if value < 0 {
        Err(CliError::Negative(value))
    } else {
        Ok(format!("{:x}", value))
    }
}
