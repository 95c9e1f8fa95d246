//! Predictor Client — fetches the latest USD quote of a cryptocurrency, projects
//! its next price from the 24h and 7d trends, and prints the result as a table.
//!
//! The symbol is read from stdin (or `--symbol`), the API key from the
//! `CMC_API_KEY` environment variable. While the request is in flight a
//! progress indicator runs on its own thread; it is stopped and joined before
//! anything else is printed.
//!
//! Usage example (CLI):
//! ```bash
//! CMC_API_KEY=... predict_client --symbol btc --seed 42
//! ```
//!
//! Any failure is reported on stderr and the process exits with status 1.
#![warn(missing_docs)]
mod args;
mod spinner;

use crate::args::Args;
use crate::spinner::{FRAME_DELAY, Spinner};
use clap::Parser;
use log::{debug, info, warn};
use predict_common::http::ReqwestHttpClient;
use predict_common::predictor::predict;
use predict_common::symbol::{normalize_symbol, read_symbol};
use predict_common::table::report_table;
use predict_common::{ClientConfig, PredictError, PredictionSubject, QuoteClient, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, IsTerminal, Write};
use std::process;
use std::sync::Arc;

/// Exit status used when the run is interrupted with Ctrl+C.
const INTERRUPTED_EXIT_CODE: i32 = 130;

fn main() {
    init_logger();
    let args = Args::parse();
    install_interrupt_handler();

    let symbol = resolve_symbol(&args).unwrap_or_else(|e| fail("Error reading symbol", e));
    let mut subject = PredictionSubject::new(symbol);
    println!("Processing data for {}...", subject.symbol);

    let mut config = ClientConfig::from_env();
    if let Some(api_url) = &args.api_url {
        config = config.with_endpoint(api_url.as_str());
    }
    let client = QuoteClient::new(config, Arc::new(ReqwestHttpClient::new()));

    info!("Fetching quote for {}", subject.symbol);
    let spinner = if args.no_progress || !io::stdout().is_terminal() {
        Spinner::disabled()
    } else {
        Spinner::start(io::stdout(), FRAME_DELAY)
    };

    let quote = match client.fetch_quote(&subject.symbol) {
        Ok(quote) => quote,
        Err(e) => {
            spinner.stop();
            fail("Error fetching current data", e);
        }
    };
    subject.apply_quote(&quote);

    let prediction = match args.seed {
        Some(seed) => {
            debug!("Using seeded random source: {}", seed);
            predict(&subject, &mut StdRng::seed_from_u64(seed))
        }
        None => predict(&subject, &mut rand::rng()),
    };
    spinner.stop();
    info!("Predicted price for {}: {:.2}", subject.symbol, prediction);

    if let Err(e) = report_table(&subject, prediction).and_then(|table| table.print()) {
        fail("Error displaying results", e);
    }
}

/// Takes the symbol from `--symbol`, or prompts for it on stdin.
fn resolve_symbol(args: &Args) -> Result<String, PredictError> {
    if let Some(symbol) = &args.symbol {
        return Ok(normalize_symbol(symbol));
    }

    let mut stdout = io::stdout();
    write!(stdout, "Enter the cryptocurrency symbol (e.g., BTC, ETH): ")?;
    stdout.flush()?;
    read_symbol(io::stdin().lock())
}

/// Reports `err` on stderr and exits with status 1.
fn fail(context: &str, err: PredictError) -> ! {
    debug!("{}: {:?}", context, err);
    eprintln!("{}: {}", context, err);
    process::exit(1);
}

fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(move || {
        print!("\r");
        let _ = io::stdout().flush();
        warn!("Ctrl+C received. Aborting...");
        process::exit(INTERRUPTED_EXIT_CODE);
    });
    if let Err(e) = installed {
        warn!("Error setting Ctrl+C handler: {}", e);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
