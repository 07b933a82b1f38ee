//! Deals a single hold'em hand and prints its category.
//!
//! Set `RUST_LOG=debug` to follow the deal.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use holdem_deal::{Table, TableOptions};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "holdem_deal=info".into()),
        )
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let table = Table::new(TableOptions::default(), seed);

    let result = match table.play_round() {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Round aborted: {err}");
            return ExitCode::FAILURE;
        }
    };

    for card in &result.in_play {
        print!("| {card} ");
    }
    println!();
    println!("{}", result.rank);

    ExitCode::SUCCESS
}
