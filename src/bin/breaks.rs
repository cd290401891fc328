use anyhow::{bail, Result};
use tracing_subscriber::{fmt, EnvFilter};

use trade_confirmations::config::Config;
use trade_confirmations::core::{classify_all, synthesize, RandomSource, RngSource};
use trade_confirmations::store::{MemoryStore, TradeStore};

/// Repeatedly synthesize breaks for one trade from a JSON export.
///
/// Usage: breaks <records.json> <trade-id> [count] [seed]
#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let (Some(path), Some(trade_id)) = (args.get(1), args.get(2)) else {
        bail!("usage: breaks <records.json> <trade-id> [count] [seed]");
    };

    let count: usize = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);

    let seed: Option<u64> = args.get(4).and_then(|s| s.parse().ok());

    let store = MemoryStore::from_json_file(path)?;
    let book = classify_all(&store.fetch_all().await?);
    let Some(trade) = book.find(trade_id) else {
        bail!("trade {} not found in {}", trade_id, path);
    };

    println!(
        "{} ({}, {}) with {}",
        trade.trade_id(),
        if trade.is_equity() { "equity" } else { "fx" },
        trade.status_label(),
        trade.counterparty()
    );
    if !trade.is_broken() {
        println!("note: trade is not failed or cancelled");
    }
    println!();

    let mut rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::thread()),
    };

    for i in 1..=count {
        let reason = synthesize(&trade, rng.as_mut());
        let marker = if reason.is_discrepant() { "" } else { "  (no divergence)" };
        println!("  {:>3}. {}{}", i, reason, marker);
    }

    Ok(())
}
