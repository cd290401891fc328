use anyhow::{bail, Context, Result};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use trade_confirmations::analytics::{
    escalation_list, ConfirmationFilter, Department, TradeTypeFilter,
};
use trade_confirmations::config::Config;
use trade_confirmations::core::RngSource;
use trade_confirmations::dashboard::TradeDashboard;
use trade_confirmations::store::{FirestoreStore, MemoryStore, TradeStore};

const USAGE: &str =
    "usage: trade-confirmations [records.json] [--type all|equity|fx] [--desk <department>] [--status <status>]";

#[derive(Debug, Default)]
struct CliArgs {
    path: Option<String>,
    trade_type: TradeTypeFilter,
    desk: Option<Department>,
    status: Option<String>,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--type" => {
                let v = iter.next().context(USAGE)?;
                out.trade_type = TradeTypeFilter::parse(v);
            }
            "--desk" => {
                let v = iter.next().context(USAGE)?;
                match Department::parse(v) {
                    Some(d) => out.desk = Some(d),
                    None => bail!("unknown department {}; {}", v, USAGE),
                }
            }
            "--status" => {
                out.status = Some(iter.next().context(USAGE)?.clone());
            }
            flag if flag.starts_with("--") => bail!("unknown option {}; {}", flag, USAGE),
            path if out.path.is_none() => out.path = Some(path.to_string()),
            _ => bail!(USAGE),
        }
    }
    Ok(out)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    // Optional JSON export of the collection, otherwise Firestore
    let store: Box<dyn TradeStore> = match &cli.path {
        Some(path) => Box::new(MemoryStore::from_json_file(path)?),
        None => Box::new(FirestoreStore::new(&cfg.firestore)),
    };

    let mut dashboard = TradeDashboard::new(store);
    println!("Trade store: {}", dashboard.connection_state().await);

    dashboard.refresh().await;
    if let Some(err) = &dashboard.state().error {
        warn!("{}", err);
        println!("{}", err);
        return Ok(());
    }

    let state = dashboard.state();
    println!(
        "Loaded {} trades ({} equity, {} fx)",
        state.book.len(),
        state.book.equity.len(),
        state.book.fx.len()
    );
    println!();

    dashboard.report(cli.trade_type).print_summary();
    println!();

    let mut confirmation_filter = ConfirmationFilter::new().with_trade_type(cli.trade_type);
    if let Some(status) = &cli.status {
        confirmation_filter = confirmation_filter.with_status(status);
    }
    let confirmations = dashboard.confirmations(&confirmation_filter);
    println!("Confirmations ({}):", confirmations.len());
    for t in &confirmations {
        println!(
            "  {:<12} {:<10} {:<12} {}",
            t.trade_id(),
            t.trade_date(),
            t.status_label(),
            t.counterparty()
        );
    }
    println!();

    let escalated = escalation_list(&state.raw, cli.desk);
    match cli.desk {
        Some(desk) => println!("Escalations for {} ({}):", desk.label(), escalated.len()),
        None => println!("Escalation list ({}):", escalated.len()),
    }
    for r in escalated {
        println!("  {:<12} {:<12} {}", r.trade_id, r.trade_status, r.counterparty);
    }
    println!();

    let broken: Vec<_> = dashboard
        .broken_trades()
        .into_iter()
        .filter(|t| cli.trade_type.matches_trade(t))
        .collect();
    println!("Breaks ({}):", broken.len());
    let mut rng = RngSource::thread();
    for trade in &broken {
        if let Some(reason) = dashboard.break_details(trade.trade_id(), &mut rng) {
            println!("  {:<12} {}", trade.trade_id(), reason);
        }
    }

    Ok(())
}
