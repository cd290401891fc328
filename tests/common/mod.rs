use std::path::PathBuf;

use trade_confirmations::models::RawTradeRecord;

/// The JSON export shipped under `data/`.
pub fn sample_records_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample_trades.json")
}

/// A raw record with an execution venue and no currency pair.
pub fn equity_record(trade_id: &str, status: &str, trade_date: &str) -> RawTradeRecord {
    let mut raw = RawTradeRecord::new(trade_id, status, trade_date);
    raw.execution_venue = Some("NYSE".to_string());
    raw.counterparty = "Goldman Sachs".to_string();
    raw.settlement_date = Some(trade_date.to_string());
    raw
}

/// A raw record with a currency pair and product type.
pub fn fx_record(trade_id: &str, status: &str, trade_date: &str, product: &str) -> RawTradeRecord {
    let mut raw = RawTradeRecord::new(trade_id, status, trade_date);
    raw.currency_pair = Some("EUR/USD".to_string());
    raw.product_type = Some(product.to_string());
    raw.counterparty = "HSBC".to_string();
    raw.settlement_date = Some(trade_date.to_string());
    raw
}
