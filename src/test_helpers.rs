use crate::config::{Config, FirestoreConfig};
use crate::models::{
    ConfirmationMethod, EquityConfirmationStatus, EquityTrade, FxConfirmationStatus, FxTrade,
    FxTradeStatus, ProductType, RawTradeRecord, Side,
};

/// A failed equity trade.
pub fn sample_equity_trade() -> EquityTrade {
    EquityTrade {
        trade_id: "TID00001".to_string(),
        order_id: "OID00001".to_string(),
        client_id: "CID5962".to_string(),
        side: Side::Buy,
        quantity: 942.0,
        price: 721.36,
        trade_value: 679_521.12,
        currency: "USD".to_string(),
        trade_date: "2024-01-24".to_string(),
        settlement_date: "2024-01-26".to_string(),
        counterparty: "Citibank".to_string(),
        venue: "IEX".to_string(),
        trader_name: "Trader A".to_string(),
        confirmation_status: EquityConfirmationStatus::Failed,
        country: "US".to_string(),
        note: "Clean".to_string(),
    }
}

/// A cancelled FX forward with no booked notional.
pub fn sample_fx_trade() -> FxTrade {
    FxTrade {
        trade_id: "FX0001".to_string(),
        trade_date: "2025-05-11".to_string(),
        value_date: "2025-05-16".to_string(),
        trade_time: "14:07:18".to_string(),
        trader_id: "TDR446".to_string(),
        counterparty: "HSBC".to_string(),
        currency_pair: "EUR/USD".to_string(),
        side: Side::Sell,
        dealt_currency: "USD".to_string(),
        base_currency: "EUR".to_string(),
        term_currency: "USD".to_string(),
        trade_status: FxTradeStatus::Cancelled,
        product_type: ProductType::Forward,
        maturity_date: Some("2025-05-16".to_string()),
        confirmation_timestamp: "2025-05-11 13:53".to_string(),
        settlement_date: "2025-05-16".to_string(),
        amendment_flag: false,
        confirmation_method: ConfirmationMethod::Swift,
        confirmation_status: FxConfirmationStatus::Pending,
        notional: None,
    }
}

pub fn raw_equity(trade_id: &str, status: &str, trade_date: &str, venue: &str) -> RawTradeRecord {
    let mut raw = RawTradeRecord::new(trade_id, status, trade_date);
    raw.execution_venue = Some(venue.to_string());
    raw
}

pub fn raw_fx(trade_id: &str, status: &str, trade_date: &str, pair: &str) -> RawTradeRecord {
    let mut raw = RawTradeRecord::new(trade_id, status, trade_date);
    raw.currency_pair = Some(pair.to_string());
    raw
}

/// Mixed book covering every status the workflow views bucket.
pub fn mixed_raw_records() -> Vec<RawTradeRecord> {
    let mut eq1 = raw_equity("EQ001", "Confirmed", "2024-01-15", "NYSE");
    eq1.counterparty = "Goldman Sachs".into();
    eq1.settlement_date = Some("2024-01-17".into());
    eq1.buy_sell = Some("Buy".into());

    let mut eq2 = raw_equity("EQ002", "Pending", "2024-01-16", "NASDAQ");
    eq2.counterparty = "Morgan Stanley".into();
    eq2.settlement_date = Some("2024-01-18".into());
    eq2.buy_sell = Some("Sell".into());

    let mut eq3 = raw_equity("EQ003", "Failed", "2024-01-17", "LSE");
    eq3.counterparty = "TradeBank".into();
    eq3.settlement_date = Some("2024-01-19".into());

    let mut fx1 = raw_fx("FX001", "Settled", "2024-01-15", "EUR/USD");
    fx1.counterparty = "JP Morgan".into();
    fx1.settlement_date = Some("2024-01-17".into());
    fx1.product_type = Some("Spot".into());

    let mut fx2 = raw_fx("FX002", "Booked", "2024-01-16", "GBP/USD");
    fx2.counterparty = "Citibank".into();
    fx2.settlement_date = Some("2024-02-16".into());
    fx2.product_type = Some("Forward".into());
    fx2.buy_sell = Some("Sell".into());
    fx2.maturity_date = Some("2024-02-16".into());

    let mut fx3 = raw_fx("FX003", "Cancelled", "2024-01-18", "USD/JPY");
    fx3.counterparty = "HSBC".into();
    fx3.settlement_date = Some("2024-01-19".into());
    fx3.product_type = Some("Swap".into());

    let mut fx4 = raw_fx("FX004", "Disputed", "2024-01-18", "AUD/USD");
    fx4.counterparty = "Barclays".into();
    fx4.settlement_date = Some("2024-01-22".into());

    vec![fx4, fx2, eq1, fx3, eq3, fx1, eq2]
}

/// A Config with no store credentials.
pub fn default_test_config() -> Config {
    Config {
        firestore: FirestoreConfig {
            api_key: String::new(),
            project_id: String::new(),
            collection: "unified_data".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
        },
        log_level: "debug".to_string(),
    }
}
