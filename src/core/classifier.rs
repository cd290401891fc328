use tracing::debug;

use crate::core::normalizer;
use crate::models::raw::{has_value, non_empty};
use crate::models::{EquityTrade, FxTrade, RawTradeRecord, Side, Trade, TradeBook};

const DEFAULT_CURRENCY: &str = "USD";

/// Map a raw document onto exactly one trade shape.
///
/// Venue without a currency pair is equity; a currency pair or FX product
/// type is FX; anything else falls back to FX.
pub fn classify(raw: &RawTradeRecord) -> Trade {
    if raw.is_equity_shaped() {
        Trade::Equity(to_equity(raw))
    } else if raw.is_fx_shaped() {
        Trade::Fx(to_fx(raw))
    } else {
        // Equity-shaped records without a venue end up here too.
        debug!(
            "Trade {} has neither venue nor FX markers, defaulting to FX",
            raw.trade_id
        );
        Trade::Fx(to_fx(raw))
    }
}

/// Classify a batch, keeping input order within each kind.
pub fn classify_all(records: &[RawTradeRecord]) -> TradeBook {
    let mut book = TradeBook::default();
    for raw in records {
        match classify(raw) {
            Trade::Equity(t) => book.equity.push(t),
            Trade::Fx(t) => book.fx.push(t),
        }
    }
    debug!(
        "Classified {} records: {} equity, {} fx",
        records.len(),
        book.equity.len(),
        book.fx.len()
    );
    book
}

fn text(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}

fn to_equity(raw: &RawTradeRecord) -> EquityTrade {
    let currency = non_empty(&raw.dealt_currency)
        .or_else(|| non_empty(&raw.settlement_currency))
        .unwrap_or(DEFAULT_CURRENCY)
        .to_string();

    EquityTrade {
        trade_id: raw.trade_id.clone(),
        order_id: text(&raw.audit_trail_ref),
        client_id: text(&raw.portfolio),
        side: Side::parse_lenient(raw.buy_sell.as_deref()),
        quantity: raw.notional_amount.unwrap_or(0.0),
        price: raw.fx_rate.unwrap_or(0.0),
        trade_value: raw.notional_amount.unwrap_or(0.0),
        currency,
        trade_date: raw.trade_date.clone(),
        settlement_date: text(&raw.settlement_date),
        counterparty: raw.counterparty.clone(),
        venue: text(&raw.execution_venue),
        trader_name: text(&raw.trader_id),
        confirmation_status: normalizer::equity_confirmation_status(&raw.trade_status),
        country: text(&raw.booking_location),
        note: text(&raw.comments),
    }
}

fn to_fx(raw: &RawTradeRecord) -> FxTrade {
    FxTrade {
        trade_id: raw.trade_id.clone(),
        trade_date: raw.trade_date.clone(),
        value_date: text(&raw.value_date),
        trade_time: text(&raw.trade_time),
        trader_id: text(&raw.trader_id),
        counterparty: raw.counterparty.clone(),
        currency_pair: text(&raw.currency_pair),
        side: Side::parse_lenient(raw.buy_sell.as_deref()),
        dealt_currency: text(&raw.dealt_currency),
        base_currency: text(&raw.base_currency),
        term_currency: text(&raw.term_currency),
        trade_status: normalizer::fx_trade_status(&raw.trade_status),
        product_type: normalizer::product_type(raw.product_type.as_deref()),
        maturity_date: has_value(&raw.maturity_date)
            .then(|| text(&raw.maturity_date)),
        confirmation_timestamp: text(&raw.trade_time),
        settlement_date: text(&raw.settlement_date),
        amendment_flag: normalizer::amendment_flag(raw.amendment_flag.as_deref()),
        confirmation_method: normalizer::confirmation_method(raw.settlement_method.as_deref()),
        confirmation_status: normalizer::fx_confirmation_status(&raw.trade_status),
        notional: raw.notional_amount,
    }
}
