use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Product type values that mark a record as FX even without a currency pair.
pub const FX_PRODUCT_TYPES: &[&str] = &["FX", "Spot", "Forward", "Swap"];

/// A document from the `unified_data` collection.
///
/// Only the document id, `TradeID`, `TradeStatus` and `TradeDate` are
/// guaranteed. Fields this crate doesn't model are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTradeRecord {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "TradeID", deserialize_with = "lenient_string")]
    pub trade_id: String,
    #[serde(rename = "TradeStatus", deserialize_with = "lenient_string")]
    pub trade_status: String,
    #[serde(rename = "TradeDate", deserialize_with = "lenient_string")]
    pub trade_date: String,
    #[serde(rename = "Counterparty", default, deserialize_with = "lenient_string")]
    pub counterparty: String,

    #[serde(
        rename = "CurrencyPair",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub currency_pair: Option<String>,
    #[serde(
        rename = "ProductType",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub product_type: Option<String>,
    #[serde(
        rename = "ExecutionVenue",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub execution_venue: Option<String>,

    #[serde(
        rename = "SettlementDate",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub settlement_date: Option<String>,
    #[serde(
        rename = "ValueDate",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub value_date: Option<String>,
    #[serde(
        rename = "MaturityDate",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub maturity_date: Option<String>,
    #[serde(
        rename = "TradeTime",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub trade_time: Option<String>,

    #[serde(
        rename = "DealtCurrency",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub dealt_currency: Option<String>,
    #[serde(
        rename = "SettlementCurrency",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub settlement_currency: Option<String>,
    #[serde(
        rename = "BaseCurrency",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_currency: Option<String>,
    #[serde(
        rename = "TermCurrency",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub term_currency: Option<String>,

    #[serde(
        rename = "BuySell",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub buy_sell: Option<String>,
    #[serde(
        rename = "TraderID",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub trader_id: Option<String>,
    #[serde(
        rename = "AuditTrailRef",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub audit_trail_ref: Option<String>,
    #[serde(
        rename = "Portfolio",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub portfolio: Option<String>,
    #[serde(
        rename = "BookingLocation",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub booking_location: Option<String>,
    #[serde(
        rename = "comments",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub comments: Option<String>,
    #[serde(
        rename = "AmendmentFlag",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub amendment_flag: Option<String>,
    #[serde(
        rename = "SettlementMethod",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub settlement_method: Option<String>,

    #[serde(
        rename = "NotionalAmount",
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub notional_amount: Option<f64>,
    #[serde(
        rename = "FXRate",
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub fx_rate: Option<f64>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RawTradeRecord {
    pub fn new(trade_id: &str, trade_status: &str, trade_date: &str) -> Self {
        Self {
            id: trade_id.to_string(),
            trade_id: trade_id.to_string(),
            trade_status: trade_status.to_string(),
            trade_date: trade_date.to_string(),
            ..Default::default()
        }
    }

    pub fn has_execution_venue(&self) -> bool {
        has_value(&self.execution_venue)
    }

    pub fn has_currency_pair(&self) -> bool {
        has_value(&self.currency_pair)
    }

    /// Venue present and no currency pair.
    pub fn is_equity_shaped(&self) -> bool {
        self.has_execution_venue() && !self.has_currency_pair()
    }

    /// Currency pair present, or an FX product type (exact match).
    pub fn is_fx_shaped(&self) -> bool {
        self.has_currency_pair()
            || self
                .product_type
                .as_deref()
                .is_some_and(|p| FX_PRODUCT_TYPES.contains(&p))
    }
}

/// Non-empty string value.
pub fn has_value(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}

/// Empty strings are treated as absent.
pub fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Scalar text. Numbers and booleans are stringified; null and nested values
/// are absent.
fn text_of(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(text_of))
}

/// Like [`lenient_text`] for fields that are always present; null reads as "".
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_of(value).unwrap_or_default())
}

/// Numbers may arrive as JSON numbers or as numeric strings.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    })
}
