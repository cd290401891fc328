use serde::{Deserialize, Serialize};

use super::status::{
    ConfirmationMethod, EquityConfirmationStatus, FxConfirmationStatus, FxTradeStatus,
    ProductType, Side,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityTrade {
    pub trade_id: String,
    pub order_id: String,
    pub client_id: String,
    pub side: Side,
    pub quantity: f64,
    pub price: f64,
    pub trade_value: f64,
    pub currency: String,
    pub trade_date: String,
    pub settlement_date: String,
    pub counterparty: String,
    pub venue: String,
    pub trader_name: String,
    pub confirmation_status: EquityConfirmationStatus,
    pub country: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxTrade {
    pub trade_id: String,
    pub trade_date: String,
    pub value_date: String,
    pub trade_time: String,
    pub trader_id: String,
    pub counterparty: String,
    pub currency_pair: String,
    pub side: Side,
    pub dealt_currency: String,
    pub base_currency: String,
    pub term_currency: String,
    pub trade_status: FxTradeStatus,
    pub product_type: ProductType,
    #[serde(default)]
    pub maturity_date: Option<String>,
    pub confirmation_timestamp: String,
    pub settlement_date: String,
    pub amendment_flag: bool,
    pub confirmation_method: ConfirmationMethod,
    pub confirmation_status: FxConfirmationStatus,
    #[serde(default)]
    pub notional: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Trade {
    Equity(EquityTrade),
    Fx(FxTrade),
}

impl Trade {
    pub fn trade_id(&self) -> &str {
        match self {
            Trade::Equity(t) => &t.trade_id,
            Trade::Fx(t) => &t.trade_id,
        }
    }

    pub fn counterparty(&self) -> &str {
        match self {
            Trade::Equity(t) => &t.counterparty,
            Trade::Fx(t) => &t.counterparty,
        }
    }

    pub fn trade_date(&self) -> &str {
        match self {
            Trade::Equity(t) => &t.trade_date,
            Trade::Fx(t) => &t.trade_date,
        }
    }

    pub fn settlement_date(&self) -> &str {
        match self {
            Trade::Equity(t) => &t.settlement_date,
            Trade::Fx(t) => &t.settlement_date,
        }
    }

    pub fn side(&self) -> Side {
        match self {
            Trade::Equity(t) => t.side,
            Trade::Fx(t) => t.side,
        }
    }

    /// Confirmation status for equities, trade status for FX.
    pub fn status_label(&self) -> &'static str {
        match self {
            Trade::Equity(t) => t.confirmation_status.as_str(),
            Trade::Fx(t) => t.trade_status.as_str(),
        }
    }

    /// Failed equities and cancelled FX trades carry a break.
    pub fn is_broken(&self) -> bool {
        match self {
            Trade::Equity(t) => t.confirmation_status == EquityConfirmationStatus::Failed,
            Trade::Fx(t) => t.trade_status == FxTradeStatus::Cancelled,
        }
    }

    pub fn is_equity(&self) -> bool {
        matches!(self, Trade::Equity(_))
    }
}

impl From<EquityTrade> for Trade {
    fn from(t: EquityTrade) -> Self {
        Trade::Equity(t)
    }
}

impl From<FxTrade> for Trade {
    fn from(t: FxTrade) -> Self {
        Trade::Fx(t)
    }
}

/// Classified trades, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeBook {
    pub equity: Vec<EquityTrade>,
    pub fx: Vec<FxTrade>,
}

impl TradeBook {
    pub fn len(&self) -> usize {
        self.equity.len() + self.fx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equity.is_empty() && self.fx.is_empty()
    }

    /// Equities first, then FX, the order the dashboard lists them in.
    pub fn all(&self) -> Vec<Trade> {
        self.equity
            .iter()
            .cloned()
            .map(Trade::Equity)
            .chain(self.fx.iter().cloned().map(Trade::Fx))
            .collect()
    }

    pub fn find(&self, trade_id: &str) -> Option<Trade> {
        self.equity
            .iter()
            .find(|t| t.trade_id == trade_id)
            .cloned()
            .map(Trade::Equity)
            .or_else(|| {
                self.fx
                    .iter()
                    .find(|t| t.trade_id == trade_id)
                    .cloned()
                    .map(Trade::Fx)
            })
    }
}
