use serde::{Deserialize, Serialize};

use crate::models::{RawTradeRecord, Trade};

const ALL: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeTypeFilter {
    #[default]
    All,
    Equity,
    Fx,
}

impl TradeTypeFilter {
    /// `equity` / `fx`, anything else is `All`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "equity" => TradeTypeFilter::Equity,
            "fx" => TradeTypeFilter::Fx,
            _ => TradeTypeFilter::All,
        }
    }

    /// On raw records the equity and FX shapes are checked independently, so
    /// a record with neither venue nor FX markers matches only `All`.
    pub fn matches_raw(&self, raw: &RawTradeRecord) -> bool {
        match self {
            TradeTypeFilter::All => true,
            TradeTypeFilter::Equity => raw.is_equity_shaped(),
            TradeTypeFilter::Fx => raw.is_fx_shaped(),
        }
    }

    pub fn matches_trade(&self, trade: &Trade) -> bool {
        match self {
            TradeTypeFilter::All => true,
            TradeTypeFilter::Equity => trade.is_equity(),
            TradeTypeFilter::Fx => !trade.is_equity(),
        }
    }

    pub fn apply_raw<'a>(&self, records: &'a [RawTradeRecord]) -> Vec<&'a RawTradeRecord> {
        records.iter().filter(|r| self.matches_raw(r)).collect()
    }
}

/// `None`, empty and `all` mean no constraint.
pub(crate) fn constraint(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
}

/// Filters for the confirmations list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationFilter {
    pub search: String,
    pub status: Option<String>,
    pub trade_type: TradeTypeFilter,
    pub counterparty: Option<String>,
    pub trade_date: Option<String>,
}

impl ConfirmationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: &str) -> Self {
        self.search = term.to_string();
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn with_trade_type(mut self, trade_type: TradeTypeFilter) -> Self {
        self.trade_type = trade_type;
        self
    }

    pub fn with_counterparty(mut self, counterparty: &str) -> Self {
        self.counterparty = Some(counterparty.to_string());
        self
    }

    pub fn with_trade_date(mut self, date: &str) -> Self {
        self.trade_date = Some(date.to_string());
        self
    }

    pub fn matches(&self, trade: &Trade) -> bool {
        let search = self.search.to_lowercase();
        let search_ok = search.is_empty()
            || trade.trade_id().to_lowercase().contains(&search)
            || trade.counterparty().to_lowercase().contains(&search);

        let status_ok = constraint(self.status.as_deref())
            .map_or(true, |s| trade.status_label().eq_ignore_ascii_case(s));

        let counterparty_ok = constraint(self.counterparty.as_deref()).map_or(true, |c| {
            trade
                .counterparty()
                .to_lowercase()
                .contains(&c.to_lowercase())
        });

        let date_ok = self
            .trade_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map_or(true, |d| trade.trade_date() == d);

        search_ok && status_ok && self.trade_type.matches_trade(trade) && counterparty_ok && date_ok
    }

    pub fn apply<'a>(&self, trades: &'a [Trade]) -> Vec<&'a Trade> {
        trades.iter().filter(|t| self.matches(t)).collect()
    }
}
