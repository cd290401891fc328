pub mod error;
pub mod firestore;
pub mod memory;

pub use error::StoreError;
pub use firestore::FirestoreStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analytics::filters::{constraint, TradeTypeFilter};
use crate::models::RawTradeRecord;

/// Exact-match filters pushed to the store, plus the trade-type filter
/// applied after the fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreQuery {
    pub status: Option<String>,
    pub counterparty: Option<String>,
    pub trade_date: Option<String>,
    pub trade_type: TradeTypeFilter,
}

impl StoreQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
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

    pub fn with_trade_type(mut self, trade_type: TradeTypeFilter) -> Self {
        self.trade_type = trade_type;
        self
    }

    /// `(field, value)` pairs for the store, skipping `all` and empty values.
    pub fn field_filters(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        if let Some(s) = constraint(self.status.as_deref()) {
            out.push(("TradeStatus", s));
        }
        if let Some(c) = constraint(self.counterparty.as_deref()) {
            out.push(("Counterparty", c));
        }
        if let Some(d) = self.trade_date.as_deref().filter(|d| !d.is_empty()) {
            out.push(("TradeDate", d));
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    Unconfigured,
    Connected,
    Unreachable(String),
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionState::Unconfigured => write!(f, "Not Configured"),
            ConnectionState::Connected => write!(f, "Connected"),
            ConnectionState::Unreachable(reason) => write!(f, "Unreachable ({})", reason),
        }
    }
}

/// Read-only access to the trade collection, newest trade date first.
#[async_trait]
pub trait TradeStore: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<RawTradeRecord>, StoreError>;

    async fn fetch_filtered(&self, query: &StoreQuery) -> Result<Vec<RawTradeRecord>, StoreError>;

    async fn probe(&self) -> ConnectionState;

    async fn fetch_fx_only(&self) -> Result<Vec<RawTradeRecord>, StoreError> {
        let all = self.fetch_all().await?;
        let total = all.len();
        let fx: Vec<RawTradeRecord> = all.into_iter().filter(|r| r.is_fx_shaped()).collect();
        tracing::debug!("FX trades found: {} out of {} total", fx.len(), total);
        Ok(fx)
    }
}
