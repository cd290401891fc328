use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::analytics::{
    broken_trades, ConfirmationFilter, SummaryStats, TradeTypeFilter, WorkflowReport,
};
use crate::core::{classify_all, synthesize, BreakReason, RandomSource};
use crate::models::{RawTradeRecord, Trade, TradeBook};
use crate::store::{ConnectionState, StoreQuery, TradeStore};

/// What the dashboard currently shows.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub raw: Vec<RawTradeRecord>,
    pub book: TradeBook,
    pub loading: bool,
    /// Display message from the last failed fetch, cleared on the next attempt.
    pub error: Option<String>,
    pub last_loaded: Option<DateTime<Utc>>,
}

/// Loads trades from a store and serves the views built on them.
///
/// A failed fetch leaves the previously loaded data in place. There is no
/// automatic retry; call [`TradeDashboard::refresh`] again.
pub struct TradeDashboard {
    store: Box<dyn TradeStore>,
    state: DashboardState,
}

impl TradeDashboard {
    pub fn new(store: Box<dyn TradeStore>) -> Self {
        Self {
            store,
            state: DashboardState::default(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub async fn connection_state(&self) -> ConnectionState {
        self.store.probe().await
    }

    pub async fn refresh(&mut self) {
        self.begin_load();
        match self.store.fetch_all().await {
            Ok(records) => self.apply(records),
            Err(e) => {
                error!("Error fetching trade data: {}", e);
                self.state.error = Some(format!("Failed to fetch trade data: {}", e));
            }
        }
        self.state.loading = false;
    }

    pub async fn refresh_filtered(&mut self, query: &StoreQuery) {
        self.begin_load();
        match self.store.fetch_filtered(query).await {
            Ok(records) => self.apply(records),
            Err(e) => {
                error!("Error fetching filtered trade data: {}", e);
                self.state.error = Some(format!("Failed to fetch filtered trade data: {}", e));
            }
        }
        self.state.loading = false;
    }

    fn begin_load(&mut self) {
        self.state.loading = true;
        self.state.error = None;
    }

    fn apply(&mut self, records: Vec<RawTradeRecord>) {
        let book = classify_all(&records);
        info!(
            "Trade data loaded: {} total, {} equity, {} fx",
            records.len(),
            book.equity.len(),
            book.fx.len()
        );
        self.state.raw = records;
        self.state.book = book;
        self.state.last_loaded = Some(Utc::now());
    }

    pub fn trades(&self) -> Vec<Trade> {
        self.state.book.all()
    }

    pub fn summary(&self) -> SummaryStats {
        SummaryStats::from_trades(&self.trades())
    }

    pub fn report(&self, trade_type: TradeTypeFilter) -> WorkflowReport {
        WorkflowReport::build(&self.state.book, &self.state.raw, trade_type)
    }

    pub fn confirmations(&self, filter: &ConfirmationFilter) -> Vec<Trade> {
        filter.apply(&self.trades()).into_iter().cloned().collect()
    }

    pub fn broken_trades(&self) -> Vec<Trade> {
        broken_trades(&self.trades()).into_iter().cloned().collect()
    }

    /// Synthesized break for one loaded trade. `None` when the id isn't loaded.
    pub fn break_details<R: RandomSource + ?Sized>(
        &self,
        trade_id: &str,
        rng: &mut R,
    ) -> Option<BreakReason> {
        self.state
            .book
            .find(trade_id)
            .map(|trade| synthesize(&trade, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RngSource, ScriptedSource};
    use crate::store::{MemoryStore, StoreError};
    use crate::test_helpers::mixed_raw_records;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Serves the mixed fixture until told to fail.
    struct FlakyStore {
        failing: Arc<AtomicBool>,
    }

    #[async_trait]
    impl TradeStore for FlakyStore {
        async fn fetch_all(&self) -> Result<Vec<RawTradeRecord>, StoreError> {
            if self.failing.load(Ordering::SeqCst) {
                Err(StoreError::Api {
                    status: 503,
                    body: "unavailable".into(),
                })
            } else {
                Ok(mixed_raw_records())
            }
        }

        async fn fetch_filtered(
            &self,
            _query: &StoreQuery,
        ) -> Result<Vec<RawTradeRecord>, StoreError> {
            Err(StoreError::NotConfigured)
        }

        async fn probe(&self) -> ConnectionState {
            ConnectionState::Connected
        }
    }

    #[tokio::test]
    async fn refresh_loads_and_classifies() {
        let mut dash = TradeDashboard::new(Box::new(MemoryStore::new(mixed_raw_records())));
        dash.refresh().await;

        let state = dash.state();
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.raw.len(), 7);
        assert_eq!(state.book.equity.len(), 3);
        assert_eq!(state.book.fx.len(), 4);
        assert!(state.last_loaded.is_some());
        assert_eq!(dash.summary().completed, 2);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_data() {
        let failing = Arc::new(AtomicBool::new(false));
        let mut dash = TradeDashboard::new(Box::new(FlakyStore {
            failing: failing.clone(),
        }));
        dash.refresh().await;
        assert_eq!(dash.trades().len(), 7);

        failing.store(true, Ordering::SeqCst);
        dash.refresh().await;
        let err = dash.state().error.clone().unwrap();
        assert!(err.starts_with("Failed to fetch trade data"));
        assert!(err.contains("503"));
        assert_eq!(dash.trades().len(), 7);

        failing.store(false, Ordering::SeqCst);
        dash.refresh().await;
        assert!(dash.state().error.is_none());
    }

    #[tokio::test]
    async fn filtered_refresh_error_message() {
        let mut dash = TradeDashboard::new(Box::new(FlakyStore {
            failing: Arc::new(AtomicBool::new(false)),
        }));
        dash.refresh_filtered(&StoreQuery::new()).await;
        assert_eq!(
            dash.state().error.as_deref(),
            Some("Failed to fetch filtered trade data: trade store is not configured")
        );
    }

    #[tokio::test]
    async fn filtered_refresh_replaces_data() {
        let mut dash = TradeDashboard::new(Box::new(MemoryStore::new(mixed_raw_records())));
        dash.refresh_filtered(&StoreQuery::new().with_trade_type(TradeTypeFilter::Equity))
            .await;
        assert_eq!(dash.state().raw.len(), 3);
        assert!(dash.state().book.fx.is_empty());
    }

    #[tokio::test]
    async fn break_details_for_loaded_trade() {
        let mut dash = TradeDashboard::new(Box::new(MemoryStore::new(mixed_raw_records())));
        dash.refresh().await;

        let broken: Vec<String> = dash
            .broken_trades()
            .iter()
            .map(|t| t.trade_id().to_string())
            .collect();
        assert_eq!(broken, vec!["EQ003", "FX003"]);

        // Counterparty field for EQ003
        let mut rng = ScriptedSource::new(&[0.75, 0.0]);
        let reason = dash.break_details("EQ003", &mut rng).unwrap();
        assert_eq!(reason.authoritative_value, "TradeBank");
        assert_eq!(reason.counterparty_value, "Goldman Sachs");

        assert!(dash
            .break_details("NOPE", &mut RngSource::seeded(1))
            .is_none());
    }

    #[tokio::test]
    async fn confirmations_view_filters_loaded_trades() {
        let mut dash = TradeDashboard::new(Box::new(MemoryStore::new(mixed_raw_records())));
        dash.refresh().await;
        let failed = dash.confirmations(&ConfirmationFilter::new().with_status("failed"));
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].trade_id(), "EQ003");
    }
}
