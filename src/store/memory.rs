use async_trait::async_trait;
use std::path::Path;
use tracing::info;

use crate::models::RawTradeRecord;
use crate::store::{ConnectionState, StoreError, StoreQuery, TradeStore};

/// A store over records held in memory, typically loaded from a JSON export
/// of the collection. Applies the same ordering and filters as the remote
/// store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<RawTradeRecord>,
}

impl MemoryStore {
    pub fn new(records: Vec<RawTradeRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of documents. Records without an `id` get their
    /// TradeID as id.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let mut records: Vec<RawTradeRecord> = serde_json::from_str(json)?;
        for r in records.iter_mut().filter(|r| r.id.is_empty()) {
            r.id = r.trade_id.clone();
        }
        Ok(Self::new(records))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let store = Self::from_json_str(&content)?;
        info!("Loaded {} trade records from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn ordered(&self) -> Vec<RawTradeRecord> {
        let mut out = self.records.clone();
        // ISO dates sort lexicographically
        out.sort_by(|a, b| b.trade_date.cmp(&a.trade_date));
        out
    }
}

fn field_value<'a>(record: &'a RawTradeRecord, field: &str) -> &'a str {
    match field {
        "TradeStatus" => &record.trade_status,
        "Counterparty" => &record.counterparty,
        "TradeDate" => &record.trade_date,
        _ => "",
    }
}

#[async_trait]
impl TradeStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<RawTradeRecord>, StoreError> {
        Ok(self.ordered())
    }

    async fn fetch_filtered(&self, query: &StoreQuery) -> Result<Vec<RawTradeRecord>, StoreError> {
        let filters = query.field_filters();
        Ok(self
            .ordered()
            .into_iter()
            .filter(|r| filters.iter().all(|(f, v)| field_value(r, f) == *v))
            .filter(|r| query.trade_type.matches_raw(r))
            .collect())
    }

    async fn probe(&self) -> ConnectionState {
        ConnectionState::Connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::TradeTypeFilter;
    use crate::test_helpers::mixed_raw_records;

    fn ids(records: &[RawTradeRecord]) -> Vec<&str> {
        records.iter().map(|r| r.trade_id.as_str()).collect()
    }

    #[tokio::test]
    async fn fetch_all_orders_by_trade_date_descending() {
        let store = MemoryStore::new(mixed_raw_records());
        let records = store.fetch_all().await.unwrap();
        let dates: Vec<&str> = records.iter().map(|r| r.trade_date.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
        assert_eq!(records[0].trade_date, "2024-01-18");
    }

    #[tokio::test]
    async fn exact_match_filters() {
        let store = MemoryStore::new(mixed_raw_records());

        let booked = store
            .fetch_filtered(&StoreQuery::new().with_status("Booked"))
            .await
            .unwrap();
        assert_eq!(ids(&booked), vec!["FX002"]);

        // exact match, unlike the in-memory confirmation filter
        let lower = store
            .fetch_filtered(&StoreQuery::new().with_status("booked"))
            .await
            .unwrap();
        assert!(lower.is_empty());

        let dated = store
            .fetch_filtered(
                &StoreQuery::new()
                    .with_trade_date("2024-01-16")
                    .with_trade_type(TradeTypeFilter::Equity),
            )
            .await
            .unwrap();
        assert_eq!(ids(&dated), vec!["EQ002"]);
    }

    #[tokio::test]
    async fn fx_only_keeps_fx_shaped_records() {
        let mut records = mixed_raw_records();
        records.push(RawTradeRecord::new("ZZ1", "Pending", "2024-01-20"));
        let store = MemoryStore::new(records);
        let fx = store.fetch_fx_only().await.unwrap();
        assert_eq!(fx.len(), 4);
        assert!(fx.iter().all(|r| r.trade_id.starts_with("FX")));
    }

    #[test]
    fn json_without_ids_uses_trade_id() {
        let store = MemoryStore::from_json_str(
            r#"[{"TradeID":"EQ1","TradeStatus":"Pending","TradeDate":"2024-01-15"}]"#,
        )
        .unwrap();
        assert_eq!(store.records[0].id, "EQ1");
    }

    #[tokio::test]
    async fn mistyped_optional_field_does_not_reject_the_file() {
        let store = MemoryStore::from_json_str(
            r#"[
                {"TradeID":"EQ1","TradeStatus":"Pending","TradeDate":"2024-01-15","ExecutionVenue":"NYSE"},
                {"TradeID":"FX1","TradeStatus":"Booked","TradeDate":"2024-01-16","CurrencyPair":"EUR/USD",
                 "TraderID":446,"AmendmentFlag":true,"Counterparty":null}
            ]"#,
        )
        .unwrap();
        assert_eq!(store.len(), 2);

        let records = store.fetch_all().await.unwrap();
        assert_eq!(records[0].trade_id, "FX1");
        assert_eq!(records[0].trader_id.as_deref(), Some("446"));
        assert_eq!(records[0].amendment_flag.as_deref(), Some("true"));
    }

    #[test]
    fn bad_json_is_an_error() {
        let err = MemoryStore::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }
}
