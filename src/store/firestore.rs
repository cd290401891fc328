use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Map, Number, Value};
use tracing::{debug, info, warn};

use crate::config::FirestoreConfig;
use crate::models::RawTradeRecord;
use crate::store::{ConnectionState, StoreError, StoreQuery, TradeStore};

const ORDER_FIELD: &str = "TradeDate";

#[derive(Debug, Deserialize)]
struct RunQueryResponse {
    #[serde(default)]
    document: Option<Document>,
}

#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

/// Read-only client for the Firestore REST `runQuery` endpoint.
pub struct FirestoreStore {
    client: Client,
    config: FirestoreConfig,
}

impl FirestoreStore {
    pub fn new(config: &FirestoreConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn run_query_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents:runQuery",
            self.config.base_url, self.config.project_id
        )
    }

    async fn run_query(
        &self,
        filters: &[(&str, &str)],
        limit: Option<usize>,
    ) -> Result<Vec<RawTradeRecord>, StoreError> {
        if !self.is_configured() {
            warn!("Firestore is not configured, no trade data can be fetched");
            return Err(StoreError::NotConfigured);
        }

        let body = build_query(&self.config.collection, filters, limit);
        debug!("Firestore query on {}: {}", self.config.collection, body);

        let resp = self
            .client
            .post(self.run_query_url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let rows: Vec<RunQueryResponse> = resp.json().await?;
        let records = rows
            .into_iter()
            .filter_map(|row| row.document)
            .map(decode_document)
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "Fetched {} trade records from {}",
            records.len(),
            self.config.collection
        );
        Ok(records)
    }
}

/// Structured query on one collection, newest trade date first, with every
/// filter as an `EQUAL` field filter.
pub fn build_query(collection: &str, filters: &[(&str, &str)], limit: Option<usize>) -> Value {
    let mut query = json!({
        "from": [{ "collectionId": collection }],
        "orderBy": [{
            "field": { "fieldPath": ORDER_FIELD },
            "direction": "DESCENDING"
        }]
    });

    let field_filters: Vec<Value> = filters
        .iter()
        .map(|(field, value)| {
            json!({
                "fieldFilter": {
                    "field": { "fieldPath": field },
                    "op": "EQUAL",
                    "value": { "stringValue": value }
                }
            })
        })
        .collect();

    match field_filters.len() {
        0 => {}
        1 => query["where"] = field_filters[0].clone(),
        _ => {
            query["where"] = json!({
                "compositeFilter": { "op": "AND", "filters": field_filters }
            })
        }
    }

    if let Some(limit) = limit {
        query["limit"] = json!(limit);
    }

    json!({ "structuredQuery": query })
}

/// Unwrap a typed Firestore value (`{"stringValue": "x"}`) into plain JSON.
pub fn decode_value(value: &Value) -> Value {
    let Some(obj) = value.as_object() else {
        return value.clone();
    };
    let Some((kind, inner)) = obj.iter().next() else {
        return Value::Null;
    };

    match kind.as_str() {
        "stringValue" | "timestampValue" | "referenceValue" | "booleanValue" => inner.clone(),
        "integerValue" => match inner {
            Value::String(s) => s
                .parse::<i64>()
                .map(|n| Value::Number(n.into()))
                .unwrap_or_else(|_| inner.clone()),
            other => other.clone(),
        },
        "doubleValue" => match inner {
            Value::String(s) => s
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            other => other.clone(),
        },
        "nullValue" => Value::Null,
        "mapValue" => {
            let fields = inner.get("fields").and_then(Value::as_object);
            Value::Object(
                fields
                    .map(|f| f.iter().map(|(k, v)| (k.clone(), decode_value(v))).collect())
                    .unwrap_or_default(),
            )
        }
        "arrayValue" => Value::Array(
            inner
                .get("values")
                .and_then(Value::as_array)
                .map(|vs| vs.iter().map(decode_value).collect())
                .unwrap_or_default(),
        ),
        _ => inner.clone(),
    }
}

fn decode_document(doc: Document) -> Result<RawTradeRecord, StoreError> {
    let id = doc
        .name
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();

    let mut fields: Map<String, Value> = doc
        .fields
        .iter()
        .map(|(k, v)| (k.clone(), decode_value(v)))
        .collect();
    fields.insert("id".to_string(), Value::String(id.clone()));

    serde_json::from_value(Value::Object(fields)).map_err(|e| StoreError::Decode {
        document: id,
        reason: e.to_string(),
    })
}

#[async_trait]
impl TradeStore for FirestoreStore {
    async fn fetch_all(&self) -> Result<Vec<RawTradeRecord>, StoreError> {
        self.run_query(&[], None).await
    }

    async fn fetch_filtered(&self, query: &StoreQuery) -> Result<Vec<RawTradeRecord>, StoreError> {
        let records = self.run_query(&query.field_filters(), None).await?;
        Ok(records
            .into_iter()
            .filter(|r| query.trade_type.matches_raw(r))
            .collect())
    }

    async fn probe(&self) -> ConnectionState {
        if !self.is_configured() {
            return ConnectionState::Unconfigured;
        }
        match self.run_query(&[], Some(1)).await {
            Ok(_) => ConnectionState::Connected,
            Err(e) => ConnectionState::Unreachable(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::default_test_config;

    #[test]
    fn query_without_filters_orders_by_trade_date() {
        let q = build_query("unified_data", &[], None);
        let sq = &q["structuredQuery"];
        assert_eq!(sq["from"][0]["collectionId"], "unified_data");
        assert_eq!(sq["orderBy"][0]["field"]["fieldPath"], "TradeDate");
        assert_eq!(sq["orderBy"][0]["direction"], "DESCENDING");
        assert!(sq.get("where").is_none());
        assert!(sq.get("limit").is_none());
    }

    #[test]
    fn single_filter_is_a_field_filter() {
        let q = build_query("unified_data", &[("TradeStatus", "Booked")], Some(1));
        let w = &q["structuredQuery"]["where"]["fieldFilter"];
        assert_eq!(w["field"]["fieldPath"], "TradeStatus");
        assert_eq!(w["op"], "EQUAL");
        assert_eq!(w["value"]["stringValue"], "Booked");
        assert_eq!(q["structuredQuery"]["limit"], 1);
    }

    #[test]
    fn multiple_filters_are_and_composed() {
        let q = build_query(
            "unified_data",
            &[("TradeStatus", "Booked"), ("Counterparty", "HSBC")],
            None,
        );
        let c = &q["structuredQuery"]["where"]["compositeFilter"];
        assert_eq!(c["op"], "AND");
        assert_eq!(c["filters"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn decodes_typed_values() {
        assert_eq!(decode_value(&json!({"stringValue": "x"})), json!("x"));
        assert_eq!(decode_value(&json!({"integerValue": "42"})), json!(42));
        assert_eq!(decode_value(&json!({"doubleValue": 1.5})), json!(1.5));
        assert_eq!(decode_value(&json!({"booleanValue": true})), json!(true));
        assert_eq!(decode_value(&json!({"nullValue": null})), Value::Null);
        assert_eq!(
            decode_value(&json!({"mapValue": {"fields": {"a": {"integerValue": "1"}}}})),
            json!({"a": 1})
        );
        assert_eq!(
            decode_value(&json!({"arrayValue": {"values": [{"stringValue": "a"}]}})),
            json!(["a"])
        );
    }

    #[test]
    fn decodes_document_into_raw_record() {
        let doc: Document = serde_json::from_value(json!({
            "name": "projects/p/databases/(default)/documents/unified_data/abc123",
            "fields": {
                "TradeID": {"stringValue": "FX0001"},
                "TradeStatus": {"stringValue": "Booked"},
                "TradeDate": {"stringValue": "2025-05-11"},
                "CurrencyPair": {"stringValue": "EUR/USD"},
                "NotionalAmount": {"integerValue": "5000000"},
                "FXRate": {"doubleValue": 1.0842},
                "Exception Reason": {"stringValue": "SSI mismatch"}
            }
        }))
        .unwrap();

        let raw = decode_document(doc).unwrap();
        assert_eq!(raw.id, "abc123");
        assert_eq!(raw.trade_id, "FX0001");
        assert_eq!(raw.notional_amount, Some(5_000_000.0));
        assert_eq!(raw.fx_rate, Some(1.0842));
        assert_eq!(raw.extra["Exception Reason"], json!("SSI mismatch"));
    }

    #[test]
    fn typed_scalars_in_text_fields_decode() {
        let doc: Document = serde_json::from_value(json!({
            "name": "projects/p/databases/(default)/documents/unified_data/fx9",
            "fields": {
                "TradeID": {"stringValue": "FX0009"},
                "TradeStatus": {"stringValue": "Booked"},
                "TradeDate": {"stringValue": "2025-05-11"},
                "CurrencyPair": {"stringValue": "USD/JPY"},
                "Counterparty": {"nullValue": null},
                "TraderID": {"integerValue": "446"},
                "AmendmentFlag": {"booleanValue": true}
            }
        }))
        .unwrap();

        let raw = decode_document(doc).unwrap();
        assert_eq!(raw.counterparty, "");
        assert_eq!(raw.trader_id.as_deref(), Some("446"));
        assert_eq!(raw.amendment_flag.as_deref(), Some("true"));
    }

    #[test]
    fn document_missing_status_fails_to_decode() {
        let doc: Document = serde_json::from_value(json!({
            "name": "projects/p/databases/(default)/documents/unified_data/bad",
            "fields": { "TradeID": {"stringValue": "X"} }
        }))
        .unwrap();
        let err = decode_document(doc).unwrap_err();
        assert!(matches!(err, StoreError::Decode { ref document, .. } if document == "bad"));
    }

    #[tokio::test]
    async fn unconfigured_store_reports_state_and_refuses_fetch() {
        let cfg = default_test_config();
        let store = FirestoreStore::new(&cfg.firestore);
        assert_eq!(store.probe().await, ConnectionState::Unconfigured);
        assert!(matches!(
            store.fetch_all().await,
            Err(StoreError::NotConfigured)
        ));
    }
}
