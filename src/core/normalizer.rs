//! Free-text status normalization.
//!
//! Every mapping is a case-insensitive substring match evaluated in a fixed
//! priority order, so any input lands on exactly one variant.

use crate::models::{
    ConfirmationMethod, EquityConfirmationStatus, FxConfirmationStatus, FxTradeStatus,
    ProductType,
};

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

pub fn equity_confirmation_status(status: &str) -> EquityConfirmationStatus {
    let s = status.to_lowercase();
    if contains_any(&s, &["settled", "completed"]) {
        EquityConfirmationStatus::Settled
    } else if contains_any(&s, &["confirmed", "booked"]) {
        EquityConfirmationStatus::Confirmed
    } else if contains_any(&s, &["failed", "rejected"]) {
        EquityConfirmationStatus::Failed
    } else {
        EquityConfirmationStatus::Pending
    }
}

pub fn fx_trade_status(status: &str) -> FxTradeStatus {
    let s = status.to_lowercase();
    if contains_any(&s, &["settled", "completed"]) {
        FxTradeStatus::Settled
    } else if s.contains("confirmed") {
        FxTradeStatus::Confirmed
    } else if contains_any(&s, &["cancelled", "failed"]) {
        FxTradeStatus::Cancelled
    } else {
        FxTradeStatus::Booked
    }
}

pub fn fx_confirmation_status(status: &str) -> FxConfirmationStatus {
    let s = status.to_lowercase();
    if contains_any(&s, &["confirmed", "settled"]) {
        FxConfirmationStatus::Confirmed
    } else if contains_any(&s, &["disputed", "exception"]) {
        FxConfirmationStatus::Disputed
    } else {
        FxConfirmationStatus::Pending
    }
}

pub fn product_type(raw: Option<&str>) -> ProductType {
    let Some(raw) = raw else {
        return ProductType::Spot;
    };
    let s = raw.to_lowercase();
    if s.contains("forward") {
        ProductType::Forward
    } else if s.contains("swap") {
        ProductType::Swap
    } else {
        ProductType::Spot
    }
}

pub fn confirmation_method(raw: Option<&str>) -> ConfirmationMethod {
    let Some(raw) = raw else {
        return ConfirmationMethod::Electronic;
    };
    let s = raw.to_lowercase();
    if s.contains("swift") {
        ConfirmationMethod::Swift
    } else if s.contains("email") {
        ConfirmationMethod::Email
    } else if s.contains("manual") {
        ConfirmationMethod::Manual
    } else {
        ConfirmationMethod::Electronic
    }
}

pub fn amendment_flag(raw: Option<&str>) -> bool {
    raw.map(|s| s.trim().to_lowercase())
        .is_some_and(|s| matches!(s.as_str(), "yes" | "y" | "true"))
}
