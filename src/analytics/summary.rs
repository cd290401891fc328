use serde::{Deserialize, Serialize};

use crate::models::Trade;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Percent, 0 when there are no trades.
    pub completion_rate: f64,
}

impl SummaryStats {
    /// Settled and confirmed trades count as completed.
    pub fn from_trades(trades: &[Trade]) -> Self {
        let total = trades.len();
        let completed = trades
            .iter()
            .filter(|t| {
                let status = t.status_label().to_lowercase();
                status == "settled" || status == "confirmed"
            })
            .count();

        let completion_rate = if total > 0 {
            round2(completed as f64 / total as f64 * 100.0)
        } else {
            0.0
        };

        SummaryStats {
            total,
            in_progress: total - completed,
            completed,
            completion_rate,
        }
    }
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
