use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::core::format::parse_date;
use crate::models::{ProductType, Side, Trade};

/// Confirmation pipeline stage counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeStageStats {
    pub matching: usize,
    pub drafting: usize,
    pub pending_client_confirmation: usize,
    pub ccnr: usize,
}

impl TradeStageStats {
    pub fn from_trades(trades: &[Trade]) -> Self {
        let mut stats = Self::default();
        for trade in trades {
            match trade.status_label().to_lowercase().as_str() {
                "confirmed" | "booked" => stats.matching += 1,
                "settled" => stats.ccnr += 1,
                "failed" | "disputed" | "cancelled" => stats.drafting += 1,
                _ => stats.pending_client_confirmation += 1,
            }
        }
        stats
    }
}

/// Same buckets as [`TradeStageStats`], except pending trades are counted as
/// disputed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStageStats {
    pub matching: usize,
    pub drafting: usize,
    pub disputed: usize,
    pub ccnr: usize,
}

impl WorkflowStageStats {
    pub fn from_trades(trades: &[Trade]) -> Self {
        let mut stats = Self::default();
        for trade in trades {
            match trade.status_label().to_lowercase().as_str() {
                "confirmed" | "booked" => stats.matching += 1,
                "settled" => stats.ccnr += 1,
                "failed" | "disputed" | "cancelled" => stats.drafting += 1,
                _ => stats.disputed += 1,
            }
        }
        stats
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NextActionOwner {
    Settlements,
    Trading,
    Sales,
    Legal,
    Completed,
}

impl fmt::Display for NextActionOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NextActionOwner {
    pub fn as_str(&self) -> &'static str {
        match self {
            NextActionOwner::Settlements => "Settlements",
            NextActionOwner::Trading => "Trading",
            NextActionOwner::Sales => "Sales",
            NextActionOwner::Legal => "Legal",
            NextActionOwner::Completed => "Completed",
        }
    }

    /// Who picks a trade up next, from its status text.
    pub fn for_status(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "confirmed" => NextActionOwner::Settlements,
            "settled" => NextActionOwner::Completed,
            "failed" | "disputed" | "cancelled" => NextActionOwner::Legal,
            "booked" => NextActionOwner::Sales,
            _ => NextActionOwner::Trading,
        }
    }

    pub fn counts(trades: &[Trade]) -> BTreeMap<NextActionOwner, usize> {
        let mut out = BTreeMap::new();
        for trade in trades {
            *out.entry(Self::for_status(trade.status_label())).or_insert(0) += 1;
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTypeBreakdown {
    pub equity_buy: usize,
    pub equity_sell: usize,
    pub fx_buy: usize,
    pub fx_sell: usize,
    pub fx_spot: usize,
    pub fx_forward: usize,
    pub fx_swap: usize,
}

impl ProductTypeBreakdown {
    pub fn from_trades(trades: &[Trade]) -> Self {
        let mut stats = Self::default();
        for trade in trades {
            match trade {
                Trade::Equity(t) => match t.side {
                    Side::Buy => stats.equity_buy += 1,
                    Side::Sell => stats.equity_sell += 1,
                },
                Trade::Fx(t) => {
                    match t.side {
                        Side::Buy => stats.fx_buy += 1,
                        Side::Sell => stats.fx_sell += 1,
                    }
                    match t.product_type {
                        ProductType::Spot => stats.fx_spot += 1,
                        ProductType::Forward => stats.fx_forward += 1,
                        ProductType::Swap => stats.fx_swap += 1,
                    }
                }
            }
        }
        stats
    }
}

/// Days from trade date to settlement date.
///
/// Gaps beyond five days and trades with unparseable dates are not counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementGapStats {
    pub zero_to_one_day: usize,
    pub two_days: usize,
    pub three_to_five_days: usize,
}

impl SettlementGapStats {
    pub fn from_trades(trades: &[Trade]) -> Self {
        let mut stats = Self::default();
        for trade in trades {
            let Some(gap) = settlement_gap_days(trade) else {
                continue;
            };
            match gap {
                i64::MIN..=1 => stats.zero_to_one_day += 1,
                2 => stats.two_days += 1,
                3..=5 => stats.three_to_five_days += 1,
                _ => {}
            }
        }
        stats
    }

    pub fn buckets(&self) -> [(&'static str, usize); 3] {
        [
            ("0-1 days", self.zero_to_one_day),
            ("2 days", self.two_days),
            ("3-5 days", self.three_to_five_days),
        ]
    }
}

pub fn settlement_gap_days(trade: &Trade) -> Option<i64> {
    let trade_date = parse_date(trade.trade_date())?;
    let settlement_date = parse_date(trade.settlement_date())?;
    Some((settlement_date - trade_date).num_days())
}

/// Failed equities and cancelled FX trades.
pub fn broken_trades(trades: &[Trade]) -> Vec<&Trade> {
    trades.iter().filter(|t| t.is_broken()).collect()
}
