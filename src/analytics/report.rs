use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::analytics::escalation::{EscalationCounts, DEPARTMENTS};
use crate::analytics::filters::TradeTypeFilter;
use crate::analytics::summary::{round2, SummaryStats};
use crate::analytics::workflow::{
    NextActionOwner, ProductTypeBreakdown, SettlementGapStats, TradeStageStats,
    WorkflowStageStats,
};
use crate::models::{RawTradeRecord, Trade, TradeBook};

/// Everything the workflow view shows, computed in one pass over a book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowReport {
    pub trade_type: TradeTypeFilter,
    pub summary: SummaryStats,
    pub trade_stages: TradeStageStats,
    pub workflow_stages: WorkflowStageStats,
    pub next_action_owners: BTreeMap<NextActionOwner, usize>,
    pub product_types: ProductTypeBreakdown,
    pub settlement_gaps: SettlementGapStats,
    pub escalations: EscalationCounts,
}

impl WorkflowReport {
    pub fn build(book: &TradeBook, raw: &[RawTradeRecord], trade_type: TradeTypeFilter) -> Self {
        let trades: Vec<Trade> = book
            .all()
            .into_iter()
            .filter(|t| trade_type.matches_trade(t))
            .collect();
        let raw: Vec<RawTradeRecord> = trade_type.apply_raw(raw).into_iter().cloned().collect();

        WorkflowReport {
            trade_type,
            summary: SummaryStats::from_trades(&trades),
            trade_stages: TradeStageStats::from_trades(&trades),
            workflow_stages: WorkflowStageStats::from_trades(&trades),
            next_action_owners: NextActionOwner::counts(&trades),
            product_types: ProductTypeBreakdown::from_trades(&trades),
            settlement_gaps: SettlementGapStats::from_trades(&trades),
            escalations: EscalationCounts::from_records(&raw),
        }
    }

    pub fn print_summary(&self) {
        print!("{}", self);
    }
}

impl fmt::Display for WorkflowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;
        let pct = |n: usize| {
            if s.total > 0 {
                round2(n as f64 / s.total as f64 * 100.0)
            } else {
                0.0
            }
        };

        writeln!(f, "Summary:")?;
        writeln!(f, "  Total:        {}", s.total)?;
        writeln!(f, "  Completed:    {}", s.completed)?;
        writeln!(f, "  In Progress:  {}", s.in_progress)?;
        writeln!(f, "  Completion:   {:.1}%", s.completion_rate)?;
        writeln!(f)?;

        let t = &self.trade_stages;
        writeln!(f, "Trade Stages:")?;
        writeln!(f, "  Matching:                    {}", t.matching)?;
        writeln!(f, "  Drafting:                    {}", t.drafting)?;
        writeln!(f, "  Pending Client Confirmation: {}", t.pending_client_confirmation)?;
        writeln!(f, "  CCNR:                        {}", t.ccnr)?;
        writeln!(f)?;

        let w = &self.workflow_stages;
        writeln!(f, "Workflow Stages:")?;
        for (name, n) in [
            ("Matching", w.matching),
            ("Drafting", w.drafting),
            ("Disputed", w.disputed),
            ("CCNR", w.ccnr),
        ] {
            writeln!(f, "  {:<10} {:>4} ({:.1}%)", name, n, pct(n))?;
        }
        writeln!(f)?;

        writeln!(f, "Next Action Owner:")?;
        for (owner, n) in &self.next_action_owners {
            writeln!(f, "  {:<12} {:>4} ({:.1}%)", owner.as_str(), n, pct(*n))?;
        }
        writeln!(f)?;

        let p = &self.product_types;
        writeln!(f, "Product Types:")?;
        writeln!(f, "  Equity:  buy {} / sell {}", p.equity_buy, p.equity_sell)?;
        writeln!(f, "  FX:      buy {} / sell {}", p.fx_buy, p.fx_sell)?;
        writeln!(
            f,
            "  FX:      spot {} / forward {} / swap {}",
            p.fx_spot, p.fx_forward, p.fx_swap
        )?;
        writeln!(f)?;

        writeln!(f, "Trade/Settlement Gap:")?;
        for (bucket, n) in self.settlement_gaps.buckets() {
            writeln!(f, "  {:<9} {}", bucket, n)?;
        }
        writeln!(f)?;

        writeln!(f, "Escalations:")?;
        for dept in DEPARTMENTS {
            writeln!(f, "  {:<14} {}", dept.label(), self.escalations.get(dept))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify_all;
    use crate::test_helpers::mixed_raw_records;

    #[test]
    fn report_over_whole_book() {
        let raw = mixed_raw_records();
        let book = classify_all(&raw);
        let report = WorkflowReport::build(&book, &raw, TradeTypeFilter::All);
        assert_eq!(report.summary.total, 7);
        assert_eq!(report.escalations.legal, 2);
        assert_eq!(report.trade_stages.matching, 3);

        let text = report.to_string();
        assert!(text.contains("Total:        7"));
        assert!(text.contains("Middle Office"));
    }

    #[test]
    fn report_restricted_to_equities() {
        let raw = mixed_raw_records();
        let book = classify_all(&raw);
        let report = WorkflowReport::build(&book, &raw, TradeTypeFilter::Equity);
        assert_eq!(report.summary.total, 3);
        assert_eq!(report.product_types.fx_buy, 0);
        // EQ003 failed
        assert_eq!(report.escalations.legal, 1);
        assert_eq!(report.escalations.middle_office, 0);
    }
}
