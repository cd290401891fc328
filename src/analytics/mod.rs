pub mod escalation;
pub mod filters;
pub mod report;
pub mod summary;
pub mod workflow;

pub use escalation::{escalation_list, trades_for_department, Department, EscalationCounts};
pub use filters::{ConfirmationFilter, TradeTypeFilter};
pub use report::WorkflowReport;
pub use summary::SummaryStats;
pub use workflow::{
    broken_trades, NextActionOwner, ProductTypeBreakdown, SettlementGapStats, TradeStageStats,
    WorkflowStageStats,
};
