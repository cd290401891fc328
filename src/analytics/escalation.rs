use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::RawTradeRecord;

/// Desks a trade can be escalated to, keyed on the raw status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Department {
    Legal,
    Trading,
    Sales,
    MiddleOffice,
}

pub const DEPARTMENTS: [Department; 4] = [
    Department::Legal,
    Department::Trading,
    Department::Sales,
    Department::MiddleOffice,
];

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Department {
    pub fn label(&self) -> &'static str {
        match self {
            Department::Legal => "Legal",
            Department::Trading => "Trading",
            Department::Sales => "Sales",
            Department::MiddleOffice => "Middle Office",
        }
    }

    /// Accepts `legal`, `trading`, `sales`, `middleOffice` or a display label.
    pub fn parse(key: &str) -> Option<Department> {
        match key.to_lowercase().replace([' ', '_'], "").as_str() {
            "legal" => Some(Department::Legal),
            "trading" => Some(Department::Trading),
            "sales" => Some(Department::Sales),
            "middleoffice" => Some(Department::MiddleOffice),
            _ => None,
        }
    }

    /// Whole-string, case-insensitive status match.
    pub fn handles(&self, status: &str) -> bool {
        let s = status.to_lowercase();
        match self {
            Department::Legal => s == "failed" || s == "disputed",
            Department::Trading => s == "pending",
            Department::Sales => s == "confirmed",
            Department::MiddleOffice => s == "booked",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationCounts {
    pub legal: usize,
    pub trading: usize,
    pub sales: usize,
    pub middle_office: usize,
}

impl EscalationCounts {
    pub fn from_records(records: &[RawTradeRecord]) -> Self {
        let count = |dept: Department| {
            records
                .iter()
                .filter(|r| dept.handles(&r.trade_status))
                .count()
        };
        EscalationCounts {
            legal: count(Department::Legal),
            trading: count(Department::Trading),
            sales: count(Department::Sales),
            middle_office: count(Department::MiddleOffice),
        }
    }

    pub fn get(&self, dept: Department) -> usize {
        match dept {
            Department::Legal => self.legal,
            Department::Trading => self.trading,
            Department::Sales => self.sales,
            Department::MiddleOffice => self.middle_office,
        }
    }
}

pub fn trades_for_department(
    records: &[RawTradeRecord],
    dept: Department,
) -> Vec<&RawTradeRecord> {
    records
        .iter()
        .filter(|r| dept.handles(&r.trade_status))
        .collect()
}

/// Records for one department (or all when `None`), sorted by TradeID.
pub fn escalation_list(
    records: &[RawTradeRecord],
    dept: Option<Department>,
) -> Vec<&RawTradeRecord> {
    let mut out: Vec<&RawTradeRecord> = match dept {
        Some(d) => trades_for_department(records, d),
        None => records.iter().collect(),
    };
    out.sort_by(|a, b| a.trade_id.cmp(&b.trade_id));
    out
}
