use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        }
    }

    /// Only the word "sell" (any case, surrounding whitespace ignored) is a
    /// sell. Everything else is a buy, including short codes like "S" and
    /// missing values.
    pub fn parse_lenient(raw: Option<&str>) -> Side {
        match raw {
            Some(s) if s.trim().eq_ignore_ascii_case("sell") => Side::Sell,
            _ => Side::Buy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquityConfirmationStatus {
    Confirmed,
    Pending,
    Failed,
    Settled,
}

impl fmt::Display for EquityConfirmationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EquityConfirmationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquityConfirmationStatus::Confirmed => "Confirmed",
            EquityConfirmationStatus::Pending => "Pending",
            EquityConfirmationStatus::Failed => "Failed",
            EquityConfirmationStatus::Settled => "Settled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FxTradeStatus {
    Booked,
    Confirmed,
    Settled,
    Cancelled,
}

impl fmt::Display for FxTradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FxTradeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FxTradeStatus::Booked => "Booked",
            FxTradeStatus::Confirmed => "Confirmed",
            FxTradeStatus::Settled => "Settled",
            FxTradeStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FxConfirmationStatus {
    Confirmed,
    Pending,
    Disputed,
}

impl fmt::Display for FxConfirmationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FxConfirmationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FxConfirmationStatus::Confirmed => "Confirmed",
            FxConfirmationStatus::Pending => "Pending",
            FxConfirmationStatus::Disputed => "Disputed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    Spot,
    Forward,
    Swap,
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Spot => "Spot",
            ProductType::Forward => "Forward",
            ProductType::Swap => "Swap",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfirmationMethod {
    #[serde(rename = "SWIFT")]
    Swift,
    Email,
    Manual,
    Electronic,
}

impl fmt::Display for ConfirmationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfirmationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfirmationMethod::Swift => "SWIFT",
            ConfirmationMethod::Email => "Email",
            ConfirmationMethod::Manual => "Manual",
            ConfirmationMethod::Electronic => "Electronic",
        }
    }
}
