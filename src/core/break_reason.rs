//! Synthetic break explanations for failed and cancelled trades.
//!
//! A break picks one field, renders our value for it, then derives a
//! counterparty value by jittering that value. The counterparty value is
//! regenerated a bounded number of times if it happens to equal ours; after
//! that the collision is accepted.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::core::format::{display_date, format_amount, parse_date, NOT_AVAILABLE};
use crate::core::random::RandomSource;
use crate::models::Trade;

pub const COUNTERPARTY_CANDIDATES: &[&str] = &[
    "Goldman Sachs",
    "Morgan Stanley",
    "JP Morgan",
    "Citigroup",
    "Bank of America",
];

pub const CURRENCY_PAIR_CANDIDATES: &[&str] =
    &["EUR/USD", "GBP/USD", "USD/JPY", "USD/CHF", "AUD/USD"];

const MAX_REGENERATIONS: usize = 10;
const NOTIONAL_JITTER: (f64, f64) = (0.95, 1.05);
const FX_SYNTHETIC_NOTIONAL: (f64, f64) = (1_000_000.0, 10_000_000.0);
const EQUITY_PRODUCT_LABEL: &str = "Equity";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BreakField {
    #[serde(rename = "Trade Date")]
    TradeDate,
    Notional,
    #[serde(rename = "Currency Pair")]
    CurrencyPair,
    #[serde(rename = "Maturity Date")]
    MaturityDate,
    #[serde(rename = "Settlement Date")]
    SettlementDate,
    Counterparty,
    #[serde(rename = "Product Type")]
    ProductType,
}

pub const BREAK_FIELDS: [BreakField; 7] = [
    BreakField::TradeDate,
    BreakField::Notional,
    BreakField::CurrencyPair,
    BreakField::MaturityDate,
    BreakField::SettlementDate,
    BreakField::Counterparty,
    BreakField::ProductType,
];

impl BreakField {
    pub fn label(&self) -> &'static str {
        match self {
            BreakField::TradeDate => "Trade Date",
            BreakField::Notional => "Notional",
            BreakField::CurrencyPair => "Currency Pair",
            BreakField::MaturityDate => "Maturity Date",
            BreakField::SettlementDate => "Settlement Date",
            BreakField::Counterparty => "Counterparty",
            BreakField::ProductType => "Product Type",
        }
    }

    pub fn from_label(label: &str) -> Option<BreakField> {
        BREAK_FIELDS.iter().copied().find(|f| f.label() == label)
    }
}

impl fmt::Display for BreakField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakReason {
    pub field: BreakField,
    pub authoritative_value: String,
    pub counterparty_value: String,
}

impl BreakReason {
    /// False when regeneration gave up and both sides agree.
    pub fn is_discrepant(&self) -> bool {
        self.authoritative_value != self.counterparty_value
    }
}

impl fmt::Display for BreakReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ours {} | counterparty {}",
            self.field, self.authoritative_value, self.counterparty_value
        )
    }
}

/// What the counterparty value is derived from.
enum Basis {
    Date(Option<NaiveDate>),
    Amount(f64),
    Pick(&'static [&'static str]),
    Fixed,
}

/// Pick a field uniformly and synthesize a break on it.
///
/// No status check is made; callers decide which trades are broken.
pub fn synthesize<R: RandomSource + ?Sized>(trade: &Trade, rng: &mut R) -> BreakReason {
    let field = BREAK_FIELDS[rng.pick_index(BREAK_FIELDS.len())];
    synthesize_field(trade, field, rng)
}

pub fn synthesize_field<R: RandomSource + ?Sized>(
    trade: &Trade,
    field: BreakField,
    rng: &mut R,
) -> BreakReason {
    let (authoritative_value, basis) = authoritative(trade, field, rng);

    let mut counterparty_value = perturb(&authoritative_value, &basis, rng);
    let mut attempts = 0;
    while counterparty_value == authoritative_value && attempts < MAX_REGENERATIONS {
        counterparty_value = perturb(&authoritative_value, &basis, rng);
        attempts += 1;
    }

    if counterparty_value == authoritative_value {
        debug!(
            "Break on {} for {} has no divergent value, keeping {}",
            field,
            trade.trade_id(),
            authoritative_value
        );
    }

    BreakReason {
        field,
        authoritative_value,
        counterparty_value,
    }
}

fn date_basis(raw: &str) -> (String, Basis) {
    let date = parse_date(raw);
    let shown = date
        .map(display_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    (shown, Basis::Date(date))
}

fn authoritative<R: RandomSource + ?Sized>(
    trade: &Trade,
    field: BreakField,
    rng: &mut R,
) -> (String, Basis) {
    match field {
        BreakField::TradeDate => date_basis(trade.trade_date()),
        BreakField::SettlementDate => date_basis(trade.settlement_date()),
        BreakField::MaturityDate => match trade {
            Trade::Equity(_) => (NOT_AVAILABLE.to_string(), Basis::Fixed),
            Trade::Fx(t) => match t.maturity_date.as_deref() {
                Some(raw) => date_basis(raw),
                None => (NOT_AVAILABLE.to_string(), Basis::Fixed),
            },
        },
        BreakField::Notional => {
            // FX notionals are always synthetic, whatever was booked.
            let amount = match trade {
                Trade::Equity(t) => t.trade_value,
                Trade::Fx(_) => rng.range(FX_SYNTHETIC_NOTIONAL.0, FX_SYNTHETIC_NOTIONAL.1),
            };
            (format_amount(amount), Basis::Amount(amount))
        }
        BreakField::CurrencyPair => match trade {
            Trade::Equity(t) => (t.currency.clone(), Basis::Fixed),
            Trade::Fx(t) => (
                t.currency_pair.clone(),
                Basis::Pick(CURRENCY_PAIR_CANDIDATES),
            ),
        },
        BreakField::Counterparty => (
            trade.counterparty().to_string(),
            Basis::Pick(COUNTERPARTY_CANDIDATES),
        ),
        BreakField::ProductType => match trade {
            Trade::Equity(_) => (EQUITY_PRODUCT_LABEL.to_string(), Basis::Fixed),
            Trade::Fx(t) => (t.product_type.as_str().to_string(), Basis::Fixed),
        },
    }
}

fn perturb<R: RandomSource + ?Sized>(authoritative: &str, basis: &Basis, rng: &mut R) -> String {
    match basis {
        Basis::Date(Some(date)) => {
            let offset = rng.pick_index(3) as i64 - 1;
            let shifted = date
                .checked_add_signed(Duration::days(offset))
                .unwrap_or(*date);
            display_date(shifted)
        }
        Basis::Date(None) => NOT_AVAILABLE.to_string(),
        Basis::Amount(amount) => {
            let factor = rng.range(NOTIONAL_JITTER.0, NOTIONAL_JITTER.1);
            format_amount(amount * factor)
        }
        Basis::Pick(candidates) => candidates[rng.pick_index(candidates.len())].to_string(),
        Basis::Fixed => authoritative.to_string(),
    }
}
