pub mod raw;
pub mod status;
pub mod trade;

pub use raw::RawTradeRecord;
pub use status::*;
pub use trade::{EquityTrade, FxTrade, Trade, TradeBook};
