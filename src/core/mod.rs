pub mod break_reason;
pub mod classifier;
pub mod format;
pub mod normalizer;
pub mod random;

pub use break_reason::{synthesize, synthesize_field, BreakField, BreakReason};
pub use classifier::{classify, classify_all};
pub use random::{RandomSource, RngSource, ScriptedSource};
