//! AI credit accounting.

mod ledger;
mod tier;

pub use ledger::CreditLedger;
pub use tier::Tier;
