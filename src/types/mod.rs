//! Strong types for currency amounts and precision

mod amount;
mod decimals;

pub use amount::SmallestUnits;
pub use decimals::CurrencyDecimals;
