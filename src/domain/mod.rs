// Domain types and value objects
pub mod month;
pub mod salary;

// Re-export commonly used types
pub use month::{MonthParseError, TargetMonth};
pub use salary::{CurrencySymbol, RunState, SalaryConfig, parse_amount};
