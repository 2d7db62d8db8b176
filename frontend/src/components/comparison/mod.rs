pub mod day_comparison;
pub mod month_comparison;

pub use day_comparison::DayComparison;
pub use month_comparison::MonthComparison;
