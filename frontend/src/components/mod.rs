pub mod add_expense_form;
pub mod charts;
pub mod comparison;
pub mod period_filter;
pub mod summary_panel;

pub use add_expense_form::AddExpenseForm;
pub use charts::PieChart;
pub use comparison::{DayComparison, MonthComparison};
pub use period_filter::PeriodFilter;
pub use summary_panel::SummaryPanel;
