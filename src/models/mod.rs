pub mod holding;
pub mod holding_row;
pub mod metrics;
pub mod summary_panel;
pub mod todays_pnl_method;

pub use holding::Holding;
pub use holding_row::HoldingRow;
pub use metrics::{FormattedMetrics, PortfolioMetrics};
pub use summary_panel::SummaryPanel;
pub use todays_pnl_method::TodaysPnlMethod;
