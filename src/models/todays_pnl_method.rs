use clap::ValueEnum;
use strum_macros::{Display, EnumIter};

/// How today's P&L is reduced over the portfolio.
#[derive(Clone, Copy, Debug, Default, Display, EnumIter, Eq, PartialEq, ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum TodaysPnlMethod {
    /// `(Σclose − Σltp) × Σquantity` across the whole portfolio.
    #[default]
    Aggregate,
    /// `Σ((close − ltp) × quantity)`, one term per holding.
    PerHolding,
}
