use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use crate::app::utils::format_amount;

#[derive(Clone, Copy, Debug, Default, Eq, Getters, PartialEq, new)]
pub struct PortfolioMetrics {
    total_investment: Decimal,
    total_current_value: Decimal,
    total_pnl: Decimal,
    todays_pnl: Decimal,
}

impl PortfolioMetrics {
    pub fn formatted(&self) -> FormattedMetrics {
        FormattedMetrics {
            total_investment: format_amount(self.total_investment),
            total_current_value: format_amount(self.total_current_value),
            total_pnl: format_amount(self.total_pnl),
            todays_pnl: format_amount(self.todays_pnl),
        }
    }
}

/// Display strings for the summary panel, two fractional digits each.
#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub struct FormattedMetrics {
    total_investment: String,
    total_current_value: String,
    total_pnl: String,
    todays_pnl: String,
}
