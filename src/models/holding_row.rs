use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::Holding;
use crate::app::utils::format_amount;

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct HoldingRow {
    key: String,
    symbol: String,
    quantity: String,
    ltp: String,
    pnl: String,
    pnl_value: Decimal,
}

impl HoldingRow {
    /// Builds the list row for the holding at `index`. The key combines the
    /// index with the symbol so duplicate symbols still get distinct keys.
    /// Holdings reach the screen only after `calculate_metrics` accepted
    /// them, so the P&L is always representable there.
    pub fn from_holding(index: usize, holding: &Holding) -> Self {
        let pnl_value = holding.pnl().unwrap_or_default();
        Self {
            key: format!("{}-{}", index, holding.symbol()),
            symbol: holding.symbol().clone(),
            quantity: holding.quantity_or_zero().to_string(),
            ltp: format_amount(holding.ltp_or_zero()),
            pnl: format_amount(pnl_value),
            pnl_value,
        }
    }
}
