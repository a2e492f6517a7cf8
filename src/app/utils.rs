use ratatui::style::Color;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount with exactly two fractional digits, rounding half away
/// from zero. Amounts that round to zero print as `0.00`, never `-0.00`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return String::from("0.00");
    }
    format!("{:.2}", rounded)
}

pub fn with_currency(currency: &str, amount: &str) -> String {
    format!("{} {}", currency, amount)
}

pub fn pnl_color(amount: Decimal) -> Color {
    if amount >= Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    }
}
