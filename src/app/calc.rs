use rust_decimal::Decimal;

use crate::{
    api::FetchFailure,
    models::{Holding, PortfolioMetrics, TodaysPnlMethod},
};

/// Reduces the holdings to the four portfolio aggregates.
///
/// Total P&L is taken from the unrounded sums. Today's P&L follows `method`;
/// see [`TodaysPnlMethod`] for the two formulas. Any amount, per holding or
/// total, that overflows a `Decimal` fails the whole calculation.
pub fn calculate_metrics(
    holdings: &[Holding],
    method: TodaysPnlMethod,
) -> Result<PortfolioMetrics, FetchFailure> {
    let mut total_investment = Decimal::ZERO;
    let mut total_current_value = Decimal::ZERO;
    let mut total_close = Decimal::ZERO;
    let mut total_ltp = Decimal::ZERO;
    let mut total_quantity = Decimal::ZERO;
    let mut per_holding_todays_pnl = Decimal::ZERO;

    for holding in holdings {
        let overflow = || FetchFailure::Overflow(format!("holding {}", holding.symbol()));

        // The list row shows this value, so it has to be representable too.
        holding.pnl().ok_or_else(overflow)?;

        total_investment = holding
            .investment()
            .and_then(|value| total_investment.checked_add(value))
            .ok_or_else(overflow)?;
        total_current_value = holding
            .current_value()
            .and_then(|value| total_current_value.checked_add(value))
            .ok_or_else(overflow)?;
        total_close = total_close
            .checked_add(holding.close_or_zero())
            .ok_or_else(overflow)?;
        total_ltp = total_ltp
            .checked_add(holding.ltp_or_zero())
            .ok_or_else(overflow)?;
        total_quantity = total_quantity
            .checked_add(holding.quantity_or_zero())
            .ok_or_else(overflow)?;

        if method == TodaysPnlMethod::PerHolding {
            per_holding_todays_pnl = holding
                .todays_pnl()
                .and_then(|value| per_holding_todays_pnl.checked_add(value))
                .ok_or_else(overflow)?;
        }
    }

    let todays_pnl = match method {
        TodaysPnlMethod::Aggregate => total_close
            .checked_sub(total_ltp)
            .and_then(|diff| diff.checked_mul(total_quantity))
            .ok_or_else(|| FetchFailure::Overflow(String::from("today's P&L")))?,
        TodaysPnlMethod::PerHolding => per_holding_todays_pnl,
    };

    let total_pnl = total_current_value
        .checked_sub(total_investment)
        .ok_or_else(|| FetchFailure::Overflow(String::from("total P&L")))?;

    Ok(PortfolioMetrics::new(
        total_investment,
        total_current_value,
        total_pnl,
        todays_pnl,
    ))
}
