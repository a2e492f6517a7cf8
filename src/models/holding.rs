use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

/// One position as delivered by the holdings endpoint.
///
/// Numeric fields may be missing or `null` in the payload. All of them are
/// read through the `*_or_zero` accessors, which treat an absent value as 0.
/// Derived amounts are `None` when they do not fit in a `Decimal`.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, new)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    symbol: String,
    #[serde(default)]
    avg_price: Option<Decimal>,
    #[serde(default)]
    quantity: Option<i64>,
    #[serde(default)]
    ltp: Option<Decimal>,
    #[serde(default)]
    close: Option<Decimal>,
}

impl Holding {
    pub fn avg_price_or_zero(&self) -> Decimal {
        self.avg_price.unwrap_or(Decimal::ZERO)
    }

    pub fn quantity_or_zero(&self) -> Decimal {
        self.quantity.map(Decimal::from).unwrap_or(Decimal::ZERO)
    }

    pub fn ltp_or_zero(&self) -> Decimal {
        self.ltp.unwrap_or(Decimal::ZERO)
    }

    pub fn close_or_zero(&self) -> Decimal {
        self.close.unwrap_or(Decimal::ZERO)
    }

    pub fn investment(&self) -> Option<Decimal> {
        self.avg_price_or_zero().checked_mul(self.quantity_or_zero())
    }

    pub fn current_value(&self) -> Option<Decimal> {
        self.ltp_or_zero().checked_mul(self.quantity_or_zero())
    }

    pub fn pnl(&self) -> Option<Decimal> {
        self.current_value()?.checked_sub(self.investment()?)
    }

    pub fn todays_pnl(&self) -> Option<Decimal> {
        self.close_or_zero()
            .checked_sub(self.ltp_or_zero())?
            .checked_mul(self.quantity_or_zero())
    }
}
