use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;

use crate::models::Holding;

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsResponseDto {
    user_holding: Vec<Holding>,
}

impl HoldingsResponseDto {
    pub fn into_holdings(self) -> Vec<Holding> {
        self.user_holding
    }
}
