use chrono::{DateTime, Local};
use tracing::{error, info};

use crate::{
    api::FetchFailure,
    app::{calc::calculate_metrics, loader::LoadResult},
    models::{Holding, HoldingRow, PortfolioMetrics, SummaryPanel, TodaysPnlMethod},
};

/// State owned by the holdings screen for as long as it is shown.
#[derive(Clone, Debug, Default)]
pub struct HoldingsScreen {
    holdings: Vec<Holding>,
    metrics: PortfolioMetrics,
    summary_panel: SummaryPanel,
    todays_pnl_method: TodaysPnlMethod,
    last_updated: Option<DateTime<Local>>,
}

impl HoldingsScreen {
    pub fn new(todays_pnl_method: TodaysPnlMethod) -> Self {
        Self {
            todays_pnl_method,
            ..Self::default()
        }
    }

    pub fn holdings(&self) -> &Vec<Holding> {
        &self.holdings
    }

    pub fn metrics(&self) -> &PortfolioMetrics {
        &self.metrics
    }

    pub fn summary_panel(&self) -> SummaryPanel {
        self.summary_panel
    }

    pub fn last_updated(&self) -> Option<&DateTime<Local>> {
        self.last_updated.as_ref()
    }

    /// Replaces the holdings wholesale and recomputes the aggregates. When
    /// the aggregates cannot be computed nothing changes.
    pub fn apply_holdings(&mut self, holdings: Vec<Holding>) -> Result<(), FetchFailure> {
        self.metrics = calculate_metrics(&holdings, self.todays_pnl_method)?;
        self.holdings = holdings;
        self.last_updated = Some(Local::now());
        Ok(())
    }

    /// Applies a finished fetch. Failures are logged and leave the screen
    /// untouched.
    pub fn apply_load_result(&mut self, result: LoadResult) {
        let applied = result.and_then(|holdings| {
            let count = holdings.len();
            self.apply_holdings(holdings).map(|_| count)
        });

        match applied {
            Ok(count) => info!(count, "holdings loaded"),
            Err(e) => error!(error = %e, "Error fetching holdings"),
        }
    }

    pub fn toggle_summary(&mut self) {
        self.summary_panel = self.summary_panel.toggled();
    }

    pub fn rows(&self) -> Vec<HoldingRow> {
        self.holdings
            .iter()
            .enumerate()
            .map(|(i, holding)| HoldingRow::from_holding(i, holding))
            .collect()
    }
}
