use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::models::TodaysPnlMethod;

pub const DEFAULT_HOLDINGS_URL: &str = "https://run.mocky.io/v3/bde7230e-bc91-43bc-901d-c79d008bddc8";

/// Command line and environment settings. Every flag can also be set through
/// the environment or a `.env` file.
#[derive(Clone, Debug, Parser)]
#[command(name = "holdings-tui", version, about = "A terminal-based brokerage holdings viewer")]
pub struct Config {
    /// Endpoint returning the `userHolding` payload
    #[arg(long, env = "HOLDINGS_URL", default_value = DEFAULT_HOLDINGS_URL)]
    pub url: String,

    /// Header label
    #[arg(long, env = "HOLDINGS_TITLE", default_value = "Upstox Holding")]
    pub title: String,

    /// Currency symbol printed in front of amounts
    #[arg(long, env = "HOLDINGS_CURRENCY", default_value = "₹")]
    pub currency: String,

    /// Formula used for today's profit and loss
    #[arg(long, env = "HOLDINGS_TODAYS_PNL", value_enum, default_value_t = TodaysPnlMethod::Aggregate)]
    pub todays_pnl: TodaysPnlMethod,

    /// Request timeout in seconds; no timeout when unset
    #[arg(long, env = "HOLDINGS_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// File receiving log output
    #[arg(long, env = "HOLDINGS_LOG_FILE", default_value = "~/.holdings-tui.log")]
    pub log_file: String,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.log_file).into_owned())
    }
}
