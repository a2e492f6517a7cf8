use anyhow::Result;
use clap::Parser;
use holdings_tui::{
    api::HoldingsApi,
    app::{App, HoldingsScreen, ui::UiSettings},
    config::Config,
    logging::init_logging,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::parse();
    init_logging(&config.log_path())?;

    info!(url = %config.url, todays_pnl = %config.todays_pnl, "starting holdings screen");

    let api = HoldingsApi::new(&config.url, config.timeout())?;
    let screen = HoldingsScreen::new(config.todays_pnl);
    let settings = UiSettings::new(config.title.clone(), config.currency.clone());

    let mut app = App::new(screen, settings);
    app.run(api).await?;

    Ok(())
}
