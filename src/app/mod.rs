pub mod app;
pub mod calc;
pub mod loader;
pub mod screen;
pub mod ui;
pub mod utils;

pub use app::App;
pub use loader::HoldingsLoader;
pub use screen::HoldingsScreen;
