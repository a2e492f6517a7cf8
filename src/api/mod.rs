pub mod dto;
pub mod error;
pub mod holdings;

pub use error::FetchFailure;
pub use holdings::HoldingsApi;
