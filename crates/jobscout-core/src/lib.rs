pub mod error;
pub mod listing;
pub mod report;
pub mod scrape;
pub mod search;
pub mod sink;

pub use error::{Error, Result};
