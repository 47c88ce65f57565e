mod extractor;
mod selectors;
mod types;

pub use extractor::Extractor;
pub use selectors::ListingSelectors;
pub use types::*;
