mod writer;

pub use writer::{CsvSink, SaveOutcome};
