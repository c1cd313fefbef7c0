pub mod filter;
pub mod formatter;

pub use filter::{filter_document, filter_results, FilterOutcome, FilterSummary};
pub use formatter::to_pretty_json;
