pub mod control;
pub mod document;
pub mod scan_result;

pub use control::Control;
pub use document::Document;
pub use scan_result::ScanResult;
