use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::PASSED_STATUS;

/// A single check entry of a scan result.
///
/// The scanner's control object is kept verbatim so every field, including
/// ones this crate never reads, is emitted exactly as it was parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Control(Map<String, Value>);

impl Control {
    /// The nested `status.status` string, if the control carries one.
    pub fn status_label(&self) -> Option<&str> {
        self.0.get("status")?.get("status")?.as_str()
    }

    /// Only the literal `"passed"` counts as passed. A missing or non-string
    /// status is treated as not passed.
    pub fn is_passed(&self) -> bool {
        self.status_label() == Some(PASSED_STATUS)
    }

    pub fn control_id(&self) -> Option<&str> {
        self.0.get("controlID").and_then(Value::as_str)
    }
}
