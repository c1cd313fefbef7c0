use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::INDENT;
use crate::errors::SiftError;

/// Serializes `value` as JSON indented with four spaces per level.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, SiftError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf)
        .map_err(|e| SiftError::Internal(format!("Serialized JSON is not UTF-8: {}", e)))
}
