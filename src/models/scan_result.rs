use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::control::Control;

const CONTROLS_KEY: &str = "controls";

/// One top-level entry of a scanner report: a scanned resource and the
/// controls evaluated against it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ScanResult {
    /// Controls evaluated for this resource, in report order.
    pub controls: Vec<Control>,
    /// Every other field of the entry, in report order.
    fields: Map<String, Value>,
    /// Position of `controls` among the entry's keys.
    controls_position: usize,
}

impl ScanResult {
    pub fn resource_id(&self) -> Option<&str> {
        self.fields.get("resourceID").and_then(Value::as_str)
    }
}

impl TryFrom<Map<String, Value>> for ScanResult {
    type Error = String;

    fn try_from(entry: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut fields = Map::new();
        let mut controls = None;
        let mut controls_position = 0;

        for (key, value) in entry {
            if key == CONTROLS_KEY {
                controls_position = fields.len();
                let parsed: Vec<Control> = serde_json::from_value(value)
                    .map_err(|e| format!("invalid `controls` in result entry: {}", e))?;
                controls = Some(parsed);
            } else {
                fields.insert(key, value);
            }
        }

        let controls = controls.ok_or_else(|| "result entry is missing `controls`".to_string())?;
        Ok(Self {
            controls,
            fields,
            controls_position,
        })
    }
}

impl Serialize for ScanResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        let mut controls_written = false;
        for (index, (key, value)) in self.fields.iter().enumerate() {
            if index == self.controls_position {
                map.serialize_entry(CONTROLS_KEY, &self.controls)?;
                controls_written = true;
            }
            map.serialize_entry(key, value)?;
        }
        if !controls_written {
            map.serialize_entry(CONTROLS_KEY, &self.controls)?;
        }
        map.end()
    }
}
