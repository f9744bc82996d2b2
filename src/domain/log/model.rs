use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One uploaded log as listed by `GET /api/logs/`.
///
/// `created_at` stays the raw ISO-8601 string from the wire; the view
/// decides how to format it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motor_type: Option<String>,
}

/// A single measurement of one sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorSample {
    pub timestamp: f64,
    pub value: Option<f64>,
}

/// Sensor name -> ordered samples.
pub type SensorSeries = BTreeMap<String, Vec<SensorSample>>;

/// A measuring block of a log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogGroup {
    pub id: i64,
    pub log_id: i64,
    pub group_name: String,
    pub sensors: SensorSeries,
}

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct LogUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl LogUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_without_metadata_deserializes() {
        let record: LogRecord = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "a",
            "description": "d",
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.vin, None);
        assert_eq!(record.motor_type, None);
    }
}
