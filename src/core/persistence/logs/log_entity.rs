use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::log::model::{LogRecord, SensorSeries};

/// Stored log row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub vin: Option<String>,
    pub motor_type: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewLog {
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub vin: Option<String>,
    pub motor_type: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewGroup {
    pub group_name: String,
    pub sensors: SensorSeries,
}

impl From<&LogEntity> for LogRecord {
    fn from(entity: &LogEntity) -> Self {
        LogRecord {
            id: entity.id,
            name: entity.name.clone(),
            description: entity.description.clone(),
            // same shape serde gives NaiveDateTime on the wire
            created_at: entity.created_at.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
            vin: entity.vin.clone(),
            motor_type: entity.motor_type.clone(),
        }
    }
}
