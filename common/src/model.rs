// Wire types shared by backend and frontend.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A monitored sensor. Seeded at startup, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: i32,
    pub name: String,
    pub location: String,
    /// Open-ended category ("temperatura", "humedad", ...), only used for
    /// unit lookup and iconography.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A single time-stamped measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub id: i32,
    /// Not validated against the sensor list.
    pub sensor_id: i32,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

/// Body of `POST /api/lecturas`. The id is assigned by the store and the
/// timestamp defaults to the time of insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReading {
    pub sensor_id: i32,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}
