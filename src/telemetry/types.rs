use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// One telemetry reading. `timestamp` is the payload's millisecond counter
/// since boot, never wall-clock time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Sample {
    #[serde(default, deserialize_with = "deserialize_device_timestamp")]
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

impl Sample {
    pub fn at(timestamp: i64) -> Self {
        Self {
            timestamp,
            ..Self::default()
        }
    }
}

/// A recorded launch as stored by the ground station. Dates are kept raw:
/// they may be missing, `null`, malformed or one of the sentinel strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Launch {
    pub launch_id: u32,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(rename = "variables", default)]
    pub samples: Vec<Sample>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    clap::ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Channel {
    Humidity,
    Temperature,
    Latitude,
    Longitude,
    Altitude,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Humidity,
        Channel::Temperature,
        Channel::Latitude,
        Channel::Longitude,
        Channel::Altitude,
    ];

    pub fn value(&self, sample: &Sample) -> Option<f64> {
        match self {
            Channel::Humidity => sample.humidity,
            Channel::Temperature => sample.temperature,
            Channel::Latitude => sample.latitude,
            Channel::Longitude => sample.longitude,
            Channel::Altitude => sample.altitude,
        }
    }

    /// Name shown on the dashboard tabs.
    pub fn display_name(&self) -> &'static str {
        match self {
            Channel::Humidity => "Humedad",
            Channel::Temperature => "Temperatura",
            Channel::Latitude => "Latitud",
            Channel::Longitude => "Longitud",
            Channel::Altitude => "Altitud",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            Channel::Humidity => "Humedad (%)",
            Channel::Temperature => "Temperatura (°C)",
            Channel::Latitude => "Latitud (°)",
            Channel::Longitude => "Longitud (°)",
            Channel::Altitude => "Altitud (m)",
        }
    }
}

// The ground-station publisher forwards the counter as a float.
fn deserialize_device_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Integer(i64),
        Float(f64),
    }

    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Integer(ms) => Ok(ms),
        RawTimestamp::Float(ms) => Ok(ms.trunc() as i64),
    }
}
