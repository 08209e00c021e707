use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Carrier;

/// Envelope returned by every v2.1 endpoint.
///
/// `code` is `0` when the request as a whole was processed; per-number
/// outcomes are split between `data.accepted` and `data.rejected`.
/// Request-level failures (bad key, exhausted quota) come back with a
/// non-zero `code` and `data.errors`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TrackResponse {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub data: TrackData,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TrackData {
    /// Accepted items, left as raw JSON: their shape differs per endpoint.
    #[serde(default)]
    pub accepted: Vec<Value>,
    #[serde(default)]
    pub rejected: Vec<Rejected>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiErrorDetail>,
}

/// A number the API refused, with the reason when one is given.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Rejected {
    #[serde(default)]
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<Carrier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorDetail>,
}

impl Rejected {
    /// `"<message> (<code>)"`, or `"rejected"` when no reason was given.
    pub fn reason(&self) -> String {
        match &self.error {
            Some(err) => format!("{} ({})", err.message, err.code),
            None => "rejected".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl TrackResponse {
    /// Parses a verbatim response returned by one of the mutation calls.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
