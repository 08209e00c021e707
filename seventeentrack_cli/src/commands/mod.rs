//! CLI subcommand implementations.

pub mod change_carrier;
pub mod change_info;
pub mod info;
pub mod manage;
pub mod register;

use serde_json::{Map, Value};
use seventeentrack_api::Carrier;

/// Parses a carrier argument: digits become a numeric key, anything else a code.
pub fn parse_carrier(s: &str) -> Result<Carrier, String> {
    if s.trim().is_empty() {
        return Err("carrier must not be empty".to_string());
    }
    s.trim().parse::<Carrier>().map_err(|e| e.to_string())
}

/// Parses `KEY=VALUE`. The value is read as JSON when it parses as JSON
/// (`true`, `3011`, `{"a":1}`, `"quoted"`), otherwise kept as a string.
pub fn parse_key_val(s: &str) -> Result<(String, Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {:?}", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in {:?}", s));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

pub fn to_map(pairs: &[(String, Value)]) -> Map<String, Value> {
    pairs.iter().cloned().collect()
}
