//! Shared request infrastructure: [`Carrier`] codes, the batch-size guard,
//! and the base `number`/`carrier` fields every item starts from.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Error;

/// Maximum number of items accepted in a single call.
pub const MAX_BATCH_SIZE: usize = 40;

/// Fails with [`Error::InvalidArgument`] when a batch holds more than
/// [`MAX_BATCH_SIZE`] items.
pub fn check_batch_size(len: usize) -> Result<(), Error> {
    if len > MAX_BATCH_SIZE {
        return Err(Error::InvalidArgument(format!(
            "Batch of {} items exceeds the maximum of {} per call",
            len, MAX_BATCH_SIZE
        )));
    }
    Ok(())
}

/// Carrier code identifying a shipping company.
///
/// The API identifies carriers by numeric key (e.g. `3011` for China Post),
/// but some calls also take a string code. Both serialize as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Carrier {
    Code(u32),
    Name(String),
}

impl Carrier {
    /// `0` and `""` mean "no carrier" and are never sent.
    pub fn is_empty(&self) -> bool {
        match self {
            Carrier::Code(code) => *code == 0,
            Carrier::Name(name) => name.is_empty(),
        }
    }

    pub(crate) fn to_value(&self) -> Value {
        match self {
            Carrier::Code(code) => Value::from(*code),
            Carrier::Name(name) => Value::String(name.clone()),
        }
    }
}

impl From<u32> for Carrier {
    fn from(code: u32) -> Self {
        Carrier::Code(code)
    }
}

impl From<&str> for Carrier {
    fn from(name: &str) -> Self {
        Carrier::Name(name.to_string())
    }
}

impl From<String> for Carrier {
    fn from(name: String) -> Self {
        Carrier::Name(name)
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Carrier::Code(code) => write!(f, "{}", code),
            Carrier::Name(name) => f.write_str(name),
        }
    }
}

/// Numeric strings become [`Carrier::Code`], anything else [`Carrier::Name`].
impl FromStr for Carrier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u32>() {
            Ok(code) => Carrier::Code(code),
            Err(_) => Carrier::Name(s.to_string()),
        })
    }
}

/// Starts an item body: `number` always, `carrier` only when non-empty.
pub(crate) fn base_fields(number: &str, carrier: Option<&Carrier>) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("number".to_string(), Value::String(number.to_string()));
    if let Some(carrier) = carrier.filter(|c| !c.is_empty()) {
        map.insert("carrier".to_string(), carrier.to_value());
    }
    map
}

/// Merges caller-supplied parameters over `base`; the caller wins on collisions.
pub(crate) fn merge_params(mut base: Map<String, Value>, params: &Map<String, Value>) -> Map<String, Value> {
    for (key, value) in params {
        base.insert(key.clone(), value.clone());
    }
    base
}
