use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::common::{base_fields, merge_params, Carrier};

/// Body item for `/register`.
///
/// Anything the API accepts beyond `number` and `carrier` (`tag`, `lang`,
/// `param`, `auto_detection`, ...) goes into `params`, which is merged over
/// the base fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterItem {
    pub number: String,
    pub carrier: Option<Carrier>,
    pub params: Map<String, Value>,
}

impl RegisterItem {
    pub fn new(number: &str) -> Self {
        Self {
            number: number.to_string(),
            ..Default::default()
        }
    }

    pub fn with_carrier(mut self, carrier: impl Into<Carrier>) -> Self {
        self.carrier = Some(carrier.into());
        self
    }

    /// Adds one extra parameter, replacing any earlier value for `key`.
    pub fn with_param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// Merges a whole map of extra parameters.
    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params.extend(params);
        self
    }

    /// Sets the free-form `tag` the API echoes back in responses and pushes.
    pub fn with_tag(self, tag: &str) -> Self {
        self.with_param("tag", tag)
    }
}

impl Serialize for RegisterItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        merge_params(base_fields(&self.number, self.carrier.as_ref()), &self.params)
            .serialize(serializer)
    }
}
