use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::common::{merge_params, Carrier};

/// Body item for `/changecarrier`.
///
/// Fields are layered in order: `number` and `carrier_new`, then
/// `carrier_old` when non-empty, then `params` on top.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeCarrierItem {
    pub number: String,
    pub carrier_new: Carrier,
    pub carrier_old: Option<Carrier>,
    pub params: Map<String, Value>,
}

impl ChangeCarrierItem {
    pub fn new(number: &str, carrier_new: impl Into<Carrier>) -> Self {
        Self {
            number: number.to_string(),
            carrier_new: carrier_new.into(),
            carrier_old: None,
            params: Map::new(),
        }
    }

    /// The carrier currently on record, needed when a number was registered
    /// under several carriers.
    pub fn with_carrier_old(mut self, carrier_old: impl Into<Carrier>) -> Self {
        self.carrier_old = Some(carrier_old.into());
        self
    }

    pub fn with_param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params.extend(params);
        self
    }
}

impl Serialize for ChangeCarrierItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut base = Map::new();
        base.insert("number".to_string(), Value::String(self.number.clone()));
        base.insert("carrier_new".to_string(), self.carrier_new.to_value());
        if let Some(old) = self.carrier_old.as_ref().filter(|c| !c.is_empty()) {
            base.insert("carrier_old".to_string(), old.to_value());
        }
        merge_params(base, &self.params).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::ChangeCarrierItem;

    #[test]
    fn test_change_carrier_item() {
        insta::assert_json_snapshot!(
            ChangeCarrierItem::new("RA123", 5u32).with_carrier_old(3u32),
            @r###"
        {
          "carrier_new": 5,
          "carrier_old": 3,
          "number": "RA123"
        }
        "###
        );
    }

    #[test]
    fn empty_old_carrier_is_omitted() {
        let body = serde_json::to_value(ChangeCarrierItem::new("RA123", 5u32).with_carrier_old(0u32)).unwrap();
        assert_eq!(body, json!({"number": "RA123", "carrier_new": 5}));
    }

    #[test]
    fn params_override_base_fields() {
        let body = serde_json::to_value(
            ChangeCarrierItem::new("RA123", 5u32)
                .with_carrier_old(3u32)
                .with_param("carrier_old", 7)
                .with_param("final_carrier", 21051),
        )
        .unwrap();
        assert_eq!(
            body,
            json!({"number": "RA123", "carrier_new": 5, "carrier_old": 7, "final_carrier": 21051})
        );
    }
}
