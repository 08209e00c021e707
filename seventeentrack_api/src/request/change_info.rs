use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::common::{base_fields, Carrier};

/// Body item for `/changeinfo`: updates stored metadata (`tag`, `remark`,
/// `order_no`, ...) of a tracked number.
///
/// `items` is always sent, as an empty object if nothing was set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangeInfoItem {
    pub number: String,
    pub carrier: Option<Carrier>,
    pub items: Map<String, Value>,
}

impl ChangeInfoItem {
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

    pub fn with_item(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.items.insert(key.to_string(), value.into());
        self
    }

    pub fn with_items(mut self, items: Map<String, Value>) -> Self {
        self.items.extend(items);
        self
    }
}

impl Serialize for ChangeInfoItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = base_fields(&self.number, self.carrier.as_ref());
        map.insert("items".to_string(), Value::Object(self.items.clone()));
        map.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::ChangeInfoItem;

    #[test]
    fn test_change_info_item() {
        insta::assert_json_snapshot!(
            ChangeInfoItem::new("RA123")
                .with_carrier(3011u32)
                .with_item("tag", "vip")
                .with_item("remark", "fragile"),
            @r###"
        {
          "carrier": 3011,
          "items": {
            "remark": "fragile",
            "tag": "vip"
          },
          "number": "RA123"
        }
        "###
        );

        insta::assert_json_snapshot!(ChangeInfoItem::new("RA123"), @r###"
        {
          "items": {},
          "number": "RA123"
        }
        "###);
    }
}
