use serde::{Serialize, Serializer};

use super::common::{base_fields, Carrier};

/// A tracking number with an optional carrier.
///
/// Body item for stop, retrack, delete, push and info calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackNumber {
    pub number: String,
    pub carrier: Option<Carrier>,
}

impl TrackNumber {
    pub fn new(number: &str) -> Self {
        Self {
            number: number.to_string(),
            carrier: None,
        }
    }

    pub fn with_carrier(mut self, carrier: impl Into<Carrier>) -> Self {
        self.carrier = Some(carrier.into());
        self
    }
}

impl From<&str> for TrackNumber {
    fn from(number: &str) -> Self {
        TrackNumber::new(number)
    }
}

impl Serialize for TrackNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        base_fields(&self.number, self.carrier.as_ref()).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::TrackNumber;

    #[test]
    fn test_track_number_body() {
        let batch = vec![
            TrackNumber::new("RA123456789CN"),
            TrackNumber::new("1Z999AA10123456784").with_carrier(100002u32),
            TrackNumber::new("LX000000000").with_carrier(0u32),
        ];

        insta::assert_json_snapshot!(batch, @r###"
        [
          {
            "number": "RA123456789CN"
          },
          {
            "carrier": 100002,
            "number": "1Z999AA10123456784"
          },
          {
            "number": "LX000000000"
          }
        ]
        "###);
    }
}
