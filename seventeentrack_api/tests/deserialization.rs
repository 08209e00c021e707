use seventeentrack_api::types::TrackResponse;
use seventeentrack_api::Carrier;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_track_info() {
    let resp: TrackResponse = serde_json::from_str(&load_fixture("gettrackinfo.json")).unwrap();
    assert_eq!(resp.code, 0);
    assert_eq!(resp.data.accepted.len(), 1);

    let accepted = &resp.data.accepted[0];
    assert_eq!(accepted["number"], "RA123456789CN");
    assert_eq!(
        accepted["track_info"]["latest_event"]["description"],
        "Departed from sorting center"
    );

    let rejected = &resp.data.rejected[0];
    assert_eq!(rejected.number, "XX000000000");
    assert_eq!(rejected.carrier, None);
    assert_eq!(rejected.error.as_ref().unwrap().code, -18019909);
}

#[test]
fn deserialize_rejection_with_carrier() {
    let resp: TrackResponse =
        serde_json::from_str(&load_fixture("gettrackinfo_empty.json")).unwrap();
    assert!(resp.data.accepted.is_empty());
    assert_eq!(resp.data.rejected[0].carrier, Some(Carrier::Code(3011)));
    assert!(resp.data.rejected[0].reason().contains("register first"));
}

#[test]
fn deserialize_request_level_errors() {
    let resp: TrackResponse = serde_json::from_str(&load_fixture("quota_exceeded.json")).unwrap();
    assert_eq!(resp.code, -18010013);
    assert!(resp.data.accepted.is_empty());
    assert!(resp.data.rejected.is_empty());
    assert_eq!(resp.data.errors.len(), 1);
    assert_eq!(resp.data.errors[0].message, "Tracking quota exhausted.");
}

#[test]
fn envelope_from_verbatim_value() {
    let value: serde_json::Value = serde_json::from_str(&load_fixture("register.json")).unwrap();
    let resp = TrackResponse::from_value(value).unwrap();
    assert_eq!(resp.data.accepted[0]["carrier"], 100001);
}

#[test]
fn missing_data_defaults_to_empty() {
    let resp: TrackResponse = serde_json::from_str(r#"{"code": 0}"#).unwrap();
    assert!(resp.data.accepted.is_empty());
    assert!(resp.data.rejected.is_empty());
}

#[test]
fn deserialize_without_code() {
    let resp: TrackResponse =
        serde_json::from_str(r#"{"data":{"accepted":[{"number":"RA123"}],"rejected":[]}}"#).unwrap();
    assert_eq!(resp.code, 0);
    assert_eq!(resp.data.accepted[0]["number"], "RA123");
}

#[test]
fn deserialize_rejection_without_error() {
    let resp: TrackResponse = serde_json::from_str(
        r#"{"code":0,"data":{"accepted":[{"number":"RA1"}],"rejected":[{"number":"RA2"}]}}"#,
    )
    .unwrap();
    assert_eq!(resp.data.rejected[0].number, "RA2");
    assert!(resp.data.rejected[0].error.is_none());
    assert_eq!(resp.data.rejected[0].reason(), "rejected");
}
