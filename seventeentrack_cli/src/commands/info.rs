//! The `info` subcommand: fetch current tracking status.

use anyhow::{bail, Result};
use seventeentrack_api::types::TrackResponse;
use seventeentrack_api::Client;

use super::manage::NumbersArgs;
use crate::output::{print_track_info, OutputFormat};

pub async fn run(args: &NumbersArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.get_track_info_raw(&args.track_numbers()).await?;
    ensure_processed(&resp)?;
    if resp.data.accepted.is_empty() && resp.data.rejected.is_empty() {
        println!("No tracking information returned.");
        return Ok(());
    }
    print_track_info(&resp, format)
}

/// Fails when the API refused the request as a whole (bad key, exhausted
/// quota) rather than individual numbers.
fn ensure_processed(resp: &TrackResponse) -> Result<()> {
    if !resp.data.errors.is_empty() {
        let messages: Vec<String> = resp
            .data
            .errors
            .iter()
            .map(|e| format!("{} ({})", e.message, e.code))
            .collect();
        bail!("Request failed: {}", messages.join("; "));
    }
    if resp.code != 0 {
        bail!("Request failed with API code {}", resp.code);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_exhaustion_is_an_error() {
        let json_str = include_str!("../../../seventeentrack_api/tests/fixtures/quota_exceeded.json");
        let resp: TrackResponse = serde_json::from_str(json_str).unwrap();
        let err = ensure_processed(&resp).unwrap_err();
        assert!(err.to_string().contains("Tracking quota exhausted."));
        assert!(err.to_string().contains("-18010013"));
    }

    #[test]
    fn test_non_zero_code_without_errors_is_an_error() {
        let resp = TrackResponse::from_value(serde_json::json!({"code": -18010002})).unwrap();
        let err = ensure_processed(&resp).unwrap_err();
        assert!(err.to_string().contains("-18010002"));
    }

    #[test]
    fn test_processed_response_passes() {
        let json_str = include_str!("../../../seventeentrack_api/tests/fixtures/gettrackinfo.json");
        let resp: TrackResponse = serde_json::from_str(json_str).unwrap();
        assert!(ensure_processed(&resp).is_ok());

        let resp = TrackResponse::from_value(serde_json::json!({"data": {"accepted": []}})).unwrap();
        assert!(ensure_processed(&resp).is_ok());
    }
}
