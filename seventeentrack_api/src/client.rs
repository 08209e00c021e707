//! HTTP client for the 17track v2.1 API.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::{
    check_batch_size,
    config::{Config, Endpoint},
    types::TrackResponse,
    Carrier, ChangeCarrierItem, ChangeInfoItem, Error, RegisterItem, TrackNumber,
};

/// Tracking API client.
///
/// Every operation comes in a single-number form and a `_multi` batch form.
/// The single form always builds a one-element batch, so the batch-size
/// guard and the request path are shared. Calls are independent round trips;
/// nothing is retried.
pub struct Client {
    config: Config,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client pointing at the production API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::from_config(Config::new(api_key, None)?)
    }

    /// Creates a client with a custom host. Used for testing with wiremock.
    pub fn with_host(api_key: &str, host: &str) -> Result<Self, Error> {
        Self::from_config(Config::new(api_key, Some(host))?)
    }

    pub fn from_config(config: Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Call(e.to_string())
        })?;
        Ok(Self { config, http })
    }

    /// Uses a caller-built `reqwest::Client` (proxies, pools, default timeouts).
    pub fn with_http_client(config: Config, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn post<T, B>(&self, endpoint: Endpoint, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.config.endpoint_url(endpoint);
        let mut request = self
            .http
            .post(&url)
            .headers(self.config.headers())
            .json(body);
        if let Some(timeout) = self.config.timeout() {
            request = request.timeout(timeout);
        }

        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to call {}: {}", url, e);
            Error::Call(e.to_string())
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Call(e.to_string())
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request to {} failed with status {}: {}", url, status, snippet);
            return Err(Error::Call(format!("HTTP {}: {}", status, snippet)));
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            Error::Call(format!("Failed to parse response: {}", e))
        })
    }

    async fn post_batch<T, I>(&self, endpoint: Endpoint, items: &[I]) -> Result<T, Error>
    where
        T: DeserializeOwned,
        I: Serialize,
    {
        check_batch_size(items.len())?;
        tracing::debug!("POST {} with {} item(s)", endpoint.path(), items.len());
        self.post(endpoint, items).await
    }

    /// Registers a number for tracking. `params` is merged over the base
    /// fields, so it can also override `carrier`.
    pub async fn register(
        &self,
        number: &str,
        carrier: Option<Carrier>,
        params: Map<String, Value>,
    ) -> Result<Value, Error> {
        let item = RegisterItem {
            number: number.to_string(),
            carrier,
            params,
        };
        self.register_multi(&[item]).await
    }

    pub async fn register_multi(&self, items: &[RegisterItem]) -> Result<Value, Error> {
        self.post_batch(Endpoint::Register, items).await
    }

    /// Moves a tracked number to another carrier.
    pub async fn change_carrier(
        &self,
        number: &str,
        carrier_new: Carrier,
        carrier_old: Option<Carrier>,
        params: Map<String, Value>,
    ) -> Result<Value, Error> {
        let item = ChangeCarrierItem {
            number: number.to_string(),
            carrier_new,
            carrier_old,
            params,
        };
        self.change_carrier_multi(&[item]).await
    }

    pub async fn change_carrier_multi(&self, items: &[ChangeCarrierItem]) -> Result<Value, Error> {
        self.post_batch(Endpoint::ChangeCarrier, items).await
    }

    pub async fn stop_tracking(&self, number: &str, carrier: Option<Carrier>) -> Result<Value, Error> {
        self.stop_tracking_multi(&[track_number(number, carrier)])
            .await
    }

    pub async fn stop_tracking_multi(&self, items: &[TrackNumber]) -> Result<Value, Error> {
        self.post_batch(Endpoint::StopTrack, items).await
    }

    /// Resumes tracking of a stopped number.
    pub async fn re_track(&self, number: &str, carrier: Option<Carrier>) -> Result<Value, Error> {
        self.re_track_multi(&[track_number(number, carrier)]).await
    }

    pub async fn re_track_multi(&self, items: &[TrackNumber]) -> Result<Value, Error> {
        self.post_batch(Endpoint::ReTrack, items).await
    }

    /// Updates the stored metadata of a tracked number.
    pub async fn change_track(
        &self,
        number: &str,
        carrier: Option<Carrier>,
        items: Map<String, Value>,
    ) -> Result<Value, Error> {
        let item = ChangeInfoItem {
            number: number.to_string(),
            carrier,
            items,
        };
        self.change_track_multi(&[item]).await
    }

    pub async fn change_track_multi(&self, items: &[ChangeInfoItem]) -> Result<Value, Error> {
        self.post_batch(Endpoint::ChangeInfo, items).await
    }

    pub async fn del_track(&self, number: &str, carrier: Option<Carrier>) -> Result<Value, Error> {
        self.del_track_multi(&[track_number(number, carrier)]).await
    }

    pub async fn del_track_multi(&self, items: &[TrackNumber]) -> Result<Value, Error> {
        self.post_batch(Endpoint::DeleteTrack, items).await
    }

    /// Asks the API to push the current status to the configured webhook.
    pub async fn self_push(&self, number: &str, carrier: Option<Carrier>) -> Result<Value, Error> {
        self.self_push_multi(&[track_number(number, carrier)]).await
    }

    pub async fn self_push_multi(&self, items: &[TrackNumber]) -> Result<Value, Error> {
        self.post_batch(Endpoint::Push, items).await
    }

    /// Fetches the tracking record of one number.
    ///
    /// Returns `data.accepted[0]`, or [`Error::NotFound`] when the number
    /// was not accepted.
    pub async fn get_track_info(&self, number: &str, carrier: Option<Carrier>) -> Result<Value, Error> {
        let accepted = self
            .get_multi_track_info(&[track_number(number, carrier)])
            .await?;
        accepted.into_iter().next().ok_or_else(|| Error::NotFound {
            number: number.to_string(),
        })
    }

    /// Fetches tracking records for a batch; returns only `data.accepted`.
    pub async fn get_multi_track_info(&self, items: &[TrackNumber]) -> Result<Vec<Value>, Error> {
        Ok(self.get_track_info_raw(items).await?.data.accepted)
    }

    /// Fetches tracking records for a batch and returns the whole envelope,
    /// rejections included.
    pub async fn get_track_info_raw(&self, items: &[TrackNumber]) -> Result<TrackResponse, Error> {
        let resp: TrackResponse = self.post_batch(Endpoint::GetTrackInfo, items).await?;
        if !resp.data.rejected.is_empty() {
            tracing::warn!(
                "{} of {} number(s) rejected by gettrackinfo",
                resp.data.rejected.len(),
                items.len()
            );
        }
        for err in &resp.data.errors {
            tracing::warn!("gettrackinfo error {}: {}", err.code, err.message);
        }
        Ok(resp)
    }
}

fn track_number(number: &str, carrier: Option<Carrier>) -> TrackNumber {
    TrackNumber {
        number: number.to_string(),
        carrier,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }

    #[test]
    fn client_creation_with_defaults() {
        let client = Client::new("test-key").unwrap();
        assert_eq!(client.config().host(), crate::DEFAULT_HOST);
    }

    #[test]
    fn client_creation_with_host() {
        let client = Client::with_host("test-key", "http://localhost:1234").unwrap();
        assert_eq!(client.config().host(), "http://localhost:1234");
    }

    #[test]
    fn client_creation_rejects_empty_key() {
        assert!(matches!(Client::new(""), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() <= 2000 + "...[truncated]".len());

        assert_eq!(truncate_body("short"), "short");
    }
}
