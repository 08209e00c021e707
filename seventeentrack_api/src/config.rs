//! Connection settings: API key, host, and the headers sent on every call.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use url::Url;

use crate::Error;

/// Production base URL of the tracking API.
pub const DEFAULT_HOST: &str = "https://api.17track.net/track";

/// Version segment inserted between the host and every endpoint path.
pub const API_VERSION: &str = "/v2.1";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "17token";

/// The fixed endpoints of the v2.1 API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Register,
    ChangeCarrier,
    StopTrack,
    ReTrack,
    GetTrackInfo,
    ChangeInfo,
    DeleteTrack,
    Push,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Register => "/register",
            Endpoint::ChangeCarrier => "/changecarrier",
            Endpoint::StopTrack => "/stoptrack",
            Endpoint::ReTrack => "/retrack",
            Endpoint::GetTrackInfo => "/gettrackinfo",
            Endpoint::ChangeInfo => "/changeinfo",
            Endpoint::DeleteTrack => "/deletetrack",
            Endpoint::Push => "/push",
        }
    }
}

/// Immutable client configuration.
///
/// Validated once at construction: the API key must be non-empty and usable
/// as a header value, and the host must be an absolute http(s) URL.
#[derive(Clone)]
pub struct Config {
    api_key: String,
    api_key_header: HeaderValue,
    host: String,
    timeout: Option<Duration>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Creates a config, falling back to [`DEFAULT_HOST`] when `host` is `None`.
    pub fn new(api_key: impl Into<String>, host: Option<&str>) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "API key must not be empty".to_string(),
            ));
        }
        let mut api_key_header = HeaderValue::from_str(&api_key).map_err(|_| {
            Error::InvalidArgument("API key contains characters not allowed in a header".to_string())
        })?;
        api_key_header.set_sensitive(true);

        let host = host.unwrap_or(DEFAULT_HOST).trim_end_matches('/').to_string();
        let parsed = Url::parse(&host)
            .map_err(|e| Error::InvalidArgument(format!("Invalid host {:?}: {}", host, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidArgument(format!(
                "Host must use http or https, got {:?}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            api_key,
            api_key_header,
            host,
            timeout: None,
        })
    }

    /// Sets a per-request timeout. Without one, requests wait as long as the
    /// transport allows.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Effective host, without a trailing slash.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Headers required on every call.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, self.api_key_header.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Full URL for an endpoint: host, then [`API_VERSION`], then the endpoint path.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}{}", self.host, API_VERSION, endpoint.path())
    }
}
