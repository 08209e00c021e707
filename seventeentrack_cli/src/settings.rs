//! Resolves the SDK [`Config`] from flags and the environment.
//!
//! Precedence: command-line flag, then environment (including `.env`, loaded
//! by `main`), then the SDK's default host.

use std::time::Duration;

use anyhow::{bail, Result};
use seventeentrack_api::Config;

pub const API_KEY_ENV: &str = "SEVENTEENTRACK_API_KEY";
pub const HOST_ENV: &str = "SEVENTEENTRACK_HOST";

pub fn resolve_config<F>(
    api_key: Option<&str>,
    host: Option<&str>,
    timeout_secs: Option<u64>,
    env: F,
) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = match api_key {
        Some(key) => key.to_string(),
        None => match env(API_KEY_ENV) {
            Some(key) => key,
            None => bail!("No API key: pass --api-key or set {}", API_KEY_ENV),
        },
    };
    let host = host.map(str::to_string).or_else(|| env(HOST_ENV));

    let mut config = Config::new(api_key, host.as_deref())?;
    if let Some(secs) = timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    tracing::debug!("Using host {}", config.host());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use seventeentrack_api::DEFAULT_HOST;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn flag_wins_over_env() {
        let env = env_of(&[(API_KEY_ENV, "env-key"), (HOST_ENV, "http://env-host")]);
        let config = resolve_config(Some("flag-key"), Some("http://flag-host"), None, env).unwrap();
        assert_eq!(config.api_key(), "flag-key");
        assert_eq!(config.host(), "http://flag-host");
    }

    #[test]
    fn env_used_when_no_flag() {
        let env = env_of(&[(API_KEY_ENV, "env-key"), (HOST_ENV, "http://env-host")]);
        let config = resolve_config(None, None, Some(15), env).unwrap();
        assert_eq!(config.api_key(), "env-key");
        assert_eq!(config.host(), "http://env-host");
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn default_host_when_unset() {
        let config = resolve_config(Some("k"), None, None, env_of(&[])).unwrap();
        assert_eq!(config.host(), DEFAULT_HOST);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = resolve_config(None, None, None, env_of(&[])).unwrap_err();
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn empty_api_key_is_rejected_by_sdk() {
        assert!(resolve_config(Some(""), None, None, env_of(&[])).is_err());
    }
}
