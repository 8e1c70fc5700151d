use std::time::Duration;

use crate::error::FetchError;

/// Public PokeAPI v2 endpoint
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

const BASE_URL_VAR: &str = "POKEAPI_BASE_URL";
const TIMEOUT_VAR: &str = "POKEAPI_TIMEOUT_SECS";

/// Settings for [`HttpProvider`](crate::HttpProvider)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("typedex/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiConfig {
    /// Defaults overridden by `POKEAPI_BASE_URL` and `POKEAPI_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, FetchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, FetchError> {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_VAR).filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(secs) = lookup(TIMEOUT_VAR) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                FetchError::Config(format!("{TIMEOUT_VAR} must be whole seconds, got {secs:?}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, POKEAPI_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("typedex/"));
    }

    #[test]
    fn test_env_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (BASE_URL_VAR, "http://localhost:8000/api/v2/"),
            (TIMEOUT_VAR, "3"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8000/api/v2");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_env_blank_url_ignored() {
        let config = ApiConfig::from_lookup(lookup_from(&[(BASE_URL_VAR, "  ")])).unwrap();
        assert_eq!(config.base_url, POKEAPI_URL);
    }

    #[test]
    fn test_env_invalid_timeout() {
        let result = ApiConfig::from_lookup(lookup_from(&[(TIMEOUT_VAR, "soon")]));
        assert!(matches!(result, Err(FetchError::Config(_))));
    }
}
