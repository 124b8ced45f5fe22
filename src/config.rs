//! API Configuration
//!
//! Resolves the task endpoint. Priority (highest first):
//! 1. `<meta name="task-api-endpoint" content="...">` in the host page
//! 2. `TASK_API_ENDPOINT` at build time
//! 3. `DEFAULT_ENDPOINT`

use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/tasks";

/// Name of the host-page meta tag carrying a runtime override
pub const ENDPOINT_META_NAME: &str = "task-api-endpoint";

/// Errors from an explicitly configured endpoint
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported endpoint scheme {0:?} (expected http or https)")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub endpoint: Url,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: parse_endpoint(DEFAULT_ENDPOINT).expect("default endpoint is valid"),
        }
    }
}

impl ApiConfig {
    /// Pick the first non-blank source and validate it
    pub fn resolve(runtime: Option<&str>, build_time: Option<&str>) -> Result<Self, ConfigError> {
        let configured = [runtime, build_time]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty());
        match configured {
            Some(value) => Ok(Self { endpoint: parse_endpoint(value)? }),
            None => Ok(Self::default()),
        }
    }

    /// Resolve from the page and build environment, falling back to the default
    pub fn load() -> Self {
        let runtime = endpoint_from_meta();
        match Self::resolve(runtime.as_deref(), option_env!("TASK_API_ENDPOINT")) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[Config] {}, using {}", e, DEFAULT_ENDPOINT);
                Self::default()
            }
        }
    }
}

fn parse_endpoint(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

/// `content` of the endpoint meta tag, if the page has one
fn endpoint_from_meta() -> Option<String> {
    if !cfg!(target_arch = "wasm32") {
        return None;
    }
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", ENDPOINT_META_NAME);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = ApiConfig::resolve(None, None).unwrap();
        assert_eq!(config.endpoint.as_str(), "http://localhost:8080/api/tasks");
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_runtime_overrides_build_time() {
        let config = ApiConfig::resolve(
            Some("https://tasks.example.com/api/tasks"),
            Some("http://build.example.com/api/tasks"),
        )
        .unwrap();
        assert_eq!(config.endpoint.host_str(), Some("tasks.example.com"));
    }

    #[test]
    fn test_blank_values_are_skipped() {
        let config = ApiConfig::resolve(Some("  "), Some("http://build.example.com/api/tasks")).unwrap();
        assert_eq!(config.endpoint.host_str(), Some("build.example.com"));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(matches!(ApiConfig::resolve(Some("not a url"), None), Err(ConfigError::InvalidUrl(_))));
        assert!(matches!(
            ApiConfig::resolve(Some("ftp://example.com/api/tasks"), None),
            Err(ConfigError::UnsupportedScheme(s)) if s == "ftp"
        ));
    }

    #[test]
    fn test_load_off_browser() {
        if option_env!("TASK_API_ENDPOINT").is_none() {
            assert_eq!(ApiConfig::load(), ApiConfig::default());
        }
    }
}
