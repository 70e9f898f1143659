use crate::{credentials::Credentials, errors::Result, telemetry::TelemetryConfig, Error};
use std::time::Duration;

/// Environment variable selecting the sandbox host
pub const SANDBOX_VAR: &str = "TTS_SANDBOX";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Resolved base URL of the Open API
    pub base_url: String,
    /// Whether the client targets the sandbox environment
    pub sandbox: bool,
    /// Platform credentials
    pub credentials: Credentials,
    /// Request timeout
    pub timeout: Duration,
    /// User agent suffix
    pub user_agent_suffix: Option<String>,
    /// Telemetry configuration
    pub telemetry_config: TelemetryConfig,
    /// Allow plain HTTP base URLs
    pub allow_insecure_http: bool,
}

/// Builder for creating a configured Client
///
/// ```
/// use tiktok_shop_sdk::{ClientBuilder, Credentials};
///
/// let creds = Credentials::new("key", "secret", "token")?;
/// let client = ClientBuilder::new(creds).sandbox(true).build()?;
/// assert_eq!(client.base_url(), "https://open-api-sandbox.tiktokglobalshop.com");
/// # Ok::<(), tiktok_shop_sdk::Error>(())
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    credentials: Credentials,
    sandbox: bool,
    base_url: Option<String>,
    timeout_ms: u64,
    user_agent_suffix: Option<String>,
    telemetry_config: TelemetryConfig,
    allow_insecure_http: bool,
}

impl ClientBuilder {
    /// Create a new client builder targeting production
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            sandbox: false,
            base_url: None,
            timeout_ms: crate::DEFAULT_TIMEOUT_MS,
            user_agent_suffix: None,
            telemetry_config: TelemetryConfig::default(),
            allow_insecure_http: false,
        }
    }

    /// Select the sandbox (`true`) or production (`false`) host
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Read the sandbox flag from `TTS_SANDBOX`
    ///
    /// `1`, `true` and `yes` (any case) select the sandbox. Anything else,
    /// including an unset variable, leaves production selected.
    pub fn sandbox_from_env(self) -> Self {
        let flag = std::env::var(SANDBOX_VAR).ok();
        self.sandbox(parse_flag(flag.as_deref()))
    }

    /// Override the base URL, e.g. for a proxy or a mock server
    ///
    /// Takes precedence over the sandbox flag when resolving the host.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout in milliseconds
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Add a custom user agent suffix
    pub fn user_agent_extra(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Configure telemetry/metrics
    #[cfg(feature = "metrics")]
    pub fn with_telemetry(mut self, config: TelemetryConfig) -> Self {
        self.telemetry_config = config;
        self
    }

    /// Enable telemetry with default settings
    #[cfg(feature = "metrics")]
    pub fn enable_telemetry(mut self) -> Self {
        self.telemetry_config.enabled = true;
        self
    }

    /// Accept `http://` base URLs (local mock servers only)
    pub fn allow_insecure_http(mut self) -> Self {
        self.allow_insecure_http = true;
        self
    }

    /// Resolve the host without building a client
    pub fn resolved_base_url(&self) -> String {
        let url = match &self.base_url {
            Some(url) => url.as_str(),
            None if self.sandbox => crate::SANDBOX_BASE_URL,
            None => crate::PRODUCTION_BASE_URL,
        };
        url.trim_end_matches('/').to_string()
    }

    /// Build the configuration without constructing an HTTP client
    pub fn build_config(self) -> Result<ClientConfig> {
        let url = self.resolved_base_url();

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(Error::Config(
                "Base URL must start with http:// or https://".to_string(),
            ));
        }

        if url.starts_with("http://") && !self.allow_insecure_http {
            return Err(Error::Config(
                "HTTP URLs are not allowed. Use .allow_insecure_http() for local testing".to_string(),
            ));
        }

        Ok(ClientConfig {
            base_url: url,
            sandbox: self.sandbox,
            credentials: self.credentials,
            timeout: Duration::from_millis(self.timeout_ms),
            user_agent_suffix: self.user_agent_suffix,
            telemetry_config: self.telemetry_config,
            allow_insecure_http: self.allow_insecure_http,
        })
    }

    /// Build the client with the configured options
    pub fn build(self) -> Result<crate::Client> {
        crate::client::Client::new(self.build_config()?)
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn creds() -> Credentials {
        Credentials::new("key", "secret", "token").unwrap()
    }

    #[test]
    fn test_defaults_to_production() {
        let config = ClientBuilder::new(creds()).build_config().unwrap();
        assert!(!config.sandbox);
        assert_eq!(config.base_url, crate::PRODUCTION_BASE_URL);
        assert_eq!(config.timeout, Duration::from_millis(crate::DEFAULT_TIMEOUT_MS));
    }

    #[test]
    fn test_sandbox_flag_selects_host() {
        let sandbox = ClientBuilder::new(creds()).sandbox(true);
        assert_eq!(sandbox.resolved_base_url(), crate::SANDBOX_BASE_URL);

        let production = ClientBuilder::new(creds()).sandbox(false);
        assert_eq!(production.resolved_base_url(), crate::PRODUCTION_BASE_URL);
    }

    #[test]
    fn test_override_wins_over_sandbox() {
        let builder = ClientBuilder::new(creds())
            .sandbox(true)
            .base_url("https://proxy.example.com/");
        assert_eq!(builder.resolved_base_url(), "https://proxy.example.com");
    }

    #[test]
    fn test_builder_validates_url() {
        let result = ClientBuilder::new(creds()).base_url("not-a-url").build_config();
        assert!(matches!(result.unwrap_err(), Error::Config(_)));
    }

    #[test]
    fn test_builder_rejects_http() {
        let result = ClientBuilder::new(creds())
            .base_url("http://127.0.0.1:8080")
            .build_config();
        assert!(matches!(result.unwrap_err(), Error::Config(_)));

        let result = ClientBuilder::new(creds())
            .base_url("http://127.0.0.1:8080")
            .allow_insecure_http()
            .build_config();
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("1")));
        assert!(parse_flag(Some("TRUE")));
        assert!(parse_flag(Some(" yes ")));
        assert!(!parse_flag(Some("0")));
        assert!(!parse_flag(Some("")));
        assert!(!parse_flag(None));
    }

    #[test]
    #[serial]
    fn test_sandbox_from_env() {
        std::env::set_var(SANDBOX_VAR, "true");
        let builder = ClientBuilder::new(creds()).sandbox_from_env();
        assert_eq!(builder.resolved_base_url(), crate::SANDBOX_BASE_URL);

        std::env::remove_var(SANDBOX_VAR);
        let builder = ClientBuilder::new(creds()).sandbox_from_env();
        assert_eq!(builder.resolved_base_url(), crate::PRODUCTION_BASE_URL);
    }
}
