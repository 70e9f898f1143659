//! TikTok Shop client implementation
//!
//! The [`Client`] owns the HTTP connection pool, the resolved host and the
//! credentials used for signing. API groups borrow it: [`Client::products`]
//! returns a [`ProductsApi`] for the product endpoints.
//!
//! # Architecture
//!
//! - **HTTP Layer**: `reqwest` with a per-client timeout and connection pool
//! - **Signing**: every request gets `app_key`, `timestamp` and `sign` query
//!   parameters computed from the app secret
//! - **Error mapping**: transport errors, non-2xx statuses and non-zero
//!   envelope codes each map to a distinct [`Error`] variant
//!
//! Calls are made exactly once. Nothing is retried.
//!
//! # Example
//!
//! ```no_run
//! use tiktok_shop_sdk::{ClientBuilder, Credentials, SearchProductsRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let creds = Credentials::from_env()?;
//! let token = secrecy::ExposeSecret::expose_secret(creds.access_token()).clone();
//! let client = ClientBuilder::new(creds).sandbox(true).build()?;
//!
//! let resp = client
//!     .products()
//!     .search_products(&SearchProductsRequest::new(1, token))
//!     .await?;
//! println!("{}", serde_json::to_string_pretty(&resp.body)?);
//! # Ok(())
//! # }
//! ```

use crate::{
    config::ClientConfig,
    credentials::Credentials,
    endpoints::Endpoints,
    errors::{Error, Result},
    models::{ApiEnvelope, ApiResponse},
    products::ProductsApi,
    signing,
    util::{encode_query, header_str, unix_timestamp},
};

#[cfg(feature = "metrics")]
use crate::telemetry;
use reqwest::{Client as HttpClient, Method, Response};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, trace, warn};

const USER_AGENT_PREFIX: &str = "tiktok-shop-sdk-rust";

/// Header carrying the seller access token
pub(crate) const ACCESS_TOKEN_HEADER: &str = "x-tts-access-token";

/// Response header with the platform log id
const LOG_ID_HEADER: &str = "x-tt-logid";

/// TikTok Shop Open API client
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct Client {
    pub(crate) config: ClientConfig,
    http: HttpClient,
    endpoints: Endpoints,
    #[cfg(feature = "metrics")]
    pub(crate) metrics: telemetry::Metrics,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url)
            .field("sandbox", &self.config.sandbox)
            .field("app_key", &self.config.credentials.app_key())
            .field("timeout", &self.config.timeout)
            .finish()
    }
}

/// A call waiting to be signed and sent
pub(crate) struct SignedCall<'a> {
    pub operation: &'static str,
    pub method: Method,
    pub path: String,
    pub params: BTreeMap<String, String>,
    pub access_token: &'a str,
    pub content_type: &'a str,
    pub body: String,
}

impl Client {
    /// Create a new client with the given configuration
    pub(crate) fn new(config: ClientConfig) -> Result<Self> {
        let user_agent = if let Some(suffix) = &config.user_agent_suffix {
            format!("{}/{} {}", USER_AGENT_PREFIX, crate::VERSION, suffix)
        } else {
            format!("{}/{}", USER_AGENT_PREFIX, crate::VERSION)
        };

        let http = HttpClient::builder()
            .user_agent(user_agent)
            .timeout(config.timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .https_only(!config.allow_insecure_http)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        #[cfg(feature = "metrics")]
        let metrics = telemetry::Metrics::new(&config.telemetry_config);

        debug!(
            base_url = %config.base_url,
            sandbox = config.sandbox,
            "constructed TikTok Shop client"
        );

        Ok(Self {
            endpoints: Endpoints::new(&config.base_url),
            http,
            #[cfg(feature = "metrics")]
            metrics,
            config,
        })
    }

    /// The resolved base URL this client sends requests to
    pub fn base_url(&self) -> &str {
        self.endpoints.base_url()
    }

    /// Whether the client was configured for the sandbox
    pub fn is_sandbox(&self) -> bool {
        self.config.sandbox
    }

    /// The configuration the client was built from
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The credentials used for signing
    pub fn credentials(&self) -> &Credentials {
        &self.config.credentials
    }

    /// Product API group
    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    pub(crate) fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Sign, send and decode a JSON call
    pub(crate) async fn execute(&self, call: SignedCall<'_>) -> Result<ApiResponse<Value>> {
        let operation = call.operation;

        #[cfg(feature = "metrics")]
        let start_time = std::time::Instant::now();

        let request = self.build_request(call)?;
        let result = match self.http.execute(request).await {
            Ok(response) => self.parse_response(response).await,
            Err(e) => Err(Error::from(e)),
        };

        match &result {
            Ok(resp) => {
                trace!(operation, status = resp.status, "call succeeded");
                #[cfg(feature = "metrics")]
                self.metrics
                    .record_request(operation, resp.status, start_time.elapsed().as_secs_f64());
            }
            Err(e) => {
                warn!(operation, error = %e, "call failed");
                #[cfg(feature = "metrics")]
                self.metrics.record_error(operation, &e.kind());
            }
        }

        result
    }

    // Helper methods

    /// Build a signed request
    fn build_request(&self, call: SignedCall<'_>) -> Result<reqwest::Request> {
        let SignedCall {
            operation,
            method,
            path,
            mut params,
            access_token,
            content_type,
            body,
        } = call;

        let creds = &self.config.credentials;
        let _ = params.insert("app_key".to_string(), creds.app_key().to_string());
        let _ = params.insert("timestamp".to_string(), unix_timestamp().to_string());

        let sign = signing::sign(creds.secret_bytes(), &path, &params, content_type, &body)?;
        let _ = params.insert("sign".to_string(), sign);

        let url = format!("{}?{}", self.endpoints.url(&path), encode_query(&params));
        debug!(operation, %method, path = %path, "sending request");

        self.http
            .request(method, url)
            .header(ACCESS_TOKEN_HEADER, access_token)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .build()
            .map_err(|e| Error::Other(format!("Failed to build request: {}", e)))
    }

    /// Turn a response into an envelope or an API error
    async fn parse_response(&self, response: Response) -> Result<ApiResponse<Value>> {
        let status = response.status();
        let log_id = header_str(response.headers(), LOG_ID_HEADER);
        let bytes = response.bytes().await.map_err(Error::from)?;

        if !status.is_success() {
            let envelope = serde_json::from_slice::<Value>(&bytes)
                .map(|body| ApiEnvelope::from_body(&body))
                .unwrap_or_default();
            return Err(Error::Http {
                status: status.as_u16(),
                code: envelope.code,
                message: envelope
                    .message
                    .unwrap_or_else(|| format!("HTTP error {}", status.as_u16())),
                request_id: envelope.request_id.or(log_id),
            });
        }

        let body: Value = serde_json::from_slice(&bytes)?;
        let envelope = ApiEnvelope::from_body(&body);
        let request_id = envelope.request_id.clone().or(log_id);

        if let Some(code) = envelope.code.filter(|c| *c != 0) {
            return Err(Error::Http {
                status: status.as_u16(),
                code: Some(code),
                message: envelope.message.unwrap_or_default(),
                request_id,
            });
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
            request_id,
        })
    }
}
