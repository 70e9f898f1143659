//! Client bootstrap and the demonstration entry point
//!
//! The same code serves two callers. A library user builds a [`Bootstrap`] and
//! takes the client for its own calls; the `tts-bootstrap` binary builds one
//! and runs it in [`InvocationMode::Execute`], which performs a single product
//! search and prints the response body.
//!
//! ```no_run
//! use tiktok_shop_sdk::{Bootstrap, InvocationMode};
//!
//! # async fn example() -> Result<(), tiktok_shop_sdk::Error> {
//! let bootstrap = Bootstrap::from_env()?;
//!
//! // Reuse the client, no call is made
//! let _ = bootstrap.run(InvocationMode::Import, &mut std::io::sink()).await?;
//! let client = bootstrap.into_client();
//! # let _ = client;
//! # Ok(())
//! # }
//! ```

use crate::{
    client::Client,
    config::ClientBuilder,
    credentials::Credentials,
    errors::Result,
    models::{ApiResponse, SearchProductsRequest},
};
use secrecy::ExposeSecret;
use serde_json::Value;
use std::io::Write;
use tracing::{debug, info};

/// Page size used by the demonstration call
pub const DEMO_PAGE_SIZE: u32 = 1;

/// How the hosting program wants the bootstrap to behave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationMode {
    /// Build the client for reuse, make no calls
    Import,
    /// Build the client and run the demonstration search
    Execute,
}

/// A constructed client, ready for reuse or the demonstration call
#[derive(Debug, Clone)]
pub struct Bootstrap {
    client: Client,
}

impl Bootstrap {
    /// Load credentials and the sandbox flag from the environment and build the client
    ///
    /// Fails with `Error::MissingCredential` before any client exists when a
    /// credential variable is absent.
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials::from_env()?;
        Self::from_builder(ClientBuilder::new(credentials).sandbox_from_env())
    }

    /// Build from explicit credentials and sandbox flag
    pub fn new(credentials: Credentials, sandbox: bool) -> Result<Self> {
        Self::from_builder(ClientBuilder::new(credentials).sandbox(sandbox))
    }

    /// Build from a fully configured builder
    pub fn from_builder(builder: ClientBuilder) -> Result<Self> {
        let client = builder.build()?;
        Ok(Self { client })
    }

    /// The constructed client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Take ownership of the constructed client
    pub fn into_client(self) -> Client {
        self.client
    }

    /// Run according to `mode`
    ///
    /// `Import` returns `Ok(None)` without touching the network. `Execute`
    /// runs [`run_demo`] with the loaded access token and writes to `out`.
    pub async fn run<W: Write>(
        &self,
        mode: InvocationMode,
        out: &mut W,
    ) -> Result<Option<ApiResponse<Value>>> {
        match mode {
            InvocationMode::Import => {
                debug!("bootstrap imported, skipping demonstration call");
                Ok(None)
            }
            InvocationMode::Execute => {
                let token = self.client.credentials().access_token().expose_secret();
                run_demo(&self.client, token, out).await.map(Some)
            }
        }
    }
}

/// Search one product and print the response body
///
/// Sends page size 1, the given access token, `application/json` and no
/// optional filters. On success the body is written to `out` as 2-space
/// indented JSON followed by a newline. On failure nothing is written and the
/// error is returned unchanged.
pub async fn run_demo<W: Write>(
    client: &Client,
    access_token: &str,
    out: &mut W,
) -> Result<ApiResponse<Value>> {
    let request = SearchProductsRequest::new(DEMO_PAGE_SIZE, access_token);

    info!(sandbox = client.is_sandbox(), "searching products");
    let response = client.products().search_products(&request).await?;

    let pretty = serde_json::to_string_pretty(&response.body)?;
    writeln!(out, "{}", pretty)?;
    out.flush()?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_import_mode_makes_no_call() {
        // Unroutable host: any attempted call would fail
        let creds = Credentials::new("key", "secret", "token").unwrap();
        let bootstrap =
            Bootstrap::from_builder(ClientBuilder::new(creds).base_url("https://127.0.0.1:9"))
                .unwrap();

        let mut out = Vec::new();
        let result = bootstrap.run(InvocationMode::Import, &mut out).await.unwrap();

        assert!(result.is_none());
        assert!(out.is_empty());
    }

    #[test]
    fn test_new_respects_sandbox_flag() {
        let creds = Credentials::new("key", "secret", "token").unwrap();
        let sandbox = Bootstrap::new(creds.clone(), true).unwrap();
        assert_eq!(sandbox.client().base_url(), crate::SANDBOX_BASE_URL);

        let production = Bootstrap::new(creds, false).unwrap();
        assert_eq!(production.into_client().base_url(), crate::PRODUCTION_BASE_URL);
    }
}
