//! TikTok Shop SDK bootstrap for Rust
//!
//! Loads platform credentials from the environment, builds a signed API client
//! for the production or sandbox host, and exposes the product search call.
//!
//! # Features
//!
//! - Async/await support with tokio runtime
//! - Fail-fast credential loading (`TTS_APP_KEY`, `TTS_APP_SECRET`,
//!   `TTS_APP_ACCESS_TOKEN`)
//! - HMAC-SHA256 request signing
//! - Production/sandbox host selection
//! - Distinct errors for transport, authentication and parameter failures
//! - Secret values redacted from debug output
//!
//! # Example
//!
//! ```no_run
//! use tiktok_shop_sdk::{ClientBuilder, Credentials, SearchProductsRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::new("app-key", "app-secret", "access-token")?;
//!     let client = ClientBuilder::new(creds).sandbox(false).build()?;
//!
//!     let resp = client
//!         .products()
//!         .search_products(&SearchProductsRequest::new(1, "access-token"))
//!         .await?;
//!     println!("{}", serde_json::to_string_pretty(&resp.body)?);
//!
//!     Ok(())
//! }
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    unsafe_code,
    unused_results
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bootstrap;
mod client;
mod config;
mod credentials;
mod endpoints;
mod errors;
mod models;
mod products;
mod signing;
/// Telemetry and observability support
#[cfg(feature = "metrics")]
pub mod telemetry;

#[cfg(not(feature = "metrics"))]
mod telemetry;
mod util;

pub use bootstrap::{run_demo, Bootstrap, InvocationMode, DEMO_PAGE_SIZE};
pub use client::Client;
pub use config::{ClientBuilder, ClientConfig, SANDBOX_VAR};
pub use credentials::{Credentials, ACCESS_TOKEN_VAR, APP_KEY_VAR, APP_SECRET_VAR};
pub use endpoints::PRODUCT_API_VERSION;
pub use errors::{Error, ErrorKind, Result};
pub use models::*;
pub use products::{ProductsApi, MAX_PAGE_SIZE};
pub use signing::Signer;

// Re-export commonly used types
pub use secrecy::SecretString;

/// SDK version, matches Cargo.toml version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Production Open API host
pub const PRODUCTION_BASE_URL: &str = "https://open-api.tiktokglobalshop.com";

/// Sandbox Open API host
pub const SANDBOX_BASE_URL: &str = "https://open-api-sandbox.tiktokglobalshop.com";

/// Content type sent when none is given
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";
