//! Credential loading for the TikTok Shop SDK
//!
//! Three values are required before any call can be made:
//!
//! 1. **App key** (`TTS_APP_KEY`) - identifies the integration
//! 2. **App secret** (`TTS_APP_SECRET`) - signs every request
//! 3. **Access token** (`TTS_APP_ACCESS_TOKEN`) - authorizes calls for one seller
//!
//! Each must be a non-empty string. Loading fails with
//! [`Error::MissingCredential`](crate::Error::MissingCredential) naming the first
//! variable that is absent, so a misconfigured process stops before it sends a
//! malformed request.
//!
//! # Examples
//!
//! ```no_run
//! use tiktok_shop_sdk::Credentials;
//!
//! let creds = Credentials::from_env()?;
//! # Ok::<(), tiktok_shop_sdk::Error>(())
//! ```
//!
//! Lookups can also be injected, which keeps tests away from process state:
//!
//! ```
//! use std::collections::HashMap;
//! use tiktok_shop_sdk::Credentials;
//!
//! let vars = HashMap::from([
//!     ("TTS_APP_KEY", "key"),
//!     ("TTS_APP_SECRET", "secret"),
//!     ("TTS_APP_ACCESS_TOKEN", "token"),
//! ]);
//! let creds = Credentials::from_lookup(|name| vars.get(name).map(|v| v.to_string()))?;
//! assert_eq!(creds.app_key(), "key");
//! # Ok::<(), tiktok_shop_sdk::Error>(())
//! ```

use crate::errors::{Error, Result};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Environment variable holding the app key
pub const APP_KEY_VAR: &str = "TTS_APP_KEY";

/// Environment variable holding the app secret
pub const APP_SECRET_VAR: &str = "TTS_APP_SECRET";

/// Environment variable holding the seller access token
pub const ACCESS_TOKEN_VAR: &str = "TTS_APP_ACCESS_TOKEN";

/// Platform credentials
///
/// Immutable once loaded. The secret and the access token are stored as
/// [`SecretString`] and never appear in `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    app_key: String,
    app_secret: SecretString,
    access_token: SecretString,
}

impl Credentials {
    /// Build credentials from explicit values
    ///
    /// Empty or whitespace-only values are rejected with the name of the
    /// environment variable they would normally come from.
    pub fn new(
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self> {
        let app_key = require(APP_KEY_VAR, Some(app_key.into()))?;
        let app_secret = require(APP_SECRET_VAR, Some(app_secret.into()))?;
        let access_token = require(ACCESS_TOKEN_VAR, Some(access_token.into()))?;

        Ok(Self {
            app_key,
            app_secret: SecretString::new(app_secret),
            access_token: SecretString::new(access_token),
        })
    }

    /// Load credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary variable lookup
    ///
    /// Variables are checked in order: app key, app secret, access token.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_key = require(APP_KEY_VAR, lookup(APP_KEY_VAR))?;
        let app_secret = require(APP_SECRET_VAR, lookup(APP_SECRET_VAR))?;
        let access_token = require(ACCESS_TOKEN_VAR, lookup(ACCESS_TOKEN_VAR))?;

        tracing::debug!(app_key = %app_key, "loaded platform credentials");

        Ok(Self {
            app_key,
            app_secret: SecretString::new(app_secret),
            access_token: SecretString::new(access_token),
        })
    }

    /// The app key, sent in clear as a query parameter
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// The app secret used for request signing
    pub fn app_secret(&self) -> &SecretString {
        &self.app_secret
    }

    /// The seller access token
    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    pub(crate) fn secret_bytes(&self) -> &[u8] {
        self.app_secret.expose_secret().as_bytes()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_key", &self.app_key)
            .field("app_secret", &"****")
            .field("access_token", &"****")
            .finish()
    }
}

fn require(var: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::missing(var)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<&'static str, &'static str> = pairs.iter().copied().collect();
        move |name: &str| map.get(name).map(|v| v.to_string())
    }

    fn missing_var(result: Result<Credentials>) -> String {
        match result {
            Err(Error::MissingCredential { var }) => var,
            other => panic!("expected MissingCredential, got {:?}", other),
        }
    }

    #[test]
    fn test_loads_all_three() {
        let creds = Credentials::from_lookup(lookup_from(&[
            (APP_KEY_VAR, "key"),
            (APP_SECRET_VAR, "secret"),
            (ACCESS_TOKEN_VAR, "token"),
        ]))
        .unwrap();

        assert_eq!(creds.app_key(), "key");
        assert_eq!(creds.app_secret().expose_secret(), "secret");
        assert_eq!(creds.access_token().expose_secret(), "token");
    }

    #[test]
    fn test_each_variable_is_required() {
        let all = [
            (APP_KEY_VAR, "key"),
            (APP_SECRET_VAR, "secret"),
            (ACCESS_TOKEN_VAR, "token"),
        ];

        for skip in [APP_KEY_VAR, APP_SECRET_VAR, ACCESS_TOKEN_VAR] {
            let pairs: Vec<_> = all.iter().copied().filter(|(k, _)| *k != skip).collect();
            assert_eq!(missing_var(Credentials::from_lookup(lookup_from(&pairs))), skip);
        }
    }

    #[test]
    fn test_empty_values_are_missing() {
        for blank in ["", "   "] {
            let result = Credentials::from_lookup(lookup_from(&[
                (APP_KEY_VAR, "key"),
                (APP_SECRET_VAR, blank),
                (ACCESS_TOKEN_VAR, "token"),
            ]));
            assert_eq!(missing_var(result), APP_SECRET_VAR);
        }
    }

    #[test]
    fn test_first_missing_variable_is_reported() {
        let result = Credentials::from_lookup(lookup_from(&[]));
        assert_eq!(missing_var(result), APP_KEY_VAR);
    }

    #[test]
    fn test_explicit_values_are_validated() {
        assert!(Credentials::new("key", "secret", "token").is_ok());
        assert_eq!(
            missing_var(Credentials::new("key", "secret", "")),
            ACCESS_TOKEN_VAR
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::new("key", "super-secret", "tok-123").unwrap();
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("key"));
        assert!(!debug_str.contains("super-secret"));
        assert!(!debug_str.contains("tok-123"));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(APP_KEY_VAR, "env-key");
        std::env::set_var(APP_SECRET_VAR, "env-secret");
        std::env::set_var(ACCESS_TOKEN_VAR, "env-token");

        let creds = Credentials::from_env().unwrap();
        assert_eq!(creds.app_key(), "env-key");

        std::env::remove_var(ACCESS_TOKEN_VAR);
        assert_eq!(missing_var(Credentials::from_env()), ACCESS_TOKEN_VAR);

        std::env::remove_var(APP_KEY_VAR);
        std::env::remove_var(APP_SECRET_VAR);
    }
}
