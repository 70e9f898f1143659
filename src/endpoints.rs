//! API endpoint URL construction

/// Product API version this crate speaks
pub const PRODUCT_API_VERSION: &str = "202502";

/// Endpoint builder
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Create a new endpoints builder
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the full URL for a path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // Products
    pub fn search_products_path(&self) -> String {
        format!("/product/{}/products/search", PRODUCT_API_VERSION)
    }
}
