//! Data models for the TikTok Shop SDK
//!
//! Response bodies are treated as opaque JSON and handed back exactly as the
//! platform sent them. The request side is typed:
//!
//! * [`SearchProductsRequest`] - call parameters for a product search
//! * [`SearchProductsBody`] - optional filters sent in the request body
//! * [`ApiResponse`] - the `{ status, body }` envelope every call returns

use serde::{Deserialize, Serialize};

/// Response envelope returned by every call
///
/// `body` is the decoded JSON payload, untouched. Key order is preserved.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status code
    pub status: u16,
    /// Decoded response body
    pub body: T,
    /// Request ID reported by the platform, from the body or `x-tt-logid`
    pub request_id: Option<String>,
}

/// Parameters for a product search
///
/// # Example
///
/// ```
/// use tiktok_shop_sdk::{ProductStatus, SearchProductsBody, SearchProductsRequest};
///
/// // First page, one product, no filters
/// let request = SearchProductsRequest::new(1, "access-token");
/// assert_eq!(request.content_type, "application/json");
///
/// // Next page for a given shop, active products only
/// let request = SearchProductsRequest::new(50, "access-token")
///     .page_token("cursor-from-previous-page")
///     .shop_cipher("GCP_XXXX")
///     .body(SearchProductsBody {
///         status: Some(ProductStatus::Activate),
///         ..Default::default()
///     });
/// ```
#[derive(Clone)]
pub struct SearchProductsRequest {
    /// Number of products per page (1..=100)
    pub page_size: u32,
    /// Seller access token, sent as `x-tts-access-token`
    pub access_token: String,
    /// Content type header value
    pub content_type: String,
    /// Pagination cursor from a previous response
    pub page_token: Option<String>,
    /// Shop identifier for cross-border sellers
    pub shop_cipher: Option<String>,
    /// Optional body filters; `{}` is sent when absent
    pub body: Option<SearchProductsBody>,
}

impl SearchProductsRequest {
    /// Create a request with no filters and a JSON content type
    pub fn new(page_size: u32, access_token: impl Into<String>) -> Self {
        Self {
            page_size,
            access_token: access_token.into(),
            content_type: crate::DEFAULT_CONTENT_TYPE.to_string(),
            page_token: None,
            shop_cipher: None,
            body: None,
        }
    }

    /// Override the content type
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Continue from a pagination cursor
    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }

    /// Target a specific shop
    pub fn shop_cipher(mut self, cipher: impl Into<String>) -> Self {
        self.shop_cipher = Some(cipher.into());
        self
    }

    /// Attach body filters
    pub fn body(mut self, body: SearchProductsBody) -> Self {
        self.body = Some(body);
        self
    }
}

impl std::fmt::Debug for SearchProductsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchProductsRequest")
            .field("page_size", &self.page_size)
            .field("access_token", &"****")
            .field("content_type", &self.content_type)
            .field("page_token", &self.page_token)
            .field("shop_cipher", &self.shop_cipher)
            .field("body", &self.body)
            .finish()
    }
}

/// Product lifecycle status used as a search filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    /// Any status
    All,
    /// Draft listing
    Draft,
    /// Under review
    Pending,
    /// Failed review
    Failed,
    /// Live
    Activate,
    /// Deactivated by the seller
    SellerDeactivated,
    /// Deactivated by the platform
    PlatformDeactivated,
    /// Frozen
    Freeze,
    /// Deleted
    Deleted,
}

/// Optional filters for a product search
///
/// Unset fields are left out of the serialized body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchProductsBody {
    /// Product status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    /// Seller SKU codes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_skus: Option<Vec<String>>,
    /// Created at or after (unix seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_ge: Option<i64>,
    /// Created before or at (unix seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_le: Option<i64>,
    /// Updated at or after (unix seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time_ge: Option<i64>,
    /// Updated before or at (unix seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time_le: Option<i64>,
    /// Category tree version, e.g. `v2`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_version: Option<String>,
    /// Listing quality tiers such as `POOR`, `FAIR`, `GOOD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_quality_tiers: Option<Vec<String>>,
    /// Return the draft version of products with pending edits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_draft_version: Option<bool>,
}

/// Platform response envelope, only used to extract error details
#[derive(Debug, Default)]
pub(crate) struct ApiEnvelope {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub request_id: Option<String>,
}

impl ApiEnvelope {
    /// Read envelope fields from an already decoded body
    pub(crate) fn from_body(body: &serde_json::Value) -> Self {
        let text = |key: &str| body.get(key).and_then(serde_json::Value::as_str).map(String::from);
        Self {
            code: body.get("code").and_then(serde_json::Value::as_i64),
            message: text("message"),
            request_id: text("request_id"),
        }
    }
}
