//! Product API group (version 202502)
//!
//! Obtained through [`Client::products`](crate::Client::products).

use crate::{
    client::{Client, SignedCall},
    errors::{Error, Result},
    models::{ApiResponse, SearchProductsRequest},
};
use reqwest::Method;
use serde_json::Value;
use std::collections::BTreeMap;

/// Largest page the search endpoint accepts
pub const MAX_PAGE_SIZE: u32 = 100;

/// Product endpoints
#[derive(Debug, Clone, Copy)]
pub struct ProductsApi<'a> {
    client: &'a Client,
}

impl<'a> ProductsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Search products
    ///
    /// `POST /product/202502/products/search`
    ///
    /// Parameters are validated before anything is sent. The response body is
    /// returned as the platform sent it.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidParameter` for a page size outside `1..=100` or an empty
    ///   access token or content type
    /// * `Error::Http` for a non-success status or a non-zero envelope code
    /// * `Error::Network` / `Error::Timeout` when the call cannot complete
    pub async fn search_products(
        &self,
        request: &SearchProductsRequest,
    ) -> Result<ApiResponse<Value>> {
        validate(request)?;

        let mut params = BTreeMap::new();
        let _ = params.insert("page_size".to_string(), request.page_size.to_string());
        if let Some(token) = &request.page_token {
            let _ = params.insert("page_token".to_string(), token.clone());
        }
        if let Some(cipher) = &request.shop_cipher {
            let _ = params.insert("shop_cipher".to_string(), cipher.clone());
        }

        let body = match &request.body {
            Some(filters) => serde_json::to_string(filters)?,
            None => "{}".to_string(),
        };

        self.client
            .execute(SignedCall {
                operation: "search_products",
                method: Method::POST,
                path: self.client.endpoints().search_products_path(),
                params,
                access_token: &request.access_token,
                content_type: &request.content_type,
                body,
            })
            .await
    }
}

fn validate(request: &SearchProductsRequest) -> Result<()> {
    if request.page_size == 0 || request.page_size > MAX_PAGE_SIZE {
        return Err(Error::InvalidParameter(format!(
            "page_size must be between 1 and {}, got {}",
            MAX_PAGE_SIZE, request.page_size
        )));
    }
    if request.access_token.trim().is_empty() {
        return Err(Error::InvalidParameter("access_token is empty".to_string()));
    }
    if request.content_type.trim().is_empty() {
        return Err(Error::InvalidParameter("content_type is empty".to_string()));
    }
    Ok(())
}
