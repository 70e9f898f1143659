//! Utility functions

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeMap;

/// RFC 3986 unreserved characters stay as-is, everything else is escaped
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Extract header value as string
pub fn header_str(headers: &http::HeaderMap, name: &str) -> Option<String> {
    headers.get(name)?.to_str().ok().map(|s| s.to_string())
}

/// Encode query parameters in key order
pub fn encode_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                percent_encoding::utf8_percent_encode(k, QUERY_VALUE),
                percent_encoding::utf8_percent_encode(v, QUERY_VALUE)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Current unix time in seconds
pub fn unix_timestamp() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_str() {
        let mut headers = http::HeaderMap::new();
        let _ = headers.insert("x-tt-logid", http::HeaderValue::from_static("log-1"));

        assert_eq!(header_str(&headers, "x-tt-logid"), Some("log-1".to_string()));
        assert_eq!(header_str(&headers, "missing"), None);
    }

    #[test]
    fn test_encode_query() {
        let mut params = BTreeMap::new();
        let _ = params.insert("page_size".to_string(), "1".to_string());
        let _ = params.insert("page_token".to_string(), "a b/c=".to_string());
        let _ = params.insert("app_key".to_string(), "my-key_1.x~".to_string());

        assert_eq!(
            encode_query(&params),
            "app_key=my-key_1.x~&page_size=1&page_token=a%20b%2Fc%3D"
        );
    }

    #[test]
    fn test_unix_timestamp_is_recent() {
        // 2023-11-14
        assert!(unix_timestamp() > 1_700_000_000);
    }
}
