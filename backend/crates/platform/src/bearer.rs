//! Bearer Token Transport
//!
//! Extraction of a credential from the `Authorization` header using the
//! Bearer scheme (RFC 6750). This is the single, fixed location protected
//! requests present their token in.

use axum::http::{HeaderMap, header};

/// Scheme prefix expected in the Authorization header
const BEARER_PREFIX: &str = "Bearer ";

/// Extract a bearer token from request headers
///
/// Returns `None` when the header is absent, uses a different scheme, or
/// carries an empty token. The caller decides whether absence is an error.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_authorization(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        let headers = headers_with_authorization("Bearer abc.def");
        assert_eq!(extract_bearer_token(&headers), Some("abc.def".to_string()));
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with_authorization("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_empty_token() {
        let headers = headers_with_authorization("Bearer ");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        let headers = headers_with_authorization("bearer abc.def");
        assert_eq!(extract_bearer_token(&headers), None);
    }
}
