//! HTTP header utilities for the feed fetchers

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

/// Build a bearer-auth header map for the prop-line feed, if a token is present.
///
/// Returns `Ok(None)` when no token is configured (public feeds).
pub fn maybe_bearer_header_map(token: Option<&str>) -> Result<Option<HeaderMap>> {
    match token.map(str::trim).filter(|t| !t.is_empty()) {
        Some(token) => {
            let mut h = HeaderMap::new();
            h.insert(ACCEPT, HeaderValue::from_static("application/json"));
            h.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
            Ok(Some(h))
        }
        None => Ok(None),
    }
}
