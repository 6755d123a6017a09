//! Bearer credential extraction.
//!
//! Sources, in order:
//! - `Authorization: Bearer <token>`
//! - `?token=<token>` query parameter
//!
//! No shape validation happens here; any non-empty string is passed on.

use axum::http::{HeaderMap, header};

const BEARER_PREFIX: &str = "Bearer ";
const TOKEN_QUERY_PARAM: &str = "token";

/// Pull the candidate token out of a request.
///
/// The header wins whenever it yields a token; the query parameter is only consulted
/// when the header is absent, not UTF-8, not a `Bearer` credential, or empty.
pub fn extract_token(headers: &HeaderMap, query: Option<&str>) -> Option<String> {
    from_header(headers).or_else(|| query.and_then(from_query))
}

fn from_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

fn from_query(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == TOKEN_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|token| !token.is_empty())
}
