//! Endpoint check: the endpoint must be a bare path, not a full URL.

use url::{ParseError, Url};

use super::UserInputError;

/// Returns `endpoint` unchanged unless it carries a URL scheme.
///
/// A scheme means the caller pasted a full URL; the error suggests the path
/// component instead, taken verbatim from the input (no percent-encoding,
/// no dot-segment removal).
pub fn validate_endpoint(endpoint: &str) -> Result<String, UserInputError> {
    // `Url::parse` ignores leading/trailing C0 controls and spaces.
    let trimmed = endpoint.trim_matches(|c: char| c <= ' ');
    let rest = match Url::parse(endpoint) {
        Ok(parsed) => match strip_scheme(trimmed) {
            Some(rest) => rest,
            None => {
                return Err(UserInputError::endpoint_contains_scheme(
                    endpoint,
                    parsed.path(),
                ))
            }
        },
        Err(ParseError::RelativeUrlWithoutBase) => return Ok(endpoint.to_string()),
        // Scheme present but the rest does not parse (e.g. "http://").
        Err(_) => match strip_scheme(trimmed) {
            Some(rest) => rest,
            None => return Ok(endpoint.to_string()),
        },
    };
    Err(UserInputError::endpoint_contains_scheme(
        endpoint,
        &raw_path(rest),
    ))
}

/// Returns what follows `scheme:` when `s` starts with a syntactically valid
/// scheme (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`).
fn strip_scheme(s: &str) -> Option<&str> {
    let (scheme, rest) = s.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    Some(rest)
}

/// Path of the text following `scheme:`: authority, query, fragment and
/// `;params` on the last segment dropped. Empty paths become `/`.
fn raw_path(rest: &str) -> String {
    let after_authority = match rest.strip_prefix("//") {
        Some(authority_and_path) => {
            match authority_and_path.find(|c: char| matches!(c, '/' | '?' | '#')) {
                Some(idx) => &authority_and_path[idx..],
                None => "",
            }
        }
        None => rest,
    };
    let path = match after_authority.find(|c: char| matches!(c, '?' | '#')) {
        Some(idx) => &after_authority[..idx],
        None => after_authority,
    };
    let last_segment = path.rfind('/').unwrap_or(0);
    let path = match path[last_segment..].find(';') {
        Some(idx) => &path[..last_segment + idx],
        None => path,
    };
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}
