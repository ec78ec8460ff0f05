//! Request preview: the full URL a validated request would hit.
//!
//! Display only. Nothing here talks to the network.

use anyhow::{Context, Result};
use std::fmt;
use url::Url;

use crate::method::HttpMethod;
use crate::options::ValidatedOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPreview {
    pub method: HttpMethod,
    pub url: Url,
}

impl RequestPreview {
    /// Joins `base_url` with the endpoint and appends the query parameters.
    ///
    /// The base path is kept (`https://host/v2` + `/users` -> `/v2/users`);
    /// query pairs are form-encoded, keys sorted, repeated values in order.
    pub fn build(base_url: &str, opts: &ValidatedOptions) -> Result<Self> {
        let mut url =
            Url::parse(base_url).with_context(|| format!("invalid api_url: {base_url}"))?;
        if url.cannot_be_a_base() {
            anyhow::bail!("api_url cannot be used as a base: {base_url}");
        }

        let path = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            opts.endpoint.trim_start_matches('/')
        );
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);

        if !opts.params.is_empty() {
            url.query_pairs_mut().extend_pairs(opts.params.pairs());
        }

        Ok(Self {
            method: opts.method,
            url,
        })
    }
}

impl fmt::Display for RequestPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

impl ValidatedOptions {
    /// Shorthand for [`RequestPreview::build`].
    pub fn preview(&self, base_url: &str) -> Result<RequestPreview> {
        RequestPreview::build(base_url, self)
    }
}
