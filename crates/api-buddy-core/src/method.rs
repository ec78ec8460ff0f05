//! HTTP methods and the per-method CLI flags that select one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP verb of the request being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

/// Every supported method, in resolution order. Both the conflict count and
/// the resolution scan iterate this array.
pub const HTTP_METHODS: [HttpMethod; 5] = [
    HttpMethod::Get,
    HttpMethod::Post,
    HttpMethod::Patch,
    HttpMethod::Put,
    HttpMethod::Delete,
];

impl HttpMethod {
    /// Upper-case verb as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Option name of the boolean flag selecting this method (`get`, `post`, ...).
    pub fn flag_name(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Patch => "patch",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
        }
    }

    /// Looks up the method whose flag is called `name`.
    pub fn from_flag_name(name: &str) -> Option<HttpMethod> {
        HTTP_METHODS.into_iter().find(|m| m.flag_name() == name)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown HTTP method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HTTP_METHODS
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

/// One boolean per method, as handed over by the argument parser.
///
/// Nothing here enforces mutual exclusion; that is checked by
/// [`validate_method`](crate::validate::validate_method).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MethodFlags {
    #[serde(default)]
    pub get: bool,
    #[serde(default)]
    pub post: bool,
    #[serde(default)]
    pub patch: bool,
    #[serde(default)]
    pub put: bool,
    #[serde(default)]
    pub delete: bool,
}

impl MethodFlags {
    pub fn is_set(&self, method: HttpMethod) -> bool {
        match method {
            HttpMethod::Get => self.get,
            HttpMethod::Post => self.post,
            HttpMethod::Patch => self.patch,
            HttpMethod::Put => self.put,
            HttpMethod::Delete => self.delete,
        }
    }

    pub fn set(&mut self, method: HttpMethod, value: bool) {
        let slot = match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Patch => &mut self.patch,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Delete => &mut self.delete,
        };
        *slot = value;
    }

    /// Builder-style variant of [`set`](Self::set) that turns `method` on.
    pub fn with(mut self, method: HttpMethod) -> Self {
        self.set(method, true);
        self
    }

    /// Methods whose flag is set, in [`HTTP_METHODS`] order.
    pub fn selected(&self) -> Vec<HttpMethod> {
        HTTP_METHODS
            .into_iter()
            .filter(|m| self.is_set(*m))
            .collect()
    }
}
