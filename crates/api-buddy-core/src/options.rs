//! Raw and validated option records.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::method::{HttpMethod, MethodFlags};
use crate::query::QueryParams;
use crate::validate::UserInputError;

/// Option name of the endpoint field.
pub const ENDPOINT: &str = "endpoint";
/// Option name of the query parameter tokens.
pub const PARAMS: &str = "params";
/// Field name of the resolved method in [`ValidatedOptions`].
pub const METHOD: &str = "method";

/// Loosely-typed option value, as produced by an argument parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl OptionValue {
    fn kind(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "a boolean",
            OptionValue::Str(_) => "a string",
            OptionValue::List(_) => "a list of strings",
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Str(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::Str(v)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(v: Vec<String>) -> Self {
        OptionValue::List(v)
    }
}

/// Options as handed over by the argument parser, before validation.
///
/// `passthrough` holds every option the validator does not interpret, in the
/// order the parser produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    pub endpoint: String,
    pub params: Vec<String>,
    pub methods: MethodFlags,
    pub passthrough: Vec<(String, OptionValue)>,
}

impl RawOptions {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn with_param(mut self, token: impl Into<String>) -> Self {
        self.params.push(token.into());
        self
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.methods.set(method, true);
        self
    }

    pub fn with_passthrough(
        mut self,
        name: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Self {
        self.passthrough.push((name.into(), value.into()));
        self
    }

    /// Builds a record from ordered `(name, value)` entries.
    ///
    /// `endpoint` (string) and `params` (list) are required. Method flags
    /// (`get`, `post`, ...) must be booleans when present; a missing flag
    /// counts as unset. Everything else is kept as passthrough, in order.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, UserInputError>
    where
        I: IntoIterator<Item = (K, OptionValue)>,
        K: Into<String>,
    {
        let mut endpoint = None;
        let mut params = None;
        let mut methods = MethodFlags::default();
        let mut passthrough = Vec::new();

        for (name, value) in entries {
            let name = name.into();
            if name == ENDPOINT {
                match value {
                    OptionValue::Str(s) => endpoint = Some(s),
                    other => {
                        return Err(UserInputError::invalid_option_type(
                            &name,
                            "a string",
                            other.kind(),
                        ))
                    }
                }
            } else if name == PARAMS {
                match value {
                    OptionValue::List(tokens) => params = Some(tokens),
                    other => {
                        return Err(UserInputError::invalid_option_type(
                            &name,
                            "a list of strings",
                            other.kind(),
                        ))
                    }
                }
            } else if let Some(method) = HttpMethod::from_flag_name(&name) {
                match value {
                    OptionValue::Bool(on) => methods.set(method, on),
                    other => {
                        return Err(UserInputError::invalid_option_type(
                            &name,
                            "a boolean",
                            other.kind(),
                        ))
                    }
                }
            } else {
                passthrough.push((name, value));
            }
        }

        Ok(Self {
            endpoint: endpoint.ok_or_else(|| UserInputError::missing_option(ENDPOINT))?,
            params: params.ok_or_else(|| UserInputError::missing_option(PARAMS))?,
            methods,
            passthrough,
        })
    }
}

/// Request descriptor produced by [`validate_options`](crate::validate::validate_options).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOptions {
    pub endpoint: String,
    pub params: QueryParams,
    pub method: HttpMethod,
    pub passthrough: Vec<(String, OptionValue)>,
}

impl ValidatedOptions {
    /// First passthrough value named `name`.
    pub fn passthrough(&self, name: &str) -> Option<&OptionValue> {
        self.passthrough
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}

/// Serialized as one flat map: `endpoint`, `params`, `method`, then the
/// passthrough entries in their original order.
impl Serialize for ValidatedOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(ENDPOINT, &self.endpoint)?;
        map.serialize_entry(PARAMS, &self.params)?;
        map.serialize_entry(METHOD, &self.method)?;
        for (name, value) in &self.passthrough {
            // Validated fields win over a passthrough entry of the same name.
            if name == ENDPOINT || name == PARAMS || name == METHOD {
                continue;
            }
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
