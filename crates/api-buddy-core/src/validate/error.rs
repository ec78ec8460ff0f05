//! User input errors raised by option validation.

use thiserror::Error;

use crate::method::HttpMethod;

/// A validation failure caused by what the user typed.
///
/// Carries a short [`title`](Self::title) and a longer
/// [`message`](Self::message) for the CLI error reporter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct UserInputError {
    pub kind: UserInputErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserInputErrorKind {
    /// More than one method flag was set.
    #[error("More than one HTTP method was selected ({}). Pick one at most.", join_methods(.selected))]
    ConflictingMethodFlags { selected: Vec<HttpMethod> },

    /// A query token without exactly one `=`.
    #[error("\"{param}\" should contain one and only one \"=\"")]
    MalformedQueryParam { param: String },

    /// The endpoint is a full URL rather than a path.
    #[error("You don't need to supply the full URL, just the path.\nDid you mean \"{suggested_path}\"?")]
    EndpointContainsScheme {
        endpoint: String,
        suggested_path: String,
    },

    /// A required option is absent from a loosely-typed record.
    #[error("The \"{name}\" option is required")]
    MissingOption { name: String },

    /// An option carries the wrong kind of value.
    #[error("The \"{name}\" option should be {expected}, got {found}")]
    InvalidOptionType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

fn join_methods(methods: &[HttpMethod]) -> String {
    methods
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl UserInputError {
    pub fn conflicting_method_flags(selected: Vec<HttpMethod>) -> Self {
        UserInputErrorKind::ConflictingMethodFlags { selected }.into()
    }

    pub fn malformed_query_param(param: &str) -> Self {
        UserInputErrorKind::MalformedQueryParam {
            param: param.to_string(),
        }
        .into()
    }

    pub fn endpoint_contains_scheme(endpoint: &str, suggested_path: &str) -> Self {
        UserInputErrorKind::EndpointContainsScheme {
            endpoint: endpoint.to_string(),
            suggested_path: suggested_path.to_string(),
        }
        .into()
    }

    pub fn missing_option(name: &str) -> Self {
        UserInputErrorKind::MissingOption {
            name: name.to_string(),
        }
        .into()
    }

    pub fn invalid_option_type(name: &str, expected: &'static str, found: &'static str) -> Self {
        UserInputErrorKind::InvalidOptionType {
            name: name.to_string(),
            expected,
            found,
        }
        .into()
    }

    /// Short headline for the error report.
    pub fn title(&self) -> &'static str {
        match &self.kind {
            UserInputErrorKind::ConflictingMethodFlags { .. } => "These HTTP methods conflict",
            UserInputErrorKind::MalformedQueryParam { .. } => "One of your query params is malformed",
            UserInputErrorKind::EndpointContainsScheme { .. } => "Check your endpoint",
            UserInputErrorKind::MissingOption { .. } => "An option is missing",
            UserInputErrorKind::InvalidOptionType { .. } => "An option has the wrong type",
        }
    }

    /// Human-readable explanation, possibly spanning several lines.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<UserInputErrorKind> for UserInputError {
    fn from(kind: UserInputErrorKind) -> Self {
        Self { kind }
    }
}
