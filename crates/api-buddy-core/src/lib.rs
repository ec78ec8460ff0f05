//! Option validation core for the api-buddy HTTP API client.
//!
//! Turns the loosely-typed record produced by an argument parser into a
//! [`ValidatedOptions`] request descriptor: the endpoint is checked for a stray
//! scheme, `key=value` query tokens are aggregated, and the per-method flags
//! collapse into a single [`HttpMethod`]. Validation is pure and synchronous;
//! logging and config are ambient helpers for the CLI.

pub mod config;
pub mod logging;

pub mod method;
pub mod options;
pub mod preview;
pub mod query;
pub mod validate;

pub use method::{HttpMethod, MethodFlags, HTTP_METHODS};
pub use options::{OptionValue, RawOptions, ValidatedOptions};
pub use preview::RequestPreview;
pub use query::{ParamValue, QueryParams};
pub use validate::{
    validate_endpoint, validate_method, validate_options, validate_params, UserInputError,
    UserInputErrorKind,
};
