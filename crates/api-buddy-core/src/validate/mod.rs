//! Option validation: endpoint check, query aggregation, method resolution.
//!
//! [`validate_options`] runs the three checks in that order over a borrowed
//! [`RawOptions`] and builds a fresh [`ValidatedOptions`]. The first failure is
//! returned as is; there is no partial output.

mod endpoint;
mod error;
mod method;
mod params;

pub use endpoint::validate_endpoint;
pub use error::{UserInputError, UserInputErrorKind};
pub use method::validate_method;
pub use params::validate_params;

use crate::options::{RawOptions, ValidatedOptions};

/// Validates `raw` and converts it into a request descriptor.
///
/// Options the validator does not interpret are copied into the result
/// unchanged and in their original order.
pub fn validate_options(raw: &RawOptions) -> Result<ValidatedOptions, UserInputError> {
    tracing::debug!(
        endpoint = %raw.endpoint,
        params = raw.params.len(),
        passthrough = raw.passthrough.len(),
        "validating options"
    );

    let endpoint = validate_endpoint(&raw.endpoint)?;
    let params = validate_params(raw.params.as_slice())?;
    let method = validate_method(&raw.methods)?;

    tracing::debug!(%method, %endpoint, keys = params.len(), "options validated");

    Ok(ValidatedOptions {
        endpoint,
        params,
        method,
        passthrough: raw.passthrough.clone(),
    })
}

#[cfg(test)]
mod tests;
