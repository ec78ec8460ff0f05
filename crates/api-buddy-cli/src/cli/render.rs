//! Output formatting for validated requests and user errors.

use anyhow::Result;
use api_buddy_core::{RequestPreview, UserInputError, ValidatedOptions};

/// Request line followed by the validated options as JSON.
pub fn render_request(
    validated: &ValidatedOptions,
    preview: &RequestPreview,
    pretty: bool,
) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(validated)?
    } else {
        serde_json::to_string(validated)?
    };
    Ok(format!("{preview}\n{json}"))
}

/// Title line, then the message.
pub fn format_user_error(err: &UserInputError) -> String {
    format!("{}\n{}", err.title(), err.message())
}
