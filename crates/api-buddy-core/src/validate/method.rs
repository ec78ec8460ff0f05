//! Method resolution from per-method flags.

use crate::method::{HttpMethod, MethodFlags, HTTP_METHODS};

use super::UserInputError;

/// Collapses the method flags into one [`HttpMethod`], defaulting to GET.
///
/// Fails if more than one flag is set, even though the argument parser is
/// expected to prevent that.
pub fn validate_method(flags: &MethodFlags) -> Result<HttpMethod, UserInputError> {
    let selected = flags.selected();
    if selected.len() > 1 {
        return Err(UserInputError::conflicting_method_flags(selected));
    }

    let method = HTTP_METHODS
        .into_iter()
        .find(|m| flags.is_set(*m))
        .unwrap_or_default();
    tracing::trace!(%method, "resolved method");
    Ok(method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::UserInputErrorKind;

    #[test]
    fn no_flags_defaults_to_get() {
        assert_eq!(
            validate_method(&MethodFlags::default()).unwrap(),
            HttpMethod::Get
        );
    }

    #[test]
    fn each_single_flag_resolves() {
        for method in HTTP_METHODS {
            let flags = MethodFlags::default().with(method);
            assert_eq!(validate_method(&flags).unwrap(), method);
        }
    }

    #[test]
    fn two_flags_conflict() {
        let flags = MethodFlags::default()
            .with(HttpMethod::Post)
            .with(HttpMethod::Get);
        let err = validate_method(&flags).unwrap_err();
        assert_eq!(
            err.kind,
            UserInputErrorKind::ConflictingMethodFlags {
                selected: vec![HttpMethod::Get, HttpMethod::Post],
            }
        );
    }

    #[test]
    fn all_flags_conflict() {
        let flags = HTTP_METHODS
            .into_iter()
            .fold(MethodFlags::default(), MethodFlags::with);
        assert!(matches!(
            validate_method(&flags).unwrap_err().kind,
            UserInputErrorKind::ConflictingMethodFlags { ref selected } if selected.len() == 5
        ));
    }
}
