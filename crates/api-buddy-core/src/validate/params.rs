//! Query parameter aggregation from `key=value` tokens.

use crate::query::QueryParams;

use super::UserInputError;

/// Parses `key=value` tokens into [`QueryParams`].
///
/// Keys and values are kept verbatim. A repeated key collects its values in
/// token order.
pub fn validate_params<S: AsRef<str>>(tokens: &[S]) -> Result<QueryParams, UserInputError> {
    let mut params = QueryParams::new();
    for token in tokens {
        let (key, value) = split_token(token.as_ref())?;
        params.push(key, value);
    }
    Ok(params)
}

fn split_token(token: &str) -> Result<(&str, &str), UserInputError> {
    match token.split_once('=') {
        Some((key, value)) if !value.contains('=') => Ok((key, value)),
        _ => Err(UserInputError::malformed_query_param(token)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ParamValue;
    use crate::validate::UserInputErrorKind;

    fn single(v: &str) -> ParamValue {
        ParamValue::Single(v.to_string())
    }

    fn multiple(vs: &[&str]) -> ParamValue {
        ParamValue::Multiple(vs.iter().map(|v| v.to_string()).collect())
    }

    fn malformed(token: &str) -> String {
        match validate_params(&[token]).unwrap_err().kind {
            UserInputErrorKind::MalformedQueryParam { param } => param,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_input_yields_empty_map() {
        let tokens: [&str; 0] = [];
        assert!(validate_params(&tokens).unwrap().is_empty());
    }

    #[test]
    fn single_occurrence_stays_scalar() {
        let params = validate_params(&["a=1"]).unwrap();
        assert_eq!(params.get("a"), Some(&single("1")));
    }

    #[test]
    fn repeated_key_preserves_order() {
        let params = validate_params(&["a=1", "a=2", "a=3"]).unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("a"), Some(&multiple(&["1", "2", "3"])));
    }

    #[test]
    fn mixed_keys() {
        let params = validate_params(&["a=1", "b=2", "a=3"]).unwrap();
        assert_eq!(params.get("a"), Some(&multiple(&["1", "3"])));
        assert_eq!(params.get("b"), Some(&single("2")));
    }

    #[test]
    fn empty_key_or_value_accepted() {
        let params = validate_params(&["a=", "=b"]).unwrap();
        assert_eq!(params.get("a"), Some(&single("")));
        assert_eq!(params.get(""), Some(&single("b")));
    }

    #[test]
    fn values_are_not_decoded() {
        let params = validate_params(&["q=a%20b+c"]).unwrap();
        assert_eq!(params.get("q"), Some(&single("a%20b+c")));
    }

    #[test]
    fn malformed_tokens_named() {
        assert_eq!(malformed("abc"), "abc");
        assert_eq!(malformed("a=1=2"), "a=1=2");
        assert_eq!(malformed("=="), "==");
    }

    #[test]
    fn first_malformed_token_stops_aggregation() {
        let err = validate_params(&["a=1", "bad", "c=1=1"]).unwrap_err();
        assert_eq!(err, UserInputError::malformed_query_param("bad"));
    }
}
