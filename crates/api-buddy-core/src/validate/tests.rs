//! Tests for the options assembler.

use crate::method::HttpMethod;
use crate::options::{OptionValue, RawOptions};
use crate::query::ParamValue;

use super::{validate_options, UserInputErrorKind};

fn raw() -> RawOptions {
    RawOptions::new("/users/1")
        .with_passthrough("verbose", true)
        .with_param("a=1")
        .with_param("b=2")
        .with_param("a=3")
        .with_passthrough("data", "{\"name\": \"x\"}")
        .with_passthrough("headers", OptionValue::List(vec!["X-A: 1".into()]))
}

#[test]
fn defaults_to_get_and_keeps_everything() {
    let valid = validate_options(&raw()).unwrap();
    assert_eq!(valid.endpoint, "/users/1");
    assert_eq!(valid.method, HttpMethod::Get);
    assert_eq!(
        valid.params.get("a"),
        Some(&ParamValue::Multiple(vec!["1".into(), "3".into()]))
    );
    assert_eq!(valid.params.get("b"), Some(&ParamValue::Single("2".into())));
}

#[test]
fn passthrough_unchanged_and_in_order() {
    let input = raw();
    let valid = validate_options(&input).unwrap();
    assert_eq!(valid.passthrough, input.passthrough);
    let names: Vec<_> = valid.passthrough.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["verbose", "data", "headers"]);
}

#[test]
fn input_not_mutated() {
    let input = raw().with_method(HttpMethod::Patch);
    let before = input.clone();
    let valid = validate_options(&input).unwrap();
    assert_eq!(valid.method, HttpMethod::Patch);
    assert_eq!(input, before);
}

#[test]
fn no_method_fields_in_output() {
    let valid = validate_options(&raw().with_method(HttpMethod::Put)).unwrap();
    let json = serde_json::to_value(&valid).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj["method"], "PUT");
    for flag in ["get", "post", "patch", "put", "delete"] {
        assert!(!obj.contains_key(flag), "{flag} leaked into output");
    }
}

#[test]
fn endpoint_error_short_circuits() {
    let input = RawOptions::new("https://example.com/users/1")
        .with_param("broken")
        .with_method(HttpMethod::Get)
        .with_method(HttpMethod::Post);
    let err = validate_options(&input).unwrap_err();
    assert!(matches!(
        err.kind,
        UserInputErrorKind::EndpointContainsScheme { ref suggested_path, .. } if suggested_path == "/users/1"
    ));
}

#[test]
fn params_checked_before_method() {
    let input = RawOptions::new("/x")
        .with_param("broken")
        .with_method(HttpMethod::Get)
        .with_method(HttpMethod::Post);
    let err = validate_options(&input).unwrap_err();
    assert!(matches!(err.kind, UserInputErrorKind::MalformedQueryParam { .. }));
}

#[test]
fn conflicting_methods_fail() {
    let input = raw()
        .with_method(HttpMethod::Delete)
        .with_method(HttpMethod::Patch);
    let err = validate_options(&input).unwrap_err();
    assert!(matches!(err.kind, UserInputErrorKind::ConflictingMethodFlags { .. }));
}

#[test]
fn empty_params_is_empty_map() {
    let valid = validate_options(&RawOptions::new("/")).unwrap();
    assert!(valid.params.is_empty());
    assert!(valid.passthrough.is_empty());
}
