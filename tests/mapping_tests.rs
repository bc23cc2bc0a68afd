//! Field mapper tests driven through the standalone single-pass binders:
//! annotation keys, type coercion, nested recursion, and the multi-value
//! rules for scalars, vectors, and root maps.

use std::collections::HashMap;

use http::header::{HeaderMap, HeaderValue};
use reqbind::{BindError, BindRequest, Bindable, Form, Header, PathParams, Query, Uri};
use serde::Deserialize;

fn query_request<'r>(headers: &'r HeaderMap, query: &'r str) -> BindRequest<'r> {
    BindRequest::new(headers, Some(query), b"")
}

#[derive(Debug, Default, PartialEq, Deserialize, Bindable)]
#[serde(default)]
struct QueryTest {
    #[bind(query = "page")]
    page: u32,
    #[bind(query = "size")]
    size: Option<u16>,
    #[bind(query = "id")]
    ids: Vec<i64>,
    #[bind(query = "appkey")]
    appkey: String,
}

#[test]
fn test_query_binding() {
    let headers = HeaderMap::new();
    let req = query_request(&headers, "page=2&size=50&id=1&id=2&id=3&appkey=hello");
    let mut obj = QueryTest::default();
    Query::bind(&req, &mut obj).unwrap();
    assert_eq!(obj.page, 2);
    assert_eq!(obj.size, Some(50));
    assert_eq!(obj.ids, vec![1, 2, 3]);
    assert_eq!(obj.appkey, "hello");
}

#[test]
fn test_scalar_takes_first_value() {
    let headers = HeaderMap::new();
    let req = query_request(&headers, "page=7&page=8&page=9");
    let mut obj = QueryTest::default();
    Query::bind(&req, &mut obj).unwrap();
    assert_eq!(obj.page, 7);
}

#[test]
fn test_absent_keys_leave_fields_untouched() {
    let headers = HeaderMap::new();
    let req = query_request(&headers, "size=10");
    let mut obj = QueryTest {
        page: 4,
        appkey: "keep".to_string(),
        ..QueryTest::default()
    };
    Query::bind(&req, &mut obj).unwrap();
    assert_eq!(obj.page, 4);
    assert_eq!(obj.size, Some(10));
    assert_eq!(obj.appkey, "keep");
}

#[test]
fn test_conversion_error_names_field_and_value() {
    let headers = HeaderMap::new();
    let req = query_request(&headers, "page=abc");
    let mut obj = QueryTest::default();
    let err = Query::bind(&req, &mut obj).unwrap_err();
    match err {
        BindError::Conversion { field, value, target } => {
            assert_eq!(field, "page");
            assert_eq!(value, "abc");
            assert_eq!(target, "u32");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_integer_overflow_is_a_conversion_error() {
    #[derive(Debug, Default, Deserialize, Bindable)]
    #[serde(default)]
    struct Tiny {
        #[bind(query = "n")]
        n: u8,
    }

    let headers = HeaderMap::new();
    let req = query_request(&headers, "n=256");
    let mut obj = Tiny::default();
    let err = Query::bind(&req, &mut obj).unwrap_err();
    assert!(matches!(err, BindError::Conversion { ref field, .. } if field == "n"));
}

#[test]
fn test_vec_element_failure_aborts_binding() {
    let headers = HeaderMap::new();
    let req = query_request(&headers, "id=1&id=x&id=3");
    let mut obj = QueryTest::default();
    let err = Query::bind(&req, &mut obj).unwrap_err();
    assert!(matches!(err, BindError::Conversion { ref field, .. } if field == "ids"));
}

#[test]
fn test_percent_decoded_values() {
    let headers = HeaderMap::new();
    let req = query_request(&headers, "appkey=hello%20world&page=1");
    let mut obj = QueryTest::default();
    Query::bind(&req, &mut obj).unwrap();
    assert_eq!(obj.appkey, "hello world");
}

#[derive(Debug, Default, PartialEq, Deserialize, Bindable)]
#[serde(default)]
struct FooStructForBoolType {
    #[bind(form = "bool_foo")]
    bool_foo: bool,
}

#[test]
fn test_strict_bool_parsing() {
    let headers = HeaderMap::new();

    let req = BindRequest::new(&headers, None, b"bool_foo=true");
    let mut obj = FooStructForBoolType::default();
    Form::bind(&req, &mut obj).unwrap();
    assert!(obj.bool_foo);

    let req = BindRequest::new(&headers, None, b"bool_foo=fasl");
    let mut obj = FooStructForBoolType::default();
    let err = Form::bind(&req, &mut obj).unwrap_err();
    assert!(matches!(err, BindError::Conversion { ref field, .. } if field == "bool_foo"));
}

#[derive(Debug, Default, PartialEq, Deserialize, Bindable)]
#[serde(default)]
struct FooStructForMapType {
    #[bind(form = "map_foo")]
    map_foo: HashMap<String, String>,
}

#[test]
fn test_map_typed_field_is_unsupported() {
    let headers = HeaderMap::new();
    let req = BindRequest::new(&headers, None, b"map_foo=");
    let mut obj = FooStructForMapType::default();
    let err = Form::bind(&req, &mut obj).unwrap_err();
    assert!(matches!(
        err,
        BindError::UnsupportedType { ref field, .. } if field == "map_foo"
    ));
}

#[test]
fn test_root_string_map_takes_last_value() {
    let headers = HeaderMap::new();
    let req = query_request(&headers, "foo=first&foo=second&bar=baz");
    let mut obj: HashMap<String, String> = HashMap::new();
    Query::bind(&req, &mut obj).unwrap();
    assert_eq!(obj.get("foo").map(String::as_str), Some("second"));
    assert_eq!(obj.get("bar").map(String::as_str), Some("baz"));
}

#[derive(Debug, Default, PartialEq, Deserialize, Bindable)]
#[serde(default)]
struct HeaderTest {
    #[bind(header = "limit")]
    limit: i32,
    #[bind(header = "X-Api-Key")]
    api_key: String,
}

#[test]
fn test_header_binding_is_case_insensitive() {
    let mut headers = HeaderMap::new();
    headers.insert("Limit", HeaderValue::from_static("1000"));
    headers.insert("X-Api-Key", HeaderValue::from_static("s3cret"));
    let req = BindRequest::new(&headers, None, b"");

    let mut obj = HeaderTest::default();
    Header::bind(&req, &mut obj).unwrap();
    assert_eq!(obj.limit, 1000);
    assert_eq!(obj.api_key, "s3cret");
}

#[derive(Debug, Default, PartialEq, Deserialize, Bindable)]
#[serde(default)]
struct Person {
    #[bind(uri = "name")]
    name: String,
    #[bind(uri = "age")]
    age: u8,
}

#[derive(Debug, Default, PartialEq, Deserialize, Bindable)]
#[serde(default)]
struct PersonRecord {
    #[bind(nested)]
    person: Person,
    #[bind(uri = "id")]
    id: u64,
}

#[test]
fn test_uri_binding_recurses_into_nested_structs() {
    // nested structs read from the same flat key set as their parent
    let src: PathParams = [("name", "mike"), ("age", "25"), ("id", "7")]
        .into_iter()
        .collect();

    let mut obj = PersonRecord::default();
    Uri::bind(&src, &mut obj).unwrap();
    assert_eq!(obj.person.name, "mike");
    assert_eq!(obj.person.age, 25);
    assert_eq!(obj.id, 7);
}

#[test]
fn test_nested_conversion_error_reports_full_path() {
    let src: PathParams = [("name", "mike"), ("age", "old"), ("id", "7")]
        .into_iter()
        .collect();

    let mut obj = PersonRecord::default();
    let err = Uri::bind(&src, &mut obj).unwrap_err();
    match err {
        BindError::Conversion { field, value, target } => {
            assert_eq!(field, "person.age");
            assert_eq!(value, "old");
            assert_eq!(target, "u8");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_nested_option_is_materialized_on_first_hit() {
    #[derive(Debug, Default, PartialEq, Deserialize, Bindable)]
    #[serde(default)]
    struct OuterOpt {
        #[bind(nested)]
        person: Option<Person>,
    }

    let src: PathParams = [("name", "ana")].into_iter().collect();
    let mut obj = OuterOpt::default();
    Uri::bind(&src, &mut obj).unwrap();
    let person = obj.person.expect("nested struct should be created");
    assert_eq!(person.name, "ana");
    assert_eq!(person.age, 0);
}

#[derive(Debug, Default, PartialEq, Deserialize, Bindable)]
#[serde(default)]
struct Defaults {
    // no annotation: the field name is the lookup key
    token: String,
    // "-" opts the field out of the query source
    #[bind(query = "-")]
    hidden: String,
    #[bind(skip)]
    internal: u32,
}

#[test]
fn test_default_key_dash_exclusion_and_skip() {
    let headers = HeaderMap::new();
    let req = query_request(&headers, "token=abc&hidden=nope&-=nope&internal=9");
    let mut obj = Defaults::default();
    Query::bind(&req, &mut obj).unwrap();
    assert_eq!(obj.token, "abc");
    assert_eq!(obj.hidden, "");
    assert_eq!(obj.internal, 0);
}

#[test]
fn test_form_binding_merges_query_values() {
    let headers = HeaderMap::new();
    let req = BindRequest::new(&headers, Some("bool_foo=true"), b"");
    let mut obj = FooStructForBoolType::default();
    Form::bind(&req, &mut obj).unwrap();
    assert!(obj.bool_foo);
}
