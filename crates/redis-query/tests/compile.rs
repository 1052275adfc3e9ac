//! End-to-end compilation of filters and schemas decoded from JSON.

use model::{filter::FilterExpr, schema::FieldSchema};
use redis_query::{FilterCompiler, FilterError, RedisFilterCompiler, capability::OperatorClass};
use serde_json::json;
use std::{sync::Arc, thread};

const SCHEMA: &str = r#"{
    "price": "numeric",
    "year": "numeric",
    "genre": "tag",
    "title": "text",
    "embedding": "vector"
}"#;

fn compiler() -> RedisFilterCompiler {
    RedisFilterCompiler::new(FieldSchema::from_json_str(SCHEMA).unwrap())
}

fn compile_json(filter: &str) -> Result<String, FilterError> {
    let expr = FilterExpr::from_json_str_optional(filter).unwrap();
    compiler().compile(expr.as_ref())
}

#[test]
fn test_null_filter() {
    assert_eq!(compile_json("null").unwrap(), "(*)");
}

#[test]
fn test_json_filter_tree() {
    let filter = r#"{
        "op": "and",
        "left": {
            "op": "or",
            "left":  {"op": "in", "key": "genre", "values": ["drama", "comedy"]},
            "right": {"op": "eq", "key": "title", "value": "heat"}
        },
        "right": {
            "op": "and",
            "left":  {"op": "gte", "key": "year", "value": 1990},
            "right": {"op": "lt", "key": "price", "value": 12.5}
        }
    }"#;

    assert_eq!(
        compile_json(filter).unwrap(),
        r#"((@genre:{drama | comedy} | @title:"heat") (@year:[1990 inf] @price:[-inf (12.5]))"#
    );
}

#[test]
fn test_built_filter_survives_json_transport() {
    let expr = FilterExpr::not_in("genre", ["horror"]).or(FilterExpr::lte("year", 2000));

    let encoded = serde_json::to_value(&expr).unwrap();
    assert_eq!(
        encoded,
        json!({
            "op": "or",
            "left":  {"op": "not_in", "key": "genre", "values": ["horror"]},
            "right": {"op": "lte", "key": "year", "value": 2000}
        })
    );

    let decoded: FilterExpr = serde_json::from_value(encoded).unwrap();
    assert_eq!(
        compiler().compile(Some(&decoded)).unwrap(),
        compiler().compile(Some(&expr)).unwrap()
    );
    assert_eq!(
        compiler().compile(Some(&decoded)).unwrap(),
        "((-@genre:{horror}) | @year:[-inf 2000])"
    );
}

#[test]
fn test_json_negations() {
    let filter = r#"{
        "op": "not",
        "expr": {
            "op": "or",
            "left":  {"op": "not_eq", "key": "genre", "value": "horror"},
            "right": {"op": "not_in", "key": "title", "values": ["a", "b"]}
        }
    }"#;

    assert_eq!(
        compile_json(filter).unwrap(),
        r#"(-((-@genre:{horror}) | (-@title:("a" | "b"))))"#
    );
}

#[test]
fn test_json_unsupported_field_type() {
    let err = compile_json(r#"{"op": "gt", "key": "genre", "value": 3}"#).unwrap_err();
    assert!(matches!(
        err,
        FilterError::UnsupportedFieldType {
            operator: OperatorClass::Range,
            ..
        }
    ));

    let err = compile_json(r#"{"op": "eq", "key": "embedding", "value": "x"}"#).unwrap_err();
    assert!(matches!(err, FilterError::UnsupportedFieldType { .. }));
}

#[test]
fn test_json_unsupported_kind() {
    let err = compile_json(r#"{"op": "contains", "key": "title", "value": "he"}"#).unwrap_err();
    assert_eq!(
        err,
        FilterError::UnsupportedFilterKind {
            kind: "contains".to_string()
        }
    );
}

#[test]
fn test_concurrent_compilation() {
    let compiler = Arc::new(compiler());
    let expr = Arc::new(
        FilterExpr::is_in("genre", ["drama"]).and(FilterExpr::gt("price", 1)),
    );

    let handles = (0..8)
        .map(|_| {
            let compiler = Arc::clone(&compiler);
            let expr = Arc::clone(&expr);
            thread::spawn(move || compiler.compile(Some(&*expr)).unwrap())
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "(@genre:{drama} @price:[(1 inf])");
    }
}
