use anyhow::Result;
use colstats::{Value, rows_from_json};
use serde_json::json;

#[test]
fn json_scalars_round_trip_into_values() -> Result<()> {
    let rows = rows_from_json(json!([
        {"a": 1, "b": 2.5, "c": "text", "d": true, "e": null}
    ]))?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["a"], Value::Int(1));
    assert_eq!(rows[0]["b"], Value::float(2.5));
    assert_eq!(rows[0]["c"], Value::from("text"));
    assert_eq!(rows[0]["d"], Value::Bool(true));
    assert_eq!(rows[0]["e"], Value::Null);
    Ok(())
}

#[test]
fn nested_json_is_rejected() {
    assert!(rows_from_json(json!([{"a": [1, 2]}])).is_err());
    assert!(rows_from_json(json!([{"a": {"b": 1}}])).is_err());
    assert!(rows_from_json(json!({"not": "an array"})).is_err());
    assert!(rows_from_json(json!(["not an object"])).is_err());
}

#[test]
fn boolean_parsing_is_case_insensitive_and_strict() {
    assert_eq!(Value::from("True").as_bool(), Some(true));
    assert_eq!(Value::from(" FALSE ").as_bool(), Some(false));
    assert_eq!(Value::from("yes").as_bool(), None);
    assert_eq!(Value::Int(1).as_bool(), None);
}

#[test]
fn numeric_parsing_accepts_integers_and_decimals() {
    assert_eq!(Value::from("42").as_f64(), Some(42.0));
    assert_eq!(Value::from("-1.25").as_f64(), Some(-1.25));
    assert_eq!(Value::from("").as_f64(), None);
    assert_eq!(Value::from("abc").as_f64(), None);
    assert_eq!(Value::Null.as_f64(), None);
}

#[test]
fn coercion_turns_booleans_into_zero_one() {
    assert_eq!(Value::Bool(true).coerce_numeric(), Some(1.0));
    assert_eq!(Value::from("false").coerce_numeric(), Some(0.0));
    assert_eq!(Value::Int(7).coerce_numeric(), Some(7.0));
    assert_eq!(Value::from("na").coerce_numeric(), None);
}

#[test]
fn values_serialize_as_plain_json_scalars() -> Result<()> {
    assert_eq!(serde_json::to_string(&Value::Null)?, "null");
    assert_eq!(serde_json::to_string(&Value::Int(3))?, "3");
    assert_eq!(serde_json::to_string(&Value::float(2.5))?, "2.5");
    assert_eq!(serde_json::to_string(&Value::from("x"))?, "\"x\"");
    Ok(())
}

#[test]
fn display_renders_null_as_empty() {
    assert_eq!(Value::Null.to_string(), "");
    assert_eq!(Value::Int(3).to_string(), "3");
    assert_eq!(Value::from("x").to_string(), "x");
    assert_eq!(Value::Bool(true).to_string(), "true");
}

#[test]
fn values_order_deterministically() {
    // Null sorts first; used for sorted group-key output
    let mut vs = vec![Value::from("b"), Value::Null, Value::from("a")];
    vs.sort();
    assert_eq!(vs[0], Value::Null);
    assert_eq!(vs[1], Value::from("a"));
}
