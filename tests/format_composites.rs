use js_inspect::{
    FunctionKind, InspectOptions, PropertyKey, SymbolData, Value, format, new_array, new_error_object, new_function, new_js_object_data,
    new_regexp, object_get_key_value, object_set_key_value,
};
use std::rc::Rc;

// Initialize logger for this integration test binary so `RUST_LOG` is honored.
// Using `ctor` ensures initialization runs before tests start.
#[ctor::ctor]
fn __init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).is_test(true).try_init();
}

fn fmt(value: &Value) -> String {
    format(value, &InspectOptions::default())
}

fn obj(entries: Vec<(&str, Value)>) -> Value {
    let data = new_js_object_data();
    for (key, val) in entries {
        object_set_key_value(&data, key, val);
    }
    Value::Object(data)
}

fn arr(items: Vec<Value>) -> Value {
    Value::Array(new_array(items))
}

#[test]
fn test_empty_containers() {
    assert_eq!(fmt(&arr(vec![])), "[]");
    assert_eq!(fmt(&obj(vec![])), "{}");
}

#[test]
fn test_flat_arrays() {
    assert_eq!(fmt(&arr(vec![Value::from(1.0), Value::from(2.0)])), "[ 1, 2 ]");
    assert_eq!(fmt(&arr(vec![Value::from(1.0), Value::from(2.0), Value::from(3.0)])), "[ 1, 2, 3 ]");
}

#[test]
fn test_nested_array() {
    let inner = arr(vec![Value::from(2.0), Value::from(3.0)]);
    assert_eq!(fmt(&arr(vec![Value::from(1.0), inner])), "[ 1, [ 2, 3 ] ]");
}

#[test]
fn test_flat_objects() {
    assert_eq!(fmt(&obj(vec![("a", Value::from(1.0))])), "{ a: 1 }");
    assert_eq!(fmt(&obj(vec![("a", Value::from(1.0)), ("b", Value::from(2.0))])), "{ a: 1, b: 2 }");
    assert_eq!(fmt(&obj(vec![("a", obj(vec![]))])), "{ a: {} }");
    assert_eq!(fmt(&obj(vec![("a", obj(vec![("b", Value::from(2.0))]))])), "{ a: { b: 2 } }");
}

#[test]
fn test_functions_inside_objects() {
    assert_eq!(fmt(&obj(vec![("a", new_function(FunctionKind::Normal, "a"))])), "{ a: [Function: a] }");
    assert_eq!(
        fmt(&obj(vec![("a", new_function(FunctionKind::Async, "abc"))])),
        "{ a: [AsyncFunction: abc] }"
    );
    assert_eq!(
        fmt(&obj(vec![("a", new_function(FunctionKind::Generator, "a"))])),
        "{ a: [GeneratorFunction: a] }"
    );
}

#[test]
fn test_symbols_inside_containers() {
    let sym = || Value::Symbol(Rc::new(SymbolData { description: None }));
    assert_eq!(fmt(&arr(vec![sym()])), "[ Symbol() ]");
    assert_eq!(fmt(&obj(vec![("foo", sym())])), "{ foo: Symbol() }");
}

fn deep_object() -> Value {
    obj(vec![(
        "a",
        obj(vec![("b", obj(vec![("c", obj(vec![("d", Value::from(2.0))]))]))]),
    )])
}

#[test]
fn test_default_depth_collapses_at_level_three() {
    assert_eq!(fmt(&deep_object()), "{ a: { b: { c: [Object] } } }");
}

#[test]
fn test_unlimited_depth() {
    let opt = InspectOptions {
        depth: None,
        ..InspectOptions::default()
    };
    assert_eq!(format(&deep_object(), &opt), "{ a: { b: { c: { d: 2 } } } }");
}

#[test]
fn test_depth_zero_collapses_children() {
    let value = obj(vec![("a", obj(vec![("b", obj(vec![("c", Value::from(2.0))]))]))]);
    let opt = InspectOptions {
        depth: Some(0),
        ..InspectOptions::default()
    };
    assert_eq!(format(&value, &opt), "{ a: [Object] }");
}

#[test]
fn test_depth_one() {
    let value = obj(vec![("a", obj(vec![("b", obj(vec![("c", Value::from(2.0))]))]))]);
    let opt = InspectOptions {
        depth: Some(1),
        ..InspectOptions::default()
    };
    assert_eq!(format(&value, &opt), "{ a: { b: [Object] } }");
}

#[test]
fn test_collapsed_array_placeholder() {
    let value = obj(vec![("a", obj(vec![("b", arr(vec![Value::from("c")]))]))]);
    let opt = InspectOptions {
        depth: Some(1),
        ..InspectOptions::default()
    };
    assert_eq!(format(&value, &opt), "{ a: { b: [Array] } }");
}

#[test]
fn test_array_truncation_suffix_singular() {
    let items: Vec<Value> = (0..101).map(|i| Value::from(i as f64)).collect();
    let mut expected = String::from("[ ");
    for i in 0..100 {
        expected.push_str(&i.to_string());
        if i < 99 {
            expected.push_str(", ");
        }
    }
    expected.push_str("... 1 more item ]");
    assert_eq!(fmt(&arr(items)), expected);
}

#[test]
fn test_array_truncation_suffix_plural() {
    let items: Vec<Value> = (0..4).map(|i| Value::from(i as f64)).collect();
    let opt = InspectOptions {
        max_array_length: 2,
        ..InspectOptions::default()
    };
    assert_eq!(format(&arr(items), &opt), "[ 0, 1... 2 more items ]");
}

#[test]
fn test_long_object_stays_multi_line() {
    let long = "x".repeat(120);
    let value = obj(vec![("long", Value::from(long.as_str()))]);
    assert_eq!(fmt(&value), format!("{{ \n  long: '{}' \n}}", long));
}

#[test]
fn test_collapse_threshold_is_configurable() {
    let long = "x".repeat(120);
    let value = obj(vec![("long", Value::from(long.as_str()))]);
    let opt = InspectOptions {
        reduce_string_length: 1000,
        ..InspectOptions::default()
    };
    assert_eq!(format(&value, &opt), format!("{{ long: '{}' }}", long));
}

#[test]
fn test_multi_line_layout_shape() {
    let value = obj(vec![("a", Value::from(1.0))]);
    let opt = InspectOptions {
        reduce_string_length: 0,
        ..InspectOptions::default()
    };
    assert_eq!(format(&value, &opt), "{ \n  a: 1 \n}");
}

#[test]
fn test_regexp_literal_form() {
    assert_eq!(fmt(&new_regexp("foo(bar\\n)?", "gi")), "/foo(bar\\n)?/gi");
    assert_eq!(fmt(&new_regexp("abc", "")), "/abc/");
}

#[test]
fn test_error_objects_render_name_and_message() {
    assert_eq!(fmt(&Value::Object(new_error_object("Error", "123"))), "Error: 123");
    assert_eq!(
        fmt(&Value::Object(new_error_object("TypeError", "x is not a function"))),
        "TypeError: x is not a function"
    );
}

#[test]
fn test_error_message_is_not_listed_as_a_property() {
    // `message` is non-enumerable; the error branch must read it anyway
    let err = new_error_object("RangeError", "out of range");
    let rendered = fmt(&Value::Object(err));
    assert_eq!(rendered, "RangeError: out of range");
    assert!(!rendered.contains("message"));
}

#[test]
fn test_non_enumerable_properties_are_skipped() {
    let data = new_js_object_data();
    object_set_key_value(&data, "visible", Value::from(1.0));
    object_set_key_value(&data, "hidden", Value::from(2.0));
    data.borrow_mut().set_non_enumerable("hidden".into());
    assert_eq!(fmt(&Value::Object(data)), "{ visible: 1 }");
}

#[test]
fn test_symbol_keyed_properties_are_skipped() {
    let data = new_js_object_data();
    object_set_key_value(&data, "a", Value::from(1.0));
    let sym = Rc::new(SymbolData {
        description: Some("tag".to_string()),
    });
    data.borrow_mut()
        .insert(PropertyKey::Symbol(sym), Rc::new(std::cell::RefCell::new(Value::from(2.0))));
    assert_eq!(fmt(&Value::Object(data)), "{ a: 1 }");
}

#[test]
fn test_object_helpers_round_trip() {
    let data = new_js_object_data();
    object_set_key_value(&data, "k", Value::from(7.0));
    let val = object_get_key_value(&data, "k").expect("property was just set");
    assert!(matches!(&*val.borrow(), Value::Number(n) if *n == 7.0));
    assert!(object_get_key_value(&data, "missing").is_none());
}

#[test]
fn test_shared_sibling_references_are_not_circular() {
    // The same object referenced from two siblings is an aliased value, not
    // a cycle; both occurrences render in full
    let shared = obj(vec![("n", Value::from(1.0))]);
    let value = obj(vec![("x", shared.clone()), ("y", shared)]);
    assert_eq!(fmt(&value), "{ x: { n: 1 }, y: { n: 1 } }");
}

#[test]
fn test_format_is_byte_identical_across_calls() {
    let value = deep_object();
    let opt = InspectOptions::default();
    assert_eq!(format(&value, &opt), format(&value, &opt));
}
