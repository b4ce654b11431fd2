use criterion::{Criterion, criterion_group, criterion_main};
use js_inspect::{InspectOptions, Value, format, new_array, new_js_object_data, object_set_key_value};
use std::hint::black_box;

// Micro-benchmarks for the traversal-heavy inspector paths: wide sequences,
// deep nesting, cyclic graphs and long-string truncation.

// Initialize logger for benchmark so `RUST_LOG` is honored.
#[ctor::ctor]
fn __init_bench_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).try_init();
}

fn bench_wide_array(c: &mut Criterion) {
    let items: Vec<Value> = (0..1_000).map(|i| Value::from(i as f64)).collect();
    let value = Value::Array(new_array(items));
    let opt = InspectOptions::default();
    c.bench_function("format_wide_array", |b| {
        b.iter(|| {
            let _ = black_box(format(black_box(&value), &opt));
        })
    });
}

fn bench_deep_object(c: &mut Criterion) {
    let mut value = Value::from(0.0);
    for i in 0..100 {
        let obj = new_js_object_data();
        object_set_key_value(&obj, format!("level{}", i).as_str(), value);
        value = Value::Object(obj);
    }
    let opt = InspectOptions {
        depth: None,
        ..InspectOptions::default()
    };
    c.bench_function("format_deep_object_unlimited_depth", |b| {
        b.iter(|| {
            let _ = black_box(format(black_box(&value), &opt));
        })
    });
}

fn bench_cyclic_graph(c: &mut Criterion) {
    let root = new_js_object_data();
    for i in 0..50 {
        object_set_key_value(&root, format!("self{}", i).as_str(), Value::Object(root.clone()));
    }
    let value = Value::Object(root);
    let opt = InspectOptions::default();
    c.bench_function("format_cyclic_graph", |b| {
        b.iter(|| {
            let _ = black_box(format(black_box(&value), &opt));
        })
    });
}

fn bench_long_string_truncation(c: &mut Criterion) {
    let value = Value::from("a".repeat(1_000_000));
    let opt = InspectOptions::default();
    c.bench_function("format_long_string_truncation", |b| {
        b.iter(|| {
            let _ = black_box(format(black_box(&value), &opt));
        })
    });
}

criterion_group!(
    benches,
    bench_wide_array,
    bench_deep_object,
    bench_cyclic_graph,
    bench_long_string_truncation
);
criterion_main!(benches);
