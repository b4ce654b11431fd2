use js_inspect::{
    Console, EnginePromiseProbe, FunctionKind, InspectOptions, JSTypedArray, StdoutSink, Value, new_array, new_error_object, new_function,
    new_fulfilled_promise, new_js_object_data, new_map, new_pending_promise, new_regexp, object_set_key_value,
};
use std::rc::Rc;

#[derive(clap::Parser)]
#[command(name = "inspect_demo", version, about = "JavaScript value inspector showcase")]
struct Cli {
    /// Expansion depth for composite values (default 2)
    #[arg(short, long)]
    depth: Option<usize>,

    /// Expand composites without a depth limit
    #[arg(long, conflicts_with = "depth")]
    unlimited_depth: bool,

    /// Longest array prefix rendered before truncation
    #[arg(long, default_value_t = 100)]
    max_array_length: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    // Initialize logger (controlled by RUST_LOG)
    env_logger::init();

    let cli = <Cli as clap::Parser>::parse();

    let defaults = InspectOptions::default();
    let options = InspectOptions {
        depth: if cli.unlimited_depth { None } else { cli.depth.or(defaults.depth) },
        max_array_length: cli.max_array_length,
        ..defaults
    };

    let mut console = Console::with_options(options);
    console.set_sink(Box::new(StdoutSink));
    console.set_promise_probe(Box::new(EnginePromiseProbe));

    console.log(&[Value::from("primitives"), Value::from(-0.0), Value::from(99_999.9), Value::Null])?;

    let nested = {
        let d = new_js_object_data();
        object_set_key_value(&d, "d", Value::from(2.0));
        let c = new_js_object_data();
        object_set_key_value(&c, "c", Value::Object(d));
        let b = new_js_object_data();
        object_set_key_value(&b, "b", Value::Object(c));
        let a = new_js_object_data();
        object_set_key_value(&a, "a", Value::Object(b));
        Value::Object(a)
    };
    console.log(&[nested])?;

    let cyclic = new_js_object_data();
    object_set_key_value(&cyclic, "me", Value::Object(cyclic.clone()));
    console.log(&[Value::Object(cyclic)])?;

    let map = new_map();
    map.borrow_mut().set(Value::from(1.0), Value::from("a"));
    map.borrow_mut().set(Value::from(2.0), Value::from("b"));
    console.info(&[Value::Map(map)])?;

    console.info(&[Value::Array(new_array((0..12).map(|i| Value::from(i as f64)).collect()))])?;

    console.debug(&[
        new_function(FunctionKind::Async, "fetchData"),
        new_regexp("foo(bar\\n)?", "gi"),
        Value::TypedArray(Rc::new(JSTypedArray::BigInt64(vec![9_100_000_100]))),
    ])?;

    console.warn(&[new_pending_promise(), new_fulfilled_promise(Value::from("done"))])?;

    console.error(&[Value::Object(new_error_object("TypeError", "x is not a function"))])?;

    Ok(())
}
