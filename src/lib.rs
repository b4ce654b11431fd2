pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod js_console;
pub(crate) mod js_inspect;
pub(crate) mod js_promise;
pub(crate) mod unicode;

pub use core::{
    FunctionData, FunctionKind, JSArrayPtr, JSMap, JSMapPtr, JSObjectData, JSObjectDataPtr, JSPromise, JSPromisePtr, JSRegExp,
    JSTypedArray, PromiseState, PropertyKey, SymbolData, Value, format_js_number, new_array, new_error_object, new_function,
    new_js_object_data, new_map, new_regexp, object_get_key_value, object_set_key_value, values_equal,
};
pub use error::JSError;
pub use js_console::{Console, ConsoleSink, Level, StdoutSink};
pub use js_inspect::{InspectOptions, format, format_with};
pub use js_promise::{EnginePromiseProbe, PromiseProbe, new_fulfilled_promise, new_pending_promise, new_rejected_promise};
pub use unicode::{utf8_to_utf16, utf16_to_utf8};
