pub(crate) mod number;
pub(crate) mod property_key;
pub(crate) mod value;

pub use number::format_js_number;
pub use property_key::PropertyKey;
pub use value::{
    FunctionData, FunctionKind, JSArrayPtr, JSMap, JSMapPtr, JSObjectData, JSObjectDataPtr, JSPromise, JSPromisePtr, JSRegExp,
    JSTypedArray, PromiseState, SymbolData, Value, new_array, new_error_object, new_function, new_js_object_data, new_map, new_regexp,
    object_get_key_value, object_set_key_value, values_equal,
};
