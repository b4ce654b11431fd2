use crate::core::PropertyKey;
use crate::unicode::{utf8_to_utf16, utf16_to_utf8};
use num_bigint::BigInt;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

pub type JSObjectDataPtr = Rc<RefCell<JSObjectData>>;
pub type JSArrayPtr = Rc<RefCell<Vec<Value>>>;
pub type JSMapPtr = Rc<RefCell<JSMap>>;
pub type JSPromisePtr = Rc<RefCell<JSPromise>>;

/// Insertion-ordered entries, like the host Map.
#[derive(Clone, Debug, Default)]
pub struct JSMap {
    pub entries: Vec<(Value, Value)>,
}

impl JSMap {
    pub fn new() -> Self {
        JSMap { entries: Vec::new() }
    }

    /// Insert or replace; key comparison follows SameValueZero.
    pub fn set(&mut self, key: Value, value: Value) {
        match self.entries.iter().position(|(k, _)| values_equal(k, &key)) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn delete(&mut self, key: &Value) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| !values_equal(k, key));
        before != self.entries.len()
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }
}

/// The two fixed-width numeric array kinds the inspector renders.
#[derive(Clone, Debug)]
pub enum JSTypedArray {
    Float64(Vec<f64>),
    BigInt64(Vec<i64>),
}

impl JSTypedArray {
    pub fn length(&self) -> usize {
        match self {
            JSTypedArray::Float64(items) => items.len(),
            JSTypedArray::BigInt64(items) => items.len(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            JSTypedArray::Float64(_) => "Float64Array",
            JSTypedArray::BigInt64(_) => "BigInt64Array",
        }
    }
}

#[derive(Clone, Debug)]
pub struct SymbolData {
    pub description: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionKind {
    Normal,
    Async,
    Generator,
    AsyncGenerator,
}

impl FunctionKind {
    pub fn tag(self) -> &'static str {
        match self {
            FunctionKind::Normal => "Function",
            FunctionKind::Async => "AsyncFunction",
            FunctionKind::Generator => "GeneratorFunction",
            FunctionKind::AsyncGenerator => "AsyncGeneratorFunction",
        }
    }
}

/// Callable metadata. The `name` slot is mutable after creation, like the
/// host `name` property, and is re-read every time the function renders.
#[derive(Clone, Debug)]
pub struct FunctionData {
    pub kind: FunctionKind,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct JSRegExp {
    pub source: String,
    pub flags: String,
}

impl JSRegExp {
    /// Canonical literal textual form, `/source/flags`.
    pub fn literal(&self) -> String {
        format!("/{}/{}", self.source, self.flags)
    }
}

#[derive(Clone, Debug)]
pub struct JSPromise {
    pub state: PromiseState,
}

impl JSPromise {
    pub fn new() -> Self {
        JSPromise {
            state: PromiseState::Pending,
        }
    }
}

impl Default for JSPromise {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub enum PromiseState {
    Pending,
    Fulfilled(Value),
    Rejected(Value),
}

#[derive(Clone, Default)]
pub struct JSObjectData {
    pub properties: indexmap::IndexMap<PropertyKey, Rc<RefCell<Value>>>,
    pub non_enumerable: HashSet<PropertyKey>,
    // Internal class slot; holds the error class name for error-like objects
    pub class_name: Option<String>,
}

impl JSObjectData {
    pub fn new() -> Self {
        JSObjectData::default()
    }

    pub fn insert(&mut self, key: PropertyKey, val: Rc<RefCell<Value>>) {
        self.properties.insert(key, val);
    }

    pub fn set_non_enumerable(&mut self, key: PropertyKey) {
        self.non_enumerable.insert(key);
    }

    pub fn is_enumerable(&self, key: &PropertyKey) -> bool {
        !self.non_enumerable.contains(key)
    }

    pub fn is_error(&self) -> bool {
        self.class_name.as_deref().is_some_and(|name| name.ends_with("Error"))
    }

    pub fn get_message(&self) -> Option<String> {
        if let Some(msg_ptr) = self.properties.get(&PropertyKey::String("message".to_string()))
            && let Value::String(s) = &*msg_ptr.borrow()
        {
            return Some(utf16_to_utf8(s));
        }
        None
    }
}

#[inline]
pub fn new_js_object_data() -> JSObjectDataPtr {
    Rc::new(RefCell::new(JSObjectData::new()))
}

pub fn object_set_key_value(obj: &JSObjectDataPtr, key: impl Into<PropertyKey>, val: Value) {
    obj.borrow_mut().insert(key.into(), Rc::new(RefCell::new(val)));
}

pub fn object_get_key_value(obj: &JSObjectDataPtr, key: impl Into<PropertyKey>) -> Option<Rc<RefCell<Value>>> {
    obj.borrow().properties.get(&key.into()).cloned()
}

/// Error-like object: class slot names the error class, `message` is an own
/// non-enumerable property, as on host error objects.
pub fn new_error_object(name: &str, message: &str) -> JSObjectDataPtr {
    let obj = new_js_object_data();
    obj.borrow_mut().class_name = Some(name.to_string());
    object_set_key_value(&obj, "message", Value::from(message));
    obj.borrow_mut().set_non_enumerable("message".into());
    obj
}

pub fn new_array(items: Vec<Value>) -> JSArrayPtr {
    Rc::new(RefCell::new(items))
}

pub fn new_map() -> JSMapPtr {
    Rc::new(RefCell::new(JSMap::new()))
}

pub fn new_function(kind: FunctionKind, name: &str) -> Value {
    Value::Function(Rc::new(RefCell::new(FunctionData {
        kind,
        name: name.to_string(),
    })))
}

pub fn new_regexp(source: &str, flags: &str) -> Value {
    Value::RegExp(Rc::new(JSRegExp {
        source: source.to_string(),
        flags: flags.to_string(),
    }))
}

#[derive(Clone)]
pub enum Value {
    Number(f64),
    BigInt(BigInt),
    String(Vec<u16>), // UTF-16 code units
    Boolean(bool),
    Undefined,
    Null,
    Symbol(Rc<SymbolData>),
    Function(Rc<RefCell<FunctionData>>),
    Object(JSObjectDataPtr),
    Array(JSArrayPtr),
    Map(JSMapPtr),
    RegExp(Rc<JSRegExp>),
    TypedArray(Rc<JSTypedArray>),
    Promise(JSPromisePtr),
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(utf8_to_utf16(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(utf8_to_utf16(&s))
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(utf8_to_utf16(s))
    }
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({})", n),
            Value::BigInt(b) => write!(f, "BigInt({})", b),
            Value::String(s) => write!(f, "String({:?})", utf16_to_utf8(s)),
            Value::Boolean(b) => write!(f, "Boolean({})", b),
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Symbol(_) => write!(f, "Symbol"),
            Value::Function(data) => write!(f, "Function({})", data.borrow().name),
            Value::Object(_) => write!(f, "Object"),
            Value::Array(items) => write!(f, "Array({})", items.borrow().len()),
            Value::Map(map) => write!(f, "Map({})", map.borrow().size()),
            Value::RegExp(re) => write!(f, "RegExp({})", re.literal()),
            Value::TypedArray(ta) => write!(f, "TypedArray({})", ta.length()),
            Value::Promise(_) => write!(f, "Promise"),
        }
    }
}

/// SameValueZero: NaN equals NaN, composites compare by reference identity.
pub fn values_equal(v1: &Value, v2: &Value) -> bool {
    match (v1, v2) {
        (Value::Number(n1), Value::Number(n2)) => {
            if n1.is_nan() && n2.is_nan() {
                true
            } else {
                n1 == n2
            }
        }
        (Value::BigInt(b1), Value::BigInt(b2)) => b1 == b2,
        (Value::String(s1), Value::String(s2)) => s1 == s2,
        (Value::Boolean(b1), Value::Boolean(b2)) => b1 == b2,
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Symbol(s1), Value::Symbol(s2)) => Rc::ptr_eq(s1, s2),
        (Value::Function(f1), Value::Function(f2)) => Rc::ptr_eq(f1, f2),
        (Value::Object(o1), Value::Object(o2)) => Rc::ptr_eq(o1, o2),
        (Value::Array(a1), Value::Array(a2)) => Rc::ptr_eq(a1, a2),
        (Value::Map(m1), Value::Map(m2)) => Rc::ptr_eq(m1, m2),
        (Value::RegExp(r1), Value::RegExp(r2)) => Rc::ptr_eq(r1, r2),
        (Value::TypedArray(t1), Value::TypedArray(t2)) => Rc::ptr_eq(t1, t2),
        (Value::Promise(p1), Value::Promise(p2)) => Rc::ptr_eq(p1, p2),
        _ => false,
    }
}
