use crate::core::{FunctionData, JSMap, JSObjectData, JSPromisePtr, JSTypedArray, PropertyKey, PromiseState, Value, format_js_number};
use crate::js_promise::PromiseProbe;
use crate::unicode::{utf16_len, utf16_slice, utf16_to_utf8};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

const TAB: &str = "  ";

/// Rendering limits for one `format` call. Unspecified fields keep their
/// defaults via struct update syntax:
///
/// ```
/// use js_inspect::InspectOptions;
/// let opt = InspectOptions { depth: None, ..InspectOptions::default() };
/// ```
#[derive(Clone, Debug)]
pub struct InspectOptions {
    /// Longest string rendered before truncation; `None` disables the limit.
    pub max_string_length: Option<usize>,
    /// Nesting levels expanded before a composite collapses to a
    /// placeholder; `None` disables the limit.
    pub depth: Option<usize>,
    /// Longest array prefix rendered before the "more items" suffix.
    pub max_array_length: usize,
    /// Objects whose rendered form is shorter than this collapse from
    /// multi-line to single-line layout.
    pub reduce_string_length: usize,
}

impl Default for InspectOptions {
    fn default() -> Self {
        InspectOptions {
            max_string_length: Some(10000),
            depth: Some(2),
            max_array_length: 100,
            reduce_string_length: 100,
        }
    }
}

/// Render `value` as a human-readable debug string.
///
/// Total over every input, including cyclic graphs; never panics and always
/// terminates. Promises render through the degraded fallback because no
/// state probe is supplied; see [`format_with`].
pub fn format(value: &Value, opt: &InspectOptions) -> String {
    format_with(value, opt, None)
}

/// Like [`format`], with an optional promise-state capability. The probe is
/// the analogue of the engine-native `getPromiseState` hook; when it is
/// absent the inspector degrades to the opaque `Promise {…}` form instead of
/// assuming the capability exists.
pub fn format_with(value: &Value, opt: &InspectOptions, probe: Option<&dyn PromiseProbe>) -> String {
    log::debug!("format called; probe_available={}", probe.is_some());
    let mut inspector = Inspector {
        opt,
        probe,
        seen: Vec::new(),
        circular: IndexMap::new(),
    };
    inspector.format_value(value, 0)
}

// Traversal state for one top-level call. `seen` holds the identities of the
// composites on the active recursion path; `circular` assigns stable 1-based
// indices in discovery order.
struct Inspector<'a> {
    opt: &'a InspectOptions,
    probe: Option<&'a dyn PromiseProbe>,
    seen: Vec<usize>,
    circular: IndexMap<usize, usize>,
}

fn rc_id<T>(rc: &Rc<T>) -> usize {
    Rc::as_ptr(rc) as *const () as usize
}

impl Inspector<'_> {
    fn format_value(&mut self, value: &Value, recurse_times: usize) -> String {
        match value {
            Value::Number(n) => {
                if *n == 0.0 && n.is_sign_negative() {
                    "-0".to_string()
                } else {
                    format_js_number(*n)
                }
            }
            Value::BigInt(b) => format!("{}n", b),
            Value::String(s) => self.format_string(s),
            Value::Boolean(b) => b.to_string(),
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Symbol(sym) => match &sym.description {
                Some(desc) => format!("Symbol({})", desc),
                None => "Symbol()".to_string(),
            },
            // Functions are terminal: no depth or cycle bookkeeping
            Value::Function(data) => format_function(&data.borrow()),
            Value::RegExp(re) => self.composite(rc_id(re), false, recurse_times, |_, _| re.literal()),
            Value::TypedArray(ta) => self.composite(rc_id(ta), false, recurse_times, |_, _| format_typed_array(ta)),
            Value::Promise(promise) => {
                self.composite(rc_id(promise), false, recurse_times, |ctx, rt| ctx.format_promise(value, promise, rt))
            }
            Value::Array(items) => self.composite(rc_id(items), true, recurse_times, |ctx, rt| ctx.format_array(&items.borrow(), rt)),
            Value::Map(map) => self.composite(rc_id(map), false, recurse_times, |ctx, rt| ctx.format_map(&map.borrow(), rt)),
            Value::Object(obj) => self.composite(rc_id(obj), false, recurse_times, |ctx, rt| {
                let data = obj.borrow();
                if data.is_error() {
                    // Explicit rule: error-like values never reach the
                    // generic property renderer
                    format!(
                        "{}: {}",
                        data.class_name.as_deref().unwrap_or("Error"),
                        data.get_message().unwrap_or_default()
                    )
                } else {
                    ctx.format_properties(&data, rt)
                }
            }),
        }
    }

    // Cycle check, then depth check, then push -> render -> pop. The order
    // is load-bearing: a revisited ancestor must render as a circular
    // reference even when the depth limit would also apply.
    fn composite<F>(&mut self, id: usize, is_array: bool, recurse_times: usize, render: F) -> String
    where
        F: FnOnce(&mut Self, usize) -> String,
    {
        if self.seen.contains(&id) {
            return format!("[Circular *{}]", self.circular_index(id));
        }
        if let Some(depth) = self.opt.depth
            && recurse_times > depth
        {
            return if is_array { "[Array]" } else { "[Object]" }.to_string();
        }
        self.seen.push(id);
        let rendered = render(self, recurse_times + 1);
        self.seen.pop();
        rendered
    }

    // Indices are assigned lazily in discovery order and stay stable for the
    // rest of the call, so repeated references print the same index.
    fn circular_index(&mut self, id: usize) -> usize {
        let next = self.circular.len() + 1;
        *self.circular.entry(id).or_insert(next)
    }

    fn format_string(&self, s: &[u16]) -> String {
        if let Some(max) = self.opt.max_string_length
            && utf16_len(s) > max
        {
            let remaining = utf16_len(s) - max;
            return format!(
                "'{}'... {} more character{}",
                utf16_to_utf8(&utf16_slice(s, 0, max)),
                remaining,
                if remaining > 1 { "s" } else { "" }
            );
        }
        format!("'{}'", utf16_to_utf8(s))
    }

    fn format_promise(&mut self, promise_value: &Value, promise: &JSPromisePtr, recurse_times: usize) -> String {
        let Some(probe) = self.probe else {
            // Degraded fidelity: the promise is already on the seen stack,
            // so the recursive call yields its circular reference
            return format!("Promise {{{}}}", self.format_value(promise_value, recurse_times));
        };
        match probe.promise_state(promise) {
            PromiseState::Pending => "Promise { <pending> }".to_string(),
            PromiseState::Fulfilled(result) => format!("Promise {{ {} }}", self.format_value(&result, recurse_times)),
            PromiseState::Rejected(reason) => format!("Promise {{ <rejected> {} }}", self.format_value(&reason, recurse_times)),
        }
    }

    fn format_array(&mut self, items: &[Value], recurse_times: usize) -> String {
        let mut out = String::from("[");
        let total = items.len();
        let rendered = total.min(self.opt.max_array_length);
        for (index, item) in items.iter().take(rendered).enumerate() {
            if index == 0 {
                out.push(' ');
            }
            out.push_str(&self.format_value(item, recurse_times));
            if rendered < total && index == rendered - 1 {
                let remaining = total - rendered;
                out.push_str(&format!("... {} more item{}", remaining, if remaining > 1 { "s" } else { "" }));
            } else if index != total - 1 {
                out.push(',');
            }
            out.push(' ');
        }
        out.push(']');
        out
    }

    fn format_map(&mut self, map: &JSMap, recurse_times: usize) -> String {
        let mut out = format!("Map({}) {{", map.size());
        for (index, (key, val)) in map.entries.iter().enumerate() {
            if index > 0 {
                out.push(',');
            }
            out.push(' ');
            out.push_str(&self.format_value(key, recurse_times));
            out.push_str(" => ");
            out.push_str(&self.format_value(val, recurse_times));
        }
        if !map.entries.is_empty() {
            out.push(' ');
        }
        out.push('}');
        out
    }

    // Multi-line layout with indentation proportional to nesting; short
    // results collapse to a single line by stripping line breaks and tabs.
    fn format_properties(&mut self, obj: &JSObjectData, recurse_times: usize) -> String {
        let entries: Vec<(String, Rc<RefCell<Value>>)> = obj
            .properties
            .iter()
            .filter(|(key, _)| matches!(key, PropertyKey::String(_)) && obj.is_enumerable(key))
            .map(|(key, val)| (key.to_string(), val.clone()))
            .collect();

        let mut out = String::from("{");
        let length = entries.len();
        for (index, (key, val)) in entries.iter().enumerate() {
            if index == 0 {
                out.push(' ');
            }
            out.push('\n');
            out.push_str(&TAB.repeat(recurse_times));
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&self.format_value(&val.borrow(), recurse_times));
            if index < length - 1 {
                out.push(',');
            }
            out.push(' ');
        }
        out.push('\n');
        out.push_str(&TAB.repeat(recurse_times - 1));
        out.push('}');

        if out.len() < self.opt.reduce_string_length {
            out = out.replace('\n', "").replace(TAB, "");
        }
        out
    }
}

fn format_function(data: &FunctionData) -> String {
    if data.name.is_empty() {
        format!("[{} (anonymous)]", data.kind.tag())
    } else {
        format!("[{}: {}]", data.kind.tag(), data.name)
    }
}

fn format_typed_array(ta: &JSTypedArray) -> String {
    let elements = match ta {
        JSTypedArray::Float64(items) => items.iter().map(|n| format_js_number(*n)).collect::<Vec<_>>().join(" "),
        JSTypedArray::BigInt64(items) => items.iter().map(|n| format!("{}n", n)).collect::<Vec<_>>().join(" "),
    };
    if elements.is_empty() {
        format!("{}({}) []", ta.kind_name(), ta.length())
    } else {
        format!("{}({}) [ {} ]", ta.kind_name(), ta.length(), elements)
    }
}
