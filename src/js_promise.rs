use crate::core::{JSPromise, JSPromisePtr, PromiseState, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// Optional host capability for looking inside a pending-value wrapper.
///
/// Callers that can see promise internals supply an implementation; the
/// inspector checks for its presence once per call and degrades gracefully
/// without it.
pub trait PromiseProbe {
    fn promise_state(&self, promise: &JSPromisePtr) -> PromiseState;
}

/// Probe that reads the engine-internal promise slot directly.
pub struct EnginePromiseProbe;

impl PromiseProbe for EnginePromiseProbe {
    fn promise_state(&self, promise: &JSPromisePtr) -> PromiseState {
        promise.borrow().state.clone()
    }
}

pub fn new_pending_promise() -> Value {
    Value::Promise(Rc::new(RefCell::new(JSPromise::new())))
}

pub fn new_fulfilled_promise(value: Value) -> Value {
    Value::Promise(Rc::new(RefCell::new(JSPromise {
        state: PromiseState::Fulfilled(value),
    })))
}

pub fn new_rejected_promise(reason: Value) -> Value {
    Value::Promise(Rc::new(RefCell::new(JSPromise {
        state: PromiseState::Rejected(reason),
    })))
}
