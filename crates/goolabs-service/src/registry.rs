//! Ordered set of call observers

use crate::observer::{CallContext, CallObserver};
use goolabs_core::GoolabsError;
use serde_json::Value;
use std::time::Duration;

/// Fans every hook out to the registered observers, in registration order
pub struct ObserverRegistry {
    observers: Vec<Box<dyn CallObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Register an observer; disabled ones are dropped
    pub fn register(&mut self, observer: Box<dyn CallObserver>) {
        if observer.is_enabled() {
            self.observers.push(observer);
        }
    }

    pub fn on_call_start(&self, call: &CallContext<'_>) {
        for observer in &self.observers {
            observer.on_call_start(call);
        }
    }

    pub fn on_call_success(&self, call: &CallContext<'_>, result: &Value, elapsed: Duration) {
        for observer in &self.observers {
            observer.on_call_success(call, result, elapsed);
        }
    }

    pub fn on_call_failure(&self, call: &CallContext<'_>, error: &GoolabsError, elapsed: Duration) {
        for observer in &self.observers {
            observer.on_call_failure(call, error, elapsed);
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.observers.iter().map(|o| o.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl Default for ObserverRegistry {
    fn default() -> Self {
        Self::new()
    }
}
