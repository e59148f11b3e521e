use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;

use crate::class::table::Class;
use crate::error::CallError;

/// An object of a [`Class`]: shared method table plus per-instance fields.
///
/// Field access recovers from a poisoned lock rather than panicking; the
/// map holds plain values only, so a half-finished write cannot exist.
pub struct Instance {
    class: Arc<Class>,
    fields: Mutex<BTreeMap<String, Value>>,
}

impl Instance {
    pub(crate) fn new(class: Arc<Class>) -> Self {
        Self {
            class,
            fields: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn class(&self) -> &Arc<Class> {
        &self.class
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), value.into());
    }

    /// Instance field, falling back to a class-level field of the same name.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self
            .fields
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return Some(value.clone());
        }
        self.class.field(name).cloned()
    }

    /// Dispatch a method call through the class and its bases.
    pub fn call(&self, method: &str, args: &[Value]) -> Result<Value, CallError> {
        let resolved = self
            .class
            .resolve(method)
            .ok_or_else(|| CallError::NoSuchMethod {
                class: self.class.name().to_string(),
                method: method.to_string(),
            })?;
        (resolved.func)(self, args)
    }
}
