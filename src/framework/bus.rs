use crate::error::{AutozoneError, Result};
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;

/// Typed value storage connecting pipeline stages.
///
/// Values are keyed by their concrete type. A stage publishes its output with
/// [`Bus::put`] and downstream stages read it back by type.
#[derive(Default)]
pub struct Bus {
    values: HashMap<TypeId, Box<dyn Any>>,
}

impl Bus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the stored value of type `T`.
    pub fn put<T: 'static>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Box::new(value));
    }

    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|v| v.downcast_ref::<T>())
    }

    pub fn get_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.values
            .get_mut(&TypeId::of::<T>())
            .and_then(|v| v.downcast_mut::<T>())
    }

    /// Removes and returns the stored value of type `T`.
    pub fn take<T: 'static>(&mut self) -> Option<T> {
        self.values
            .remove(&TypeId::of::<T>())
            .and_then(|v| v.downcast::<T>().ok())
            .map(|b| *b)
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<T>())
    }

    /// Like [`Bus::get`], but a missing value is an error naming the type.
    pub fn require<T: 'static>(&self) -> Result<&T> {
        self.get::<T>().ok_or_else(|| missing::<T>())
    }

    pub fn require_mut<T: 'static>(&mut self) -> Result<&mut T> {
        self.get_mut::<T>().ok_or_else(|| missing::<T>())
    }
}

fn missing<T>() -> AutozoneError {
    AutozoneError::InvalidModel(format!(
        "no {} published by an upstream stage",
        type_name::<T>()
    ))
}
