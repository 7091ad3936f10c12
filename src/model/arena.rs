//! Name-indexed arena used for spaces and thermal zones.
//!
//! Objects are stored in insertion order and addressed by [`ArenaId`]. A name
//! index allows resolving an [`ObjectRef`] either by id or by name.

use crate::HasName;
use crate::error::{AutozoneError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArenaId(usize);

impl ArenaId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Reference to an arena object, either by id or by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectRef<'a> {
    Id(ArenaId),
    Name(&'a str),
}

impl From<ArenaId> for ObjectRef<'_> {
    fn from(value: ArenaId) -> Self {
        Self::Id(value)
    }
}

impl<'a> From<&'a str> for ObjectRef<'a> {
    fn from(value: &'a str) -> Self {
        Self::Name(value)
    }
}

#[derive(Debug, Clone)]
pub struct NamedArena<T> {
    items: Vec<T>,
    index: HashMap<String, ArenaId>,
}

impl<T> Default for NamedArena<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: HasName> NamedArena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an object. Names must be unique within the arena.
    pub fn insert(&mut self, item: T) -> Result<ArenaId> {
        let name = item.get_name().to_string();
        if self.index.contains_key(&name) {
            return Err(AutozoneError::InvalidModel(format!(
                "duplicate name: {name}"
            )));
        }
        let id = ArenaId(self.items.len());
        self.items.push(item);
        self.index.insert(name, id);
        Ok(id)
    }

    pub fn get(&self, id: ArenaId) -> Option<&T> {
        self.items.get(id.0)
    }

    pub fn get_mut(&mut self, id: ArenaId) -> Option<&mut T> {
        self.items.get_mut(id.0)
    }

    pub fn id_of(&self, name: &str) -> Option<ArenaId> {
        self.index.get(name).copied()
    }

    pub fn resolve<'a>(&self, r: impl Into<ObjectRef<'a>>) -> Option<&T> {
        match r.into() {
            ObjectRef::Id(id) => self.get(id),
            ObjectRef::Name(name) => self.id_of(name).and_then(|id| self.get(id)),
        }
    }

    pub fn resolve_mut<'a>(&mut self, r: impl Into<ObjectRef<'a>>) -> Option<&mut T> {
        let id = match r.into() {
            ObjectRef::Id(id) => id,
            ObjectRef::Name(name) => self.id_of(name)?,
        };
        self.get_mut(id)
    }

    /// Ids ordered by object name.
    pub fn ids_by_name(&self) -> Vec<ArenaId> {
        let mut ids: Vec<ArenaId> = self.index.values().copied().collect();
        ids.sort_by(|a, b| self.items[a.0].get_name().cmp(self.items[b.0].get_name()));
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArenaId, &T)> {
        self.items.iter().enumerate().map(|(i, t)| (ArenaId(i), t))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }
}
