//! Insertion-ordered record with visible and hidden key spaces.
//!
//! A `PropertyMap` is the record type of the object model. Internally it
//! holds two insertion-ordered maps — one for string keys, one for symbol
//! keys — composed behind a single interface. Every projection observes
//! insertion order within its space.
//!
//! The invariant of the hidden space: ordinary enumeration
//! ([`enumerable_string_keys`](PropertyMap::enumerable_string_keys)),
//! own-name listing ([`own_string_keys`](PropertyMap::own_string_keys)),
//! and serialization ([`to_json`](PropertyMap::to_json)) behave as if
//! symbol-keyed entries do not exist. Only
//! [`own_sym_keys`](PropertyMap::own_sym_keys) reveals them.

use crate::errors::{ObjectError, ObjectResult};
use crate::{PropertyAttributes, PropertyKey, Value};
use indexmap::map::Entry;
use indexmap::IndexMap;
use quill_sym::Sym;
use rustc_hash::FxBuildHasher;
use std::fmt;

type OrderedMap<K> = IndexMap<K, Slot, FxBuildHasher>;

/// One record slot: a value plus its attributes.
#[derive(Clone, PartialEq, Debug)]
struct Slot {
    value: Value,
    attrs: PropertyAttributes,
}

/// Record with two disjoint, insertion-ordered key spaces.
#[derive(Clone, PartialEq, Default)]
pub struct PropertyMap {
    strings: OrderedMap<Box<str>>,
    syms: OrderedMap<Sym>,
}

impl PropertyMap {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a plain data slot.
    ///
    /// A fresh slot gets default attributes (writable, enumerable,
    /// configurable). Overwriting keeps the slot's position and
    /// attributes; overwriting a non-writable slot fails.
    pub fn insert(
        &mut self,
        key: impl Into<PropertyKey>,
        value: impl Into<Value>,
    ) -> ObjectResult<()> {
        let key = key.into();
        let value = value.into();
        match key {
            PropertyKey::Str(name) => Self::upsert(&mut self.strings, name, value),
            PropertyKey::Sym(sym) => Self::upsert(&mut self.syms, sym, value),
        }
    }

    fn upsert<K>(map: &mut OrderedMap<K>, key: K, value: Value) -> ObjectResult<()>
    where
        K: std::hash::Hash + Eq + KeyName,
    {
        match map.entry(key) {
            Entry::Occupied(mut entry) => {
                if !entry.get().attrs.is_writable() {
                    return Err(ObjectError::NotWritable {
                        key: entry.key().key_name(),
                    });
                }
                entry.get_mut().value = value;
                Ok(())
            }
            Entry::Vacant(entry) => {
                entry.insert(Slot {
                    value,
                    attrs: PropertyAttributes::default(),
                });
                Ok(())
            }
        }
    }

    /// Define a slot with explicit attributes, replacing any existing slot.
    ///
    /// Redefining a non-configurable slot fails. The slot's position is
    /// kept when it already exists.
    pub fn define(
        &mut self,
        key: impl Into<PropertyKey>,
        value: impl Into<Value>,
        attrs: PropertyAttributes,
    ) -> ObjectResult<()> {
        let key = key.into();
        let value = value.into();
        match key {
            PropertyKey::Str(name) => Self::redefine(&mut self.strings, name, value, attrs),
            PropertyKey::Sym(sym) => Self::redefine(&mut self.syms, sym, value, attrs),
        }
    }

    fn redefine<K>(
        map: &mut OrderedMap<K>,
        key: K,
        value: Value,
        attrs: PropertyAttributes,
    ) -> ObjectResult<()>
    where
        K: std::hash::Hash + Eq + KeyName,
    {
        match map.entry(key) {
            Entry::Occupied(mut entry) => {
                if !entry.get().attrs.is_configurable() {
                    return Err(ObjectError::NotConfigurable {
                        key: entry.key().key_name(),
                    });
                }
                *entry.get_mut() = Slot { value, attrs };
                Ok(())
            }
            Entry::Vacant(entry) => {
                entry.insert(Slot { value, attrs });
                Ok(())
            }
        }
    }

    /// Stored value for a key, if present.
    pub fn get(&self, key: &PropertyKey) -> Option<&Value> {
        match key {
            PropertyKey::Str(name) => self.get_str(name),
            PropertyKey::Sym(sym) => self.get_sym(*sym),
        }
    }

    /// Stored value for a string key, if present.
    #[inline]
    pub fn get_str(&self, name: &str) -> Option<&Value> {
        self.strings.get(name).map(|slot| &slot.value)
    }

    /// Stored value for a symbol key, if present.
    #[inline]
    pub fn get_sym(&self, sym: Sym) -> Option<&Value> {
        self.syms.get(&sym).map(|slot| &slot.value)
    }

    /// Stored value for a key, or `Undefined` when absent.
    ///
    /// This is the read the engine performs on plain records: absent
    /// properties do not error, they read as undefined.
    pub fn get_or_undefined(&self, key: &PropertyKey) -> Value {
        self.get(key).cloned().unwrap_or(Value::Undefined)
    }

    /// Attributes of a slot, if present.
    pub fn attributes(&self, key: &PropertyKey) -> Option<PropertyAttributes> {
        match key {
            PropertyKey::Str(name) => self.strings.get(name.as_ref()).map(|slot| slot.attrs),
            PropertyKey::Sym(sym) => self.syms.get(sym).map(|slot| slot.attrs),
        }
    }

    /// Whether a slot exists for the key (in either space).
    pub fn contains_key(&self, key: &PropertyKey) -> bool {
        match key {
            PropertyKey::Str(name) => self.strings.contains_key(name.as_ref()),
            PropertyKey::Sym(sym) => self.syms.contains_key(sym),
        }
    }

    /// Remove a slot, returning its value.
    ///
    /// Removing a non-configurable slot fails. Removal preserves the
    /// insertion order of the remaining slots.
    pub fn remove(&mut self, key: &PropertyKey) -> ObjectResult<Option<Value>> {
        match key {
            PropertyKey::Str(name) => {
                if let Some(slot) = self.strings.get(name.as_ref()) {
                    if !slot.attrs.is_configurable() {
                        return Err(ObjectError::NotConfigurable {
                            key: name.to_string(),
                        });
                    }
                }
                Ok(self
                    .strings
                    .shift_remove(name.as_ref())
                    .map(|slot| slot.value))
            }
            PropertyKey::Sym(sym) => {
                if let Some(slot) = self.syms.get(sym) {
                    if !slot.attrs.is_configurable() {
                        return Err(ObjectError::NotConfigurable {
                            key: sym.key_name(),
                        });
                    }
                }
                Ok(self.syms.shift_remove(sym).map(|slot| slot.value))
            }
        }
    }

    /// Ordinary enumeration: enumerable string keys, insertion order.
    ///
    /// Symbol-keyed and non-enumerable entries are absent, as if they
    /// did not exist.
    pub fn enumerable_string_keys(&self) -> Vec<&str> {
        self.strings
            .iter()
            .filter(|(_, slot)| slot.attrs.is_enumerable())
            .map(|(name, _)| name.as_ref())
            .collect()
    }

    /// All own string keys, including non-enumerable ones, insertion
    /// order. Still excludes the hidden space.
    pub fn own_string_keys(&self) -> Vec<&str> {
        self.strings.keys().map(AsRef::as_ref).collect()
    }

    /// The hidden key space: exactly the symbol keys, insertion order.
    ///
    /// This is the only projection that reveals symbol-keyed entries.
    pub fn own_sym_keys(&self) -> Vec<Sym> {
        self.syms.keys().copied().collect()
    }

    /// Iterate enumerable string-keyed entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.strings
            .iter()
            .filter(|(_, slot)| slot.attrs.is_enumerable())
            .map(|(name, slot)| (name.as_ref(), &slot.value))
    }

    /// Total number of slots across both key spaces.
    pub fn len(&self) -> usize {
        self.strings.len() + self.syms.len()
    }

    /// Whether the record has no slots in either space.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty() && self.syms.is_empty()
    }
}

/// Render a key for error messages without a registry at hand.
trait KeyName {
    fn key_name(&self) -> String;
}

impl KeyName for Box<str> {
    fn key_name(&self) -> String {
        self.to_string()
    }
}

impl KeyName for Sym {
    fn key_name(&self) -> String {
        format!("symbol #{}", self.raw())
    }
}

impl fmt::Debug for PropertyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, slot) in &self.strings {
            map.entry(&format_args!("{name}"), &slot.value);
        }
        for (sym, slot) in &self.syms {
            map.entry(&format_args!("[symbol #{}]", sym.raw()), &slot.value);
        }
        map.finish()
    }
}
