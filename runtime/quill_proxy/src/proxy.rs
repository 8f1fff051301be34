//! The interception wrapper itself.

use crate::{GetHandler, Lookup};
use quill_object::{PropertyKey, PropertyMap, Value};
use tracing::trace;

/// Record wrapper that routes every read through a handler.
///
/// The proxy owns its target. Writes are not trapped; mutate the target
/// through [`target_mut`](Proxy::target_mut).
pub struct Proxy<H> {
    target: PropertyMap,
    handler: H,
}

impl<H: GetHandler> Proxy<H> {
    /// Wrap a target record with a read handler.
    pub fn new(target: PropertyMap, handler: H) -> Self {
        Proxy { target, handler }
    }

    /// Read a key through the handler.
    pub fn get(&self, key: &PropertyKey) -> Value {
        let trapped = !self.target.contains_key(key);
        trace!(%key, trapped, "proxy get");
        self.handler.get(&self.target, key)
    }

    /// Read a string key through the handler.
    pub fn get_str(&self, name: &str) -> Value {
        self.get(&PropertyKey::from(name))
    }

    /// The wrapped record.
    pub fn target(&self) -> &PropertyMap {
        &self.target
    }

    /// Mutable access to the wrapped record. Writes bypass the handler.
    pub fn target_mut(&mut self) -> &mut PropertyMap {
        &mut self.target
    }

    /// Unwrap, discarding the handler.
    pub fn into_target(self) -> PropertyMap {
        self.target
    }
}

impl<H: GetHandler> Lookup for Proxy<H> {
    fn lookup(&self, key: &PropertyKey) -> Value {
        self.get(key)
    }
}
