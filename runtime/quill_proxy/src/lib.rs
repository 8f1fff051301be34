//! Quill Proxy - Read interception for quill records.
//!
//! A [`Proxy`] wraps a [`PropertyMap`] target and routes every read
//! through a [`GetHandler`]. Only reads are trapped: writes go to the
//! underlying map directly via [`Proxy::target_mut`].
//!
//! The stock handlers cover the two policies the runtime needs:
//! - [`PassThrough`]: stored value, or `Undefined` for absent keys
//! - [`Fallback`]: stored value for present keys, a computed fallback
//!   value for absent ones
//!
//! # Example
//!
//! ```
//! use quill_object::{PropertyKey, PropertyMap};
//! use quill_proxy::{Fallback, Lookup, Proxy};
//!
//! let mut target = PropertyMap::new();
//! target.insert("foo", "Welcome, foo")?;
//! let proxy = Proxy::new(target, Fallback::greeting());
//!
//! let known = proxy.lookup(&PropertyKey::from("foo"));
//! assert_eq!(known.as_str(), Some("Welcome, foo"));
//! let absent = proxy.lookup(&PropertyKey::from("world"));
//! assert_eq!(absent.as_str(), Some("Hello, world"));
//! # Ok::<(), quill_object::ObjectError>(())
//! ```

mod handler;
mod proxy;

pub use handler::{Fallback, GetHandler, GreetingFn, PassThrough};
pub use proxy::Proxy;

use quill_object::{PropertyKey, PropertyMap, Value};

/// Single-method read interface over a record-shaped store.
///
/// Both plain records and proxies implement it; callers that only read
/// can stay generic over which one they were handed.
pub trait Lookup {
    /// Read a key. Never fails: absent keys resolve to a value chosen
    /// by the implementation (`Undefined` for plain records).
    fn lookup(&self, key: &PropertyKey) -> Value;
}

impl Lookup for PropertyMap {
    fn lookup(&self, key: &PropertyKey) -> Value {
        self.get_or_undefined(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_record_lookup_is_stored_or_undefined() {
        let mut map = PropertyMap::new();
        map.insert("foo", 1i64).unwrap();
        assert_eq!(map.lookup(&PropertyKey::from("foo")), Value::Int(1));
        assert_eq!(map.lookup(&PropertyKey::from("bar")), Value::Undefined);
    }
}
