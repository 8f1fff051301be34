//! Read-trap handlers.
//!
//! A handler decides what a trapped read returns. Handlers are plain
//! values: stateless ones are unit structs, parameterized ones carry
//! their policy as a closure.

use quill_object::{PropertyKey, PropertyMap, Value};

/// The read trap: sees every read against the proxy's target.
pub trait GetHandler {
    /// Produce the result of reading `key` from `target`.
    fn get(&self, target: &PropertyMap, key: &PropertyKey) -> Value;
}

/// Forwarding handler: stored value, or `Undefined` for absent keys.
#[derive(Default)]
pub struct PassThrough;

impl GetHandler for PassThrough {
    fn get(&self, target: &PropertyMap, key: &PropertyKey) -> Value {
        target.get_or_undefined(key)
    }
}

/// Fallback-value handler.
///
/// Present keys read through to the stored value unchanged; absent keys
/// produce the policy's fallback value instead of `Undefined`.
pub struct Fallback<F> {
    fallback: F,
}

impl<F> Fallback<F>
where
    F: Fn(&PropertyKey) -> Value,
{
    /// Wrap a fallback policy.
    pub fn new(fallback: F) -> Self {
        Fallback { fallback }
    }
}

impl<F> GetHandler for Fallback<F>
where
    F: Fn(&PropertyKey) -> Value,
{
    fn get(&self, target: &PropertyMap, key: &PropertyKey) -> Value {
        if target.contains_key(key) {
            target.get_or_undefined(key)
        } else {
            (self.fallback)(key)
        }
    }
}

/// Concrete policy type of [`Fallback::greeting`].
pub type GreetingFn = fn(&PropertyKey) -> Value;

impl Fallback<GreetingFn> {
    /// The greeting policy: absent string keys read as
    /// `"Hello, " + <key name>`.
    ///
    /// The policy covers the visible key space only; a trapped symbol
    /// read falls back to `Undefined` (the engine refuses to render a
    /// symbol as text).
    pub fn greeting() -> Self {
        Fallback::new(greet as GreetingFn)
    }
}

fn greet(key: &PropertyKey) -> Value {
    match key.as_str() {
        Some(name) => Value::string(format!("Hello, {name}")),
        None => Value::Undefined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quill_sym::SymRegistry;

    fn base() -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("foo", "Welcome, foo").unwrap();
        map
    }

    #[test]
    fn pass_through_forwards() {
        let target = base();
        let handler = PassThrough;
        assert_eq!(
            handler.get(&target, &PropertyKey::from("foo")),
            Value::string("Welcome, foo")
        );
        assert_eq!(
            handler.get(&target, &PropertyKey::from("bar")),
            Value::Undefined
        );
    }

    #[test]
    fn greeting_reads_present_keys_unchanged() {
        let target = base();
        let handler = Fallback::greeting();
        assert_eq!(
            handler.get(&target, &PropertyKey::from("foo")),
            Value::string("Welcome, foo")
        );
    }

    #[test]
    fn greeting_computes_fallback_for_absent_keys() {
        let target = base();
        let handler = Fallback::greeting();
        assert_eq!(
            handler.get(&target, &PropertyKey::from("world")),
            Value::string("Hello, world")
        );
    }

    #[test]
    fn greeting_leaves_symbol_reads_undefined() {
        let registry = SymRegistry::new();
        let sym = registry.create(Some("world"));
        let target = base();
        let handler = Fallback::greeting();
        assert_eq!(
            handler.get(&target, &PropertyKey::from(sym)),
            Value::Undefined
        );
    }

    #[test]
    fn custom_policy_sees_the_key() {
        let target = base();
        let handler = Fallback::new(|key: &PropertyKey| {
            Value::string(format!("missing: {key}"))
        });
        assert_eq!(
            handler.get(&target, &PropertyKey::from("x")),
            Value::string("missing: x")
        );
    }

    #[test]
    fn fallback_never_shadows_stored_undefined() {
        // A stored undefined is a present key: the trap reads it
        // through instead of invoking the policy.
        let mut target = base();
        target.insert("unset", Value::Undefined).unwrap();
        let handler = Fallback::greeting();
        assert_eq!(
            handler.get(&target, &PropertyKey::from("unset")),
            Value::Undefined
        );
    }
}
