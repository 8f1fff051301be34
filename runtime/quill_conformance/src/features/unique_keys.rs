//! Uniqueness and enumeration-exclusion of symbol keys.
//!
//! Symbols with equal labels are still distinct identities. A record
//! keyed only by symbols is invisible to ordinary serialization and
//! enumeration; only the own-symbols projection reveals the keys, in
//! insertion order.

use crate::{check, CheckError};
use quill_object::{PropertyKey, PropertyMap};
use quill_sym::SymRegistry;

/// Run the unique-keys script.
pub fn run() -> Result<(), CheckError> {
    let registry = SymRegistry::new();

    check(registry.create(Some("foo")) != registry.create(Some("foo")))?;

    let foo = registry.create(None);
    let bar = registry.create(None);
    check(foo != bar)?;
    check(PropertyKey::from(foo).is_hidden())?;
    check(PropertyKey::from(bar).is_hidden())?;

    let mut obj = PropertyMap::new();
    check(obj.insert(foo, "foo").is_ok())?;
    check(obj.insert(bar, "bar").is_ok())?;

    check(obj.to_json().as_deref() == Ok("{}"))?;
    check(obj.enumerable_string_keys().is_empty())?;
    check(obj.own_string_keys().is_empty())?;
    check(obj.own_sym_keys() == vec![foo, bar])?;

    Ok(())
}
