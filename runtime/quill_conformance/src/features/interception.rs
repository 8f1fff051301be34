//! Read interception with a fallback-value policy.
//!
//! A record holding one known field is wrapped in a greeting-fallback
//! proxy. Reading the known field returns the stored value unchanged;
//! reading an unknown field returns a computed greeting embedding the
//! requested field name.

use crate::{check, CheckError};
use quill_object::{PropertyMap, Value};
use quill_proxy::{Fallback, Proxy};

/// Run the interception script.
pub fn run() -> Result<(), CheckError> {
    let mut target = PropertyMap::new();
    check(target.insert("foo", "Welcome, foo").is_ok())?;

    let proxy = Proxy::new(target, Fallback::greeting());

    check(proxy.get_str("foo") == Value::string("Welcome, foo"))?;
    check(proxy.get_str("world") == Value::string("Hello, world"))?;

    Ok(())
}
