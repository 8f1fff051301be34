//! Record keys: the visible (string) and hidden (symbol) key spaces.
//!
//! A `PropertyKey` names one slot of a [`PropertyMap`](crate::PropertyMap).
//! The two variants never collide: a string key and a symbol key address
//! disjoint spaces of the same record.

use quill_sym::Sym;
use std::fmt;

/// Key of a record slot.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PropertyKey {
    /// Visible string key; surfaced by ordinary enumeration.
    Str(Box<str>),
    /// Hidden unique-identity key; surfaced only by the own-symbols
    /// projection.
    Sym(Sym),
}

impl PropertyKey {
    /// Borrow the string name, if this is a string key.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::Str(name) => Some(name),
            PropertyKey::Sym(_) => None,
        }
    }

    /// The symbol, if this is a symbol key.
    #[inline]
    pub fn as_sym(&self) -> Option<Sym> {
        match self {
            PropertyKey::Str(_) => None,
            PropertyKey::Sym(sym) => Some(*sym),
        }
    }

    /// Whether this key belongs to the hidden space.
    #[inline]
    pub fn is_hidden(&self) -> bool {
        matches!(self, PropertyKey::Sym(_))
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Str(name) => write!(f, "{name}"),
            PropertyKey::Sym(sym) => write!(f, "symbol #{}", sym.raw()),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        PropertyKey::Str(name.into())
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        PropertyKey::Str(name.into_boxed_str())
    }
}

impl From<Sym> for PropertyKey {
    fn from(sym: Sym) -> Self {
        PropertyKey::Sym(sym)
    }
}
