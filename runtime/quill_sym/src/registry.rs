//! Symbol registry: allocation and metadata for unique-identity keys.
//!
//! Provides O(1) allocation and lookup with thread-safe concurrent access.
//! Unlike a string interner, the unkeyed [`SymRegistry::create`] path never
//! deduplicates: equal descriptions still produce distinct symbols. The
//! keyed [`SymRegistry::sym_for`] path does deduplicate, which is what
//! makes it a registry of shared, relocatable keys.

use crate::Sym;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// Per-symbol metadata.
struct SymData {
    /// Descriptive label passed at creation, if any. Does not participate
    /// in identity.
    description: Option<Arc<str>>,
    /// Registry key for symbols allocated through `sym_for`.
    key: Option<Arc<str>>,
}

/// Internal storage behind the registry lock.
struct RegistryInner {
    /// Metadata for every symbol ever allocated, indexed by `Sym`.
    syms: Vec<SymData>,
    /// Map from registry key to its shared symbol.
    keyed: FxHashMap<Arc<str>, Sym>,
}

/// Error when allocating a symbol fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Registry exceeded capacity (over 4 billion symbols).
    Exhausted { count: usize },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Exhausted { count } => write!(
                f,
                "symbol registry exhausted: {} symbols allocated, max is {}",
                count,
                Sym::MAX
            ),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Registry of unique-identity symbols.
///
/// Every [`create`](Self::create) call returns a fresh symbol, distinct
/// from every symbol this registry has produced — labels never collapse
/// two symbols into one. The keyed space ([`sym_for`](Self::sym_for))
/// behaves like an interner instead: equal keys resolve to one symbol.
///
/// # Thread Safety
/// Uses an `RwLock` for concurrent read/write access. Wrap in
/// [`SharedSymRegistry`] for sharing across threads.
pub struct SymRegistry {
    inner: RwLock<RegistryInner>,
}

impl SymRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        SymRegistry {
            inner: RwLock::new(RegistryInner {
                syms: Vec::new(),
                keyed: FxHashMap::default(),
            }),
        }
    }

    /// Try to allocate a fresh symbol, returning an error on overflow.
    ///
    /// This is the fallible version of `create()`. The description, if
    /// given, is retained for display purposes only; it has no effect on
    /// identity or equality.
    pub fn try_create(&self, description: Option<&str>) -> Result<Sym, RegistryError> {
        let mut guard = self.inner.write();
        Self::alloc(&mut guard, description.map(Arc::from), None)
    }

    /// Allocate a fresh symbol.
    ///
    /// # Panics
    /// Panics if the registry exceeds capacity (over 4 billion symbols).
    /// Use `try_create` for fallible allocation.
    #[inline]
    pub fn create(&self, description: Option<&str>) -> Sym {
        self.try_create(description)
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// Try to resolve a registry key to its shared symbol, allocating on
    /// first use.
    ///
    /// Equal keys always resolve to the same symbol; the symbol's
    /// description is the key itself.
    pub fn try_sym_for(&self, key: &str) -> Result<Sym, RegistryError> {
        // Fast path: key already registered
        {
            let guard = self.inner.read();
            if let Some(&sym) = guard.keyed.get(key) {
                return Ok(sym);
            }
        }

        // Slow path: need to allocate
        let mut guard = self.inner.write();

        // Double-check after acquiring write lock
        if let Some(&sym) = guard.keyed.get(key) {
            return Ok(sym);
        }

        let shared: Arc<str> = Arc::from(key);
        let sym = Self::alloc(&mut guard, Some(Arc::clone(&shared)), Some(Arc::clone(&shared)))?;
        guard.keyed.insert(shared, sym);
        Ok(sym)
    }

    /// Resolve a registry key to its shared symbol, allocating on first use.
    ///
    /// # Panics
    /// Panics if the registry exceeds capacity. Use `try_sym_for` for
    /// fallible resolution.
    #[inline]
    pub fn sym_for(&self, key: &str) -> Sym {
        self.try_sym_for(key).unwrap_or_else(|e| panic!("{}", e))
    }

    fn alloc(
        inner: &mut RegistryInner,
        description: Option<Arc<str>>,
        key: Option<Arc<str>>,
    ) -> Result<Sym, RegistryError> {
        let index = u32::try_from(inner.syms.len()).map_err(|_| RegistryError::Exhausted {
            count: inner.syms.len(),
        })?;
        inner.syms.push(SymData { description, key });
        Ok(Sym::new(index))
    }

    /// Description attached at creation, if any.
    ///
    /// Returns `None` for symbols created without a label and for raw
    /// values this registry never allocated.
    pub fn description(&self, sym: Sym) -> Option<Arc<str>> {
        let guard = self.inner.read();
        guard
            .syms
            .get(sym.index())
            .and_then(|data| data.description.clone())
    }

    /// Registry key for a symbol allocated through [`sym_for`](Self::sym_for).
    ///
    /// Returns `None` for symbols allocated through [`create`](Self::create).
    pub fn key_for(&self, sym: Sym) -> Option<Arc<str>> {
        let guard = self.inner.read();
        guard.syms.get(sym.index()).and_then(|data| data.key.clone())
    }

    /// Whether this registry allocated the given symbol.
    pub fn contains(&self, sym: Sym) -> bool {
        self.inner.read().syms.len() > sym.index()
    }

    /// Number of symbols allocated so far.
    pub fn len(&self) -> usize {
        self.inner.read().syms.len()
    }

    /// Whether no symbols have been allocated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Format a symbol for display, resolving its description.
    pub fn display(&self, sym: Sym) -> SymDisplay {
        SymDisplay {
            description: self.description(sym),
        }
    }
}

impl Default for SymRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper for displaying a [`Sym`] with its resolved description.
pub struct SymDisplay {
    description: Option<Arc<str>>,
}

impl fmt::Display for SymDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "Symbol({desc})"),
            None => write!(f, "Symbol()"),
        }
    }
}

/// Thread-safe shared symbol registry.
///
/// Uses `Arc` internally for thread-safe reference counting. Clone is
/// cheap and all clones observe the same identity space.
pub struct SharedSymRegistry(Arc<SymRegistry>);

impl SharedSymRegistry {
    /// Create a new shared registry.
    pub fn new() -> Self {
        SharedSymRegistry(Arc::new(SymRegistry::new()))
    }
}

impl Default for SharedSymRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SharedSymRegistry {
    fn clone(&self) -> Self {
        SharedSymRegistry(Arc::clone(&self.0))
    }
}

impl std::ops::Deref for SharedSymRegistry {
    type Target = SymRegistry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn create_is_always_fresh() {
        let registry = SymRegistry::new();
        let a = registry.create(Some("foo"));
        let b = registry.create(Some("foo"));
        assert_ne!(a, b);

        let c = registry.create(None);
        let d = registry.create(None);
        assert_ne!(c, d);
    }

    #[test]
    fn description_does_not_affect_identity() {
        let registry = SymRegistry::new();
        let a = registry.create(Some("shared"));
        let b = registry.create(Some("shared"));
        assert_eq!(registry.description(a), registry.description(b));
        assert_ne!(a, b);
    }

    #[test]
    fn description_round_trip() {
        let registry = SymRegistry::new();
        let labeled = registry.create(Some("label"));
        let bare = registry.create(None);
        assert_eq!(registry.description(labeled).as_deref(), Some("label"));
        assert_eq!(registry.description(bare), None);
    }

    #[test]
    fn sym_for_deduplicates() {
        let registry = SymRegistry::new();
        let a = registry.sym_for("app.key");
        let b = registry.sym_for("app.key");
        let c = registry.sym_for("other.key");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn sym_for_sets_description_to_key() {
        let registry = SymRegistry::new();
        let sym = registry.sym_for("app.key");
        assert_eq!(registry.description(sym).as_deref(), Some("app.key"));
        assert_eq!(registry.key_for(sym).as_deref(), Some("app.key"));
    }

    #[test]
    fn key_for_is_none_for_unkeyed() {
        let registry = SymRegistry::new();
        let sym = registry.create(Some("label"));
        assert_eq!(registry.key_for(sym), None);
    }

    #[test]
    fn keyed_and_unkeyed_share_identity_space() {
        let registry = SymRegistry::new();
        let unkeyed = registry.create(Some("app.key"));
        let keyed = registry.sym_for("app.key");
        assert_ne!(unkeyed, keyed);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn contains_rejects_foreign_raw_values() {
        let registry = SymRegistry::new();
        let sym = registry.create(None);
        assert!(registry.contains(sym));
        assert!(!registry.contains(Sym::from_raw(999)));
        assert_eq!(registry.description(Sym::from_raw(999)), None);
    }

    #[test]
    fn display_with_and_without_description() {
        let registry = SymRegistry::new();
        let labeled = registry.create(Some("foo"));
        let bare = registry.create(None);
        assert_eq!(format!("{}", registry.display(labeled)), "Symbol(foo)");
        assert_eq!(format!("{}", registry.display(bare)), "Symbol()");
    }

    #[test]
    fn shared_registry_clones_observe_one_space() {
        let shared = SharedSymRegistry::new();
        let clone = shared.clone();
        let a = shared.create(None);
        let b = clone.create(None);
        assert_ne!(a, b);
        assert_eq!(shared.len(), 2);
        assert_eq!(clone.len(), 2);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any two create calls yield distinct symbols, labels equal
            /// or not.
            #[test]
            fn pairwise_unique(labels in proptest::collection::vec(
                proptest::option::of("[a-z]{0,8}"), 2..32,
            )) {
                let registry = SymRegistry::new();
                let syms: Vec<Sym> = labels
                    .iter()
                    .map(|l| registry.create(l.as_deref()))
                    .collect();
                for (i, a) in syms.iter().enumerate() {
                    for b in &syms[i + 1..] {
                        prop_assert_ne!(a, b);
                    }
                }
            }

            /// sym_for is idempotent per key.
            #[test]
            fn keyed_idempotent(key in "[a-z.]{1,16}") {
                let registry = SymRegistry::new();
                let first = registry.sym_for(&key);
                prop_assert_eq!(registry.sym_for(&key), first);
                let key_for = registry.key_for(first);
                prop_assert_eq!(key_for.as_deref(), Some(key.as_str()));
            }
        }
    }
}
