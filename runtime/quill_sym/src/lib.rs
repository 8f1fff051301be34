//! Quill Sym - Unique-identity symbol keys for the quill object model.
//!
//! A [`Sym`] is an opaque identity value: every call to
//! [`SymRegistry::create`] produces a symbol distinct from every symbol the
//! registry has ever produced, regardless of any descriptive label attached
//! to it. Symbols are the hidden half of a record's key space — ordinary
//! enumeration and serialization never surface symbol-keyed entries.
//!
//! # Architecture
//!
//! - `Sym`: compact 32-bit handle, identity-only equality
//! - `SymRegistry`: allocator and metadata store, thread-safe via `RwLock`
//! - `SharedSymRegistry`: `Arc` wrapper for sharing across threads
//!
//! The registry also carries a keyed space ([`SymRegistry::sym_for`]) where
//! lookups with equal keys return the same symbol. Keyed and unkeyed
//! symbols share one identity space.

mod registry;
mod sym;

pub use registry::{RegistryError, SharedSymRegistry, SymDisplay, SymRegistry};
pub use sym::Sym;
