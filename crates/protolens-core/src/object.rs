//! Parent-linked dynamic objects and ancestor-chain iteration

use crate::descriptor::Descriptor;
use crate::error::PropertyError;
use crate::intrinsics;
use crate::key::PropKey;
use crate::symbol::Symbol;
use crate::value::Value;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;

/// Shared immutable handle to an object.
///
/// Objects are built by mutation while exclusively owned and frozen once
/// shared as a parent link or a property value.
pub type ObjectRef = Arc<PropObject>;

/// Insertion-ordered own-property table
type PropTable<K> = IndexMap<K, Descriptor, FxBuildHasher>;

/// A dynamic object: two ordered own-property tables (string keys, then
/// symbol keys) and an optional parent link forming the ancestor chain.
#[derive(Debug, Clone, Default)]
pub struct PropObject {
    /// String-keyed own properties, in insertion order
    strings: PropTable<String>,
    /// Symbol-keyed own properties, in insertion order
    symbols: PropTable<Symbol>,
    /// Ancestor link (None terminates the chain)
    parent: Option<ObjectRef>,
}

impl PropObject {
    /// An object with no ancestor
    pub fn orphan() -> Self {
        Self::default()
    }

    /// An object whose ancestor is `parent`
    pub fn with_parent(parent: ObjectRef) -> Self {
        Self {
            parent: Some(parent),
            ..Self::default()
        }
    }

    /// A plain object: its ancestor is the shared object root prototype
    pub fn plain() -> Self {
        Self::with_parent(intrinsics::object_proto())
    }

    /// A callable object (function or class): its ancestor is the shared
    /// function prototype, which itself descends from the object root
    pub fn callable() -> Self {
        Self::with_parent(intrinsics::function_proto())
    }

    /// The ancestor link, if any
    pub fn parent(&self) -> Option<&ObjectRef> {
        self.parent.as_ref()
    }

    /// Define a property with an explicit descriptor.
    ///
    /// Redefining an existing key replaces its descriptor in place without
    /// changing its position in enumeration order.
    pub fn define(&mut self, key: impl Into<PropKey>, descriptor: Descriptor) {
        match key.into() {
            PropKey::Str(name) => {
                self.strings.insert(name, descriptor);
            }
            PropKey::Sym(sym) => {
                self.symbols.insert(sym, descriptor);
            }
        }
    }

    /// Define a writable, enumerable, configurable data property
    pub fn set(&mut self, key: impl Into<PropKey>, value: Value) {
        self.define(key, Descriptor::data(value));
    }

    /// Number of own properties (string and symbol keyed)
    pub fn own_len(&self) -> usize {
        self.strings.len() + self.symbols.len()
    }

    /// Number of own string-keyed properties
    pub fn string_key_count(&self) -> usize {
        self.strings.len()
    }

    /// Number of own symbol-keyed properties
    pub fn symbol_key_count(&self) -> usize {
        self.symbols.len()
    }

    /// Own string keys in insertion order
    pub fn own_string_keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(|k| k.as_str())
    }

    /// Own symbol keys in insertion order
    pub fn own_symbol_keys(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.keys()
    }

    /// All own keys: string keys first, then symbol keys
    pub fn own_keys(&self) -> Vec<PropKey> {
        self.own_entries().map(|(key, _)| key).collect()
    }

    /// All own properties as (key, descriptor) pairs, string keys first
    pub fn own_entries(&self) -> impl Iterator<Item = (PropKey, &Descriptor)> {
        self.strings
            .iter()
            .map(|(name, desc)| (PropKey::Str(name.clone()), desc))
            .chain(
                self.symbols
                    .iter()
                    .map(|(sym, desc)| (PropKey::Sym(sym.clone()), desc)),
            )
    }

    /// Look up an own property descriptor
    pub fn get_own(&self, key: &PropKey) -> Option<&Descriptor> {
        match key {
            PropKey::Str(name) => self.strings.get(name),
            PropKey::Sym(sym) => self.symbols.get(sym),
        }
    }

    /// Whether `key` is reachable anywhere on the ancestor chain
    pub fn has(&self, key: &PropKey) -> bool {
        self.ancestors().any(|level| level.get_own(key).is_some())
    }

    /// Read a property value through the ancestor chain.
    ///
    /// The nearest level owning the key wins. Returns `Ok(None)` when no
    /// level owns the key; getter failures propagate.
    pub fn get(&self, key: &PropKey) -> Result<Option<Value>, PropertyError> {
        for level in self.ancestors() {
            if let Some(desc) = level.get_own(key) {
                return desc.read(key).map(Some);
            }
        }
        Ok(None)
    }

    /// Iterate the ancestor chain, nearest first (this object included)
    pub fn ancestors(&self) -> ChainIter<'_> {
        ChainIter { next: Some(self) }
    }

    /// Number of levels on the chain, this object included and the null
    /// terminator excluded
    pub fn chain_len(&self) -> usize {
        self.ancestors().count()
    }

    /// Freeze this object into a shared handle
    pub fn into_ref(self) -> ObjectRef {
        Arc::new(self)
    }
}

/// Iterator over an object's ancestor chain, nearest level first
pub struct ChainIter<'a> {
    next: Option<&'a PropObject>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a PropObject;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent().map(|p| p.as_ref());
        Some(current)
    }
}
