//! Identity-unique symbol keys

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique symbol IDs
static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a new unique symbol ID
fn generate_symbol_id() -> u64 {
    NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed)
}

/// A non-string property key with identity semantics.
///
/// Two symbols are equal only if they are the same symbol, regardless of
/// their descriptions. The description exists purely for display.
#[derive(Debug, Clone, Serialize)]
pub struct Symbol {
    /// Unique symbol ID (assigned on creation)
    id: u64,
    /// Optional human-readable description
    description: Option<String>,
}

impl Symbol {
    /// Create a new symbol with a description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: generate_symbol_id(),
            description: Some(description.into()),
        }
    }

    /// Create a new symbol without a description
    pub fn anonymous() -> Self {
        Self {
            id: generate_symbol_id(),
            description: None,
        }
    }

    /// Get the unique symbol ID
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_identity() {
        let a = Symbol::new("a");
        let b = Symbol::new("a");

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::new("tag").to_string(), "Symbol(tag)");
        assert_eq!(Symbol::anonymous().to_string(), "Symbol()");
    }

    #[test]
    fn test_symbol_description() {
        assert_eq!(Symbol::new("tag").description(), Some("tag"));
        assert_eq!(Symbol::anonymous().description(), None);
    }
}
