//! Protolens — ancestor-chain property exposure
//!
//! Walks a dynamic object's ancestor chain and re-exposes its properties —
//! own and inherited, enumerable and non-enumerable, string- and
//! symbol-keyed — in enumerable, inspectable shapes. Useful for debugging
//! and ad-hoc inspection: you get data back, not strings, so results can
//! stand in for the real object in mocks and lookups.
//!
//! Four views, one adapter:
//! - [`expose::flatten`] — every key on the chain in one flat sequence
//! - [`expose::arrays_by_level`] — one key sequence per ancestor level
//! - [`expose::nested_mirror`] — a mirror object linked through
//!   `__objParent` keys
//! - [`expose::enumerate`] — a mirrored chain with every property made
//!   enumerable
//! - [`stream::ExposeStream`] — forwards single objects from a push-based
//!   host pipeline through the configured view
//!
//! # Example
//!
//! ```rust,ignore
//! use protolens::{expose, Options, OutputMethod, PropObject, Value};
//!
//! let mut user = PropObject::plain();
//! user.set("name", Value::str("ada"));
//!
//! let keys = expose::flatten(&Value::object(user), &Options::default());
//! // own key first, then the object root's baseline keys
//! assert_eq!(keys[0].display_key(), "name");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod expose;
pub mod inspect;
pub mod options;
pub mod stream;

pub use expose::{arrays_by_level, enumerate, flatten, nested_mirror, Exposed, PARENT_KEY};
pub use inspect::{inspect, inspect_value};
pub use options::{Options, OutputMethod};
pub use stream::{stream, ExposeStream, Transform};

// Re-export the object model (canonical definitions live in protolens-core)
pub use protolens_core::{
    function_proto, object_proto, Descriptor, DescriptorPayload, ObjectRef, PropKey, PropObject,
    PropertyError, Symbol, Value,
};

/// Exposure errors
#[derive(Debug, thiserror::Error)]
pub enum ExposeError {
    /// A getter failed during a value-preserving copy
    #[error(transparent)]
    PropertyAccess(#[from] PropertyError),

    /// Filter pattern failed to compile
    #[error("invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Malformed options record
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

/// Exposure result
pub type ExposeResult<T> = Result<T, ExposeError>;
