//! Protolens object model
//!
//! A parent-linked dynamic object model for ancestor-chain inspection:
//! - **Values**: dynamic scalars, symbols, and object handles (`value` module)
//! - **Keys**: string and identity-unique symbol keys (`key`, `symbol` modules)
//! - **Descriptors**: data/accessor payloads with enumerability flags
//!   (`descriptor` module)
//! - **Objects**: ordered own-property tables plus a parent link, with chain
//!   iteration (`object` module)
//! - **Intrinsics**: the shared object root and function prototypes
//!   (`intrinsics` module)
//!
//! The model exists so exposure transforms have something faithful to walk:
//! objects are built by mutation while exclusively owned, then frozen behind
//! [`ObjectRef`] handles once they become a parent or a value.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod descriptor;
pub mod error;
pub mod intrinsics;
pub mod key;
pub mod object;
pub mod symbol;
pub mod value;

pub use descriptor::{Descriptor, DescriptorPayload, Getter, Setter};
pub use error::PropertyError;
pub use intrinsics::{function_proto, object_proto, FUNCTION_PROTO_KEYS, OBJECT_PROTO_KEYS};
pub use key::PropKey;
pub use object::{ChainIter, ObjectRef, PropObject};
pub use symbol::Symbol;
pub use value::Value;
