//! Shared intrinsic prototypes
//!
//! Two lazily-built roots anchor every non-orphan chain:
//!
//! - the **object root**: baseline non-enumerable methods every plain
//!   object inherits
//! - the **function prototype**: what callables (functions and classes)
//!   delegate to; itself descends from the object root
//!
//! Both are frozen behind shared handles; a process has exactly one of each.

use crate::descriptor::Descriptor;
use crate::object::{ObjectRef, PropObject};
use crate::value::Value;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Own keys of the object root prototype, in enumeration order
pub const OBJECT_PROTO_KEYS: &[&str] = &[
    "constructor",
    "toString",
    "toLocaleString",
    "valueOf",
    "hasOwnProperty",
    "isPrototypeOf",
    "propertyIsEnumerable",
    "__defineGetter__",
    "__defineSetter__",
    "__lookupGetter__",
    "__lookupSetter__",
];

/// Non-accessor own keys of the function prototype, in enumeration order
pub const FUNCTION_PROTO_KEYS: &[&str] =
    &["length", "name", "constructor", "apply", "bind", "call", "toString"];

static OBJECT_PROTO: Lazy<ObjectRef> = Lazy::new(|| {
    let mut proto = PropObject::orphan();
    for name in OBJECT_PROTO_KEYS.iter().copied() {
        proto.define(name, Descriptor::hidden(Value::Builtin(name)));
    }
    proto.into_ref()
});

static FUNCTION_PROTO: Lazy<ObjectRef> = Lazy::new(|| {
    let mut proto = PropObject::with_parent(object_proto());
    proto.define("length", Descriptor::hidden(Value::Int(0)).writable(false));
    proto.define("name", Descriptor::hidden(Value::str("")).writable(false));
    for name in FUNCTION_PROTO_KEYS[2..].iter().copied() {
        proto.define(name, Descriptor::hidden(Value::Builtin(name)));
    }
    // Restricted properties: reading them through an accessor fails, so
    // descriptor-preserving copies must not trigger the getter.
    for name in ["arguments", "caller"] {
        proto.define(
            name,
            Descriptor::getter(Arc::new(move || {
                Err(format!("`{}` is a restricted property", name))
            }))
            .enumerable(false),
        );
    }
    proto.into_ref()
});

/// The shared object root prototype
pub fn object_proto() -> ObjectRef {
    OBJECT_PROTO.clone()
}

/// The shared function prototype
pub fn function_proto() -> ObjectRef {
    FUNCTION_PROTO.clone()
}
