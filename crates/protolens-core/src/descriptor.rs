//! Property descriptors: data/accessor payloads plus flags

use crate::error::PropertyError;
use crate::key::PropKey;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// A property getter. Failures are surfaced to the caller as
/// property-access errors tagged with the key being read.
pub type Getter = Arc<dyn Fn() -> Result<Value, String> + Send + Sync>;

/// A property setter. Kept for descriptor fidelity; the exposure
/// operations never invoke it.
pub type Setter = Arc<dyn Fn(Value) -> Result<(), String> + Send + Sync>;

/// The value-bearing half of a descriptor.
#[derive(Clone)]
pub enum DescriptorPayload {
    /// Plain data property
    Data {
        /// Stored value
        value: Value,
        /// Whether the value may be reassigned
        writable: bool,
    },
    /// Accessor property
    Accessor {
        /// Getter, if any
        get: Option<Getter>,
        /// Setter, if any
        set: Option<Setter>,
    },
}

/// Full property metadata: payload plus flags.
#[derive(Clone)]
pub struct Descriptor {
    /// Data or accessor payload
    pub payload: DescriptorPayload,
    /// Whether the property shows up in generic enumeration
    pub enumerable: bool,
    /// Whether the property may be redefined
    pub configurable: bool,
}

impl Descriptor {
    /// A writable, enumerable, configurable data property
    pub fn data(value: Value) -> Self {
        Self {
            payload: DescriptorPayload::Data {
                value,
                writable: true,
            },
            enumerable: true,
            configurable: true,
        }
    }

    /// A non-enumerable data property (writable, configurable)
    pub fn hidden(value: Value) -> Self {
        Self::data(value).enumerable(false)
    }

    /// An enumerable accessor property with only a getter
    pub fn getter(get: Getter) -> Self {
        Self::accessor(Some(get), None)
    }

    /// An enumerable accessor property
    pub fn accessor(get: Option<Getter>, set: Option<Setter>) -> Self {
        Self {
            payload: DescriptorPayload::Accessor { get, set },
            enumerable: true,
            configurable: true,
        }
    }

    /// Set the enumerable flag
    pub fn enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = enumerable;
        self
    }

    /// Set the configurable flag
    pub fn configurable(mut self, configurable: bool) -> Self {
        self.configurable = configurable;
        self
    }

    /// Set the writable flag (no effect on accessors)
    pub fn writable(mut self, writable: bool) -> Self {
        if let DescriptorPayload::Data { writable: w, .. } = &mut self.payload {
            *w = writable;
        }
        self
    }

    /// Whether this descriptor is an accessor
    pub fn is_accessor(&self) -> bool {
        matches!(self.payload, DescriptorPayload::Accessor { .. })
    }

    /// Whether the descriptor carries data or accessor markers.
    ///
    /// Accessors always do; a data descriptor does unless its value is null
    /// and it is non-writable. Marker-less descriptors are copied by value
    /// rather than by descriptor during enumerable mirroring.
    pub fn has_markers(&self) -> bool {
        match &self.payload {
            DescriptorPayload::Accessor { .. } => true,
            DescriptorPayload::Data { value, writable } => !value.is_null() || *writable,
        }
    }

    /// Read the property value.
    ///
    /// Data descriptors yield their stored value; accessors invoke the
    /// getter (an accessor with no getter reads as null). A failing getter
    /// surfaces as [`PropertyError::AccessFailed`] tagged with `key`.
    pub fn read(&self, key: &PropKey) -> Result<Value, PropertyError> {
        match &self.payload {
            DescriptorPayload::Data { value, .. } => Ok(value.clone()),
            DescriptorPayload::Accessor { get: None, .. } => Ok(Value::Null),
            DescriptorPayload::Accessor { get: Some(get), .. } => get()
                .map_err(|message| PropertyError::access_failed(key.display_key(), message)),
        }
    }

    /// A copy of this descriptor with the enumerable flag forced on
    pub fn make_enumerable(&self) -> Descriptor {
        self.clone().enumerable(true)
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("Descriptor");
        match &self.payload {
            DescriptorPayload::Data { value, writable } => {
                dbg.field("value", value).field("writable", writable);
            }
            DescriptorPayload::Accessor { get, set } => {
                dbg.field("get", &get.is_some()).field("set", &set.is_some());
            }
        }
        dbg.field("enumerable", &self.enumerable)
            .field("configurable", &self.configurable)
            .finish()
    }
}
