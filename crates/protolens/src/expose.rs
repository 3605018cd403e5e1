//! Exposure transforms
//!
//! Four views over an object's ancestor chain, all pure functions of
//! (target, options):
//!
//! | Method          | Shape                                             |
//! |-----------------|---------------------------------------------------|
//! | `flatten`       | one flat key sequence, nearest level first        |
//! | `arrays_by_level` | one key sequence per level                      |
//! | `nested_mirror` | mirror object linked through `__objParent` keys   |
//! | `enumerate`     | mirrored chain with every property enumerable     |
//!
//! Non-object and falsy targets short-circuit to the empty result for the
//! requested shape. No transform mutates its input.

use crate::options::{Options, OutputMethod};
use crate::ExposeResult;
use protolens_core::{PropKey, PropObject, Value};

/// Key under which a nested mirror links its parent level's mirror
pub const PARENT_KEY: &str = "__objParent";

/// The result of applying an exposure method
#[derive(Debug, Clone, PartialEq)]
pub enum Exposed {
    /// Flat key sequence (`flatten`)
    Keys(Vec<PropKey>),
    /// One key sequence per ancestor level (`arrays_by_level`)
    Levels(Vec<Vec<PropKey>>),
    /// Mirror object (`nested_mirror`, `enumerate`)
    Object(Value),
}

impl Exposed {
    /// Render this result as JSON.
    ///
    /// Keys render in their string form; mirror objects render their own
    /// properties level-free (parent links inside `enumerate` mirrors are
    /// chain structure, not data, and are not expanded).
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Exposed::Keys(keys) => keys_to_json(keys),
            Exposed::Levels(levels) => {
                serde_json::Value::Array(levels.iter().map(|keys| keys_to_json(keys)).collect())
            }
            Exposed::Object(value) => value_to_json(value),
        }
    }
}

fn keys_to_json(keys: &[PropKey]) -> serde_json::Value {
    serde_json::Value::Array(
        keys.iter()
            .map(|key| serde_json::Value::String(key.display_key()))
            .collect(),
    )
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::from(*i),
        Value::Float(f) => serde_json::Value::from(*f),
        Value::Str(s) => serde_json::Value::String(s.clone()),
        Value::Sym(sym) => serde_json::Value::String(sym.to_string()),
        Value::Builtin(name) => serde_json::Value::String(format!("[builtin {}]", name)),
        Value::Object(obj) => {
            let mut map = serde_json::Map::new();
            for (key, desc) in obj.own_entries() {
                let rendered = match desc.read(&key) {
                    Ok(value) => value_to_json(&value),
                    Err(_) => serde_json::Value::Null,
                };
                map.insert(key.display_key(), rendered);
            }
            serde_json::Value::Object(map)
        }
    }
}

/// The ancestor levels of a target value, nearest first.
///
/// Empty for falsy and non-object targets.
fn levels_of(target: &Value) -> Vec<&PropObject> {
    if !target.truthy() {
        return Vec::new();
    }
    match target.as_object() {
        Some(obj) => obj.ancestors().collect(),
        None => Vec::new(),
    }
}

/// All own keys of every chain level in one flat sequence.
///
/// Each level contributes its own string keys then its own symbol keys,
/// nearest level first; keys recurring at different levels stay duplicated.
pub fn flatten(target: &Value, options: &Options) -> Vec<PropKey> {
    let mut keys = Vec::new();
    for level in levels_of(target) {
        keys.extend(
            level
                .own_entries()
                .map(|(key, _)| key)
                .filter(|key| options.key_matches(key)),
        );
    }
    keys
}

/// Own keys grouped per chain level, index 0 being the target itself.
pub fn arrays_by_level(target: &Value, options: &Options) -> Vec<Vec<PropKey>> {
    levels_of(target)
        .into_iter()
        .map(|level| {
            level
                .own_entries()
                .map(|(key, _)| key)
                .filter(|key| options.key_matches(key))
                .collect()
        })
        .collect()
}

/// A mirror object whose own keys are the target's own keys, with the
/// parent level's mirror reachable through the `__objParent` key.
///
/// Values default to `true`; with `keep_values` the property value is
/// captured instead (accessor properties are read through their getter,
/// and a failing getter propagates). Symbol keys are stringified unless
/// `keep_symbols` — stringification can collide with string keys, which is
/// accepted behavior, not an error.
pub fn nested_mirror(target: &Value, options: &Options) -> ExposeResult<Value> {
    let levels = levels_of(target);
    Ok(Value::object(mirror_levels(&levels, options)?))
}

fn mirror_levels(levels: &[&PropObject], options: &Options) -> ExposeResult<PropObject> {
    let mut mirror = PropObject::orphan();
    let (level, rest) = match levels.split_first() {
        Some(split) => split,
        None => return Ok(mirror),
    };

    for (key, desc) in level.own_entries() {
        if !options.key_matches(&key) {
            continue;
        }
        let value = if options.keep_values {
            desc.read(&key)?
        } else {
            Value::Bool(true)
        };
        mirror.set(mirror_key(&key, options), value);
    }

    if !rest.is_empty() {
        mirror.set(PARENT_KEY, Value::object(mirror_levels(rest, options)?));
    }
    Ok(mirror)
}

/// A shallow all-properties-enumerable copy of the whole chain.
///
/// The mirrored chain is built from the oldest ancestor downward, one
/// fresh object per level parent-linked to the previously built one, so
/// the result's chain length matches the original's. Descriptors carrying
/// data or accessor markers are copied descriptor-wise with the enumerable
/// flag forced on; marker-less properties are copied by reading their
/// value instead. A getter that fails during such a read propagates.
pub fn enumerate(target: &Value, options: &Options) -> ExposeResult<Value> {
    let levels = levels_of(target);

    let mut built: Option<PropObject> = None;
    for level in levels.into_iter().rev() {
        let mut mirror = match built.take() {
            Some(below) => PropObject::with_parent(below.into_ref()),
            None => PropObject::orphan(),
        };
        for (key, desc) in level.own_entries() {
            if !options.key_matches(&key) {
                continue;
            }
            let out_key = mirror_key(&key, options);
            if desc.has_markers() {
                mirror.define(out_key, desc.make_enumerable());
            } else {
                mirror.set(out_key, desc.read(&key)?);
            }
        }
        built = Some(mirror);
    }

    Ok(match built {
        Some(mirror) => Value::object(mirror),
        None => Value::Null,
    })
}

/// The key under which a property lands in a mirror shape
fn mirror_key(key: &PropKey, options: &Options) -> PropKey {
    match key {
        PropKey::Sym(_) if !options.keep_symbols => PropKey::Str(key.display_key()),
        _ => key.clone(),
    }
}

impl OutputMethod {
    /// Apply this method to a target, wrapping the result in [`Exposed`].
    pub fn apply(self, target: &Value, options: &Options) -> ExposeResult<Exposed> {
        match self {
            OutputMethod::Flatten => Ok(Exposed::Keys(flatten(target, options))),
            OutputMethod::ArraysByLevel => Ok(Exposed::Levels(arrays_by_level(target, options))),
            OutputMethod::NestedMirror => nested_mirror(target, options).map(Exposed::Object),
            OutputMethod::Enumerate => enumerate(target, options).map(Exposed::Object),
        }
    }
}
