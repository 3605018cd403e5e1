//! Readable rendering of exposure results
//!
//! The analogue of dumping a result to a debugging console: one string per
//! result, keys in their display form, object mirrors rendered from their
//! own properties. Unlike the JSON form this keeps symbol/builtin flavor
//! visible.

use crate::expose::Exposed;
use protolens_core::{PropKey, PropObject, Value};
use std::fmt::Write;

/// Nesting depth beyond which object values render as an opaque marker
const MAX_DEPTH: usize = 4;

/// Render an exposure result.
///
/// With `custom_inspect`, a mirror object carrying its own `inspect`
/// property is rendered from that property's value instead of its
/// structure — the escape hatch for objects that know how to present
/// themselves. A failing `inspect` getter falls back to the structural
/// form.
pub fn inspect(result: &Exposed, custom_inspect: bool) -> String {
    match result {
        Exposed::Keys(keys) => render_keys(keys),
        Exposed::Levels(levels) => {
            let mut out = String::from("[");
            for (i, keys) in levels.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str("\n  ");
                out.push_str(&render_keys(keys));
            }
            if !levels.is_empty() {
                out.push('\n');
            }
            out.push(']');
            out
        }
        Exposed::Object(value) => inspect_value(value, custom_inspect),
    }
}

/// Render a single value, honoring `custom_inspect` for objects
pub fn inspect_value(value: &Value, custom_inspect: bool) -> String {
    if custom_inspect {
        if let Some(custom) = custom_form(value) {
            return render_value(&custom, 0);
        }
    }
    render_value(value, 0)
}

/// The value of an object's own `inspect` property, if usable
fn custom_form(value: &Value) -> Option<Value> {
    let obj = value.as_object()?;
    let desc = obj.get_own(&PropKey::str("inspect"))?;
    desc.read(&PropKey::str("inspect")).ok()
}

fn render_keys(keys: &[PropKey]) -> String {
    let mut out = String::from("[ ");
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&key.display_key());
    }
    if keys.is_empty() {
        out.truncate(1);
    }
    out.push_str(" ]");
    out
}

fn render_value(value: &Value, depth: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Str(s) => format!("'{}'", s),
        Value::Sym(sym) => sym.to_string(),
        Value::Builtin(name) => format!("[builtin {}]", name),
        Value::Object(obj) => {
            if depth >= MAX_DEPTH {
                return "[Object]".to_string();
            }
            render_object(obj, depth)
        }
    }
}

fn render_object(obj: &PropObject, depth: usize) -> String {
    let mut out = String::from("{");
    let mut first = true;
    for (key, desc) in obj.own_entries() {
        if !desc.enumerable {
            continue;
        }
        if !first {
            out.push(',');
        }
        first = false;
        let rendered = match desc.read(&key) {
            Ok(value) => render_value(&value, depth + 1),
            Err(_) => "[inaccessible]".to_string(),
        };
        let _ = write!(out, " {}: {}", key.display_key(), rendered);
    }
    if !first {
        out.push(' ');
    }
    out.push('}');
    out
}
