//! Exposure options
//!
//! A single immutable record with explicit defaults, built either directly
//! or from a JSON options object. Unknown JSON keys are tolerated and
//! logged, never fatal; an unrecognized method name silently resolves to
//! the flat view.

use crate::{ExposeError, ExposeResult};
use protolens_core::PropKey;
use regex::Regex;

/// The output shape an exposure computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMethod {
    /// One flat key sequence across the whole chain
    #[default]
    Flatten,
    /// One key sequence per ancestor level
    ArraysByLevel,
    /// A mirror object with a nested `__objParent` link per level
    NestedMirror,
    /// A mirrored chain with every property made enumerable
    Enumerate,
}

impl OutputMethod {
    /// Canonical method name
    pub const fn name(self) -> &'static str {
        match self {
            OutputMethod::Flatten => "flatten",
            OutputMethod::ArraysByLevel => "arraysByLevel",
            OutputMethod::NestedMirror => "nestedMirror",
            OutputMethod::Enumerate => "enumerate",
        }
    }

    /// Resolve a method name, falling back to [`OutputMethod::Flatten`].
    ///
    /// Both the canonical names and the legacy `allKeys*`/`enumeralize`
    /// spellings are accepted. Anything else is not an error: the flat
    /// view is the answer.
    pub fn resolve(name: &str) -> Self {
        match name {
            "flatten" | "allKeysFlat" => OutputMethod::Flatten,
            "arraysByLevel" | "allKeysArrays" => OutputMethod::ArraysByLevel,
            "nestedMirror" | "allKeysNested" => OutputMethod::NestedMirror,
            "enumerate" | "enumeralize" => OutputMethod::Enumerate,
            other => {
                log::debug!("unknown output method `{}`, falling back to flatten", other);
                OutputMethod::Flatten
            }
        }
    }
}

/// Immutable per-invocation exposure options
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Output shape (default: flat keys)
    pub method: OutputMethod,
    /// Capture property values in mirror shapes instead of `true`
    pub keep_values: bool,
    /// Keep symbol keys as distinct keys instead of stringifying them
    pub keep_symbols: bool,
    /// Restrict exposed keys to those matching this pattern
    pub filter: Option<Regex>,
    /// Log an inspection of each stream result
    pub verbose: bool,
    /// Honor a result object's own `inspect` property when rendering
    pub custom_inspect: bool,
}

/// JSON option keys this crate understands
const SUPPORTED_KEYS: &[&str] = &[
    "method",
    "keepValues",
    "keepSymbols",
    "filterPattern",
    "verbose",
    "customInspect",
    "echoRaw",
    "objectMode",
];

impl Options {
    /// Options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output method
    pub fn method(mut self, method: OutputMethod) -> Self {
        self.method = method;
        self
    }

    /// Capture values in mirror shapes
    pub fn keep_values(mut self, keep: bool) -> Self {
        self.keep_values = keep;
        self
    }

    /// Keep symbol keys as distinct keys
    pub fn keep_symbols(mut self, keep: bool) -> Self {
        self.keep_symbols = keep;
        self
    }

    /// Restrict exposed keys to those matching `pattern`.
    ///
    /// Compilation failures propagate from the pattern engine.
    pub fn filter(mut self, pattern: &str) -> ExposeResult<Self> {
        self.filter = Some(Regex::new(pattern)?);
        Ok(self)
    }

    /// Log an inspection of each stream result
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Honor result objects' own `inspect` property when rendering
    pub fn custom_inspect(mut self, custom: bool) -> Self {
        self.custom_inspect = custom;
        self
    }

    /// Build options from a JSON object.
    ///
    /// Unknown keys are collected and logged as a warning, then ignored.
    /// `objectMode` is tolerated for compatibility and forced on — there is
    /// no byte mode to fall back to. A `filterPattern` of `false` or `null`
    /// means no filter; a string compiles through the pattern engine and
    /// compilation errors propagate.
    pub fn from_json(raw: &serde_json::Value) -> ExposeResult<Self> {
        let map = raw
            .as_object()
            .ok_or_else(|| ExposeError::InvalidOptions("expected a JSON object".to_string()))?;

        let mut options = Options::default();
        let mut unknown = Vec::new();

        for (key, value) in map {
            match key.as_str() {
                "method" => {
                    options.method = OutputMethod::resolve(value.as_str().unwrap_or_default());
                }
                "keepValues" => options.keep_values = json_truthy(value),
                "keepSymbols" => options.keep_symbols = json_truthy(value),
                "filterPattern" => {
                    options.filter = match value.as_str() {
                        Some(pattern) => Some(Regex::new(pattern)?),
                        None => None,
                    };
                }
                "verbose" => options.verbose = json_truthy(value),
                "customInspect" | "echoRaw" => options.custom_inspect = json_truthy(value),
                "objectMode" => {}
                _ => unknown.push(key.clone()),
            }
        }

        if !unknown.is_empty() {
            log::warn!(
                "unsupported option keys: {} (supported: {})",
                unknown.join(", "),
                SUPPORTED_KEYS.join(", ")
            );
        }

        Ok(options)
    }

    /// Whether `key` passes the filter.
    ///
    /// Matching is against the key's string form; symbol keys are coerced
    /// regardless of `keep_symbols`.
    pub(crate) fn key_matches(&self, key: &PropKey) -> bool {
        match &self.filter {
            Some(pattern) => pattern.is_match(&key.display_key()),
            None => true,
        }
    }
}

/// Source-runtime truthiness for JSON option values
fn json_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}
