//! Per-call options for the input readers

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

const DEFAULT_REQUIRED: bool = false;
const DEFAULT_TRIM_WHITESPACE: bool = true;

/// Options as declared by the caller.
///
/// Unset fields are filled with defaults the first time the record is used
/// by a reader. That happens once per instance: sharing one `InputOptions`
/// across many inputs or threads reuses the same resolved record, and a
/// concurrent first use blocks until the defaults are committed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputOptions {
    /// Fail when the input is empty. Defaults to `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    required: Option<bool>,
    /// Strip leading/trailing whitespace from the value. Defaults to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trim_whitespace: Option<bool>,
    #[serde(skip)]
    resolved: OnceLock<ResolvedInputOptions>,
}

/// [`InputOptions`] with every default applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedInputOptions {
    pub required: bool,
    pub trim_whitespace: bool,
}

impl Default for ResolvedInputOptions {
    fn default() -> Self {
        Self {
            required: DEFAULT_REQUIRED,
            trim_whitespace: DEFAULT_TRIM_WHITESPACE,
        }
    }
}

impl InputOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = Some(trim);
        self
    }

    /// The `required` value as declared, before defaults.
    ///
    /// Stays `None` after [`resolve`](Self::resolve) when the caller left it
    /// unset; the resolved value lives in [`ResolvedInputOptions`].
    pub fn declared_required(&self) -> Option<bool> {
        self.required
    }

    /// The `trim_whitespace` value as declared, before defaults.
    ///
    /// Stays `None` after [`resolve`](Self::resolve) when the caller left it
    /// unset; the resolved value lives in [`ResolvedInputOptions`].
    pub fn declared_trim_whitespace(&self) -> Option<bool> {
        self.trim_whitespace
    }

    /// Whether defaults have already been applied to this instance.
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Apply defaults, at most once for the lifetime of this instance.
    ///
    /// Every call returns the same record.
    pub fn resolve(&self) -> &ResolvedInputOptions {
        self.resolved.get_or_init(|| {
            let defaults = ResolvedInputOptions::default();
            let resolved = ResolvedInputOptions {
                required: self.required.unwrap_or(defaults.required),
                trim_whitespace: self.trim_whitespace.unwrap_or(defaults.trim_whitespace),
            };
            tracing::trace!(
                required = resolved.required,
                trim_whitespace = resolved.trim_whitespace,
                "Input options resolved"
            );
            resolved
        })
    }
}

/// Resolve `options`, or all defaults when the caller passed none.
///
/// Returns a copy of the record memoized inside `options`; use
/// [`InputOptions::resolve`] to borrow that record itself.
pub fn resolve_options(options: Option<&InputOptions>) -> ResolvedInputOptions {
    match options {
        Some(options) => *options.resolve(),
        None => ResolvedInputOptions::default(),
    }
}
