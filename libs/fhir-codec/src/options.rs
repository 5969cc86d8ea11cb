//! Decode configuration.

use std::collections::HashSet;

/// What to do with fields the catalog does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFieldPolicy {
    /// Keep unknown fields in the element's side-bag so they survive a
    /// round-trip. The default, for forward compatibility.
    #[default]
    Preserve,
    /// Reject the document with `UnknownField`.
    Reject,
}

/// What to do with modifier extensions outside the recognized set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModifierPolicy {
    /// Reject the document with `UnrecognizedModifierExtension`. The
    /// default: an unrecognized modifier changes the meaning of its element.
    #[default]
    Reject,
    /// Accept, recording a partially-understood note for the caller.
    Note,
}

/// Options governing a single decode run.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    pub unknown_fields: UnknownFieldPolicy,
    pub unknown_modifiers: ModifierPolicy,
    /// Modifier extension URLs the caller understands.
    pub recognized_modifier_extensions: HashSet<String>,
    /// Bound on element nesting, counted in JSON objects entered.
    pub max_depth: usize,
    /// Bound on the number of entries in a `contained` sequence.
    pub max_contained: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::default(),
            unknown_modifiers: ModifierPolicy::default(),
            recognized_modifier_extensions: HashSet::new(),
            max_depth: 64,
            max_contained: 256,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    pub fn with_unknown_modifiers(mut self, policy: ModifierPolicy) -> Self {
        self.unknown_modifiers = policy;
        self
    }

    pub fn recognize_modifier_extension(mut self, url: impl Into<String>) -> Self {
        self.recognized_modifier_extensions.insert(url.into());
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_contained(mut self, max_contained: usize) -> Self {
        self.max_contained = max_contained;
        self
    }
}
