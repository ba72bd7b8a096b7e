//! Field rule registry.
//!
//! Each TIC dialect owns a closed set of labels, and the decoding behavior of
//! a label is fully described by one immutable [`FieldRule`] record: where the
//! value sits inside the tokenized line, which length predicate validates it,
//! and which presentation metadata it carries. A single registry therefore
//! backs five different lookups (value extraction, validation, timestamp
//! position and the three metadata accessors) without duplicating the label
//! tables per accessor.

use crate::types::{DeviceClass, StateClass, Unit};
use std::collections::HashMap;

/// Token range holding the human-readable value within a tokenized line.
///
/// Token 0 is always the label and the final token is an opaque
/// checksum/terminator; neither is ever part of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSpan {
    /// Value spans tokens `[1, last)`; the field carries no timestamp.
    AfterLabel,
    /// Value spans tokens `[2, last)`; token 1 is an embedded timestamp.
    AfterTimestamp,
}

/// Length predicate over the decoded value.
///
/// This is the sole correctness check available at this layer: the trailing
/// checksum token is not interpreted here, so a value of the wrong length is
/// the only way to detect a corrupted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    Exact(usize),
    AtLeast(usize),
    AtMost(usize),
}

impl LengthRule {
    pub fn matches(&self, value: &str) -> bool {
        match *self {
            LengthRule::Exact(n) => value.len() == n,
            LengthRule::AtLeast(n) => value.len() >= n,
            LengthRule::AtMost(n) => value.len() <= n,
        }
    }
}

/// Immutable decoding rule for one label.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Where the value lives inside the line tokens.
    pub span: ValueSpan,
    /// Validation predicate; `None` marks a label that can be extracted but
    /// never validates (and so never enters a frame).
    pub length: Option<LengthRule>,
    pub unit: Option<Unit>,
    pub device_class: Option<DeviceClass>,
    pub state_class: Option<StateClass>,
}

impl FieldRule {
    pub fn new(span: ValueSpan, length: LengthRule) -> Self {
        Self {
            span,
            length: Some(length),
            unit: None,
            device_class: None,
            state_class: None,
        }
    }

    /// Rule for a label with no length predicate at all; extraction succeeds
    /// but validation always fails.
    pub fn unchecked(span: ValueSpan) -> Self {
        Self {
            span,
            length: None,
            unit: None,
            device_class: None,
            state_class: None,
        }
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn device_class(mut self, device_class: DeviceClass) -> Self {
        self.device_class = Some(device_class);
        self
    }

    pub fn state_class(mut self, state_class: StateClass) -> Self {
        self.state_class = Some(state_class);
        self
    }
}

/// Closed per-dialect mapping from label to its [`FieldRule`].
///
/// Built once at startup inside a `LazyLock` static and immutable thereafter.
#[derive(Debug, Default)]
pub struct FieldRegistry {
    rules: HashMap<&'static str, FieldRule>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the same rule for a group of labels.
    ///
    /// A label registered twice is a programming error in the dialect table.
    pub(crate) fn register(&mut self, labels: &[&'static str], rule: FieldRule) {
        for &label in labels {
            let previous = self.rules.insert(label, rule);
            debug_assert!(previous.is_none(), "duplicate registration for {label}");
        }
    }

    pub fn rule(&self, label: &str) -> Option<&FieldRule> {
        self.rules.get(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_rules_compare_decoded_value_lengths() {
        assert!(LengthRule::Exact(3).matches("230"));
        assert!(!LengthRule::Exact(3).matches("23"));
        assert!(LengthRule::AtLeast(2).matches("H2"));
        assert!(!LengthRule::AtLeast(2).matches(""));
        assert!(LengthRule::AtMost(16).matches("HC.."));
        assert!(!LengthRule::AtMost(2).matches("123"));
    }

    #[test]
    fn unchecked_rule_never_validates() {
        let rule = FieldRule::unchecked(ValueSpan::AfterLabel);
        assert!(rule.length.is_none());
    }

    #[test]
    fn registry_lookup_is_exact() {
        let mut registry = FieldRegistry::new();
        registry.register(
            &["EAST"],
            FieldRule::new(ValueSpan::AfterLabel, LengthRule::Exact(9))
                .unit(Unit::WattHour)
                .device_class(DeviceClass::Energy)
                .state_class(StateClass::TotalIncreasing),
        );
        assert!(registry.rule("EAST").is_some());
        assert!(registry.rule("east").is_none());
        assert!(registry.rule("EAST ").is_none());
        assert_eq!(registry.len(), 1);
    }
}
