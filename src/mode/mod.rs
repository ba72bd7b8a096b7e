//! Dialect abstraction for the TIC wire format.
//!
//! A [`TicMode`] bundles the dialect-wide constants (baud rate, frame-id
//! label) with the per-label decoding rules of its [`FieldRegistry`]. Mode
//! implementations are stateless: the only cross-cutting state needed for
//! frame-end detection (the frame being accumulated) is passed explicitly
//! into [`TicMode::is_frame_end`], which keeps dialects trivially testable in
//! isolation.

mod historical;
mod standard;

pub use historical::HistoricalTicMode;
pub use standard::StandardTicMode;

use crate::error::TicError;
use crate::registry::{FieldRegistry, ValueSpan};
use crate::types::{DeviceClass, StateClass, TicFrame, Unit};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::debug;

/// Contract implemented once per TIC dialect.
///
/// The default methods are table-driven over [`TicMode::registry`]; a dialect
/// only provides its constants and its registry.
pub trait TicMode: Debug + Send + Sync {
    /// Stable dialect identifier used for selection and logging.
    fn mode_name(&self) -> &'static str;

    /// Serial baud rate expected by this dialect. Transport hint only; the
    /// decoder itself never uses it.
    fn baud_rate(&self) -> u32;

    /// Label whose presence identifies/keys a frame.
    fn frame_id_label(&self) -> &'static str;

    /// Per-label decoding rules for this dialect.
    fn registry(&self) -> &'static FieldRegistry;

    /// True iff this label opens a frame. For both supported dialects the
    /// opening label is the frame-id label itself.
    fn is_frame_start(&self, label: &str) -> bool {
        label == self.frame_id_label()
    }

    /// True iff this label occurrence should close the frame currently being
    /// accumulated.
    ///
    /// There is no distinct end marker on the wire: the frame ends when the
    /// id label is seen for the second time. The accumulation buffer must
    /// therefore still be populated when this check runs.
    fn is_frame_end(&self, current_frame: &TicFrame, label: &str) -> bool {
        label == self.frame_id_label() && current_frame.contains_label(self.frame_id_label())
    }

    /// Recover the human-readable value from a tokenized line.
    ///
    /// Token 0 (the label) and the final token (checksum/terminator, opaque
    /// at this layer) are always excluded; multi-token values are rejoined
    /// with single spaces. A line too short to contain a value yields an
    /// empty string, which then fails validation.
    fn extract_value(&self, label: &str, tokens: &[&str]) -> Result<String, TicError> {
        let rule = self
            .registry()
            .rule(label)
            .ok_or_else(|| TicError::UnsupportedLabel(label.to_string()))?;
        let start = match rule.span {
            ValueSpan::AfterLabel => 1,
            ValueSpan::AfterTimestamp => 2,
        };
        let end = tokens.len().saturating_sub(1);
        if start >= end {
            return Ok(String::new());
        }
        Ok(tokens[start..end].join(" "))
    }

    /// Pure length predicate over the decoded value.
    ///
    /// Returns `false` both for a recognized label whose value fails its
    /// length rule and for any label this dialect does not know how to
    /// validate; the two cases are deliberately indistinguishable here.
    fn check_value(&self, label: &str, value: &str) -> bool {
        match self.registry().rule(label).and_then(|rule| rule.length) {
            Some(length) => length.matches(value),
            None => false,
        }
    }

    /// Embedded timestamp of the line, verbatim, for labels that carry one.
    fn extract_timestamp(&self, label: &str, tokens: &[&str]) -> Option<String> {
        match self.registry().rule(label)?.span {
            ValueSpan::AfterTimestamp => tokens.get(1).map(|token| (*token).to_string()),
            ValueSpan::AfterLabel => None,
        }
    }

    /// Physical unit of the label, if any.
    fn unit(&self, label: &str) -> Option<Unit> {
        self.registry().rule(label).and_then(|rule| rule.unit)
    }

    /// Measurement classification of the label, if any.
    fn device_class(&self, label: &str) -> Option<DeviceClass> {
        self.registry().rule(label).and_then(|rule| rule.device_class)
    }

    /// Statistical behavior of the label, if any.
    fn state_class(&self, label: &str) -> Option<StateClass> {
        self.registry().rule(label).and_then(|rule| rule.state_class)
    }
}

/// Look up a dialect by its case-insensitive mode name.
///
/// This is the configuration-time entry point: an unrecognized name fails
/// with [`TicError::UnknownMode`] before any line can be processed.
pub fn mode_for_name(name: &str) -> Result<Arc<dyn TicMode>, TicError> {
    let mode: Arc<dyn TicMode> = match name.to_ascii_lowercase().as_str() {
        standard::MODE_NAME => Arc::new(StandardTicMode),
        historical::MODE_NAME => Arc::new(HistoricalTicMode),
        _ => return Err(TicError::UnknownMode(name.to_string())),
    };
    debug!(
        mode = mode.mode_name(),
        baud = mode.baud_rate(),
        "selected TIC mode"
    );
    Ok(mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_lookup_is_case_insensitive() {
        assert_eq!(mode_for_name("standard").unwrap().mode_name(), "standard");
        assert_eq!(mode_for_name("Standard").unwrap().mode_name(), "standard");
        assert_eq!(
            mode_for_name("HISTORICAL").unwrap().mode_name(),
            "historical"
        );
    }

    #[test]
    fn unknown_mode_is_rejected_at_configuration_time() {
        let err = mode_for_name("turbo").unwrap_err();
        assert_eq!(err, TicError::UnknownMode("turbo".to_string()));
    }

    #[test]
    fn frame_end_requires_second_id_occurrence() {
        let mode = StandardTicMode;
        let mut frame = TicFrame::new();
        assert!(!mode.is_frame_end(&frame, "ADSC"));

        frame.insert(
            "ADSC",
            crate::types::FieldValue::new("812345678901", None),
        );
        assert!(mode.is_frame_end(&frame, "ADSC"));
        assert!(!mode.is_frame_end(&frame, "EAST"));
    }

    #[test]
    fn short_line_extracts_empty_value_and_fails_validation() {
        let mode = StandardTicMode;
        let value = mode.extract_value("IRMS1", &["IRMS1", "3"]).unwrap();
        assert_eq!(value, "");
        assert!(!mode.check_value("IRMS1", &value));
    }

    #[test]
    fn check_value_is_idempotent() {
        let mode = StandardTicMode;
        for _ in 0..2 {
            assert!(mode.check_value("SINSTS", "01234"));
            assert!(!mode.check_value("SINSTS", "1234"));
            assert!(!mode.check_value("NOT_A_LABEL", "01234"));
        }
    }
}
