//! Frame assembly state machine.
//!
//! The assembler consumes one tokenized line at a time and emits a completed
//! [`TicFrame`] whenever the active dialect signals the frame boundary. All
//! per-line failures (unknown label, value failing its length rule) are
//! recovered locally by skipping the line; the stream of frames continues.

use crate::mode::TicMode;
use crate::types::{FieldValue, TicFrame};
use std::sync::Arc;
use tracing::{debug, trace};

/// Assembly state. `Idle` until the dialect's frame-opening label is first
/// seen, `Accumulating` from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerState {
    Idle,
    Accumulating,
}

/// Accumulates tokenized TIC lines into completed frames.
///
/// One assembler serves one meter stream and requires exclusive (`&mut`)
/// access; decoding a line runs to completion before the next one is
/// accepted. Independent streams need independent assembler instances, which
/// share no mutable state.
///
/// Dropping the assembler discards any partially accumulated frame: without a
/// confirmed end boundary a partial frame is never emitted.
#[derive(Debug)]
pub struct FrameAssembler {
    mode: Arc<dyn TicMode>,
    current: TicFrame,
    state: AssemblerState,
}

impl FrameAssembler {
    pub fn new(mode: Arc<dyn TicMode>) -> Self {
        Self {
            mode,
            current: TicFrame::new(),
            state: AssemblerState::Idle,
        }
    }

    pub fn mode(&self) -> &dyn TicMode {
        self.mode.as_ref()
    }

    pub fn state(&self) -> AssemblerState {
        self.state
    }

    /// Number of fields accumulated in the in-progress frame.
    pub fn pending_fields(&self) -> usize {
        self.current.len()
    }

    /// Feed one tokenized line; returns the completed frame when this line
    /// closed one.
    ///
    /// The first token is the label, the last token is the opaque
    /// checksum/terminator. The frame-end check runs against the
    /// still-populated buffer (end-of-frame is the second occurrence of the
    /// id label), and the closing id line also seeds the next frame, so no
    /// line is ever dropped at a boundary.
    pub fn push_line(&mut self, tokens: &[&str]) -> Option<TicFrame> {
        let Some(&label) = tokens.first() else {
            trace!("empty line, nothing to decode");
            return None;
        };

        let completed = if self.mode.is_frame_end(&self.current, label) {
            let frame = std::mem::take(&mut self.current);
            self.state = AssemblerState::Idle;
            debug!(
                mode = self.mode.mode_name(),
                fields = frame.len(),
                "TIC frame completed"
            );
            Some(frame)
        } else {
            None
        };

        match self.mode.extract_value(label, tokens) {
            Ok(value) => {
                if self.mode.check_value(label, &value) {
                    let timestamp = self.mode.extract_timestamp(label, tokens);
                    self.current.insert(label, FieldValue::new(value, timestamp));
                } else {
                    debug!(label, value = %value, "TIC value failed validation, line skipped");
                }
            }
            Err(err) => {
                debug!(label, %err, "TIC line skipped");
            }
        }

        if self.state == AssemblerState::Idle && self.mode.is_frame_start(label) {
            self.state = AssemblerState::Accumulating;
            trace!(mode = self.mode.mode_name(), "TIC frame opened");
        }

        completed
    }
}
