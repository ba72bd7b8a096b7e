//! Reading normalization.
//!
//! Turns the fields of a completed frame into publication-ready readings by
//! pairing each decoded value with the presentation metadata its dialect
//! assigns to the label. Fields without metadata are kept with explicit
//! `None`s; normalization never drops a successfully decoded field.

use crate::mode::TicMode;
use crate::types::{DeviceClass, StateClass, TicFrame, Unit};
use serde::Serialize;
use std::sync::Arc;

/// A normalized meter reading ready for publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicReading {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_class: Option<DeviceClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_class: Option<StateClass>,
}

/// Pairs completed frames with the metadata lookups of their dialect.
#[derive(Debug)]
pub struct ReadingNormalizer {
    mode: Arc<dyn TicMode>,
}

impl ReadingNormalizer {
    pub fn new(mode: Arc<dyn TicMode>) -> Self {
        Self { mode }
    }

    /// Produce one reading per frame field, sorted by label so the output
    /// order is stable for downstream publishers.
    pub fn normalize(&self, frame: &TicFrame) -> Vec<TicReading> {
        let mut readings: Vec<TicReading> = frame
            .iter()
            .map(|(label, field)| TicReading {
                label: label.to_string(),
                value: field.raw.clone(),
                timestamp: field.timestamp.clone(),
                unit: self.mode.unit(label),
                device_class: self.mode.device_class(label),
                state_class: self.mode.state_class(label),
            })
            .collect();
        readings.sort_by(|a, b| a.label.cmp(&b.label));
        readings
    }
}
