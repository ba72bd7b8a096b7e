use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Physical unit attached to a TIC field for presentation purposes.
///
/// The set is closed: only units actually emitted by the supported dialects
/// are represented. Serialization uses the conventional unit strings so that
/// downstream publishers (MQTT, Home Assistant discovery payloads, ...) can
/// forward them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// A - electrical current
    #[serde(rename = "A")]
    Ampere,
    /// Wh - cumulative energy
    #[serde(rename = "Wh")]
    WattHour,
    /// V - voltage
    #[serde(rename = "V")]
    Volt,
    /// kVA - subscribed/cutoff apparent power
    #[serde(rename = "kVA")]
    KiloVoltAmpere,
    /// VA - instantaneous/maximum apparent power
    #[serde(rename = "VA")]
    VoltAmpere,
    /// W - active power (load curve points)
    #[serde(rename = "W")]
    Watt,
    /// VArh - reactive energy
    #[serde(rename = "VArh")]
    VoltAmpereReactiveHour,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Ampere => "A",
            Unit::WattHour => "Wh",
            Unit::Volt => "V",
            Unit::KiloVoltAmpere => "kVA",
            Unit::VoltAmpere => "VA",
            Unit::Watt => "W",
            Unit::VoltAmpereReactiveHour => "VArh",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Measurement classification of a TIC field (what kind of quantity it is).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Current,
    Energy,
    Voltage,
    Power,
}

impl DeviceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Current => "current",
            DeviceClass::Energy => "energy",
            DeviceClass::Voltage => "voltage",
            DeviceClass::Power => "power",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Statistical behavior of a TIC field over time.
///
/// Only the cumulative energy counters carry a state class today; they are
/// monotonically increasing totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateClass {
    TotalIncreasing,
}

impl StateClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateClass::TotalIncreasing => "total_increasing",
        }
    }
}

impl fmt::Display for StateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decoded value of a single TIC field.
///
/// `raw` is the human-readable string recovered from the line tokens, prior
/// to any type conversion. `timestamp` is the embedded timestamp token for
/// the labels that carry one, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl FieldValue {
    pub fn new(raw: impl Into<String>, timestamp: Option<String>) -> Self {
        Self {
            raw: raw.into(),
            timestamp,
        }
    }
}

/// One TIC frame: a mapping from label to decoded field value.
///
/// The frame assembler uses this type as its mutable accumulation buffer and
/// hands it out by value once a frame completes, so a completed frame is an
/// independent snapshot with no ties to the assembler's state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicFrame {
    fields: HashMap<String, FieldValue>,
}

impl TicFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a field, overwriting any prior value for the same label
    /// (last write wins within a frame).
    pub fn insert(&mut self, label: impl Into<String>, value: FieldValue) {
        self.fields.insert(label.into(), value);
    }

    pub fn get(&self, label: &str) -> Option<&FieldValue> {
        self.fields.get(label)
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.fields.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(label, value)| (label.as_str(), value))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
