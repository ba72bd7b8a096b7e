//! "Standard" TIC dialect (Linky meters, 9600 baud).
//!
//! The label set, token layouts and length rules follow the Enedis-TIC
//! standard-mode field catalog. Two token layouts exist: most labels carry
//! `label value checksum`, while dated fields carry
//! `label timestamp value checksum`.

use super::TicMode;
use crate::registry::{FieldRegistry, FieldRule, LengthRule, ValueSpan};
use crate::types::{DeviceClass, StateClass, Unit};
use std::sync::LazyLock;

pub(super) const MODE_NAME: &str = "standard";

/// Standard-mode TIC dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTicMode;

impl TicMode for StandardTicMode {
    fn mode_name(&self) -> &'static str {
        MODE_NAME
    }

    fn baud_rate(&self) -> u32 {
        9600
    }

    fn frame_id_label(&self) -> &'static str {
        "ADSC"
    }

    fn registry(&self) -> &'static FieldRegistry {
        &STANDARD_REGISTRY
    }
}

static STANDARD_REGISTRY: LazyLock<FieldRegistry> = LazyLock::new(|| {
    let mut registry = FieldRegistry::new();
    register_identity_fields(&mut registry);
    register_energy_fields(&mut registry);
    register_power_fields(&mut registry);
    register_current_voltage_fields(&mut registry);
    register_calendar_fields(&mut registry);
    registry
});

/// Meter identity, contract and free-text fields. No presentation metadata.
fn register_identity_fields(registry: &mut FieldRegistry) {
    use LengthRule::{AtLeast, AtMost, Exact};
    use ValueSpan::{AfterLabel, AfterTimestamp};

    registry.register(&["ADSC"], FieldRule::new(AfterLabel, Exact(12)));
    registry.register(&["VTIC"], FieldRule::new(AfterLabel, Exact(2)));
    // The meter clock line places its payload in the timestamp slot; the
    // value slice is what remains between timestamp and checksum.
    registry.register(&["DATE"], FieldRule::new(AfterTimestamp, AtLeast(2)));
    registry.register(
        &["NGTF", "LTARF", "MSG2"],
        FieldRule::new(AfterLabel, AtMost(16)),
    );
    registry.register(&["MSG1"], FieldRule::new(AfterLabel, AtMost(32)));
    registry.register(&["PRM"], FieldRule::new(AfterLabel, AtMost(14)));
    registry.register(&["STGE"], FieldRule::new(AfterLabel, Exact(8)));
    registry.register(&["RELAIS"], FieldRule::new(AfterLabel, Exact(3)));
}

/// Cumulative energy counters (Wh, ever-increasing) and reactive energy.
fn register_energy_fields(registry: &mut FieldRegistry) {
    use LengthRule::Exact;
    use ValueSpan::AfterLabel;

    registry.register(
        &[
            "EAST", "EASF01", "EASF02", "EASF03", "EASF04", "EASF05", "EASF06", "EASF07",
            "EASF08", "EASF09", "EASF10", "EASD01", "EASD02", "EASD03", "EASD04", "EAIT",
        ],
        FieldRule::new(AfterLabel, Exact(9))
            .unit(Unit::WattHour)
            .device_class(DeviceClass::Energy)
            .state_class(StateClass::TotalIncreasing),
    );
    registry.register(
        &["ERQ1", "ERQ2", "ERQ3", "ERQ4"],
        FieldRule::new(AfterLabel, Exact(9))
            .unit(Unit::VoltAmpereReactiveHour)
            .device_class(DeviceClass::Power),
    );
}

/// Apparent/active power fields. The instantaneous family carries no
/// timestamp; the maxima and load-curve families do.
fn register_power_fields(registry: &mut FieldRegistry) {
    use LengthRule::Exact;
    use ValueSpan::{AfterLabel, AfterTimestamp};

    registry.register(
        &["PREF", "PCOUP"],
        FieldRule::new(AfterLabel, Exact(2))
            .unit(Unit::KiloVoltAmpere)
            .device_class(DeviceClass::Power),
    );
    registry.register(
        &["SINSTS", "SINSTS1", "SINSTS2", "SINSTS3", "SINSTI"],
        FieldRule::new(AfterLabel, Exact(5))
            .unit(Unit::VoltAmpere)
            .device_class(DeviceClass::Power),
    );
    registry.register(
        &[
            "SMAXSN", "SMAXSN1", "SMAXSN2", "SMAXSN3", "SMAXSN-1", "SMAXSN1-1", "SMAXSN2-1",
            "SMAXSN3-1", "SMAXIN", "SMAXIN-1",
        ],
        FieldRule::new(AfterTimestamp, Exact(5))
            .unit(Unit::VoltAmpere)
            .device_class(DeviceClass::Power),
    );
    registry.register(
        &["CCASN", "CCASN-1", "CCAIN", "CCAIN-1"],
        FieldRule::new(AfterTimestamp, Exact(5))
            .unit(Unit::Watt)
            .device_class(DeviceClass::Power),
    );
}

/// RMS currents and voltages, plus the dated mean voltages.
fn register_current_voltage_fields(registry: &mut FieldRegistry) {
    use LengthRule::Exact;
    use ValueSpan::{AfterLabel, AfterTimestamp};

    registry.register(
        &["IRMS1", "IRMS2", "IRMS3"],
        FieldRule::new(AfterLabel, Exact(3))
            .unit(Unit::Ampere)
            .device_class(DeviceClass::Current),
    );
    registry.register(
        &["URMS1", "URMS2", "URMS3"],
        FieldRule::new(AfterLabel, Exact(3))
            .unit(Unit::Volt)
            .device_class(DeviceClass::Voltage),
    );
    registry.register(
        &["UMOY1", "UMOY2", "UMOY3"],
        FieldRule::new(AfterTimestamp, Exact(3))
            .unit(Unit::Volt)
            .device_class(DeviceClass::Voltage),
    );
}

/// Tariff calendar fields: current tariff indexes, mobile peak windows and
/// next-day profiles.
fn register_calendar_fields(registry: &mut FieldRegistry) {
    use LengthRule::Exact;
    use ValueSpan::{AfterLabel, AfterTimestamp};

    registry.register(
        &["NTARF", "NJOURF", "NJOURF+1"],
        FieldRule::new(AfterLabel, Exact(2)),
    );
    registry.register(&["PJOURF+1"], FieldRule::new(AfterLabel, Exact(8)));
    registry.register(
        &["DPM1", "DPM2", "DPM3", "FPM1", "FPM2", "FPM3"],
        FieldRule::new(AfterTimestamp, Exact(2)),
    );
    // PPOINTE is announced by the meter but has no usable length rule, so it
    // is extractable yet never admitted into a frame.
    registry.register(&["PPOINTE"], FieldRule::unchecked(AfterLabel));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TicError;

    #[test]
    fn registry_covers_the_full_standard_catalog() {
        assert_eq!(StandardTicMode.registry().len(), 71);
    }

    #[test]
    fn every_registered_label_is_fully_classified() {
        let mode = StandardTicMode;
        for label in mode.registry().labels() {
            let tokens = [label, "H250830063012", "value", "K"];
            let value = mode
                .extract_value(label, &tokens)
                .expect("registered label must extract");
            // None of these may panic for a registered label; absence of
            // metadata is an explicit None.
            let _ = mode.check_value(label, &value);
            let _ = mode.extract_timestamp(label, &tokens);
            let _ = mode.unit(label);
            let _ = mode.device_class(label);
            let _ = mode.state_class(label);
        }
    }

    #[test]
    fn value_slice_excludes_label_and_checksum() {
        let mode = StandardTicMode;
        let value = mode
            .extract_value("ADSC", &["ADSC", "812345678901", "K"])
            .unwrap();
        assert_eq!(value, "812345678901");
        assert!(mode.check_value("ADSC", &value));
    }

    #[test]
    fn multi_token_values_are_rejoined_with_single_spaces() {
        let mode = StandardTicMode;
        let value = mode
            .extract_value("MSG1", &["MSG1", "PAS", "DE", "MESSAGE", "<"])
            .unwrap();
        assert_eq!(value, "PAS DE MESSAGE");
        assert!(mode.check_value("MSG1", &value));
    }

    #[test]
    fn dated_fields_take_value_after_the_timestamp() {
        let mode = StandardTicMode;
        let tokens = ["SMAXSN", "H250830063012", "02300", "F"];
        assert_eq!(mode.extract_value("SMAXSN", &tokens).unwrap(), "02300");
        assert_eq!(
            mode.extract_timestamp("SMAXSN", &tokens).as_deref(),
            Some("H250830063012")
        );
    }

    #[test]
    fn meter_clock_line_exposes_its_timestamp_verbatim() {
        let mode = StandardTicMode;
        let tokens = ["DATE", "H081225223518", "E"];
        assert_eq!(
            mode.extract_timestamp("DATE", &tokens).as_deref(),
            Some("H081225223518")
        );
    }

    #[test]
    fn undated_fields_have_no_timestamp() {
        let mode = StandardTicMode;
        let tokens = ["EAST", "012345678", "2"];
        assert_eq!(mode.extract_timestamp("EAST", &tokens), None);
    }

    #[test]
    fn unknown_label_fails_extraction() {
        let mode = StandardTicMode;
        assert_eq!(
            mode.extract_value("FOO", &["FOO", "1", "2", "X"]),
            Err(TicError::UnsupportedLabel("FOO".to_string()))
        );
    }

    #[test]
    fn length_rules_match_the_standard_table() {
        let mode = StandardTicMode;
        assert!(mode.check_value("IRMS1", "005"));
        assert!(!mode.check_value("IRMS1", "12"));
        assert!(mode.check_value("SINSTS", "01234"));
        assert!(mode.check_value("PRM", "12345678901234"));
        assert!(!mode.check_value("PRM", "123456789012345"));
        assert!(mode.check_value("DATE", "H250830063012"));
        assert!(!mode.check_value("DATE", "H"));
        // Announced but never valid: no length rule exists for PPOINTE.
        assert!(!mode.check_value("PPOINTE", "00008002"));
    }

    #[test]
    fn metadata_matches_the_standard_table() {
        let mode = StandardTicMode;
        assert_eq!(mode.unit("EAST"), Some(Unit::WattHour));
        assert_eq!(mode.device_class("EAST"), Some(DeviceClass::Energy));
        assert_eq!(mode.state_class("EAST"), Some(StateClass::TotalIncreasing));
        assert_eq!(mode.unit("PREF"), Some(Unit::KiloVoltAmpere));
        assert_eq!(mode.unit("CCASN"), Some(Unit::Watt));
        assert_eq!(mode.unit("ERQ3"), Some(Unit::VoltAmpereReactiveHour));
        assert_eq!(mode.unit("UMOY2"), Some(Unit::Volt));
        assert_eq!(mode.unit("MSG1"), None);
        assert_eq!(mode.device_class("MSG1"), None);
        assert_eq!(mode.state_class("SINSTS"), None);
    }
}
