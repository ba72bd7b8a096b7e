//! "Historical" TIC dialect (legacy meters, 1200 baud).
//!
//! The historical wire format is simpler than the standard one: every line is
//! `label value checksum`, there are no embedded timestamps, and the frame is
//! keyed by the `ADCO` meter address instead of `ADSC`.

use super::TicMode;
use crate::registry::{FieldRegistry, FieldRule, LengthRule, ValueSpan};
use crate::types::{DeviceClass, StateClass, Unit};
use std::sync::LazyLock;

pub(super) const MODE_NAME: &str = "historical";

/// Historical-mode TIC dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoricalTicMode;

impl TicMode for HistoricalTicMode {
    fn mode_name(&self) -> &'static str {
        MODE_NAME
    }

    fn baud_rate(&self) -> u32 {
        1200
    }

    fn frame_id_label(&self) -> &'static str {
        "ADCO"
    }

    fn registry(&self) -> &'static FieldRegistry {
        &HISTORICAL_REGISTRY
    }
}

static HISTORICAL_REGISTRY: LazyLock<FieldRegistry> = LazyLock::new(|| {
    let mut registry = FieldRegistry::new();
    register_identity_fields(&mut registry);
    register_energy_fields(&mut registry);
    register_current_power_fields(&mut registry);
    registry
});

/// Meter identity, tariff option and status fields.
fn register_identity_fields(registry: &mut FieldRegistry) {
    use LengthRule::{AtMost, Exact};
    use ValueSpan::AfterLabel;

    registry.register(&["ADCO"], FieldRule::new(AfterLabel, Exact(12)));
    registry.register(&["OPTARIF"], FieldRule::new(AfterLabel, AtMost(4)));
    registry.register(&["PTEC"], FieldRule::new(AfterLabel, AtMost(4)));
    registry.register(&["DEMAIN"], FieldRule::new(AfterLabel, AtMost(4)));
    registry.register(&["PEJP"], FieldRule::new(AfterLabel, Exact(2)));
    registry.register(&["HHPHC"], FieldRule::new(AfterLabel, Exact(1)));
    registry.register(&["MOTDETAT"], FieldRule::new(AfterLabel, Exact(6)));
    registry.register(&["PPOT"], FieldRule::new(AfterLabel, Exact(2)));
}

/// Cumulative energy indexes for every tariff option (base, off-peak/peak,
/// EJP, Tempo).
fn register_energy_fields(registry: &mut FieldRegistry) {
    use LengthRule::Exact;
    use ValueSpan::AfterLabel;

    registry.register(
        &[
            "BASE", "HCHC", "HCHP", "EJPHN", "EJPHPM", "BBRHCJB", "BBRHPJB", "BBRHCJW",
            "BBRHPJW", "BBRHCJR", "BBRHPJR",
        ],
        FieldRule::new(AfterLabel, Exact(9))
            .unit(Unit::WattHour)
            .device_class(DeviceClass::Energy)
            .state_class(StateClass::TotalIncreasing),
    );
}

/// Current and apparent-power fields.
fn register_current_power_fields(registry: &mut FieldRegistry) {
    use LengthRule::Exact;
    use ValueSpan::AfterLabel;

    registry.register(
        &["ISOUSC"],
        FieldRule::new(AfterLabel, Exact(2))
            .unit(Unit::Ampere)
            .device_class(DeviceClass::Current),
    );
    registry.register(
        &[
            "IINST", "IINST1", "IINST2", "IINST3", "ADPS", "IMAX", "IMAX1", "IMAX2", "IMAX3",
        ],
        FieldRule::new(AfterLabel, Exact(3))
            .unit(Unit::Ampere)
            .device_class(DeviceClass::Current),
    );
    registry.register(
        &["PAPP"],
        FieldRule::new(AfterLabel, Exact(5))
            .unit(Unit::VoltAmpere)
            .device_class(DeviceClass::Power),
    );
    registry.register(
        &["PMAX"],
        FieldRule::new(AfterLabel, Exact(5))
            .unit(Unit::Watt)
            .device_class(DeviceClass::Power),
    );
}
