//! Fixed translation tables between controller and platform vocabularies.
//!
//! Every table is a total `match` over its source enum, so the compiler keeps
//! them in step with the enum definitions. Tables that are partial return
//! `Option` and say which entries are missing.

use crate::types::{
    FanMode, HvacAction, HvacMode, NativeFanMode, OperatingMode, Status,
};

/// Native operating mode to platform hvac mode.
pub fn hvac_mode_from_native(mode: OperatingMode) -> HvacMode {
    match mode {
        OperatingMode::Off => HvacMode::Off,
        OperatingMode::Heat => HvacMode::Heat,
        OperatingMode::Cool => HvacMode::Cool,
        OperatingMode::Auto => HvacMode::HeatCool,
        OperatingMode::Fan => HvacMode::FanOnly,
        OperatingMode::Dry => HvacMode::Dry,
    }
}

/// Platform hvac mode to the native operating mode to write.
///
/// Covers every hvac mode; `None` is only reachable if the platform enum grows.
pub fn hvac_mode_to_native(mode: HvacMode) -> Option<OperatingMode> {
    Some(match mode {
        HvacMode::Off => OperatingMode::Off,
        HvacMode::Heat => OperatingMode::Heat,
        HvacMode::Cool => OperatingMode::Cool,
        HvacMode::HeatCool => OperatingMode::Auto,
        HvacMode::FanOnly => OperatingMode::Fan,
        HvacMode::Dry => OperatingMode::Dry,
    })
}

/// Native operating modes a unit may advertise as selectable.
///
/// Only the heating and cooling modes are offered; `Off`, `Fan` and `Dry`
/// are never advertised even when the unit declares them.
pub fn advertised_hvac_mode(mode: OperatingMode) -> Option<HvacMode> {
    match mode {
        OperatingMode::Heat => Some(HvacMode::Heat),
        OperatingMode::Cool => Some(HvacMode::Cool),
        OperatingMode::Auto => Some(HvacMode::HeatCool),
        OperatingMode::Off | OperatingMode::Fan | OperatingMode::Dry => None,
    }
}

/// Native fan modes a unit may advertise as selectable.
pub fn advertised_fan_mode(mode: NativeFanMode) -> Option<FanMode> {
    match mode {
        NativeFanMode::Auto => Some(FanMode::Auto),
        NativeFanMode::On => Some(FanMode::On),
        _ => None,
    }
}

/// Native fan mode to platform fan mode.
pub fn fan_mode_from_native(mode: NativeFanMode) -> FanMode {
    match mode {
        NativeFanMode::Auto => FanMode::Auto,
        NativeFanMode::On => FanMode::On,
        NativeFanMode::None => FanMode::Off,
        NativeFanMode::High => FanMode::High,
        NativeFanMode::Medium => FanMode::Medium,
        NativeFanMode::Low => FanMode::Low,
    }
}

/// Platform fan mode to the native fan mode to write.
///
/// `FanMode::Off` has no entry: the controller offers no write that turns the
/// fan off.
pub fn fan_mode_to_native(mode: FanMode) -> Option<NativeFanMode> {
    match mode {
        FanMode::Auto => Some(NativeFanMode::Auto),
        FanMode::On => Some(NativeFanMode::On),
        FanMode::High => Some(NativeFanMode::High),
        FanMode::Medium => Some(NativeFanMode::Medium),
        FanMode::Low => Some(NativeFanMode::Low),
        FanMode::Off => None,
    }
}

/// Controller status to the action the unit is performing.
pub fn action_from_status(status: Status) -> HvacAction {
    match status {
        Status::Heat1 | Status::Heat12 | Status::Heat123 | Status::Heat3 => HvacAction::Heat,
        Status::EmergencyHeat => HvacAction::Heat,
        Status::CoolIdle => HvacAction::Idle,
        Status::Cool1 | Status::Cool12 => HvacAction::Cool,
        Status::Off => HvacAction::Off,
        Status::Dry => HvacAction::Dry,
    }
}

/// Filter declared native tokens through a configuration table.
///
/// Tokens that do not parse, or that the table drops, are skipped; the
/// declared order is kept.
pub(crate) fn advertised<N, P>(declared: &[String], table: fn(N) -> Option<P>) -> Vec<P>
where
    N: std::str::FromStr,
{
    declared
        .iter()
        .filter_map(|token| token.parse::<N>().ok())
        .filter_map(table)
        .collect()
}
