//! Operating modes, native and normalized.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Operating mode as named by the controller SDK.
///
/// Parses from and displays as the SDK token (`"Heat"`, `"Auto"`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
pub enum OperatingMode {
    Off,
    Heat,
    Cool,
    Auto,
    Fan,
    Dry,
}

/// Hvac mode as understood by the host platform.
///
/// ```
/// use lutron_climate_rs::HvacMode;
///
/// assert_eq!(HvacMode::HeatCool.to_string(), "heat_cool");
/// assert_eq!("fan_only".parse::<HvacMode>().unwrap(), HvacMode::FanOnly);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HvacMode {
    Off,
    Heat,
    Cool,
    HeatCool,
    FanOnly,
    Dry,
}
