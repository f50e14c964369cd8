//! Temperature units.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Temperature unit configured in the host platform's unit system.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
pub enum TemperatureUnit {
    #[strum(serialize = "°C")]
    #[serde(rename = "°C")]
    Celsius,
    #[strum(serialize = "°F")]
    #[serde(rename = "°F")]
    Fahrenheit,
    #[strum(serialize = "K")]
    #[serde(rename = "K")]
    Kelvin,
}

/// Temperature unit a controller can be told to report in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
pub enum NativeTempUnit {
    C,
    F,
}

impl NativeTempUnit {
    /// The controller unit matching a platform unit, if the controller has one.
    ///
    /// ```
    /// use lutron_climate_rs::{NativeTempUnit, TemperatureUnit};
    ///
    /// assert_eq!(NativeTempUnit::from_platform(TemperatureUnit::Celsius), Some(NativeTempUnit::C));
    /// assert_eq!(NativeTempUnit::from_platform(TemperatureUnit::Kelvin), None);
    /// ```
    pub fn from_platform(unit: TemperatureUnit) -> Option<Self> {
        match unit {
            TemperatureUnit::Celsius => Some(NativeTempUnit::C),
            TemperatureUnit::Fahrenheit => Some(NativeTempUnit::F),
            TemperatureUnit::Kelvin => None,
        }
    }
}
