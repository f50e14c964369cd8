//! Live operating condition of a unit and the action it maps to.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Operating condition reported by the controller.
///
/// Heating stages are reported cumulatively: `Heat1_2` means stages one and
/// two are both running.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
pub enum Status {
    Heat1,
    #[strum(serialize = "Heat1_2")]
    #[serde(rename = "Heat1_2")]
    Heat12,
    #[strum(serialize = "Heat1_2_3")]
    #[serde(rename = "Heat1_2_3")]
    Heat123,
    Heat3,
    CoolIdle,
    Cool1,
    #[strum(serialize = "Cool1_2")]
    #[serde(rename = "Cool1_2")]
    Cool12,
    Off,
    EmergencyHeat,
    Dry,
}

/// What the unit is currently doing, in platform terms.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HvacAction {
    Heat,
    Cool,
    Dry,
    Idle,
    Off,
}
