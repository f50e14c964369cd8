//! Fan modes, native and normalized.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Fan mode as named by the controller SDK.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
pub enum NativeFanMode {
    Auto,
    On,
    /// The unit has no fan running.
    None,
    High,
    Medium,
    Low,
}

/// Fan mode as understood by the host platform.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FanMode {
    Auto,
    On,
    Off,
    High,
    Medium,
    Low,
}
