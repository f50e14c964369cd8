//! Observable climate state cached by an adapter.

use serde::{Deserialize, Serialize};

use crate::types::{FanMode, HvacAction, HvacMode};

/// The last values an adapter reported to the platform.
#[serde_with::skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateState {
    pub(crate) current_temperature: Option<f64>,
    pub(crate) hvac_mode: Option<HvacMode>,
    pub(crate) target_temperature: Option<f64>,
    pub(crate) target_temperature_high: Option<f64>,
    pub(crate) target_temperature_low: Option<f64>,
    pub(crate) fan_mode: Option<FanMode>,
    pub(crate) hvac_action: Option<HvacAction>,
}

impl ClimateState {
    pub fn current_temperature(&self) -> Option<f64> {
        self.current_temperature
    }

    /// Get the last known hvac mode.
    ///
    /// Keeps the previous value when the device reported a mode with no
    /// platform equivalent.
    pub fn hvac_mode(&self) -> Option<HvacMode> {
        self.hvac_mode
    }

    pub fn target_temperature(&self) -> Option<f64> {
        self.target_temperature
    }

    pub fn target_temperature_high(&self) -> Option<f64> {
        self.target_temperature_high
    }

    pub fn target_temperature_low(&self) -> Option<f64> {
        self.target_temperature_low
    }

    pub fn fan_mode(&self) -> Option<FanMode> {
        self.fan_mode
    }

    pub fn hvac_action(&self) -> Option<HvacAction> {
        self.hvac_action
    }
}
