//! The controller-side device handle an adapter wraps.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::{NativeFanMode, NativeTempUnit, OperatingMode};

type Result<T> = std::result::Result<T, Error>;

/// Identity of the controller the devices belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerInfo {
    pub guid: String,
}

impl ControllerInfo {
    pub fn new(guid: &str) -> Self {
        ControllerInfo {
            guid: guid.to_string(),
        }
    }
}

/// An HVAC device handle owned by the controller SDK.
///
/// Native enumerations travel as the SDK's string tokens so that values the
/// SDK knows and this crate does not can still be reported. The `last_*`
/// accessors return what the SDK has cached and never touch the transport;
/// the `query_*` methods ask the controller and refresh that cache.
pub trait HvacDevice {
    /// Name of the device as configured on the controller.
    fn name(&self) -> &str;

    /// Integration id of the device on the controller.
    fn integration_id(&self) -> u16;

    /// Operating mode tokens the device accepts.
    fn op_modes(&self) -> Vec<String>;

    /// Fan mode tokens the device accepts.
    fn fan_modes(&self) -> Vec<String>;

    fn last_current_temp(&self) -> Option<f64>;
    fn last_op_mode(&self) -> Option<String>;
    fn last_heat_setpoint(&self) -> Option<f64>;
    fn last_cool_setpoint(&self) -> Option<f64>;
    fn last_fan_mode(&self) -> Option<String>;
    fn last_status(&self) -> Option<String>;

    fn query_current_temp(&mut self) -> Result<()>;
    fn query_op_mode(&mut self) -> Result<()>;
    fn query_cool_setpoint(&mut self) -> Result<()>;
    fn query_fan_mode(&mut self) -> Result<()>;
    fn query_status(&mut self) -> Result<()>;

    fn set_op_mode(&mut self, mode: OperatingMode) -> Result<()>;
    fn set_fan_mode(&mut self, mode: NativeFanMode) -> Result<()>;
    fn set_heat_setpoint(&mut self, temp: f64) -> Result<()>;
    fn set_cool_setpoint(&mut self, temp: f64) -> Result<()>;
    fn set_temp_unit(&mut self, unit: NativeTempUnit) -> Result<()>;
}

macro_rules! forward_hvac_device {
    ($($ty:ty),*) => {$(
        impl<D: HvacDevice + ?Sized> HvacDevice for $ty {
            fn name(&self) -> &str {
                (**self).name()
            }
            fn integration_id(&self) -> u16 {
                (**self).integration_id()
            }
            fn op_modes(&self) -> Vec<String> {
                (**self).op_modes()
            }
            fn fan_modes(&self) -> Vec<String> {
                (**self).fan_modes()
            }
            fn last_current_temp(&self) -> Option<f64> {
                (**self).last_current_temp()
            }
            fn last_op_mode(&self) -> Option<String> {
                (**self).last_op_mode()
            }
            fn last_heat_setpoint(&self) -> Option<f64> {
                (**self).last_heat_setpoint()
            }
            fn last_cool_setpoint(&self) -> Option<f64> {
                (**self).last_cool_setpoint()
            }
            fn last_fan_mode(&self) -> Option<String> {
                (**self).last_fan_mode()
            }
            fn last_status(&self) -> Option<String> {
                (**self).last_status()
            }
            fn query_current_temp(&mut self) -> Result<()> {
                (**self).query_current_temp()
            }
            fn query_op_mode(&mut self) -> Result<()> {
                (**self).query_op_mode()
            }
            fn query_cool_setpoint(&mut self) -> Result<()> {
                (**self).query_cool_setpoint()
            }
            fn query_fan_mode(&mut self) -> Result<()> {
                (**self).query_fan_mode()
            }
            fn query_status(&mut self) -> Result<()> {
                (**self).query_status()
            }
            fn set_op_mode(&mut self, mode: OperatingMode) -> Result<()> {
                (**self).set_op_mode(mode)
            }
            fn set_fan_mode(&mut self, mode: NativeFanMode) -> Result<()> {
                (**self).set_fan_mode(mode)
            }
            fn set_heat_setpoint(&mut self, temp: f64) -> Result<()> {
                (**self).set_heat_setpoint(temp)
            }
            fn set_cool_setpoint(&mut self, temp: f64) -> Result<()> {
                (**self).set_cool_setpoint(temp)
            }
            fn set_temp_unit(&mut self, unit: NativeTempUnit) -> Result<()> {
                (**self).set_temp_unit(unit)
            }
        }
    )*};
}

// Lets an adapter borrow a handle the SDK keeps ownership of.
forward_hvac_device!(&mut D, Box<D>);
