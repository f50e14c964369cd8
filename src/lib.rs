//! # lutron_climate_rs
//!
//! Adapts the HVAC devices of a Lutron controller to a platform-neutral
//! climate entity.
//!
//! The controller speaks its own vocabulary: operating modes such as `Auto`
//! or `Fan`, fan modes such as `None`, and staged statuses such as `Heat1_2`.
//! A [`ClimateAdapter`] wraps one device handle and translates those values
//! into the platform's [`HvacMode`], [`FanMode`] and [`HvacAction`], and
//! translates platform commands back into native setpoint and mode writes.
//!
//! ## Quick Start
//!
//! ```ignore
//! use lutron_climate_rs::{ClimateAdapter, ControllerInfo, HvacMode, TemperatureRequest, TemperatureUnit};
//!
//! fn control(device: impl lutron_climate_rs::HvacDevice) -> Result<(), lutron_climate_rs::Error> {
//!     let controller = ControllerInfo::new("c0ffee");
//!     let mut climate = ClimateAdapter::new("", device, &controller, TemperatureUnit::Celsius)?;
//!
//!     climate.set_hvac_mode(HvacMode::Heat)?;
//!     climate.refresh()?;
//!     climate.set_temperature(&TemperatureRequest::from(21.5))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Device Handles
//!
//! The connection to the controller is not part of this crate. Any type
//! implementing [`HvacDevice`] can be wrapped, including a `&mut` borrow of a
//! handle the SDK keeps ownership of.
//!
//! ## Errors
//!
//! Writes that have no native equivalent fail with [`Error::UnmappedFanMode`]
//! or [`Error::UnmappedHvacMode`]. Reads of native values this crate does not
//! know degrade to `None`.

mod climate;
mod device;
mod errors;
pub mod mapping;
mod request;
mod setup;
mod state;
mod types;

// Re-export public API
pub use climate::ClimateAdapter;
pub use device::{ControllerInfo, HvacDevice};
pub use errors::Error;
pub use request::TemperatureRequest;
pub use setup::setup_climates;
pub use state::ClimateState;
pub use types::{
    FanMode, HvacAction, HvacMode, NativeFanMode, NativeTempUnit, OperatingMode, Status,
    SupportedFeatures, TemperatureUnit,
};
