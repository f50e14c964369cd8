//! Value types shared between the controller and the platform side.

mod fan;
mod features;
mod mode;
mod status;
mod unit;

pub use fan::{FanMode, NativeFanMode};
pub use features::SupportedFeatures;
pub use mode::{HvacMode, OperatingMode};
pub use status::{HvacAction, Status};
pub use unit::{NativeTempUnit, TemperatureUnit};
