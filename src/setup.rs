//! Platform setup for every climate device a controller exposes.

use log::debug;

use crate::climate::ClimateAdapter;
use crate::device::{ControllerInfo, HvacDevice};
use crate::errors::Error;
use crate::types::TemperatureUnit;

type Result<T> = std::result::Result<T, Error>;

/// Build one adapter per `(name, device)` pair, in order.
///
/// Each adapter performs its initial refresh; the first failure aborts setup.
pub fn setup_climates<D, I>(
    devices: I,
    controller: &ControllerInfo,
    unit: TemperatureUnit,
) -> Result<Vec<ClimateAdapter<D>>>
where
    D: HvacDevice,
    I: IntoIterator<Item = (String, D)>,
{
    let adapters = devices
        .into_iter()
        .map(|(name, device)| ClimateAdapter::new(&name, device, controller, unit))
        .collect::<Result<Vec<_>>>()?;
    debug!("set up {} climate devices on {}", adapters.len(), controller.guid);
    Ok(adapters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::fake::FakeDevice;
    use crate::types::HvacMode;

    #[test]
    fn test_setup_all_devices() {
        let mut upstairs = FakeDevice::with_modes(&["Heat", "Cool"], &["Auto"]);
        upstairs.op_mode = Some("Cool".to_string());
        let downstairs = FakeDevice::with_modes(&["Heat"], &[]);

        let adapters = setup_climates(
            vec![
                ("Upstairs".to_string(), upstairs),
                (String::new(), downstairs),
            ],
            &ControllerInfo::new("guid"),
            TemperatureUnit::Celsius,
        )
        .unwrap();

        assert_eq!(adapters.len(), 2);
        assert_eq!(adapters[0].name(), "Upstairs");
        assert_eq!(adapters[0].state().hvac_mode(), Some(HvacMode::Cool));
        assert_eq!(adapters[1].name(), "Hallway");
        assert_eq!(adapters[1].hvac_modes(), &[HvacMode::Heat]);
    }

    #[test]
    fn test_setup_stops_on_failure() {
        let mut broken = FakeDevice::with_modes(&["Heat"], &[]);
        broken.fail_queries = true;

        let result = setup_climates(
            vec![
                ("Ok".to_string(), FakeDevice::with_modes(&["Heat"], &[])),
                ("Broken".to_string(), broken),
            ],
            &ControllerInfo::new("guid"),
            TemperatureUnit::Celsius,
        );
        assert!(result.is_err());
    }
}
