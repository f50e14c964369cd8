//! Climate entity wrapping one controller HVAC device.

use log::debug;
use serde_json::{Value, json};

use crate::device::{ControllerInfo, HvacDevice};
use crate::errors::Error;
use crate::mapping;
use crate::request::TemperatureRequest;
use crate::state::ClimateState;
use crate::types::{
    FanMode, HvacAction, HvacMode, NativeFanMode, NativeTempUnit, OperatingMode, Status,
    SupportedFeatures, TemperatureUnit,
};

type Result<T> = std::result::Result<T, Error>;

/// A platform climate entity backed by a controller HVAC device.
///
/// The adapter translates the device's native modes, fan modes and status
/// into platform values on every read, and translates platform commands back
/// into native writes. Reads go to the values the device handle has cached;
/// [`ClimateAdapter::refresh`] asks the controller for fresh ones.
///
/// The advertised hvac and fan modes are fixed when the adapter is built.
#[derive(Debug)]
pub struct ClimateAdapter<D> {
    name: String,
    device: D,
    controller: ControllerInfo,
    hvac_modes: Vec<HvacMode>,
    fan_modes: Vec<FanMode>,
    supported_features: SupportedFeatures,
    temperature_unit: TemperatureUnit,
    state: ClimateState,
}

impl<D: HvacDevice> ClimateAdapter<D> {
    /// Wrap a device handle and perform the initial refresh.
    ///
    /// An empty `name` falls back to the name the controller has for the
    /// device. The controller is told to report in `unit` when it has a
    /// matching native unit; otherwise its unit is left as is.
    pub fn new(
        name: &str,
        mut device: D,
        controller: &ControllerInfo,
        unit: TemperatureUnit,
    ) -> Result<Self> {
        let hvac_modes = mapping::advertised(&device.op_modes(), mapping::advertised_hvac_mode);
        let fan_modes = mapping::advertised(&device.fan_modes(), mapping::advertised_fan_mode);

        let mut supported_features = SupportedFeatures::empty();
        if !fan_modes.is_empty() {
            supported_features.insert(SupportedFeatures::FAN_MODE);
        }

        match NativeTempUnit::from_platform(unit) {
            Some(native) => device.set_temp_unit(native)?,
            None => debug!("controller has no native unit for {unit}, leaving it unset"),
        }

        let mut adapter = ClimateAdapter {
            name: name.to_string(),
            device,
            controller: controller.clone(),
            hvac_modes,
            fan_modes,
            supported_features,
            temperature_unit: unit,
            state: ClimateState::default(),
        };
        adapter.refresh()?;
        Ok(adapter)
    }

    pub fn name(&self) -> &str {
        if self.name.is_empty() {
            self.device.name()
        } else {
            &self.name
        }
    }

    /// Stable id built from the controller guid and the device integration id.
    pub fn unique_id(&self) -> String {
        format!("{}_{}", self.controller.guid, self.device.integration_id())
    }

    /// The host must call [`ClimateAdapter::refresh`] to keep state current.
    pub fn should_poll(&self) -> bool {
        true
    }

    pub fn extra_state_attributes(&self) -> Value {
        json!({ "lutron_integration_id": self.device.integration_id() })
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    /// Hvac modes the device advertises, in the device's declared order.
    pub fn hvac_modes(&self) -> &[HvacMode] {
        &self.hvac_modes
    }

    /// Fan modes the device advertises, in the device's declared order.
    pub fn fan_modes(&self) -> &[FanMode] {
        &self.fan_modes
    }

    pub fn supported_features(&self) -> SupportedFeatures {
        self.supported_features
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.temperature_unit
    }

    /// The values last reported to the platform.
    pub fn state(&self) -> &ClimateState {
        &self.state
    }

    pub fn set_hvac_mode(&mut self, mode: HvacMode) -> Result<()> {
        let native = mapping::hvac_mode_to_native(mode).ok_or(Error::UnmappedHvacMode(mode))?;
        debug!("{}: setting operating mode {native}", self.name());
        self.device.set_op_mode(native)
    }

    /// Write a fan mode.
    ///
    /// Fails with [`Error::UnmappedFanMode`] for [`FanMode::Off`], which the
    /// controller cannot apply.
    pub fn set_fan_mode(&mut self, mode: FanMode) -> Result<()> {
        let native = mapping::fan_mode_to_native(mode).ok_or(Error::UnmappedFanMode(mode))?;
        debug!("{}: setting fan mode {native}", self.name());
        self.device.set_fan_mode(native)
    }

    /// Write setpoints.
    ///
    /// A single target goes to the heat setpoint in `Heat` and `Auto`, to the
    /// cool setpoint in `Cool`, and is dropped in every other mode. Without a
    /// single target, the low bound goes to the heat setpoint and the high
    /// bound to the cool setpoint.
    pub fn set_temperature(&mut self, request: &TemperatureRequest) -> Result<()> {
        if let Some(temp) = request.single() {
            return match self.native_op_mode() {
                Some(OperatingMode::Heat | OperatingMode::Auto) => {
                    self.device.set_heat_setpoint(temp)
                }
                Some(OperatingMode::Cool) => self.device.set_cool_setpoint(temp),
                mode => {
                    debug!("{}: dropping target {temp} in mode {mode:?}", self.name());
                    Ok(())
                }
            };
        }

        let (low, high) = request.range();
        if let Some(low) = low {
            self.device.set_heat_setpoint(low)?;
        }
        if let Some(high) = high {
            self.device.set_cool_setpoint(high)?;
        }
        Ok(())
    }

    pub fn current_temperature(&mut self) -> Option<f64> {
        self.state.current_temperature = self.device.last_current_temp();
        self.state.current_temperature
    }

    /// Read the hvac mode and recompute the setpoint feature bits.
    ///
    /// An unrecognized native mode reads as `None` and leaves both the cached
    /// mode and the feature bits as they were.
    pub fn hvac_mode(&mut self) -> Option<HvacMode> {
        let mode = mapping::hvac_mode_from_native(self.native_op_mode()?);
        self.state.hvac_mode = Some(mode);

        self.supported_features.remove(
            SupportedFeatures::TARGET_TEMPERATURE | SupportedFeatures::TARGET_TEMPERATURE_RANGE,
        );
        if mode == HvacMode::HeatCool {
            self.supported_features
                .insert(SupportedFeatures::TARGET_TEMPERATURE_RANGE);
        } else {
            self.supported_features
                .insert(SupportedFeatures::TARGET_TEMPERATURE);
        }
        Some(mode)
    }

    /// The single setpoint that applies in the current mode.
    ///
    /// The heat setpoint while heating, the cool setpoint while cooling,
    /// otherwise `None`.
    pub fn target_temperature(&mut self) -> Option<f64> {
        self.state.target_temperature = if self.state.hvac_mode == Some(HvacMode::Heat) {
            self.device.last_heat_setpoint()
        } else if self.native_op_mode() == Some(OperatingMode::Cool) {
            self.device.last_cool_setpoint()
        } else {
            None
        };
        self.state.target_temperature
    }

    /// Always the cool setpoint, whatever the mode.
    pub fn target_temperature_high(&mut self) -> Option<f64> {
        self.state.target_temperature_high = self.device.last_cool_setpoint();
        self.state.target_temperature_high
    }

    /// Always the heat setpoint, whatever the mode.
    pub fn target_temperature_low(&mut self) -> Option<f64> {
        self.state.target_temperature_low = self.device.last_heat_setpoint();
        self.state.target_temperature_low
    }

    pub fn fan_mode(&mut self) -> Option<FanMode> {
        self.state.fan_mode = self
            .native_fan_mode()
            .map(mapping::fan_mode_from_native);
        self.state.fan_mode
    }

    pub fn hvac_action(&mut self) -> Option<HvacAction> {
        self.state.hvac_action = self.native_status().map(mapping::action_from_status);
        self.state.hvac_action
    }

    /// Poll the controller and recompute every derived value.
    ///
    /// All queries run before anything is recomputed, so a failed query
    /// leaves the previous state untouched.
    pub fn refresh(&mut self) -> Result<()> {
        self.device.query_current_temp()?;
        self.device.query_op_mode()?;
        self.device.query_cool_setpoint()?;
        self.device.query_fan_mode()?;
        self.device.query_status()?;

        self.current_temperature();
        self.hvac_mode();
        self.target_temperature_high();
        self.target_temperature_low();
        self.target_temperature();
        self.fan_mode();
        self.hvac_action();
        Ok(())
    }

    /// Returns diagnostics including identity, capabilities and state.
    pub fn diagnostics(&self) -> Value {
        json!({
            "name": self.name(),
            "unique_id": self.unique_id(),
            "integration_id": self.device.integration_id(),
            "hvac_modes": self.hvac_modes,
            "fan_modes": self.fan_modes,
            "supported_features": self.supported_features,
            "temperature_unit": self.temperature_unit,
            "native": {
                "op_mode": self.device.last_op_mode(),
                "fan_mode": self.device.last_fan_mode(),
                "status": self.device.last_status(),
            },
            "state": serde_json::to_value(&self.state).unwrap_or(Value::Null),
        })
    }

    fn native_op_mode(&self) -> Option<OperatingMode> {
        parse_native(self.device.last_op_mode(), "operating mode")
    }

    fn native_fan_mode(&self) -> Option<NativeFanMode> {
        parse_native(self.device.last_fan_mode(), "fan mode")
    }

    fn native_status(&self) -> Option<Status> {
        parse_native(self.device.last_status(), "status")
    }
}

fn parse_native<T: std::str::FromStr>(token: Option<String>, what: &str) -> Option<T> {
    let token = token?;
    match token.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!("unrecognized native {what} {token:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::fake::FakeDevice;
    use strum::IntoEnumIterator;

    fn controller() -> ControllerInfo {
        ControllerInfo::new("a1b2c3")
    }

    fn adapter(device: FakeDevice) -> ClimateAdapter<FakeDevice> {
        ClimateAdapter::new("", device, &controller(), TemperatureUnit::Fahrenheit).unwrap()
    }

    fn full_device() -> FakeDevice {
        FakeDevice::with_modes(&["Off", "Heat", "Cool", "Auto"], &["Auto", "On"])
    }

    #[test]
    fn test_advertised_modes_skip_unmapped() {
        let adapter = adapter(FakeDevice::with_modes(&["Heat", "Cool", "Fan"], &[]));
        assert_eq!(adapter.hvac_modes(), &[HvacMode::Heat, HvacMode::Cool]);
        assert!(adapter.fan_modes().is_empty());
        assert!(!adapter.supported_features().contains(SupportedFeatures::FAN_MODE));
    }

    #[test]
    fn test_fan_modes_enable_fan_feature() {
        let adapter = adapter(FakeDevice::with_modes(&["Heat"], &["High", "Auto"]));
        assert_eq!(adapter.fan_modes(), &[FanMode::Auto]);
        assert!(adapter.supported_features().contains(SupportedFeatures::FAN_MODE));
    }

    #[test]
    fn test_unit_pushed_to_device() {
        let adapter = adapter(full_device());
        assert_eq!(adapter.device().temp_unit, Some(NativeTempUnit::F));
        assert_eq!(adapter.temperature_unit(), TemperatureUnit::Fahrenheit);

        let kelvin =
            ClimateAdapter::new("", full_device(), &controller(), TemperatureUnit::Kelvin).unwrap();
        assert_eq!(kelvin.device().temp_unit, None);
    }

    #[test]
    fn test_identity() {
        let mut adapter = adapter(full_device());
        assert_eq!(adapter.name(), "Hallway");
        assert_eq!(adapter.unique_id(), "a1b2c3_12");
        assert!(adapter.should_poll());
        assert_eq!(
            adapter.extra_state_attributes(),
            json!({"lutron_integration_id": 12})
        );

        adapter.name = "Upstairs".to_string();
        assert_eq!(adapter.name(), "Upstairs");
    }

    #[test]
    fn test_construction_refreshes() {
        let mut device = full_device();
        device.op_mode = Some("Cool".to_string());
        device.cool_setpoint = Some(75.0);
        device.current_temp = Some(77.5);
        device.status = Some("Cool1".to_string());

        let adapter = adapter(device);
        assert_eq!(adapter.device().queries, 5);
        let state = adapter.state();
        assert_eq!(state.hvac_mode(), Some(HvacMode::Cool));
        assert_eq!(state.target_temperature(), Some(75.0));
        assert_eq!(state.current_temperature(), Some(77.5));
        assert_eq!(state.hvac_action(), Some(HvacAction::Cool));
    }

    #[test]
    fn test_construction_fails_on_query_error() {
        let mut device = full_device();
        device.fail_queries = true;
        let err = ClimateAdapter::new("", device, &controller(), TemperatureUnit::Celsius)
            .unwrap_err();
        assert_eq!(err, Error::device("current temperature query", "timed out"));
    }

    #[test]
    fn test_hvac_mode_for_every_native_mode() {
        let mut adapter = adapter(full_device());
        for native in OperatingMode::iter() {
            adapter.device.op_mode = Some(native.to_string());
            assert_eq!(
                adapter.hvac_mode(),
                Some(mapping::hvac_mode_from_native(native))
            );
        }
    }

    #[test]
    fn test_hvac_mode_round_trip_through_device() {
        let mut adapter = adapter(full_device());
        for mode in HvacMode::iter() {
            adapter.set_hvac_mode(mode).unwrap();
            assert_eq!(adapter.hvac_mode(), Some(mode));
        }
    }

    #[test]
    fn test_unknown_mode_keeps_features() {
        let mut adapter = adapter(full_device());
        adapter.device.op_mode = Some("Auto".to_string());
        adapter.hvac_mode();
        let before = adapter.supported_features();

        adapter.device.op_mode = Some("Em. Heat".to_string());
        assert_eq!(adapter.hvac_mode(), None);
        assert_eq!(adapter.supported_features(), before);
        assert_eq!(adapter.state().hvac_mode(), Some(HvacMode::HeatCool));
    }

    #[test]
    fn test_mode_read_switches_setpoint_features() {
        let mut adapter = adapter(full_device());

        adapter.device.op_mode = Some("Auto".to_string());
        assert_eq!(adapter.hvac_mode(), Some(HvacMode::HeatCool));
        let features = adapter.supported_features();
        assert!(features.contains(SupportedFeatures::TARGET_TEMPERATURE_RANGE));
        assert!(!features.contains(SupportedFeatures::TARGET_TEMPERATURE));
        assert!(features.contains(SupportedFeatures::FAN_MODE));

        adapter.device.op_mode = Some("Heat".to_string());
        assert_eq!(adapter.hvac_mode(), Some(HvacMode::Heat));
        let features = adapter.supported_features();
        assert!(features.contains(SupportedFeatures::TARGET_TEMPERATURE));
        assert!(!features.contains(SupportedFeatures::TARGET_TEMPERATURE_RANGE));
        assert!(features.contains(SupportedFeatures::FAN_MODE));
    }

    #[test]
    fn test_set_fan_mode_off_is_refused() {
        let mut adapter = adapter(full_device());
        adapter.device.fan_mode = Some("Auto".to_string());

        let err = adapter.set_fan_mode(FanMode::Off).unwrap_err();
        assert_eq!(err, Error::UnmappedFanMode(FanMode::Off));
        assert_eq!(adapter.device().fan_mode.as_deref(), Some("Auto"));
    }

    #[test]
    fn test_set_fan_mode() {
        let mut adapter = adapter(full_device());
        adapter.set_fan_mode(FanMode::Medium).unwrap();
        assert_eq!(adapter.device().fan_mode.as_deref(), Some("Medium"));
        assert_eq!(adapter.fan_mode(), Some(FanMode::Medium));
    }

    #[test]
    fn test_fan_mode_reads() {
        let mut adapter = adapter(full_device());
        adapter.device.fan_mode = Some("None".to_string());
        assert_eq!(adapter.fan_mode(), Some(FanMode::Off));
        adapter.device.fan_mode = Some("Cycler".to_string());
        assert_eq!(adapter.fan_mode(), None);
    }

    #[test]
    fn test_single_target_follows_mode() {
        let mut adapter = adapter(full_device());

        adapter.device.op_mode = Some("Heat".to_string());
        adapter.set_temperature(&TemperatureRequest::from(68.0)).unwrap();
        assert_eq!(adapter.device().heat_setpoint, Some(68.0));

        adapter.device.op_mode = Some("Auto".to_string());
        adapter.set_temperature(&TemperatureRequest::from(69.0)).unwrap();
        assert_eq!(adapter.device().heat_setpoint, Some(69.0));

        adapter.device.op_mode = Some("Cool".to_string());
        adapter.set_temperature(&TemperatureRequest::from(74.0)).unwrap();
        assert_eq!(adapter.device().cool_setpoint, Some(74.0));
        assert_eq!(adapter.device().heat_setpoint, Some(69.0));
    }

    #[test]
    fn test_single_target_dropped_when_off() {
        let mut device = full_device();
        device.op_mode = Some("Off".to_string());
        device.heat_setpoint = Some(65.0);
        device.cool_setpoint = Some(78.0);
        let mut adapter = adapter(device);

        adapter.set_temperature(&TemperatureRequest::from(72.0)).unwrap();
        assert_eq!(adapter.device().heat_setpoint, Some(65.0));
        assert_eq!(adapter.device().cool_setpoint, Some(78.0));
    }

    #[test]
    fn test_range_writes_both_setpoints() {
        let mut adapter = adapter(full_device());
        adapter.device.op_mode = Some("Off".to_string());

        let mut request = TemperatureRequest::new();
        request.target_temp_low(66.0).target_temp_high(76.0);
        adapter.set_temperature(&request).unwrap();
        assert_eq!(adapter.device().heat_setpoint, Some(66.0));
        assert_eq!(adapter.device().cool_setpoint, Some(76.0));

        let mut request = TemperatureRequest::new();
        request.target_temp_high(79.0);
        adapter.set_temperature(&request).unwrap();
        assert_eq!(adapter.device().heat_setpoint, Some(66.0));
        assert_eq!(adapter.device().cool_setpoint, Some(79.0));
    }

    #[test]
    fn test_range_bounds_ignore_mode() {
        let mut device = full_device();
        device.op_mode = Some("Off".to_string());
        device.heat_setpoint = Some(61.5);
        device.cool_setpoint = Some(83.0);
        let mut adapter = adapter(device);

        assert_eq!(adapter.target_temperature_high(), Some(83.0));
        assert_eq!(adapter.target_temperature_low(), Some(61.5));
        assert_eq!(adapter.target_temperature(), None);
    }

    #[test]
    fn test_target_temperature_by_mode() {
        let mut device = full_device();
        device.heat_setpoint = Some(64.0);
        device.cool_setpoint = Some(80.0);
        let mut adapter = adapter(device);

        adapter.device.op_mode = Some("Heat".to_string());
        adapter.hvac_mode();
        assert_eq!(adapter.target_temperature(), Some(64.0));

        adapter.device.op_mode = Some("Cool".to_string());
        adapter.hvac_mode();
        assert_eq!(adapter.target_temperature(), Some(80.0));

        adapter.device.op_mode = Some("Auto".to_string());
        adapter.hvac_mode();
        assert_eq!(adapter.target_temperature(), None);
    }

    #[test]
    fn test_hvac_action() {
        let mut adapter = adapter(full_device());
        adapter.device.status = Some("CoolIdle".to_string());
        assert_eq!(adapter.hvac_action(), Some(HvacAction::Idle));
        adapter.device.status = Some("EmergencyHeat".to_string());
        assert_eq!(adapter.hvac_action(), Some(HvacAction::Heat));
        adapter.device.status = Some("Defrost".to_string());
        assert_eq!(adapter.hvac_action(), None);
    }

    #[test]
    fn test_refresh_failure_keeps_state() {
        let mut device = full_device();
        device.op_mode = Some("Heat".to_string());
        let mut adapter = adapter(device);

        adapter.device.op_mode = Some("Cool".to_string());
        adapter.device.fail_queries = true;
        assert!(adapter.refresh().is_err());
        assert_eq!(adapter.state().hvac_mode(), Some(HvacMode::Heat));

        adapter.device.fail_queries = false;
        adapter.refresh().unwrap();
        assert_eq!(adapter.state().hvac_mode(), Some(HvacMode::Cool));
    }

    #[test]
    fn test_diagnostics() {
        let mut device = full_device();
        device.op_mode = Some("Auto".to_string());
        device.fan_mode = Some("On".to_string());
        let adapter = adapter(device);

        let diag = adapter.diagnostics();
        assert_eq!(diag["unique_id"], json!("a1b2c3_12"));
        assert_eq!(diag["hvac_modes"], json!(["heat", "cool", "heat_cool"]));
        assert_eq!(diag["fan_modes"], json!(["auto", "on"]));
        assert_eq!(diag["supported_features"], json!(10));
        assert_eq!(diag["temperature_unit"], json!("°F"));
        assert_eq!(diag["state"]["hvac_mode"], json!("heat_cool"));
        assert_eq!(diag["state"]["fan_mode"], json!("on"));
        assert_eq!(diag["native"]["op_mode"], json!("Auto"));
    }

    #[test]
    fn test_borrowed_device() {
        let mut device = full_device();
        {
            let mut adapter =
                ClimateAdapter::new("Den", &mut device, &controller(), TemperatureUnit::Celsius)
                    .unwrap();
            adapter.set_hvac_mode(HvacMode::Dry).unwrap();
            assert_eq!(adapter.name(), "Den");
        }
        assert_eq!(device.op_mode.as_deref(), Some("Dry"));
        assert_eq!(device.temp_unit, Some(NativeTempUnit::C));
    }
}
