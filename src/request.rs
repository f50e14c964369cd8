//! Set-temperature service call arguments.

use serde::{Deserialize, Serialize};

/// Arguments of a set-temperature call.
///
/// A call carries either a single target `temperature`, or a low/high pair
/// for units holding a setpoint range. Values of exactly zero count as absent.
///
/// ```
/// use lutron_climate_rs::TemperatureRequest;
///
/// let mut request = TemperatureRequest::new();
/// request.target_temp_low(19.5).target_temp_high(24.0);
/// assert_eq!(request.single(), None);
/// assert_eq!(request.range(), (Some(19.5), Some(24.0)));
/// ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRequest {
    pub(crate) temperature: Option<f64>,
    pub(crate) target_temp_low: Option<f64>,
    pub(crate) target_temp_high: Option<f64>,
}

impl TemperatureRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the single target temperature.
    pub fn temperature(&mut self, temp: f64) -> &mut Self {
        self.temperature = Some(temp);
        self
    }

    /// Set the lower bound of the setpoint range (the heat setpoint).
    pub fn target_temp_low(&mut self, temp: f64) -> &mut Self {
        self.target_temp_low = Some(temp);
        self
    }

    /// Set the upper bound of the setpoint range (the cool setpoint).
    pub fn target_temp_high(&mut self, temp: f64) -> &mut Self {
        self.target_temp_high = Some(temp);
        self
    }

    /// The single target, if one was given.
    pub fn single(&self) -> Option<f64> {
        present(self.temperature)
    }

    /// The `(low, high)` range bounds that were given.
    pub fn range(&self) -> (Option<f64>, Option<f64>) {
        (present(self.target_temp_low), present(self.target_temp_high))
    }

    pub fn is_empty(&self) -> bool {
        self.single().is_none() && self.range() == (None, None)
    }
}

impl From<f64> for TemperatureRequest {
    fn from(temp: f64) -> Self {
        let mut request = TemperatureRequest::new();
        request.temperature(temp);
        request
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}
