use crate::types::{FanMode, HvacMode};

/// All error types that can occur when driving a climate adapter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The hvac mode has no native operating mode to write.
    #[error("no native operating mode for hvac mode {0}")]
    UnmappedHvacMode(HvacMode),

    /// The fan mode has no native fan mode to write.
    ///
    /// Returned for [`FanMode::Off`]: the controller exposes no way to clear
    /// the fan mode, so the request is refused instead of guessed.
    #[error("no native fan mode for fan mode {0}")]
    UnmappedFanMode(FanMode),

    /// The controller SDK failed while reading or writing a device field.
    #[error("device {action} error: {reason}")]
    Device { action: String, reason: String },
}

impl Error {
    /// Create a new device error
    pub fn device(action: &str, reason: impl std::fmt::Display) -> Self {
        Error::Device {
            action: action.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
