use crate::constants::{
    DEFAULT_ACCEL_MULTIPLIER, DEFAULT_ROTATION_FACTOR, TOP_SPEED, TUNING_FLOOR,
};
use crate::tuning::TuningParameters;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("top speed must be finite and positive, got {0}")]
    TopSpeed(f32),
    #[error("{name} must be finite and at least {floor}, got {value}")]
    BelowFloor {
        name: &'static str,
        value: f32,
        floor: f32,
    },
}

/// Starting values for a session. Defaults match the shared constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeekConfig {
    pub top_speed: f32,
    pub accel_multiplier: f32,
    pub rotation_factor: f32,
}

impl Default for SeekConfig {
    fn default() -> Self {
        Self {
            top_speed: TOP_SPEED,
            accel_multiplier: DEFAULT_ACCEL_MULTIPLIER,
            rotation_factor: DEFAULT_ROTATION_FACTOR,
        }
    }
}

impl SeekConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.top_speed.is_finite() || self.top_speed <= 0.0 {
            return Err(ConfigError::TopSpeed(self.top_speed));
        }
        check_floor("accel_multiplier", self.accel_multiplier)?;
        check_floor("rotation_factor", self.rotation_factor)?;
        Ok(())
    }

    pub fn tuning(&self) -> TuningParameters {
        TuningParameters::new(self.accel_multiplier, self.rotation_factor)
    }
}

fn check_floor(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= TUNING_FLOOR {
        Ok(())
    } else {
        Err(ConfigError::BelowFloor {
            name,
            value,
            floor: TUNING_FLOOR,
        })
    }
}
