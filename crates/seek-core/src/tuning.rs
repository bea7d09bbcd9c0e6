use crate::constants::{
    DEFAULT_ACCEL_MULTIPLIER, DEFAULT_ROTATION_FACTOR, TUNING_FLOOR, TUNING_STEP,
};

/// Discrete adjustments raised by the control buttons or the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TuningCommand {
    IncreaseAccel,
    DecreaseAccel,
    IncreaseRotation,
    DecreaseRotation,
}

impl TuningCommand {
    pub const ALL: [TuningCommand; 4] = [
        TuningCommand::IncreaseAccel,
        TuningCommand::DecreaseAccel,
        TuningCommand::IncreaseRotation,
        TuningCommand::DecreaseRotation,
    ];

    /// Button caption for this command.
    pub fn label(self) -> &'static str {
        match self {
            TuningCommand::IncreaseAccel => "+ Accel",
            TuningCommand::DecreaseAccel => "- Accel",
            TuningCommand::IncreaseRotation => "Faster Rot",
            TuningCommand::DecreaseRotation => "Slower Rot",
        }
    }
}

/// Live behaviour parameters. Both stay at or above [`TUNING_FLOOR`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TuningParameters {
    pub accel_multiplier: f32,
    pub rotation_factor: f32,
}

impl Default for TuningParameters {
    fn default() -> Self {
        Self {
            accel_multiplier: DEFAULT_ACCEL_MULTIPLIER,
            rotation_factor: DEFAULT_ROTATION_FACTOR,
        }
    }
}

impl TuningParameters {
    pub fn new(accel_multiplier: f32, rotation_factor: f32) -> Self {
        Self {
            accel_multiplier,
            rotation_factor,
        }
    }

    pub fn increase_accel(&mut self) {
        self.accel_multiplier += TUNING_STEP;
    }

    pub fn decrease_accel(&mut self) {
        self.accel_multiplier = (self.accel_multiplier - TUNING_STEP).max(TUNING_FLOOR);
    }

    pub fn increase_rotation(&mut self) {
        self.rotation_factor += TUNING_STEP;
    }

    pub fn decrease_rotation(&mut self) {
        self.rotation_factor = (self.rotation_factor - TUNING_STEP).max(TUNING_FLOOR);
    }

    pub fn apply(&mut self, command: TuningCommand) {
        match command {
            TuningCommand::IncreaseAccel => self.increase_accel(),
            TuningCommand::DecreaseAccel => self.decrease_accel(),
            TuningCommand::IncreaseRotation => self.increase_rotation(),
            TuningCommand::DecreaseRotation => self.decrease_rotation(),
        }
    }

    /// Text shown on screen, e.g. `Accel: 0.50 | Rotation: 1.00`.
    pub fn status_line(&self) -> String {
        format!(
            "Accel: {:.2} | Rotation: {:.2}",
            self.accel_multiplier, self.rotation_factor
        )
    }
}
