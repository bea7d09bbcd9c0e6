use crate::tuning::TuningCommand;

/// Map a DOM-style key name (`KeyboardEvent.key`) to a tuning command.
#[inline]
pub fn command_for_key(key: &str) -> Option<TuningCommand> {
    match key {
        "+" | "=" | "ArrowUp" => Some(TuningCommand::IncreaseAccel),
        "-" | "_" | "ArrowDown" => Some(TuningCommand::DecreaseAccel),
        "]" | "ArrowRight" => Some(TuningCommand::IncreaseRotation),
        "[" | "ArrowLeft" => Some(TuningCommand::DecreaseRotation),
        _ => None,
    }
}

/// One-line summary of the shortcuts, for startup logs.
pub const KEY_HELP: &str = "keys: +/= or Up accel+, -/_ or Down accel-, ] or Right rot+, [ or Left rot-";
