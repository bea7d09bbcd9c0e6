// Host-side tests for keyboard shortcuts.

use seek_core::{command_for_key, TuningCommand};

#[test]
fn accel_keys() {
    for key in ["+", "=", "ArrowUp"] {
        assert_eq!(command_for_key(key), Some(TuningCommand::IncreaseAccel), "{key}");
    }
    for key in ["-", "_", "ArrowDown"] {
        assert_eq!(command_for_key(key), Some(TuningCommand::DecreaseAccel), "{key}");
    }
}

#[test]
fn rotation_keys() {
    for key in ["]", "ArrowRight"] {
        assert_eq!(
            command_for_key(key),
            Some(TuningCommand::IncreaseRotation),
            "{key}"
        );
    }
    for key in ["[", "ArrowLeft"] {
        assert_eq!(
            command_for_key(key),
            Some(TuningCommand::DecreaseRotation),
            "{key}"
        );
    }
}

#[test]
fn unrelated_keys_are_ignored() {
    for key in ["", "a", "A", "1", " ", "Enter", "Escape", "arrowup", "++"] {
        assert_eq!(command_for_key(key), None, "{key:?}");
    }
}
