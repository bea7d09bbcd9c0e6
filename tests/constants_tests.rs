// Host-side tests for shared constants and their layout relationships.

use seek_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_sane() {
    assert!(TOP_SPEED > 0.0);
    assert!(TUNING_STEP > 0.0);
    assert!(TUNING_FLOOR > 0.0);

    // Defaults must already satisfy the floor
    assert!(DEFAULT_ACCEL_MULTIPLIER >= TUNING_FLOOR);
    assert!(DEFAULT_ROTATION_FACTOR >= TUNING_FLOOR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mover_shape_is_positive() {
    assert!(MOVER_WIDTH > 0.0 && MOVER_HEIGHT > 0.0);
    // Stroke must not swallow the fill
    assert!(MOVER_STROKE_WIDTH < MOVER_HEIGHT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn status_text_sits_above_the_buttons() {
    assert!(STATUS_TEXT_ORIGIN[1] + STATUS_TEXT_SIZE <= BUTTON_GROUP_ORIGIN[1]);
    assert!(BUTTON_TEXT_SIZE < BUTTON_HEIGHT);
    assert!(BUTTON_PRESSED_SCALE > 0.0 && BUTTON_PRESSED_SCALE < 1.0);
}

#[test]
fn default_buttons_do_not_overlap() {
    let panel = ButtonPanel::default_layout();
    let rects: Vec<Rect> = panel.buttons().iter().map(|b| b.rect).collect();
    for (i, a) in rects.iter().enumerate() {
        for b in rects.iter().skip(i + 1) {
            let apart = a.x + a.width <= b.x
                || b.x + b.width <= a.x
                || a.y + a.height <= b.y
                || b.y + b.height <= a.y;
            assert!(apart, "{a:?} overlaps {b:?}");
        }
    }
}
