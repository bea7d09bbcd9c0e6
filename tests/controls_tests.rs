// Host-side tests for the button panel layout and press tracking.

use glam::Vec2;
use seek_core::{ButtonPanel, Rect, TuningCommand};

fn p(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

#[test]
fn default_layout_is_two_by_two_grid() {
    let panel = ButtonPanel::default_layout();
    let rects: Vec<Rect> = panel.buttons().iter().map(|b| b.rect).collect();
    assert_eq!(
        rects,
        [
            Rect::new(20.0, 60.0, 100.0, 40.0),
            Rect::new(135.0, 60.0, 100.0, 40.0),
            Rect::new(20.0, 115.0, 100.0, 40.0),
            Rect::new(135.0, 115.0, 100.0, 40.0),
        ]
    );
    let commands: Vec<_> = panel.buttons().iter().map(|b| b.command).collect();
    assert_eq!(commands, TuningCommand::ALL);
    assert_eq!(panel.buttons()[2].label, "Faster Rot");
}

#[test]
fn hit_test_uses_half_open_rects() {
    let panel = ButtonPanel::default_layout();
    assert_eq!(panel.hit_test(p(20.0, 60.0)), Some(0));
    assert_eq!(panel.hit_test(p(119.9, 99.9)), Some(0));
    assert_eq!(panel.hit_test(p(120.0, 80.0)), None); // right edge, in the margin
    assert_eq!(panel.hit_test(p(135.0, 60.0)), Some(1));
    assert_eq!(panel.hit_test(p(50.0, 130.0)), Some(2));
    assert_eq!(panel.hit_test(p(234.9, 154.9)), Some(3));
    assert_eq!(panel.hit_test(p(235.0, 154.9)), None);
    assert_eq!(panel.hit_test(p(400.0, 300.0)), None);
}

#[test]
fn press_and_release_on_button_fires() {
    let mut panel = ButtonPanel::default_layout();
    assert!(panel.pointer_down(p(30.0, 70.0)));
    assert!(panel.is_pressed(0));
    assert_eq!(panel.pointer_up(p(31.0, 71.0)), Some(TuningCommand::IncreaseAccel));
    assert_eq!(panel.pressed(), None);
}

#[test]
fn leaving_the_held_button_cancels_press_state() {
    let mut panel = ButtonPanel::default_layout();
    panel.pointer_down(p(150.0, 130.0));
    assert!(panel.is_pressed(3));

    panel.pointer_move(p(160.0, 140.0));
    assert!(panel.is_pressed(3));

    panel.pointer_move(p(500.0, 500.0));
    assert_eq!(panel.pressed(), None);
    assert_eq!(panel.pointer_up(p(500.0, 500.0)), None);
}

#[test]
fn pointer_out_clears_pressed() {
    let mut panel = ButtonPanel::default_layout();
    panel.pointer_down(p(140.0, 65.0));
    assert!(panel.is_pressed(1));
    panel.pointer_out();
    assert_eq!(panel.pressed(), None);
}

#[test]
fn release_over_button_fires_even_without_press_there() {
    let mut panel = ButtonPanel::default_layout();
    assert!(!panel.pointer_down(p(600.0, 400.0)));
    assert_eq!(panel.pressed(), None);
    assert_eq!(
        panel.pointer_up(p(140.0, 65.0)),
        Some(TuningCommand::DecreaseAccel)
    );
}

#[test]
fn release_off_buttons_fires_nothing() {
    let mut panel = ButtonPanel::default_layout();
    panel.pointer_down(p(600.0, 400.0));
    assert_eq!(panel.pointer_up(p(610.0, 410.0)), None);
}

#[test]
fn pressed_rect_shrinks_from_top_left() {
    let r = Rect::new(20.0, 60.0, 100.0, 40.0).scaled_from_origin(0.95);
    assert_eq!((r.x, r.y), (20.0, 60.0));
    assert!((r.width - 95.0).abs() < 1e-4);
    assert!((r.height - 38.0).abs() < 1e-4);
}
