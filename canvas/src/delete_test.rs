use super::*;
use crate::camera::Zoom;
use crate::widget::{Widget, WidgetContent};

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn zoomed(scale: f64) -> Camera {
    Camera { zoom: Zoom::uniform(scale), ..Camera::default() }
}

#[test]
fn position_is_centered_above_frame() {
    let p = position(Rect::new(0.0, 100.0, 200.0, 50.0), Size::square(40.0), 1.2);
    assert!(approx_eq(p.x, 100.0));
    // 100 - 48 + 20
    assert!((p.y - 72.0).abs() < 1e-9);
}

#[test]
fn new_scales_inversely_with_zoom() {
    let id = uuid::Uuid::new_v4();
    let frame = Rect::new(0.0, 0.0, 100.0, 100.0);
    let a = DeleteAffordance::new(id, frame, &zoomed(1.0), 40.0, 1.2);
    let b = DeleteAffordance::new(id, frame, &zoomed(2.0), 40.0, 1.2);
    assert_eq!(a.size(), Size::square(40.0));
    assert_eq!(b.size(), Size::square(20.0));
    assert!(b.center().y > a.center().y);
    assert_eq!(a.target(), id);
}

#[test]
fn bounds_surround_center() {
    let d = DeleteAffordance::new(uuid::Uuid::new_v4(), Rect::new(0.0, 100.0, 100.0, 100.0), &Camera::default(), 40.0, 1.0);
    assert_eq!(d.bounds(), Rect::new(30.0, 60.0, 40.0, 40.0));
}

#[test]
fn update_position_follows_frame() {
    let mut w = Widget::new(WidgetContent::TitleText { title: String::new() }, "t");
    w.set_frame(Rect::new(0.0, 0.0, 100.0, 100.0));
    let id = w.id();
    let mut store = WidgetStore::new();
    store.push(w);

    let cam = Camera::default();
    let mut d = DeleteAffordance::new(id, Rect::new(0.0, 0.0, 100.0, 100.0), &cam, 40.0, 1.2);
    if let Some(w) = store.get_mut(&id) {
        w.set_frame(Rect::new(500.0, 500.0, 100.0, 100.0));
    }
    assert!(d.update_position(&store, &cam, 40.0, 1.2));
    assert!(approx_eq(d.center().x, 550.0));
}

#[test]
fn update_position_reports_missing_target() {
    let store = WidgetStore::new();
    let mut d = DeleteAffordance::new(uuid::Uuid::new_v4(), Rect::default(), &Camera::default(), 40.0, 1.2);
    assert!(!d.update_position(&store, &Camera::default(), 40.0, 1.2));
}
