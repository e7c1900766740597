use super::*;

#[test]
fn input_state_default_is_idle() {
    let s = InputState::default();
    assert!(s.is_idle());
    assert!(s.pan.is_none());
    assert!(s.pinch_baseline.is_none());
}

#[test]
fn input_state_with_pinch_is_not_idle() {
    let s = InputState { pinch_baseline: Some(Zoom::uniform(1.0)), ..InputState::default() };
    assert!(!s.is_idle());
}

#[test]
fn input_state_with_pan_is_not_idle() {
    let s = InputState {
        pan: Some(PanGesture {
            target: Target::Background,
            start: Point::new(0.0, 0.0),
            moved: false,
            kind: PanKind::Canvas { origin: Point::new(0.0, 0.0) },
        }),
        ..InputState::default()
    };
    assert!(!s.is_idle());
}

#[test]
fn gesture_phases_distinct() {
    let phases = [GesturePhase::Began, GesturePhase::Changed, GesturePhase::Ended, GesturePhase::Cancelled];
    for (i, a) in phases.iter().enumerate() {
        for (j, b) in phases.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn drop_payload_equality() {
    assert_eq!(DropPayload::Foreign("text/plain".into()), DropPayload::Foreign("text/plain".into()));
    assert_ne!(DropPayload::Foreign("a".into()), DropPayload::Foreign("b".into()));
}
