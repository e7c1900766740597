#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Camera;
use crate::delete::DeleteAffordance;
use crate::doc::WidgetStore;
use crate::geometry::{Corner, Point};
use crate::handle::TransformHandle;
use crate::widget::WidgetId;

/// What a gesture landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Empty canvas.
    Background,
    /// The body of a widget.
    Widget(WidgetId),
    /// One of the selected widget's corner handles.
    Handle(Corner),
    /// The selected widget's delete button.
    DeleteButton,
}

/// Resolve `pt` (canvas space) to a gesture target.
///
/// Overlay affordances sit above widgets, so the delete button is checked
/// first, then handles, then widgets from topmost down.
#[must_use]
pub fn hit_test(
    pt: Point,
    widgets: &WidgetStore,
    handles: &[TransformHandle],
    delete_button: Option<&DeleteAffordance>,
    camera: &Camera,
    handle_size_px: f64,
) -> Target {
    if delete_button.is_some_and(|d| d.bounds().contains(pt)) {
        return Target::DeleteButton;
    }

    if let Some(h) = handles.iter().rev().find(|h| h.bounds(camera, handle_size_px).contains(pt)) {
        return Target::Handle(h.corner());
    }

    widgets
        .iter_top_down()
        .find(|w| w.frame().contains(pt))
        .map_or(Target::Background, |w| Target::Widget(w.id()))
}
