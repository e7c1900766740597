//! Rendering: builds a screen-space display list for a host renderer.
//!
//! This module never draws. It receives a read-only view of the engine and
//! produces a [`Scene`] of primitives in screen pixels, bottom layer first:
//! widgets in z-order, then the selection overlay. Affordances keep a fixed
//! on-screen size at every zoom level; widgets scale with the camera.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::SQRT_2;

use crate::engine::Engine;
use crate::geometry::{Corner, Point, Rect};
use crate::widget::{Widget, WidgetId, WidgetKind, WidgetState};

/// One drawable primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawItem {
    /// A widget body.
    Widget {
        id: WidgetId,
        kind: WidgetKind,
        rect: Rect,
        fill: String,
        /// Title, body or image id, whichever the variant shows first.
        label: String,
        selected: bool,
        editing: bool,
    },
    /// A corner handle: an outer ring in the accent color around a
    /// highlight disc.
    HandleRing {
        corner: Corner,
        center: Point,
        radius: f64,
        ring_width: f64,
        color: String,
        highlight: String,
    },
    /// The delete affordance: a filled circle with a cross.
    DeleteButton { center: Point, radius: f64, fill: String, cross: String },
}

/// A full frame, ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: String,
    pub items: Vec<DrawItem>,
}

/// Build the display list for the engine's current state.
#[must_use]
pub fn scene(engine: &Engine) -> Scene {
    let camera = engine.camera();
    let style = &engine.config.style;
    let mut items = Vec::with_capacity(engine.widgets().len() + 5);

    // Layer 1: widgets, bottom-most first.
    for widget in engine.widgets().iter() {
        let fill = if widget.is_selected() { &style.main } else { &style.grey };
        items.push(DrawItem::Widget {
            id: widget.id(),
            kind: widget.kind(),
            rect: camera.canvas_rect_to_screen(widget.frame()),
            fill: fill.clone(),
            label: label(widget),
            selected: widget.is_selected(),
            editing: widget.state() == WidgetState::Editing,
        });
    }

    // Layer 2: handles, nudged outward so the ring hugs the corner.
    let radius = engine.config.handle_size_px / 4.0;
    for handle in engine.handles() {
        let corner = camera.canvas_to_screen(handle.center());
        items.push(DrawItem::HandleRing {
            corner: handle.corner(),
            center: corner + handle.corner().outward() * (radius / SQRT_2),
            radius,
            ring_width: engine.config.handle_ring_width_px,
            color: style.main.clone(),
            highlight: style.highlight.clone(),
        });
    }

    // Layer 3: delete button.
    if let Some(button) = engine.delete_button() {
        items.push(DrawItem::DeleteButton {
            center: camera.canvas_to_screen(button.center()),
            radius: engine.config.delete_button_size_px / 2.0,
            fill: style.danger.clone(),
            cross: style.background.clone(),
        });
    }

    Scene { background: style.background.clone(), items }
}

/// Text shown on a widget. Editing widgets show their draft.
fn label(widget: &Widget) -> String {
    let content = widget.draft().unwrap_or_else(|| widget.content());
    content.title().or_else(|| content.body()).or_else(|| content.image_id()).unwrap_or_default().to_owned()
}
