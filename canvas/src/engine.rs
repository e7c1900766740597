//! The canvas controller.
//!
//! `Engine` is the single mutable authority over the camera, the widget
//! collection, the selection and the selection overlay (four transform
//! handles plus a delete button). Every mutation goes through it, and every
//! public operation returns the [`Action`]s the host should react to.
//!
//! Gesture handling is total: nothing here returns an error. Gestures that
//! do not apply (a resize with no selection, a pinch change with no begin,
//! a malformed drop) are ignored.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, trace};

use crate::blueprint::Blueprint;
use crate::camera::{Camera, Zoom};
use crate::config::CanvasConfig;
use crate::delete::DeleteAffordance;
use crate::doc::{CanvasModel, WidgetStore};
use crate::geometry::{Corner, Point, Rect, Size};
use crate::handle::TransformHandle;
use crate::hit::{self, Target};
use crate::input::{DropOperation, DropPayload, DropSession, Gesture, GesturePhase, InputState, PanGesture, PanKind};
use crate::widget::{Widget, WidgetId, WidgetState};

/// Actions returned from the engine for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    WidgetCreated(WidgetId),
    WidgetUpdated { id: WidgetId, frame: Rect },
    WidgetDeleted { id: WidgetId },
    SelectionChanged(Option<WidgetId>),
    /// The host should open the content editor for this widget.
    EditRequested { id: WidgetId },
    /// An open edit draft was written back to the widget's content.
    EditCommitted { id: WidgetId },
    CameraChanged(Camera),
    RenderNeeded,
}

/// Name and timestamps carried through snapshot and restore.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CanvasMeta {
    pub name: String,
    pub created_at: String,
    pub last_modified_at: String,
}

/// Canvas controller state.
pub struct Engine {
    pub config: CanvasConfig,
    pub meta: CanvasMeta,
    /// Visible area in screen pixels. Drops outside it are refused.
    pub viewport: Size,
    widgets: WidgetStore,
    camera: Camera,
    selected: Option<WidgetId>,
    handles: Vec<TransformHandle>,
    delete_button: Option<DeleteAffordance>,
    input: InputState,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            config,
            meta: CanvasMeta::default(),
            viewport: Size::default(),
            widgets: WidgetStore::new(),
            camera: Camera::default(),
            selected: None,
            handles: Vec::new(),
            delete_button: None,
            input: InputState::default(),
        }
    }

    /// Update the visible area, in screen pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Size::new(width, height);
    }

    // --- Queries ---

    #[must_use]
    pub fn widgets(&self) -> &WidgetStore {
        &self.widgets
    }

    #[must_use]
    pub fn widget(&self, id: &WidgetId) -> Option<&Widget> {
        self.widgets.get(id)
    }

    /// The currently selected widget, if any.
    #[must_use]
    pub fn selection(&self) -> Option<WidgetId> {
        self.selected
    }

    #[must_use]
    pub fn handles(&self) -> &[TransformHandle] {
        &self.handles
    }

    #[must_use]
    pub fn delete_button(&self) -> Option<&DeleteAffordance> {
        self.delete_button.as_ref()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// What a screen-space point would hit.
    #[must_use]
    pub fn target_at(&self, screen: Point) -> Target {
        let pt = self.camera.screen_to_canvas(screen);
        hit::hit_test(
            pt,
            &self.widgets,
            &self.handles,
            self.delete_button.as_ref(),
            &self.camera,
            self.config.handle_size_px,
        )
    }

    // --- Gesture entry point ---

    /// Route a recognized gesture to its target.
    pub fn handle_gesture(&mut self, gesture: Gesture) -> Vec<Action> {
        match gesture {
            Gesture::Tap { at } => self.on_tap(at),
            Gesture::LongPress { at } => self.on_long_press(at),
            Gesture::Pan { phase, at, translation } => self.on_pan(phase, at, translation),
            Gesture::Pinch { phase, scale } => self.on_pinch(phase, scale),
        }
    }

    fn on_tap(&mut self, at: Point) -> Vec<Action> {
        let target = self.target_at(at);
        debug!(?target, "tap");
        match target {
            Target::Background => self.tap_canvas(),
            Target::Widget(id) => self.tap_widget(id),
            Target::DeleteButton => self.activate_delete(),
            Target::Handle(_) => Vec::new(),
        }
    }

    fn on_long_press(&mut self, at: Point) -> Vec<Action> {
        match self.target_at(at) {
            Target::Widget(id) => self.long_press_widget(id),
            _ => Vec::new(),
        }
    }

    fn on_pan(&mut self, phase: GesturePhase, at: Point, translation: Point) -> Vec<Action> {
        match phase {
            GesturePhase::Began => {
                self.begin_pan(at);
                Vec::new()
            }
            GesturePhase::Changed => self.pan_changed(at, translation),
            GesturePhase::Ended => self.end_pan(true),
            GesturePhase::Cancelled => self.end_pan(false),
        }
    }

    fn begin_pan(&mut self, at: Point) {
        let target = self.target_at(at);
        let kind = match target {
            Target::Widget(id) if self.selected == Some(id) => match self.widgets.get(&id) {
                Some(w) => PanKind::Widget { id, origin_center: w.center() },
                None => PanKind::Canvas { origin: self.camera.pan },
            },
            Target::Handle(corner) => {
                if let Some(h) = self.handles.iter_mut().find(|h| h.corner() == corner) {
                    h.begin_drag();
                }
                PanKind::Handle { corner }
            }
            Target::Widget(_) | Target::Background | Target::DeleteButton => PanKind::Canvas { origin: self.camera.pan },
        };
        debug!(?target, ?kind, "pan began");
        self.input.pan = Some(PanGesture { target, start: at, moved: false, kind });
    }

    fn pan_changed(&mut self, at: Point, translation: Point) -> Vec<Action> {
        let Some(pan) = self.input.pan.as_mut() else {
            return Vec::new();
        };
        if !pan.moved {
            if translation.length() <= self.config.drag_threshold_px {
                return Vec::new();
            }
            pan.moved = true;
        }
        let kind = pan.kind;

        match kind {
            PanKind::Canvas { origin } => self.drag_canvas(origin, translation),
            PanKind::Widget { id, origin_center } => {
                let delta = self.camera.screen_delta_to_canvas(translation);
                self.move_widget(id, origin_center + delta)
            }
            PanKind::Handle { corner } => {
                let pt = self.camera.screen_to_canvas(at);
                self.drag_handle(corner, pt)
            }
        }
    }

    /// Finish the current pan. A completed pan that never crossed the drag
    /// threshold is treated as a tap at its starting point.
    fn end_pan(&mut self, completed: bool) -> Vec<Action> {
        let Some(pan) = self.input.pan.take() else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        if let PanKind::Handle { corner } = pan.kind {
            let widgets = &self.widgets;
            self.handles.retain_mut(|h| if h.corner() == corner { h.end_drag(widgets) } else { true });
            actions.push(Action::RenderNeeded);
        }

        if completed && !pan.moved {
            debug!(start = ?pan.start, "pan below drag threshold, treating as tap");
            actions.extend(self.on_tap(pan.start));
        }
        actions
    }

    fn on_pinch(&mut self, phase: GesturePhase, scale: f64) -> Vec<Action> {
        match phase {
            GesturePhase::Began => {
                self.begin_pinch();
                Vec::new()
            }
            GesturePhase::Changed => self.pinch_changed(scale),
            GesturePhase::Ended | GesturePhase::Cancelled => {
                self.input.pinch_baseline = None;
                Vec::new()
            }
        }
    }

    // --- Camera ---

    /// Record the current zoom as the baseline for the pinch that is starting.
    pub fn begin_pinch(&mut self) {
        self.input.pinch_baseline = Some(self.camera.zoom);
    }

    /// Apply `baseline * scale` if both axes stay inside the zoom bounds;
    /// otherwise keep the last valid zoom.
    pub fn pinch_changed(&mut self, scale: f64) -> Vec<Action> {
        let Some(baseline) = self.input.pinch_baseline else {
            return Vec::new();
        };
        let candidate = baseline.scaled_by(scale);
        if !candidate.within(self.config.max_zoom_out, self.config.max_zoom_in) {
            debug!(?candidate, "zoom rejected");
            return Vec::new();
        }
        self.set_zoom(candidate)
    }

    fn set_zoom(&mut self, zoom: Zoom) -> Vec<Action> {
        self.camera.zoom = zoom;
        self.refresh_handles();
        vec![Action::CameraChanged(self.camera), Action::RenderNeeded]
    }

    /// Scroll the canvas to `origin` plus the raw screen translation scaled
    /// down by the current zoom.
    pub fn drag_canvas(&mut self, origin: Point, translation: Point) -> Vec<Action> {
        self.camera.pan = origin + self.camera.screen_delta_to_canvas(translation);
        vec![Action::CameraChanged(self.camera), Action::RenderNeeded]
    }

    // --- Selection ---

    /// Tap on empty canvas: clear the selection, if any.
    pub fn tap_canvas(&mut self) -> Vec<Action> {
        if self.selected.is_some() {
            self.deselect_widget()
        } else {
            Vec::new()
        }
    }

    /// Tap on a widget: toggle it, switching away from any other selection.
    pub fn tap_widget(&mut self, id: WidgetId) -> Vec<Action> {
        if !self.widgets.contains(&id) {
            return Vec::new();
        }
        if self.selected == Some(id) {
            self.deselect_widget()
        } else {
            self.select_widget(id)
        }
    }

    /// Select `id`, deselecting the previous widget first, and place the
    /// overlay: four handles and a delete button.
    pub fn select_widget(&mut self, id: WidgetId) -> Vec<Action> {
        if self.selected == Some(id) {
            return Vec::new();
        }
        let mut actions = Vec::new();
        if self.selected.is_some() {
            actions.extend(self.deselect_widget());
        }
        let Some(widget) = self.widgets.get_mut(&id) else {
            return actions;
        };
        widget.select();
        let frame = widget.frame();

        self.selected = Some(id);
        self.handles = TransformHandle::for_widget(id, frame);
        self.delete_button = Some(DeleteAffordance::new(
            id,
            frame,
            &self.camera,
            self.config.delete_button_size_px,
            self.config.delete_button_gap,
        ));
        debug!(%id, "widget selected");

        actions.push(Action::SelectionChanged(Some(id)));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Remove the overlay and deselect the current widget.
    pub fn deselect_widget(&mut self) -> Vec<Action> {
        let Some(id) = self.selected.take() else {
            return Vec::new();
        };
        self.handles.clear();
        self.delete_button = None;
        let mut actions = vec![Action::SelectionChanged(None)];
        if let Some(widget) = self.widgets.get_mut(&id) {
            if widget.state() == WidgetState::Editing {
                actions.push(Action::EditCommitted { id });
            }
            widget.deselect();
        }
        debug!(%id, "widget deselected");
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Put a widget into editing mode.
    pub fn edit_widget(&mut self, id: WidgetId) -> Vec<Action> {
        let Some(widget) = self.widgets.get_mut(&id) else {
            return Vec::new();
        };
        widget.edit();
        vec![Action::EditRequested { id }, Action::RenderNeeded]
    }

    /// Long press on a widget: select it, then edit it.
    pub fn long_press_widget(&mut self, id: WidgetId) -> Vec<Action> {
        let mut actions = self.select_widget(id);
        actions.extend(self.edit_widget(id));
        actions
    }

    // --- Content edits ---

    /// Replace the title in the widget's edit draft.
    pub fn set_widget_title(&mut self, id: WidgetId, title: &str) -> Vec<Action> {
        if self.widgets.get_mut(&id).is_some_and(|w| w.set_title(title)) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Replace the body in the widget's edit draft.
    pub fn set_widget_body(&mut self, id: WidgetId, body: &str) -> Vec<Action> {
        if self.widgets.get_mut(&id).is_some_and(|w| w.set_body(body)) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Commit the widget's edit draft and return it to idle.
    pub fn finish_editing(&mut self, id: WidgetId) -> Vec<Action> {
        let Some(widget) = self.widgets.get_mut(&id) else {
            return Vec::new();
        };
        if widget.state() != WidgetState::Editing {
            return Vec::new();
        }
        widget.finish_editing();
        vec![Action::EditCommitted { id }, Action::RenderNeeded]
    }

    // --- Move / resize ---

    /// Move a widget so its center lands on `center`.
    pub fn move_widget(&mut self, id: WidgetId, center: Point) -> Vec<Action> {
        let Some(widget) = self.widgets.get_mut(&id) else {
            return Vec::new();
        };
        widget.set_center(center);
        let frame = widget.frame();
        self.refresh_handles();
        vec![Action::WidgetUpdated { id, frame }, Action::RenderNeeded]
    }

    /// Drag the handle on `corner` to `point` (canvas space) and resize the
    /// selected widget through it.
    pub fn drag_handle(&mut self, corner: Corner, point: Point) -> Vec<Action> {
        let min = self.config.min_widget_size();
        let Some(handle) = self.handles.iter_mut().find(|h| h.corner() == corner) else {
            return Vec::new();
        };
        let target = handle.target();
        let Some(frame) = handle.drag_to(point, &mut self.widgets, min) else {
            self.refresh_handles();
            return vec![Action::RenderNeeded];
        };
        self.refresh_handles();
        vec![Action::WidgetUpdated { id: target, frame }, Action::RenderNeeded]
    }

    /// Re-place every handle that is not being dragged, and the delete
    /// button, on the selected widget's current frame. Handles whose widget
    /// is gone drop out, and the selection goes with them.
    pub fn refresh_handles(&mut self) {
        let widgets = &self.widgets;
        self.handles.retain_mut(|h| h.is_dragging() || h.update_position(widgets));
        self.handles.retain(|h| widgets.contains(&h.target()));

        let camera = self.camera;
        let size_px = self.config.delete_button_size_px;
        let gap = self.config.delete_button_gap;
        if self
            .delete_button
            .as_mut()
            .is_some_and(|d| !d.update_position(widgets, &camera, size_px, gap))
        {
            self.delete_button = None;
        }

        if self.selected.is_some_and(|id| !widgets.contains(&id)) {
            self.selected = None;
            self.handles.clear();
            self.delete_button = None;
        }
        trace!(handles = self.handles.len(), "handles refreshed");
    }

    // --- Create / delete ---

    /// Build a widget from `blueprint` centered on `location` (canvas space)
    /// and put it on top of every other widget.
    pub fn receive(&mut self, blueprint: &dyn Blueprint, location: Point, size: Option<Size>) -> WidgetId {
        let size = size.unwrap_or(self.config.default_widget_size);
        let mut widget = blueprint.make();
        widget.set_frame(Rect::centered(location, size));
        let id = widget.id();
        debug!(%id, kind = ?widget.kind(), ?location, "widget received");
        self.widgets.push(widget);
        id
    }

    /// Whether a drop should be accepted: it must carry a blueprint, start
    /// inside this app, and land inside the visible area.
    #[must_use]
    pub fn propose_drop(&self, session: &DropSession) -> DropOperation {
        let visible = Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height);
        let carries_blueprint = matches!(session.payload, Some(DropPayload::Blueprint(_)));
        if carries_blueprint && session.local && visible.contains(session.location) {
            DropOperation::Copy
        } else {
            DropOperation::Cancel
        }
    }

    /// Create a widget from a drop. Drops that would be refused are ignored.
    pub fn perform_drop(&mut self, session: DropSession) -> Vec<Action> {
        if self.propose_drop(&session) == DropOperation::Cancel {
            debug!(location = ?session.location, "drop rejected");
            return Vec::new();
        }
        let Some(DropPayload::Blueprint(blueprint)) = session.payload else {
            return Vec::new();
        };
        let location = self.camera.screen_to_canvas(session.location);
        let id = self.receive(&blueprint, location, None);
        vec![Action::WidgetCreated(id), Action::RenderNeeded]
    }

    /// Remove a widget from the canvas, clearing the selection first if it
    /// was selected.
    pub fn remove_widget(&mut self, id: WidgetId) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.selected == Some(id) {
            actions.extend(self.deselect_widget());
        }
        let Some(widget) = self.widgets.remove(&id) else {
            return actions;
        };
        widget.delete();
        self.refresh_handles();
        actions.push(Action::WidgetDeleted { id });
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Delete the widget the delete button is attached to.
    pub fn activate_delete(&mut self) -> Vec<Action> {
        match self.delete_button.as_ref().map(DeleteAffordance::target) {
            Some(id) => self.remove_widget(id),
            None => Vec::new(),
        }
    }

    // --- Snapshot / restore ---

    /// Project the whole canvas into an immutable record.
    #[must_use]
    pub fn snapshot(&self) -> CanvasModel {
        let mut model =
            CanvasModel::new(self.meta.name.clone(), self.meta.created_at.clone(), self.meta.last_modified_at.clone());
        for widget in self.widgets.iter() {
            model.push(widget.snapshot());
        }
        model
    }

    /// Replace every widget with those recorded in `model`.
    pub fn restore(&mut self, model: &CanvasModel) -> Vec<Action> {
        let mut actions = self.deselect_widget();
        for widget in self.widgets.drain() {
            actions.push(Action::WidgetDeleted { id: widget.id() });
            widget.delete();
        }

        self.meta = CanvasMeta {
            name: model.name.clone(),
            created_at: model.created_at.clone(),
            last_modified_at: model.last_modified_at.clone(),
        };

        for data in model.widgets() {
            let widget = data.make();
            actions.push(Action::WidgetCreated(widget.id()));
            self.widgets.push(widget);
        }
        debug!(name = %model.name, widgets = self.widgets.len(), "canvas restored");
        actions.push(Action::RenderNeeded);
        actions
    }
}
