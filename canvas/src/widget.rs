//! Widget entity: a movable, resizable, selectable, editable region on the canvas.
//!
//! Variants are expressed as a sum type over their content
//! ([`WidgetContent`]) rather than as separate types: every widget shares the
//! same frame, selection and edit-state behavior, and only the payload
//! differs.
//!
//! Editing works on a draft. [`Widget::edit`] copies the committed content
//! into a draft, text edits land in the draft, and the transition back to
//! [`WidgetState::Idle`] commits it. [`Widget::snapshot`] always reports the
//! committed content, so it can be taken at any moment, including mid-edit.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::doc::{BodyTextWidgetModel, ImageWidgetModel, TextWidgetModel, TitleTextWidgetModel, WidgetData};
use crate::geometry::{Point, Rect};

/// Unique identifier for a live widget.
pub type WidgetId = Uuid;

/// The concrete variant of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// Title plus body text.
    PlainText,
    /// A single headline.
    TitleText,
    /// A block of body text.
    BodyText,
    /// An image stored as a separate media blob.
    Image,
}

/// Per-variant payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetContent {
    PlainText { title: String, body: String },
    TitleText { title: String },
    BodyText { body: String },
    /// `image_id` names the blob at `media/<image_id>.png`.
    Image { image_id: String },
}

impl WidgetContent {
    #[must_use]
    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::PlainText { .. } => WidgetKind::PlainText,
            Self::TitleText { .. } => WidgetKind::TitleText,
            Self::BodyText { .. } => WidgetKind::BodyText,
            Self::Image { .. } => WidgetKind::Image,
        }
    }

    /// Empty content for `kind`.
    #[must_use]
    pub fn empty(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::PlainText => Self::PlainText { title: String::new(), body: String::new() },
            WidgetKind::TitleText => Self::TitleText { title: String::new() },
            WidgetKind::BodyText => Self::BodyText { body: String::new() },
            WidgetKind::Image => Self::Image { image_id: String::new() },
        }
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::PlainText { title, .. } | Self::TitleText { title } => Some(title),
            Self::BodyText { .. } | Self::Image { .. } => None,
        }
    }

    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::PlainText { body, .. } | Self::BodyText { body } => Some(body),
            Self::TitleText { .. } | Self::Image { .. } => None,
        }
    }

    #[must_use]
    pub fn image_id(&self) -> Option<&str> {
        match self {
            Self::Image { image_id } => Some(image_id),
            _ => None,
        }
    }

    fn set_title(&mut self, text: &str) -> bool {
        match self {
            Self::PlainText { title, .. } | Self::TitleText { title } => {
                text.clone_into(title);
                true
            }
            Self::BodyText { .. } | Self::Image { .. } => false,
        }
    }

    fn set_body(&mut self, text: &str) -> bool {
        match self {
            Self::PlainText { body, .. } | Self::BodyText { body } => {
                text.clone_into(body);
                true
            }
            Self::TitleText { .. } | Self::Image { .. } => false,
        }
    }
}

/// Edit state of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Idle,
    Editing,
}

/// A live widget owned by the canvas.
#[derive(Debug, Clone)]
pub struct Widget {
    id: WidgetId,
    frame: Rect,
    state: WidgetState,
    selected: bool,
    icon_path: String,
    content: WidgetContent,
    draft: Option<WidgetContent>,
}

impl Widget {
    /// Create an idle, unselected widget with a fresh id and an empty frame.
    #[must_use]
    pub fn new(content: WidgetContent, icon_path: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            frame: Rect::default(),
            state: WidgetState::Idle,
            selected: false,
            icon_path: icon_path.into(),
            content,
            draft: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> WidgetKind {
        self.content.kind()
    }

    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.frame.center()
    }

    /// Move the widget without resizing it.
    pub fn set_center(&mut self, center: Point) {
        self.frame = self.frame.with_center(center);
    }

    #[must_use]
    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// Switch edit state. Entering `Editing` opens a draft; returning to
    /// `Idle` commits it.
    pub fn set_state(&mut self, state: WidgetState) {
        match (self.state, state) {
            (WidgetState::Idle, WidgetState::Editing) => {
                self.draft = Some(self.content.clone());
            }
            (WidgetState::Editing, WidgetState::Idle) => {
                if let Some(draft) = self.draft.take() {
                    self.content = draft;
                }
            }
            _ => {}
        }
        self.state = state;
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    /// Clear selection and commit any pending edit. Safe on an idle widget.
    pub fn deselect(&mut self) {
        self.selected = false;
        self.set_state(WidgetState::Idle);
    }

    pub fn edit(&mut self) {
        self.set_state(WidgetState::Editing);
    }

    pub fn finish_editing(&mut self) {
        self.set_state(WidgetState::Idle);
    }

    #[must_use]
    pub fn icon_path(&self) -> &str {
        &self.icon_path
    }

    /// Committed content.
    #[must_use]
    pub fn content(&self) -> &WidgetContent {
        &self.content
    }

    /// Uncommitted content while editing.
    #[must_use]
    pub fn draft(&self) -> Option<&WidgetContent> {
        self.draft.as_ref()
    }

    /// Write `text` into the draft title. Returns false when not editing or
    /// when this variant has no title.
    pub fn set_title(&mut self, text: &str) -> bool {
        self.draft.as_mut().is_some_and(|d| d.set_title(text))
    }

    /// Write `text` into the draft body. Returns false when not editing or
    /// when this variant has no body.
    pub fn set_body(&mut self, text: &str) -> bool {
        self.draft.as_mut().is_some_and(|d| d.set_body(text))
    }

    /// Serializable projection of the frame and committed content.
    #[must_use]
    pub fn snapshot(&self) -> WidgetData {
        let frame = self.frame;
        let icon_path = self.icon_path.clone();
        match &self.content {
            WidgetContent::PlainText { title, body } => {
                WidgetData::Text(TextWidgetModel { frame, title: title.clone(), body: body.clone(), icon_path })
            }
            WidgetContent::TitleText { title } => {
                WidgetData::TitleText(TitleTextWidgetModel { frame, title: title.clone(), icon_path })
            }
            WidgetContent::BodyText { body } => {
                WidgetData::BodyText(BodyTextWidgetModel { frame, body: body.clone(), icon_path })
            }
            WidgetContent::Image { image_id } => {
                WidgetData::Image(ImageWidgetModel { id: image_id.clone(), frame, icon_path })
            }
        }
    }

    /// Tear the widget down. Consumes it, so nothing can keep using it.
    pub fn delete(mut self) {
        self.deselect();
        debug!(id = %self.id, kind = ?self.kind(), "widget deleted");
    }
}
