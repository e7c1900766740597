//! Document model: the ordered widget collection and the persisted canvas record.
//!
//! `WidgetStore` owns every live [`Widget`]; its order is the z-order
//! (first = bottom-most). `CanvasModel` is the immutable, serializable
//! projection of a whole canvas, grouped into one array per widget variant,
//! and `CanvasFile` is the `{"canvas": ...}` envelope written to disk.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::widget::{Widget, WidgetContent, WidgetId, WidgetKind};

// =============================================================
// Widget records
// =============================================================

/// Persisted plain-text widget (title and body).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextWidgetModel {
    pub frame: Rect,
    pub title: String,
    pub body: String,
    pub icon_path: String,
}

/// Persisted title widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleTextWidgetModel {
    pub frame: Rect,
    pub title: String,
    pub icon_path: String,
}

/// Persisted body-text widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyTextWidgetModel {
    pub frame: Rect,
    pub body: String,
    pub icon_path: String,
}

/// Persisted image widget. The pixels live in `media/<id>.png`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageWidgetModel {
    pub id: String,
    pub frame: Rect,
    pub icon_path: String,
}

/// Snapshot of a single widget, tagged by variant.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetData {
    Text(TextWidgetModel),
    TitleText(TitleTextWidgetModel),
    BodyText(BodyTextWidgetModel),
    Image(ImageWidgetModel),
}

impl WidgetData {
    #[must_use]
    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::Text(_) => WidgetKind::PlainText,
            Self::TitleText(_) => WidgetKind::TitleText,
            Self::BodyText(_) => WidgetKind::BodyText,
            Self::Image(_) => WidgetKind::Image,
        }
    }

    #[must_use]
    pub fn frame(&self) -> Rect {
        match self {
            Self::Text(m) => m.frame,
            Self::TitleText(m) => m.frame,
            Self::BodyText(m) => m.frame,
            Self::Image(m) => m.frame,
        }
    }

    #[must_use]
    pub fn icon_path(&self) -> &str {
        match self {
            Self::Text(m) => &m.icon_path,
            Self::TitleText(m) => &m.icon_path,
            Self::BodyText(m) => &m.icon_path,
            Self::Image(m) => &m.icon_path,
        }
    }

    /// Build a fresh live widget from this record, placed at the record's frame.
    #[must_use]
    pub fn make(&self) -> Widget {
        let content = match self {
            Self::Text(m) => WidgetContent::PlainText { title: m.title.clone(), body: m.body.clone() },
            Self::TitleText(m) => WidgetContent::TitleText { title: m.title.clone() },
            Self::BodyText(m) => WidgetContent::BodyText { body: m.body.clone() },
            Self::Image(m) => WidgetContent::Image { image_id: m.id.clone() },
        };
        let mut widget = Widget::new(content, self.icon_path());
        widget.set_frame(self.frame());
        widget
    }
}

// =============================================================
// Canvas record
// =============================================================

/// Immutable projection of a canvas: metadata plus one array per variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasModel {
    pub name: String,
    pub last_modified_at: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_widgets: Vec<TextWidgetModel>,
    #[serde(default)]
    pub title_text_widgets: Vec<TitleTextWidgetModel>,
    #[serde(default)]
    pub body_text_widgets: Vec<BodyTextWidgetModel>,
    #[serde(default)]
    pub image_widgets: Vec<ImageWidgetModel>,
}

impl CanvasModel {
    /// An empty canvas.
    #[must_use]
    pub fn new(name: impl Into<String>, created_at: impl Into<String>, last_modified_at: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_modified_at: last_modified_at.into(),
            created_at: created_at.into(),
            ..Self::default()
        }
    }

    /// File an individual widget record under its variant's array.
    pub fn push(&mut self, data: WidgetData) {
        match data {
            WidgetData::Text(m) => self.text_widgets.push(m),
            WidgetData::TitleText(m) => self.title_text_widgets.push(m),
            WidgetData::BodyText(m) => self.body_text_widgets.push(m),
            WidgetData::Image(m) => self.image_widgets.push(m),
        }
    }

    /// Every widget record, variant by variant.
    #[must_use]
    pub fn widgets(&self) -> Vec<WidgetData> {
        let text = self.text_widgets.iter().cloned().map(WidgetData::Text);
        let title = self.title_text_widgets.iter().cloned().map(WidgetData::TitleText);
        let body = self.body_text_widgets.iter().cloned().map(WidgetData::BodyText);
        let image = self.image_widgets.iter().cloned().map(WidgetData::Image);
        text.chain(title).chain(body).chain(image).collect()
    }

    #[must_use]
    pub fn widget_count(&self) -> usize {
        self.text_widgets.len() + self.title_text_widgets.len() + self.body_text_widgets.len() + self.image_widgets.len()
    }

    /// Encode as the on-disk `{"canvas": ...}` document.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if encoding fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&CanvasFile { canvas: self.clone() })
    }

    /// Decode an on-disk `{"canvas": ...}` document.
    ///
    /// # Errors
    ///
    /// Returns the deserializer error for malformed or incomplete JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<CanvasFile>(json).map(|file| file.canvas)
    }
}

/// On-disk envelope around a [`CanvasModel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasFile {
    pub canvas: CanvasModel,
}

// =============================================================
// Widget store
// =============================================================

/// Ordered collection of live widgets. Insertion order is z-order.
#[derive(Debug, Default)]
pub struct WidgetStore {
    widgets: Vec<Widget>,
}

impl WidgetStore {
    #[must_use]
    pub fn new() -> Self {
        Self { widgets: Vec::new() }
    }

    /// Append a widget on top of every other widget.
    pub fn push(&mut self, widget: Widget) {
        self.widgets.push(widget);
    }

    /// Remove a widget by id, returning it if it was present.
    pub fn remove(&mut self, id: &WidgetId) -> Option<Widget> {
        let idx = self.widgets.iter().position(|w| w.id() == *id)?;
        Some(self.widgets.remove(idx))
    }

    /// Remove every widget, returning them bottom-most first.
    pub fn drain(&mut self) -> Vec<Widget> {
        std::mem::take(&mut self.widgets)
    }

    #[must_use]
    pub fn get(&self, id: &WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id() == *id)
    }

    pub fn get_mut(&mut self, id: &WidgetId) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| w.id() == *id)
    }

    #[must_use]
    pub fn contains(&self, id: &WidgetId) -> bool {
        self.get(id).is_some()
    }

    /// Widgets from bottom-most to topmost.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Widget> {
        self.widgets.iter()
    }

    /// Widgets from topmost to bottom-most, the order hit-testing wants.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &Widget> {
        self.widgets.iter().rev()
    }

    /// Ids in z-order.
    #[must_use]
    pub fn ids(&self) -> Vec<WidgetId> {
        self.widgets.iter().map(Widget::id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
