//! Palette blueprints: lightweight descriptors that know how to build a widget.
//!
//! The canvas only ever calls [`Blueprint::make`] and positions the result;
//! it never looks inside a blueprint. Saved [`WidgetData`] records are
//! blueprints too, which is how restore rebuilds widgets.

#[cfg(test)]
#[path = "blueprint_test.rs"]
mod blueprint_test;

use uuid::Uuid;

use crate::doc::WidgetData;
use crate::widget::{Widget, WidgetContent, WidgetKind};

/// Anything that can produce a fresh widget.
pub trait Blueprint {
    /// Icon shown in the palette and carried into the widget's snapshot.
    fn icon_path(&self) -> &str;

    /// Build a new, unplaced widget.
    fn make(&self) -> Widget;
}

impl Blueprint for WidgetData {
    fn icon_path(&self) -> &str {
        WidgetData::icon_path(self)
    }

    fn make(&self) -> Widget {
        WidgetData::make(self)
    }
}

/// A palette entry: variant, default content and icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetBlueprint {
    pub icon_path: String,
    pub content: WidgetContent,
}

impl WidgetBlueprint {
    /// Blueprint with empty default content for `kind`.
    #[must_use]
    pub fn empty(kind: WidgetKind, icon_path: impl Into<String>) -> Self {
        Self { icon_path: icon_path.into(), content: WidgetContent::empty(kind) }
    }

    #[must_use]
    pub fn kind(&self) -> WidgetKind {
        self.content.kind()
    }
}

impl Blueprint for WidgetBlueprint {
    fn icon_path(&self) -> &str {
        &self.icon_path
    }

    /// Image blueprints without an image id get a fresh one per widget so two
    /// drops never share a media file.
    fn make(&self) -> Widget {
        let content = match &self.content {
            WidgetContent::Image { image_id } if image_id.is_empty() => {
                WidgetContent::Image { image_id: Uuid::new_v4().to_string() }
            }
            other => other.clone(),
        };
        Widget::new(content, self.icon_path.clone())
    }
}

/// The default palette, in display order.
#[must_use]
pub fn palette() -> Vec<WidgetBlueprint> {
    vec![
        WidgetBlueprint::empty(WidgetKind::PlainText, "icons/text.png"),
        WidgetBlueprint::empty(WidgetKind::TitleText, "icons/title.png"),
        WidgetBlueprint::empty(WidgetKind::BodyText, "icons/body.png"),
        WidgetBlueprint::empty(WidgetKind::Image, "icons/image.png"),
    ]
}
