//! Canvas collection: the list of saved canvases and its lifecycle.
//!
//! Creating a canvas writes an empty record stamped with RFC 3339 times.
//! Deleting one also removes the media files its image widgets point at.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use canvas::doc::CanvasModel;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{info, warn};

use crate::services::store::{Store, StoreError, validate_name};

/// One row of the collection listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasSummary {
    pub name: String,
    pub created_at: String,
    pub last_modified_at: String,
    pub widget_count: usize,
}

impl From<&CanvasModel> for CanvasSummary {
    fn from(model: &CanvasModel) -> Self {
        Self {
            name: model.name.clone(),
            created_at: model.created_at.clone(),
            last_modified_at: model.last_modified_at.clone(),
            widget_count: model.widget_count(),
        }
    }
}

/// Current UTC time as RFC 3339.
pub fn now_rfc3339() -> Result<String, StoreError> {
    Ok(OffsetDateTime::now_utc().format(&Rfc3339)?)
}

/// Every readable canvas, most recently modified first.
pub async fn list(store: &Store) -> Result<Vec<CanvasSummary>, StoreError> {
    let mut summaries: Vec<CanvasSummary> = store.load_all().await?.iter().map(CanvasSummary::from).collect();
    summaries.sort_by(|a, b| b.last_modified_at.cmp(&a.last_modified_at).then_with(|| a.name.cmp(&b.name)));
    Ok(summaries)
}

/// Create and save an empty canvas called `name`.
pub async fn create(store: &Store, name: &str) -> Result<CanvasModel, StoreError> {
    validate_name(name)?;
    if store.exists(name).await? {
        return Err(StoreError::AlreadyExists(name.to_owned()));
    }
    let now = now_rfc3339()?;
    let model = CanvasModel::new(name, now.clone(), now);
    store.save(&model).await?;
    info!(name, "canvas created");
    Ok(model)
}

/// Delete the canvas called `name` and the media its image widgets use.
pub async fn delete(store: &Store, name: &str) -> Result<(), StoreError> {
    let model = store.load(name).await?;
    for image in &model.image_widgets {
        if let Err(e) = store.delete_image(&image.id).await {
            warn!(name, image_id = %image.id, error = %e, "failed to delete canvas media");
        }
    }
    store.delete(name).await
}
