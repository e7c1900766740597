use canvas::doc::{ImageWidgetModel, WidgetData};
use canvas::geometry::Rect;

use super::*;

fn store() -> (tempfile::TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path());
    (dir, store)
}

#[test]
fn now_rfc3339_parses_back() {
    let now = now_rfc3339().unwrap();
    assert!(OffsetDateTime::parse(&now, &Rfc3339).is_ok());
}

#[tokio::test]
async fn create_writes_empty_canvas_with_timestamps() {
    let (_dir, store) = store();
    let model = create(&store, "Trip").await.unwrap();

    assert_eq!(model.name, "Trip");
    assert_eq!(model.widget_count(), 0);
    assert_eq!(model.created_at, model.last_modified_at);
    assert!(OffsetDateTime::parse(&model.created_at, &Rfc3339).is_ok());
    assert_eq!(store.load("Trip").await.unwrap(), model);
}

#[tokio::test]
async fn create_rejects_duplicates() {
    let (_dir, store) = store();
    create(&store, "Trip").await.unwrap();
    assert!(matches!(create(&store, "Trip").await, Err(StoreError::AlreadyExists(_))));
}

#[tokio::test]
async fn create_rejects_invalid_names() {
    let (_dir, store) = store();
    assert!(matches!(create(&store, "").await, Err(StoreError::InvalidName(_))));
    assert!(matches!(create(&store, "a/b").await, Err(StoreError::InvalidName(_))));
}

#[tokio::test]
async fn list_orders_by_last_modified_descending() {
    let (_dir, store) = store();
    store.save(&CanvasModel::new("old", "2024-01-01T00:00:00Z", "2024-01-01T00:00:00Z")).await.unwrap();
    store.save(&CanvasModel::new("new", "2024-01-01T00:00:00Z", "2024-06-01T00:00:00Z")).await.unwrap();

    let names: Vec<_> = list(&store).await.unwrap().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["new".to_owned(), "old".to_owned()]);
}

#[tokio::test]
async fn list_reports_widget_counts() {
    let (_dir, store) = store();
    let mut model = CanvasModel::new("Trip", "t", "t");
    model.push(WidgetData::Image(ImageWidgetModel {
        id: "i".into(),
        frame: Rect::new(0.0, 0.0, 1.0, 1.0),
        icon_path: "p".into(),
    }));
    store.save(&model).await.unwrap();

    let summaries = list(&store).await.unwrap();
    assert_eq!(summaries[0].widget_count, 1);
}

#[tokio::test]
async fn delete_removes_canvas_and_media() {
    let (_dir, store) = store();
    let mut model = CanvasModel::new("Trip", "t", "t");
    model.push(WidgetData::Image(ImageWidgetModel {
        id: "photo".into(),
        frame: Rect::new(0.0, 0.0, 1.0, 1.0),
        icon_path: "p".into(),
    }));
    store.save(&model).await.unwrap();
    store.save_image("photo", &[1, 2, 3]).await.unwrap();

    delete(&store, "Trip").await.unwrap();

    assert!(!store.exists("Trip").await.unwrap());
    assert!(matches!(store.load_image("photo").await, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn delete_missing_canvas_is_not_found() {
    let (_dir, store) = store();
    assert!(matches!(delete(&store, "ghost").await, Err(StoreError::NotFound(_))));
}
