use serde_json::json;

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn widget(kind: WidgetKind) -> Widget {
    Widget::new(WidgetContent::empty(kind), "icon")
}

fn frame() -> Rect {
    Rect::new(10.0, 20.0, 200.0, 100.0)
}

// =============================================================
// WidgetStore
// =============================================================

#[test]
fn store_starts_empty() {
    let store = WidgetStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.ids().is_empty());
}

#[test]
fn store_keeps_insertion_order_as_z_order() {
    let mut store = WidgetStore::new();
    let a = widget(WidgetKind::PlainText);
    let b = widget(WidgetKind::Image);
    let (ida, idb) = (a.id(), b.id());
    store.push(a);
    store.push(b);

    assert_eq!(store.ids(), vec![ida, idb]);
    let top_down: Vec<_> = store.iter_top_down().map(Widget::id).collect();
    assert_eq!(top_down, vec![idb, ida]);
}

#[test]
fn store_remove_returns_widget() {
    let mut store = WidgetStore::new();
    let w = widget(WidgetKind::BodyText);
    let id = w.id();
    store.push(w);

    assert_eq!(store.remove(&id).map(|w| w.id()), Some(id));
    assert!(!store.contains(&id));
    assert!(store.remove(&id).is_none());
}

#[test]
fn store_get_mut_edits_in_place() {
    let mut store = WidgetStore::new();
    let w = widget(WidgetKind::TitleText);
    let id = w.id();
    store.push(w);

    if let Some(w) = store.get_mut(&id) {
        w.set_frame(frame());
    }
    assert_eq!(store.get(&id).map(Widget::frame), Some(frame()));
}

#[test]
fn store_drain_empties() {
    let mut store = WidgetStore::new();
    store.push(widget(WidgetKind::PlainText));
    store.push(widget(WidgetKind::PlainText));
    assert_eq!(store.drain().len(), 2);
    assert!(store.is_empty());
}

// =============================================================
// WidgetData
// =============================================================

#[test]
fn widget_data_reports_kind_frame_and_icon() {
    let data = WidgetData::BodyText(BodyTextWidgetModel { frame: frame(), body: "b".into(), icon_path: "i".into() });
    assert_eq!(data.kind(), WidgetKind::BodyText);
    assert_eq!(data.frame(), frame());
    assert_eq!(data.icon_path(), "i");
}

#[test]
fn widget_data_make_places_at_frame() {
    let data = WidgetData::Text(TextWidgetModel {
        frame: frame(),
        title: "t".into(),
        body: "b".into(),
        icon_path: "icons/text.png".into(),
    });
    let w = data.make();
    assert_eq!(w.frame(), frame());
    assert_eq!(w.kind(), WidgetKind::PlainText);
    assert_eq!(w.content().title(), Some("t"));
    assert!(!w.is_selected());
}

#[test]
fn image_make_keeps_image_id() {
    let data = WidgetData::Image(ImageWidgetModel { id: "img-1".into(), frame: frame(), icon_path: "i".into() });
    assert_eq!(data.make().content().image_id(), Some("img-1"));
}

// =============================================================
// CanvasModel
// =============================================================

fn sample_model() -> CanvasModel {
    let mut model = CanvasModel::new("Trip", "2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z");
    model.push(WidgetData::Text(TextWidgetModel {
        frame: frame(),
        title: "Day 1".into(),
        body: "Museum".into(),
        icon_path: "icons/text.png".into(),
    }));
    model.push(WidgetData::TitleText(TitleTextWidgetModel {
        frame: frame(),
        title: "Heading".into(),
        icon_path: "icons/title.png".into(),
    }));
    model.push(WidgetData::Image(ImageWidgetModel {
        id: "abc".into(),
        frame: frame(),
        icon_path: "icons/image.png".into(),
    }));
    model
}

#[test]
fn push_files_records_by_variant() {
    let model = sample_model();
    assert_eq!(model.text_widgets.len(), 1);
    assert_eq!(model.title_text_widgets.len(), 1);
    assert!(model.body_text_widgets.is_empty());
    assert_eq!(model.image_widgets.len(), 1);
    assert_eq!(model.widget_count(), 3);
}

#[test]
fn widgets_lists_every_record() {
    let kinds: Vec<_> = sample_model().widgets().iter().map(WidgetData::kind).collect();
    assert_eq!(kinds, vec![WidgetKind::PlainText, WidgetKind::TitleText, WidgetKind::Image]);
}

#[test]
fn to_json_uses_canvas_envelope_and_camel_case() {
    let json = sample_model().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let canvas = &value["canvas"];
    assert_eq!(canvas["name"], "Trip");
    assert_eq!(canvas["lastModifiedAt"], "2024-01-02T00:00:00Z");
    assert_eq!(canvas["createdAt"], "2024-01-01T00:00:00Z");
    assert_eq!(canvas["textWidgets"][0]["iconPath"], "icons/text.png");
    assert_eq!(canvas["titleTextWidgets"][0]["title"], "Heading");
    assert_eq!(canvas["imageWidgets"][0]["id"], "abc");
    assert_eq!(canvas["imageWidgets"][0]["frame"]["width"], json!(200.0));
    assert_eq!(canvas["bodyTextWidgets"], json!([]));
}

#[test]
fn to_json_omits_empty_text_widgets() {
    let json = CanvasModel::new("Empty", "a", "b").to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["canvas"].get("textWidgets").is_none());
    assert_eq!(value["canvas"]["imageWidgets"], json!([]));
}

#[test]
fn from_json_reverses_to_json() {
    let model = sample_model();
    let decoded = CanvasModel::from_json(&model.to_json().unwrap()).unwrap();
    assert_eq!(decoded, model);
}

#[test]
fn from_json_defaults_missing_arrays() {
    let json = json!({
        "canvas": {
            "name": "Old",
            "createdAt": "2023-05-01T10:00:00Z",
            "lastModifiedAt": "2023-05-01T10:00:00Z",
            "titleTextWidgets": [
                { "frame": { "x": 0.0, "y": 0.0, "width": 60.0, "height": 60.0 }, "title": "x", "iconPath": "i" }
            ]
        }
    })
    .to_string();
    let model = CanvasModel::from_json(&json).unwrap();
    assert_eq!(model.name, "Old");
    assert!(model.text_widgets.is_empty());
    assert!(model.image_widgets.is_empty());
    assert!(approx_eq(model.title_text_widgets[0].frame.width, 60.0));
}

#[test]
fn from_json_rejects_missing_envelope() {
    let json = json!({ "name": "x", "createdAt": "a", "lastModifiedAt": "b" }).to_string();
    assert!(CanvasModel::from_json(&json).is_err());
}

#[test]
fn from_json_rejects_missing_name() {
    let json = json!({ "canvas": { "createdAt": "a", "lastModifiedAt": "b" } }).to_string();
    assert!(CanvasModel::from_json(&json).is_err());
}

#[test]
fn from_json_rejects_garbage() {
    assert!(CanvasModel::from_json("not json").is_err());
}
