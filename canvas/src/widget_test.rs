use super::*;

fn plain(title: &str, body: &str) -> Widget {
    Widget::new(WidgetContent::PlainText { title: title.into(), body: body.into() }, "icons/text.png")
}

// =============================================================
// WidgetContent
// =============================================================

#[test]
fn empty_content_matches_kind() {
    for kind in [WidgetKind::PlainText, WidgetKind::TitleText, WidgetKind::BodyText, WidgetKind::Image] {
        assert_eq!(WidgetContent::empty(kind).kind(), kind);
    }
}

#[test]
fn content_accessors_follow_variant() {
    let title = WidgetContent::TitleText { title: "Hi".into() };
    assert_eq!(title.title(), Some("Hi"));
    assert_eq!(title.body(), None);
    assert_eq!(title.image_id(), None);

    let image = WidgetContent::Image { image_id: "img".into() };
    assert_eq!(image.image_id(), Some("img"));
    assert_eq!(image.title(), None);
}

#[test]
fn kind_serializes_snake_case() {
    let json = serde_json::to_string(&WidgetKind::TitleText).unwrap();
    assert_eq!(json, "\"title_text\"");
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn new_widget_is_idle_and_unselected() {
    let w = plain("", "");
    assert_eq!(w.state(), WidgetState::Idle);
    assert!(!w.is_selected());
    assert!(w.draft().is_none());
    assert_eq!(w.frame(), Rect::default());
    assert_eq!(w.icon_path(), "icons/text.png");
}

#[test]
fn new_widgets_get_distinct_ids() {
    assert_ne!(plain("", "").id(), plain("", "").id());
}

#[test]
fn set_center_keeps_size() {
    let mut w = plain("", "");
    w.set_frame(Rect::new(0.0, 0.0, 40.0, 20.0));
    w.set_center(Point::new(100.0, 100.0));
    assert_eq!(w.frame(), Rect::new(80.0, 90.0, 40.0, 20.0));
    assert_eq!(w.center(), Point::new(100.0, 100.0));
}

#[test]
fn edit_opens_draft_from_content() {
    let mut w = plain("a", "b");
    w.edit();
    assert_eq!(w.state(), WidgetState::Editing);
    assert_eq!(w.draft(), Some(&WidgetContent::PlainText { title: "a".into(), body: "b".into() }));
}

#[test]
fn edits_land_in_draft_until_finished() {
    let mut w = plain("a", "b");
    w.edit();
    assert!(w.set_title("new title"));
    assert!(w.set_body("new body"));
    assert_eq!(w.content().title(), Some("a"));

    w.finish_editing();
    assert_eq!(w.content().title(), Some("new title"));
    assert_eq!(w.content().body(), Some("new body"));
    assert!(w.draft().is_none());
}

#[test]
fn set_title_requires_editing() {
    let mut w = plain("a", "b");
    assert!(!w.set_title("x"));
    assert_eq!(w.content().title(), Some("a"));
}

#[test]
fn set_field_missing_from_variant_is_rejected() {
    let mut w = Widget::new(WidgetContent::BodyText { body: String::new() }, "b");
    w.edit();
    assert!(!w.set_title("x"));
    assert!(w.set_body("y"));
}

#[test]
fn deselect_commits_and_returns_to_idle() {
    let mut w = plain("a", "b");
    w.select();
    w.edit();
    w.set_title("z");
    w.deselect();
    assert!(!w.is_selected());
    assert_eq!(w.state(), WidgetState::Idle);
    assert_eq!(w.content().title(), Some("z"));
}

#[test]
fn deselect_idle_widget_is_harmless() {
    let mut w = plain("a", "b");
    w.deselect();
    assert_eq!(w.state(), WidgetState::Idle);
    assert_eq!(w.content().title(), Some("a"));
}

#[test]
fn repeated_edit_keeps_existing_draft() {
    let mut w = plain("a", "b");
    w.edit();
    w.set_title("draft");
    w.edit();
    assert_eq!(w.draft().and_then(WidgetContent::title), Some("draft"));
}

// =============================================================
// Snapshot
// =============================================================

#[test]
fn snapshot_projects_each_variant() {
    let frame = Rect::new(1.0, 2.0, 3.0, 4.0);

    let mut w = plain("t", "b");
    w.set_frame(frame);
    assert_eq!(
        w.snapshot(),
        WidgetData::Text(TextWidgetModel { frame, title: "t".into(), body: "b".into(), icon_path: "icons/text.png".into() })
    );

    let mut w = Widget::new(WidgetContent::Image { image_id: "abc".into() }, "icons/image.png");
    w.set_frame(frame);
    assert_eq!(
        w.snapshot(),
        WidgetData::Image(ImageWidgetModel { id: "abc".into(), frame, icon_path: "icons/image.png".into() })
    );
}

#[test]
fn snapshot_ignores_uncommitted_draft() {
    let mut w = Widget::new(WidgetContent::TitleText { title: "kept".into() }, "i");
    w.edit();
    w.set_title("pending");
    let WidgetData::TitleText(model) = w.snapshot() else {
        panic!("expected title record");
    };
    assert_eq!(model.title, "kept");
}

#[test]
fn snapshot_then_make_preserves_content_and_frame() {
    let mut w = Widget::new(WidgetContent::BodyText { body: "text".into() }, "icons/body.png");
    w.set_frame(Rect::new(5.0, 5.0, 80.0, 90.0));
    let rebuilt = w.snapshot().make();
    assert_ne!(rebuilt.id(), w.id());
    assert_eq!(rebuilt.frame(), w.frame());
    assert_eq!(rebuilt.content(), w.content());
    assert_eq!(rebuilt.icon_path(), "icons/body.png");
}
