#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn make_box(content: &str) -> TextBox {
    TextBox::new(content, 50.0, 50.0)
}

fn snapshot_of(n: usize) -> Snapshot {
    (0..n).map(|i| make_box(&format!("box {i}"))).collect()
}

// =============================================================
// Style enums
// =============================================================

#[test]
fn defaults_match_new_box_style() {
    let style = TextStyle::default();
    assert_eq!(style.font_size, FontSize::Px16);
    assert_eq!(style.font_family, FontFamily::Arial);
    assert_eq!(style.font_weight, FontWeight::Normal);
    assert_eq!(style.font_style, FontStyle::Normal);
    assert_eq!(style.text_decoration, TextDecoration::None);
    assert_eq!(style.text_align, TextAlign::Left);
}

#[test]
fn font_size_options_in_order() {
    let css: Vec<&str> = FontSize::ALL.iter().map(|s| s.as_css()).collect();
    assert_eq!(css, ["12px", "16px", "20px"]);
}

#[test]
fn font_family_options_in_order() {
    let css: Vec<&str> = FontFamily::ALL.iter().map(|f| f.as_css()).collect();
    assert_eq!(css, ["Arial", "Verdana", "Courier"]);
}

#[test]
fn font_size_parses_option_values() {
    assert_eq!("12px".parse::<FontSize>(), Ok(FontSize::Px12));
    assert_eq!("20px".parse::<FontSize>(), Ok(FontSize::Px20));
}

#[test]
fn font_size_rejects_unlisted_value() {
    assert_eq!("14px".parse::<FontSize>(), Err(EditorError::UnknownFontSize("14px".into())));
}

#[test]
fn font_family_rejects_unlisted_value() {
    assert_eq!("Helvetica".parse::<FontFamily>(), Err(EditorError::UnknownFontFamily("Helvetica".into())));
}

#[test]
fn toggled_attributes_reject_third_state() {
    let err = "lighter".parse::<FontWeight>().unwrap_err();
    assert_eq!(err, EditorError::UnknownStyleValue { attribute: "font-weight", value: "lighter".into() });
    assert!("oblique".parse::<FontStyle>().is_err());
    assert!("line-through".parse::<TextDecoration>().is_err());
    assert!("right".parse::<TextAlign>().is_err());
}

#[test]
fn attribute_names_are_css_properties() {
    assert_eq!(FontSize::ATTRIBUTE, "font-size");
    assert_eq!(TextDecoration::ATTRIBUTE, "text-decoration");
    assert_eq!(TextAlign::ATTRIBUTE, "text-align");
}

#[test]
fn display_is_css_value() {
    assert_eq!(FontWeight::Bold.to_string(), "bold");
    assert_eq!(TextDecoration::None.to_string(), "none");
}

#[test]
fn style_enums_serialize_as_css_strings() {
    assert_eq!(serde_json::to_value(FontSize::Px12).unwrap(), json!("12px"));
    assert_eq!(serde_json::to_value(TextAlign::Center).unwrap(), json!("center"));
    let back: FontFamily = serde_json::from_value(json!("Courier")).unwrap();
    assert_eq!(back, FontFamily::Courier);
}

#[test]
fn style_enum_deserialize_invalid_rejects() {
    assert!(serde_json::from_value::<FontSize>(json!("99px")).is_err());
}

// =============================================================
// TextBox
// =============================================================

#[test]
fn new_boxes_get_distinct_ids() {
    let a = make_box("a");
    let b = make_box("a");
    assert_ne!(a.id, b.id);
}

#[test]
fn text_box_position() {
    let b = TextBox::new("x", 12.0, 34.0);
    assert_eq!(b.position(), Position { top: 12.0, left: 34.0 });
}

#[test]
fn text_box_serializes_flat_camel_case() {
    let b = TextBox { id: Uuid::nil(), ..make_box("Hi") };
    let value = serde_json::to_value(&b).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "content": "Hi",
            "top": 50.0,
            "left": 50.0,
            "fontSize": "16px",
            "fontFamily": "Arial",
            "fontWeight": "normal",
            "fontStyle": "normal",
            "textDecoration": "none",
            "textAlign": "left",
        })
    );
}

#[test]
fn text_box_deserializes_from_flat_json() {
    let b: TextBox = serde_json::from_value(json!({
        "id": "00000000-0000-0000-0000-000000000000",
        "content": "Hi",
        "top": 1.0,
        "left": 2.0,
        "fontSize": "20px",
        "fontFamily": "Verdana",
        "fontWeight": "bold",
        "fontStyle": "italic",
        "textDecoration": "underline",
        "textAlign": "center",
    }))
    .unwrap();
    assert_eq!(b.style.font_size, FontSize::Px20);
    assert_eq!(b.style.font_family, FontFamily::Verdana);
    assert_eq!(b.style.font_weight, FontWeight::Bold);
    assert_eq!(b.style.text_align, TextAlign::Center);
}

// =============================================================
// StyleUpdate
// =============================================================

#[test]
fn style_update_default_is_empty() {
    assert!(StyleUpdate::default().is_empty());
    assert!(!StyleUpdate { font_weight: Some(FontWeight::Bold), ..Default::default() }.is_empty());
}

#[test]
fn style_update_applies_only_present_fields() {
    let mut style = TextStyle { font_family: FontFamily::Courier, ..Default::default() };
    let update = StyleUpdate { font_size: Some(FontSize::Px20), ..Default::default() };
    update.apply_to(&mut style);
    assert_eq!(style.font_size, FontSize::Px20);
    assert_eq!(style.font_family, FontFamily::Courier);
}

#[test]
fn style_update_serialization_skips_absent_fields() {
    let update = StyleUpdate { text_align: Some(TextAlign::Center), ..Default::default() };
    assert_eq!(serde_json::to_value(update).unwrap(), json!({"textAlign": "center"}));
}

// =============================================================
// Snapshot
// =============================================================

#[test]
fn snapshot_new_is_usable_in_statics() {
    static EMPTY: Snapshot = Snapshot::new();
    assert!(EMPTY.is_empty());
    assert_eq!(EMPTY, Snapshot::default());
}

#[test]
fn snapshot_new_is_empty() {
    let snap = Snapshot::new();
    assert!(snap.is_empty());
    assert_eq!(snap.len(), 0);
}

#[test]
fn with_added_appends_without_touching_original() {
    let base = snapshot_of(2);
    let added = make_box("top");
    let next = base.with_added(added.clone());
    assert_eq!(base.len(), 2);
    assert_eq!(next.len(), 3);
    assert_eq!(next.boxes().last(), Some(&added));
}

#[test]
fn get_and_contains_by_id() {
    let snap = snapshot_of(3);
    let id = snap.boxes()[1].id;
    assert_eq!(snap.get(&id).map(|b| b.content.as_str()), Some("box 1"));
    assert!(snap.contains(&id));
    assert!(!snap.contains(&Uuid::new_v4()));
}

#[test]
fn with_position_moves_only_target() {
    let snap = snapshot_of(2);
    let id = snap.boxes()[0].id;
    let moved = snap.with_position(&id, Position { top: 7.0, left: 9.0 }).unwrap();
    assert_eq!(moved.boxes()[0].position(), Position { top: 7.0, left: 9.0 });
    assert_eq!(moved.boxes()[1], snap.boxes()[1]);
    assert_eq!(snap.boxes()[0].position(), Position { top: 50.0, left: 50.0 });
}

#[test]
fn with_position_unknown_id_is_none() {
    let snap = snapshot_of(2);
    assert!(snap.with_position(&Uuid::new_v4(), Position::default()).is_none());
}

#[test]
fn with_style_merges_update() {
    let snap = snapshot_of(1);
    let id = snap.boxes()[0].id;
    let update = StyleUpdate { font_style: Some(FontStyle::Italic), ..Default::default() };
    let styled = snap.with_style(&id, &update).unwrap();
    assert_eq!(styled.boxes()[0].style.font_style, FontStyle::Italic);
    assert_eq!(styled.boxes()[0].style.font_weight, FontWeight::Normal);
}

#[test]
fn with_style_unknown_id_is_none() {
    let snap = snapshot_of(1);
    assert!(snap.with_style(&Uuid::new_v4(), &StyleUpdate::default()).is_none());
}

#[test]
fn edits_preserve_order() {
    let snap = snapshot_of(3);
    let id = snap.boxes()[1].id;
    let moved = snap.with_position(&id, Position { top: 0.0, left: 0.0 }).unwrap();
    let ids: Vec<TextBoxId> = moved.boxes().iter().map(|b| b.id).collect();
    let original: Vec<TextBoxId> = snap.boxes().iter().map(|b| b.id).collect();
    assert_eq!(ids, original);
}

#[test]
fn snapshot_serializes_as_array() {
    let snap = snapshot_of(2);
    let value = serde_json::to_value(&snap).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    let back: Snapshot = serde_json::from_value(value).unwrap();
    assert_eq!(back, snap);
}
