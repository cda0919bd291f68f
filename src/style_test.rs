use super::*;

fn toggle_twice(style: TextStyle, toggle: Toggle) -> TextStyle {
    let mut style = style;
    toggle.update_for(&style).apply_to(&mut style);
    toggle.update_for(&style).apply_to(&mut style);
    style
}

#[test]
fn bold_flips_weight() {
    let update = Toggle::Bold.update_for(&TextStyle::default());
    assert_eq!(update.font_weight, Some(FontWeight::Bold));
    let bold = TextStyle { font_weight: FontWeight::Bold, ..Default::default() };
    assert_eq!(Toggle::Bold.update_for(&bold).font_weight, Some(FontWeight::Normal));
}

#[test]
fn italic_flips_style() {
    let update = Toggle::Italic.update_for(&TextStyle::default());
    assert_eq!(update.font_style, Some(FontStyle::Italic));
}

#[test]
fn underline_flips_decoration() {
    let update = Toggle::Underline.update_for(&TextStyle::default());
    assert_eq!(update.text_decoration, Some(TextDecoration::Underline));
}

#[test]
fn center_flips_alignment() {
    let update = Toggle::Center.update_for(&TextStyle::default());
    assert_eq!(update.text_align, Some(TextAlign::Center));
    let centered = TextStyle { text_align: TextAlign::Center, ..Default::default() };
    assert_eq!(Toggle::Center.update_for(&centered).text_align, Some(TextAlign::Left));
}

#[test]
fn toggle_touches_only_its_attribute() {
    let update = Toggle::Bold.update_for(&TextStyle::default());
    assert_eq!(update, StyleUpdate { font_weight: Some(FontWeight::Bold), ..Default::default() });
}

#[test]
fn every_toggle_twice_is_identity() {
    let start = TextStyle {
        font_size: FontSize::Px20,
        font_family: FontFamily::Courier,
        font_weight: FontWeight::Bold,
        font_style: FontStyle::Normal,
        text_decoration: TextDecoration::Underline,
        text_align: TextAlign::Left,
    };
    for toggle in [Toggle::Bold, Toggle::Italic, Toggle::Underline, Toggle::Center] {
        assert_eq!(toggle_twice(start, toggle), start, "{toggle:?}");
    }
}

#[test]
fn toggled_is_an_involution() {
    for w in FontWeight::ALL {
        assert_eq!(w.toggled().toggled(), *w);
        assert_ne!(w.toggled(), *w);
    }
    for a in TextAlign::ALL {
        assert_eq!(a.toggled().toggled(), *a);
    }
}

#[test]
fn direct_set_updates() {
    assert_eq!(set_font_size(FontSize::Px12).font_size, Some(FontSize::Px12));
    assert_eq!(set_font_family(FontFamily::Verdana).font_family, Some(FontFamily::Verdana));
    assert!(set_font_family(FontFamily::Verdana).font_size.is_none());
}
