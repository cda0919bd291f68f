//! Document model: text boxes, their style values, and canvas snapshots.
//!
//! A [`Snapshot`] is the full canvas at one point in time. Snapshots are never
//! edited in place: every mutation builds a new snapshot (`with_added`,
//! `with_position`, `with_style`) which the engine then commits to history.
//! Style attributes are closed enums whose CSS forms are what the host writes
//! into each element's inline style.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EditorError;
use crate::geometry::Position;

/// Unique identifier for a text box, stable for its lifetime.
pub type TextBoxId = Uuid;

/// Declares a closed CSS-valued enum with `as_css`, `Display` and `FromStr`.
macro_rules! css_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $attribute:literal, $err:expr, {
            $($(#[$vmeta:meta])* $variant:ident => $css:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every supported value, in option-list order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Name of the CSS property this value is written to.
            pub const ATTRIBUTE: &'static str = $attribute;

            /// The CSS value string.
            #[must_use]
            pub fn as_css(self) -> &'static str {
                match self {
                    $(Self::$variant => $css,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_css())
            }
        }

        impl FromStr for $name {
            type Err = EditorError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($css => Ok(Self::$variant),)+
                    other => Err($err(other)),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = EditorError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.as_css()
            }
        }
    };
}

fn unknown_value(attribute: &'static str) -> impl Fn(&str) -> EditorError {
    move |value| EditorError::UnknownStyleValue { attribute, value: value.to_string() }
}

css_enum! {
    /// Font size option.
    FontSize, "font-size", |v: &str| EditorError::UnknownFontSize(v.to_string()), {
        Px12 => "12px",
        #[default]
        Px16 => "16px",
        Px20 => "20px",
    }
}

css_enum! {
    /// Font family option.
    FontFamily, "font-family", |v: &str| EditorError::UnknownFontFamily(v.to_string()), {
        #[default]
        Arial => "Arial",
        Verdana => "Verdana",
        Courier => "Courier",
    }
}

css_enum! {
    /// Font weight, toggled by the bold button.
    FontWeight, "font-weight", unknown_value("font-weight"), {
        #[default]
        Normal => "normal",
        Bold => "bold",
    }
}

css_enum! {
    /// Font style, toggled by the italic button.
    FontStyle, "font-style", unknown_value("font-style"), {
        #[default]
        Normal => "normal",
        Italic => "italic",
    }
}

css_enum! {
    /// Text decoration, toggled by the underline button.
    TextDecoration, "text-decoration", unknown_value("text-decoration"), {
        #[default]
        None => "none",
        Underline => "underline",
    }
}

css_enum! {
    /// Horizontal alignment, toggled by the center button.
    TextAlign, "text-align", unknown_value("text-align"), {
        #[default]
        Left => "left",
        Center => "center",
    }
}

/// The full set of style attributes carried by a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: FontSize,
    pub font_family: FontFamily,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub text_decoration: TextDecoration,
    pub text_align: TextAlign,
}

/// A text box on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    /// Unique identifier for this box.
    pub id: TextBoxId,
    /// Displayed text.
    pub content: String,
    /// Top offset in container pixels.
    pub top: f64,
    /// Left offset in container pixels.
    pub left: f64,
    /// Font and layout attributes.
    #[serde(flatten)]
    pub style: TextStyle,
}

impl TextBox {
    /// Create a box with a fresh random id and default style.
    #[must_use]
    pub fn new(content: impl Into<String>, top: f64, left: f64) -> Self {
        Self { id: Uuid::new_v4(), content: content.into(), top, left, style: TextStyle::default() }
    }

    /// Current top-left position.
    #[must_use]
    pub fn position(&self) -> Position {
        Position { top: self.top, left: self.left }
    }
}

/// Sparse style update. Only present fields are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

impl StyleUpdate {
    /// Whether the update carries no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge this update over `style`.
    pub fn apply_to(&self, style: &mut TextStyle) {
        if let Some(v) = self.font_size {
            style.font_size = v;
        }
        if let Some(v) = self.font_family {
            style.font_family = v;
        }
        if let Some(v) = self.font_weight {
            style.font_weight = v;
        }
        if let Some(v) = self.font_style {
            style.font_style = v;
        }
        if let Some(v) = self.text_decoration {
            style.text_decoration = v;
        }
        if let Some(v) = self.text_align {
            style.text_align = v;
        }
    }
}

/// The full canvas state at one point in history.
///
/// Boxes are kept in creation order, which is also stacking order: later
/// boxes are drawn above earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    boxes: Vec<TextBox>,
}

impl Snapshot {
    /// An empty canvas.
    #[must_use]
    pub const fn new() -> Self {
        Self { boxes: Vec::new() }
    }

    /// All boxes in stacking order (bottom first).
    #[must_use]
    pub fn boxes(&self) -> &[TextBox] {
        &self.boxes
    }

    /// Look up a box by id.
    #[must_use]
    pub fn get(&self, id: &TextBoxId) -> Option<&TextBox> {
        self.boxes.iter().find(|b| b.id == *id)
    }

    /// Whether a box with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &TextBoxId) -> bool {
        self.get(id).is_some()
    }

    /// Number of boxes on the canvas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns `true` if the canvas holds no boxes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// A copy of this snapshot with `text_box` appended on top.
    #[must_use]
    pub fn with_added(&self, text_box: TextBox) -> Self {
        let mut boxes = self.boxes.clone();
        boxes.push(text_box);
        Self { boxes }
    }

    /// A copy of this snapshot with box `id` moved to `position`.
    ///
    /// Returns `None` when no box has that id.
    #[must_use]
    pub fn with_position(&self, id: &TextBoxId, position: Position) -> Option<Self> {
        self.replace_box(id, |b| {
            b.top = position.top;
            b.left = position.left;
        })
    }

    /// A copy of this snapshot with `update` merged into box `id`'s style.
    ///
    /// Returns `None` when no box has that id.
    #[must_use]
    pub fn with_style(&self, id: &TextBoxId, update: &StyleUpdate) -> Option<Self> {
        self.replace_box(id, |b| update.apply_to(&mut b.style))
    }

    fn replace_box<F>(&self, id: &TextBoxId, edit: F) -> Option<Self>
    where
        F: FnOnce(&mut TextBox),
    {
        let index = self.boxes.iter().position(|b| b.id == *id)?;
        let mut boxes = self.boxes.clone();
        edit(&mut boxes[index]);
        Some(Self { boxes })
    }
}

impl FromIterator<TextBox> for Snapshot {
    fn from_iter<I: IntoIterator<Item = TextBox>>(iter: I) -> Self {
        Self { boxes: iter.into_iter().collect() }
    }
}
