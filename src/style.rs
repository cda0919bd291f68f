//! Style toggles.
//!
//! Each toggle flips one attribute between exactly two values and is a pure
//! function of the box's current style. Font size and family are not toggles;
//! they are set directly from their option lists (see [`crate::doc::FontSize`]
//! and [`crate::doc::FontFamily`]).

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::doc::{FontFamily, FontSize, FontStyle, FontWeight, StyleUpdate, TextAlign, TextDecoration, TextStyle};

/// A two-state style button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// `normal` <-> `bold`.
    Bold,
    /// `normal` <-> `italic`.
    Italic,
    /// `none` <-> `underline`.
    Underline,
    /// `left` <-> `center`.
    Center,
}

impl FontWeight {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Bold,
            Self::Bold => Self::Normal,
        }
    }
}

impl FontStyle {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Italic,
            Self::Italic => Self::Normal,
        }
    }
}

impl TextDecoration {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::None => Self::Underline,
            Self::Underline => Self::None,
        }
    }
}

impl TextAlign {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Left => Self::Center,
            Self::Center => Self::Left,
        }
    }
}

impl Toggle {
    /// The update that flips this toggle's attribute on `current`.
    #[must_use]
    pub fn update_for(self, current: &TextStyle) -> StyleUpdate {
        match self {
            Self::Bold => StyleUpdate { font_weight: Some(current.font_weight.toggled()), ..Default::default() },
            Self::Italic => StyleUpdate { font_style: Some(current.font_style.toggled()), ..Default::default() },
            Self::Underline => {
                StyleUpdate { text_decoration: Some(current.text_decoration.toggled()), ..Default::default() }
            }
            Self::Center => StyleUpdate { text_align: Some(current.text_align.toggled()), ..Default::default() },
        }
    }
}

/// Update that sets the font size.
#[must_use]
pub fn set_font_size(size: FontSize) -> StyleUpdate {
    StyleUpdate { font_size: Some(size), ..Default::default() }
}

/// Update that sets the font family.
#[must_use]
pub fn set_font_family(family: FontFamily) -> StyleUpdate {
    StyleUpdate { font_family: Some(family), ..Default::default() }
}
