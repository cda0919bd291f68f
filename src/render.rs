//! Rendering: a pure description of what the host should draw.
//!
//! [`render`] reads a snapshot and the active selection and produces a
//! [`View`]. It never mutates editor state; the host diffs or rewrites the
//! DOM from the view. Each box becomes an absolutely positioned element whose
//! inline style is listed in [`TextBoxView::styles`], with a border marking
//! the active box.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::config::EditorConfig;
use crate::doc::{FontFamily, FontSize, FontStyle, FontWeight, Snapshot, TextAlign, TextBox, TextBoxId, TextDecoration};
use crate::history::History;

/// One CSS declaration, e.g. `("font-weight", "bold")`.
pub type StyleDecl = (&'static str, String);

/// Rendered form of a single text box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBoxView {
    pub id: TextBoxId,
    pub content: String,
    /// Whether this box carries the active border.
    pub active: bool,
    /// Inline style declarations in a fixed order.
    pub styles: Vec<StyleDecl>,
}

impl TextBoxView {
    /// Join the declarations into an inline `style` attribute value.
    #[must_use]
    pub fn style_attr(&self) -> String {
        self.styles.iter().map(|(k, v)| format!("{k}: {v};")).collect::<Vec<_>>().join(" ")
    }

    /// Value of one declaration by property name.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.iter().find(|(k, _)| *k == property).map(|(_, v)| v.as_str())
    }
}

/// Enabled state of the toolbar controls.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ControlsView {
    pub undo_enabled: bool,
    pub redo_enabled: bool,
    /// Style buttons and selects need an active box.
    pub style_enabled: bool,
    /// Adding a box is always possible.
    pub add_enabled: bool,
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub boxes: Vec<TextBoxView>,
    pub controls: ControlsView,
}

/// Describe `snapshot` with `active` highlighted.
#[must_use]
pub fn render(snapshot: &Snapshot, active: Option<TextBoxId>, config: &EditorConfig) -> Vec<TextBoxView> {
    snapshot.boxes().iter().map(|b| render_box(b, active == Some(b.id), config)).collect()
}

/// Describe the whole editor: canvas plus control states.
#[must_use]
pub fn render_view(history: &History, active: Option<TextBoxId>, config: &EditorConfig) -> View {
    let empty = Snapshot::new();
    let snapshot = history.current().unwrap_or(&empty);
    let active = active.filter(|id| snapshot.contains(id));
    View {
        boxes: render(snapshot, active, config),
        controls: ControlsView {
            undo_enabled: history.can_undo(),
            redo_enabled: history.can_redo(),
            style_enabled: active.is_some(),
            add_enabled: true,
        },
    }
}

fn render_box(b: &TextBox, active: bool, config: &EditorConfig) -> TextBoxView {
    let border = if active { &config.active_border } else { &config.inactive_border };
    let styles = vec![
        ("position", "absolute".to_string()),
        ("top", px(b.top)),
        ("left", px(b.left)),
        (FontSize::ATTRIBUTE, b.style.font_size.to_string()),
        (FontFamily::ATTRIBUTE, b.style.font_family.to_string()),
        (FontWeight::ATTRIBUTE, b.style.font_weight.to_string()),
        (FontStyle::ATTRIBUTE, b.style.font_style.to_string()),
        (TextDecoration::ATTRIBUTE, b.style.text_decoration.to_string()),
        (TextAlign::ATTRIBUTE, b.style.text_align.to_string()),
        ("border", border.clone()),
    ];
    TextBoxView { id: b.id, content: b.content.clone(), active, styles }
}

fn px(value: f64) -> String {
    format!("{value}px")
}
