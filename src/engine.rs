use tracing::{debug, info, trace};
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::config::EditorConfig;
use crate::doc::{FontFamily, FontSize, Snapshot, StyleUpdate, TextBox, TextBoxId};
use crate::error::EditorError;
use crate::geometry::{self, Point, Rect};
use crate::history::History;
use crate::hit;
use crate::input::{Button, InputState};
use crate::render::{self, View};
use crate::style::{self, Toggle};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// CSS cursor shown while a box follows the pointer.
const DRAG_CURSOR: &str = "grabbing";
/// CSS cursor restored when a drag ends.
const IDLE_CURSOR: &str = "default";

/// Canvas before the first commit.
static EMPTY_SNAPSHOT: Snapshot = Snapshot::new();

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A new snapshot was committed; `cursor` points at it.
    Committed { cursor: usize, len: usize },
    /// Undo or redo moved the cursor.
    HistoryMoved { cursor: usize },
    /// The active selection changed.
    SelectionChanged(Option<TextBoxId>),
    /// The host should set the container's CSS cursor.
    SetCursor(String),
    /// The view is stale and should be re-rendered.
    RenderNeeded,
}

/// Editor session state: history, selection, and the gesture in progress.
///
/// This is the single owner of all mutable editor state. It is created at
/// session start and returned to its empty state with [`EditorCore::reset`].
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug, Clone, Default)]
pub struct EditorCore {
    pub history: History,
    pub active: Option<TextBoxId>,
    pub input: InputState,
    /// Last measured bounding box of the text container, in client pixels.
    pub container: Rect,
    pub config: EditorConfig,
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a custom config.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidConfig`] when `config` fails
    /// [`EditorConfig::validate`].
    pub fn with_config(config: EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;
        Ok(Self { config, ..Self::default() })
    }

    /// End the session: drop all history, selection, and gesture state.
    pub fn reset(&mut self) -> Vec<Action> {
        info!(entries = self.history.len(), "editor session reset");
        self.history.clear();
        let mut actions = self.end_drag();
        actions.extend(self.set_active(None));
        if !actions.contains(&Action::RenderNeeded) {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Geometry ---

    /// Record the container's measured bounding box.
    pub fn set_container(&mut self, rect: Rect) {
        self.container = rect;
    }

    // --- Canvas edits ---

    /// Add a default text box on top of the canvas and make it active.
    pub fn add_text(&mut self) -> Vec<Action> {
        let text_box = TextBox::new(self.config.default_content.clone(), self.config.spawn_top, self.config.spawn_left);
        let id = text_box.id;
        info!(%id, "text box added");

        let next = self.current().with_added(text_box);
        let mut actions = self.commit(next);
        actions.extend(self.set_active(Some(id)));
        actions
    }

    /// Flip one style attribute of the active box. No-op without one.
    pub fn toggle(&mut self, toggle: Toggle) -> Vec<Action> {
        let Some(current) = self.active_box() else {
            debug!(?toggle, "toggle ignored: no active text box");
            return Vec::new();
        };
        let (id, update) = (current.id, toggle.update_for(&current.style));
        self.update_style(&id, &update)
    }

    /// Set the active box's font size. No-op without an active box.
    pub fn set_font_size(&mut self, size: FontSize) -> Vec<Action> {
        self.update_active_style(&style::set_font_size(size))
    }

    /// Set the active box's font family. No-op without an active box.
    pub fn set_font_family(&mut self, family: FontFamily) -> Vec<Action> {
        self.update_active_style(&style::set_font_family(family))
    }

    /// Set the font size from a select-option value such as `"20px"`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownFontSize`] for values outside the option list.
    pub fn set_font_size_str(&mut self, raw: &str) -> Result<Vec<Action>, EditorError> {
        let size: FontSize = raw.parse()?;
        Ok(self.set_font_size(size))
    }

    /// Set the font family from a select-option value such as `"Verdana"`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownFontFamily`] for values outside the option list.
    pub fn set_font_family_str(&mut self, raw: &str) -> Result<Vec<Action>, EditorError> {
        let family: FontFamily = raw.parse()?;
        Ok(self.set_font_family(family))
    }

    /// Merge `update` into box `id` and commit. An unknown id is a silent no-op.
    pub fn update_style(&mut self, id: &TextBoxId, update: &StyleUpdate) -> Vec<Action> {
        let Some(next) = self.current().with_style(id, update) else {
            debug!(%id, "style update ignored: unknown text box");
            return Vec::new();
        };
        self.commit(next)
    }

    fn update_active_style(&mut self, update: &StyleUpdate) -> Vec<Action> {
        let Some(id) = self.active_box().map(|b| b.id) else {
            debug!("style update ignored: no active text box");
            return Vec::new();
        };
        self.update_style(&id, update)
    }

    // --- Selection ---

    /// Make box `id` active, as when the host already knows which element
    /// was clicked. Unknown ids are ignored.
    pub fn select(&mut self, id: &TextBoxId) -> Vec<Action> {
        if !self.current().contains(id) {
            debug!(%id, "select ignored: unknown text box");
            return Vec::new();
        }
        self.set_active(Some(*id))
    }

    // --- Input events ---

    /// Primary press on a box selects it and starts dragging it; a press on
    /// empty canvas clears the selection.
    pub fn on_pointer_down(&mut self, client_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let local = self.container.to_local(client_pt);
        let hit = hit::hit_test(local, self.current(), self.config.box_width, self.config.box_height);
        let Some(id) = hit else {
            self.input = InputState::Idle;
            return self.set_active(None);
        };

        debug!(%id, x = local.x, y = local.y, "drag started");
        self.input = InputState::Dragging { id };
        let mut actions = self.set_active(Some(id));
        actions.push(Action::SetCursor(DRAG_CURSOR.to_string()));
        actions
    }

    /// Move the dragged box under the pointer, clamped to the container, and
    /// commit the new position. No-op when no drag is in progress.
    pub fn on_pointer_move(&mut self, client_pt: Point) -> Vec<Action> {
        let Some(id) = self.input.dragging() else {
            return Vec::new();
        };
        let local = self.container.to_local(client_pt);
        let position = geometry::drag_position(
            local,
            self.config.drag_anchor(),
            self.config.box_width,
            self.config.box_height,
            self.container.width,
            self.container.height,
        );
        let Some(next) = self.current().with_position(&id, position) else {
            debug!(%id, "drag target vanished; ending drag");
            return self.end_drag();
        };
        trace!(%id, top = position.top, left = position.left, "drag move");
        self.commit(next)
    }

    /// Release ends any drag. The selection is kept.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    // --- History ---

    /// Step back one snapshot. No-op at the first entry.
    pub fn undo(&mut self) -> Vec<Action> {
        if self.history.undo().is_none() {
            debug!("undo ignored: at oldest entry");
            return Vec::new();
        }
        self.after_history_move()
    }

    /// Step forward one snapshot. No-op at the newest entry.
    pub fn redo(&mut self) -> Vec<Action> {
        if self.history.redo().is_none() {
            debug!("redo ignored: at newest entry");
            return Vec::new();
        }
        self.after_history_move()
    }

    // --- Queries ---

    /// The canvas as of the history cursor, if anything has been committed.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.history.current()
    }

    /// The active box id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<TextBoxId> {
        self.active
    }

    /// Whether a box is following the pointer.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.dragging().is_some()
    }

    /// Look up a box in the current snapshot.
    #[must_use]
    pub fn text_box(&self, id: &TextBoxId) -> Option<&TextBox> {
        self.snapshot().and_then(|s| s.get(id))
    }

    /// Describe the editor for the host to draw.
    #[must_use]
    pub fn view(&self) -> View {
        render::render_view(&self.history, self.active, &self.config)
    }

    // --- Internals ---

    /// The current snapshot, or an empty canvas before the first commit.
    fn current(&self) -> &Snapshot {
        self.history.current().unwrap_or(&EMPTY_SNAPSHOT)
    }

    fn active_box(&self) -> Option<&TextBox> {
        self.active.as_ref().and_then(|id| self.text_box(id))
    }

    fn commit(&mut self, snapshot: Snapshot) -> Vec<Action> {
        self.history.commit(snapshot);
        let cursor = self.history.cursor().unwrap_or_default();
        vec![Action::Committed { cursor, len: self.history.len() }, Action::RenderNeeded]
    }

    /// Change the selection. A drag of any other box ends: the dragged box
    /// is always the selected one.
    fn set_active(&mut self, id: Option<TextBoxId>) -> Vec<Action> {
        if self.active == id {
            return Vec::new();
        }
        let mut actions = match self.input.dragging() {
            Some(dragged) if Some(dragged) != id => self.end_drag(),
            _ => Vec::new(),
        };
        self.active = id;
        actions.extend([Action::SelectionChanged(id), Action::RenderNeeded]);
        actions
    }

    fn end_drag(&mut self) -> Vec<Action> {
        let Some(id) = self.input.dragging() else {
            return Vec::new();
        };
        debug!(%id, "drag ended");
        self.input = InputState::Idle;
        vec![Action::SetCursor(IDLE_CURSOR.to_string())]
    }

    /// Drop selection and drag state that point at boxes the new cursor
    /// position does not contain.
    fn after_history_move(&mut self) -> Vec<Action> {
        let cursor = self.history.cursor().unwrap_or_default();
        let mut actions = vec![Action::HistoryMoved { cursor }, Action::RenderNeeded];

        if let Some(id) = self.input.dragging() {
            if self.text_box(&id).is_none() {
                actions.extend(self.end_drag());
            }
        }
        if let Some(id) = self.active {
            if self.text_box(&id).is_none() {
                actions.extend(self.set_active(None));
            }
        }
        actions
    }
}

/// The browser-facing editor. Wraps `EditorCore` and owns the text container
/// element, re-measuring it before each pointer event.
pub struct Engine {
    container: HtmlElement,
    pub core: EditorCore,
}

impl Engine {
    /// Create an engine bound to the given container element.
    #[must_use]
    pub fn new(container: HtmlElement) -> Self {
        Self { container, core: EditorCore::new() }
    }

    /// # Errors
    ///
    /// Returns [`EditorError::InvalidConfig`] when `config` fails validation.
    pub fn with_config(container: HtmlElement, config: EditorConfig) -> Result<Self, EditorError> {
        Ok(Self { container, core: EditorCore::with_config(config)? })
    }

    /// Create an engine from a JSON config string.
    ///
    /// # Errors
    ///
    /// Returns the [`EditorError`] from [`EditorConfig::from_json`].
    pub fn from_config_json(container: HtmlElement, raw: &str) -> Result<Self, EditorError> {
        Self::with_config(container, EditorConfig::from_json(raw)?)
    }

    fn measure(&mut self) {
        let r = self.container.get_bounding_client_rect();
        self.core.set_container(Rect::new(r.x(), r.y(), r.width(), r.height()));
    }

    // --- Input events ---

    /// `button` is the DOM `MouseEvent.button` code.
    pub fn on_pointer_down(&mut self, client_pt: Point, button: i16) -> Vec<Action> {
        let Some(button) = Button::from_dom(button) else {
            return Vec::new();
        };
        self.measure();
        self.core.on_pointer_down(client_pt, button)
    }

    pub fn on_pointer_move(&mut self, client_pt: Point) -> Vec<Action> {
        if !self.core.is_dragging() {
            return Vec::new();
        }
        self.measure();
        self.core.on_pointer_move(client_pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    // --- Delegated edits ---

    pub fn add_text(&mut self) -> Vec<Action> {
        self.core.add_text()
    }

    pub fn select(&mut self, id: &TextBoxId) -> Vec<Action> {
        self.core.select(id)
    }

    pub fn toggle(&mut self, toggle: Toggle) -> Vec<Action> {
        self.core.toggle(toggle)
    }

    /// # Errors
    ///
    /// Returns [`EditorError::UnknownFontSize`] for values outside the option list.
    pub fn set_font_size(&mut self, raw: &str) -> Result<Vec<Action>, EditorError> {
        self.core.set_font_size_str(raw)
    }

    /// # Errors
    ///
    /// Returns [`EditorError::UnknownFontFamily`] for values outside the option list.
    pub fn set_font_family(&mut self, raw: &str) -> Result<Vec<Action>, EditorError> {
        self.core.set_font_family_str(raw)
    }

    pub fn undo(&mut self) -> Vec<Action> {
        self.core.undo()
    }

    pub fn redo(&mut self) -> Vec<Action> {
        self.core.redo()
    }

    pub fn reset(&mut self) -> Vec<Action> {
        self.core.reset()
    }

    // --- Render ---

    #[must_use]
    pub fn view(&self) -> View {
        self.core.view()
    }

    /// The current view as a JSON string value for the JavaScript host.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the serializer message if the view cannot be encoded.
    pub fn view_js(&self) -> Result<JsValue, JsValue> {
        serde_json::to_string(&self.view())
            .map(|json| JsValue::from_str(&json))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<TextBoxId> {
        self.core.selection()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.core.snapshot()
    }
}
