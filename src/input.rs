//! Input model: pointer buttons and the drag gesture state machine.
//!
//! A drag starts when the primary button goes down on a text box, commits a
//! new position on every pointer move, and ends on pointer-up. There is no
//! other gesture and no cancellation: releasing the pointer is the only way
//! a drag ends.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::TextBoxId;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code. Unknown codes map to `None`.
    #[must_use]
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// The gesture currently being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No gesture in progress; pointer moves are ignored.
    #[default]
    Idle,
    /// A text box is following the pointer.
    Dragging {
        /// Id of the box being dragged.
        id: TextBoxId,
    },
}

impl InputState {
    /// Id of the box being dragged, if a drag is in progress.
    #[must_use]
    pub fn dragging(self) -> Option<TextBoxId> {
        match self {
            Self::Idle => None,
            Self::Dragging { id } => Some(id),
        }
    }
}
