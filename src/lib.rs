//! Text-box editor core: draggable, styleable text boxes with undo/redo.
//!
//! This crate is compiled to WebAssembly and runs in the browser, but all of
//! its logic lives in plain Rust types that are testable natively. The host
//! page wires DOM events into [`engine::Engine`], which owns the container
//! element and delegates to [`engine::EditorCore`]. Every state change is a
//! new [`doc::Snapshot`] committed to [`history::History`], so each add, move
//! and restyle is one undoable step. The host reads back a pure
//! [`render::View`] and applies it to the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser engine and the testable [`engine::EditorCore`] state object |
//! | [`doc`] | Text boxes, style values, and immutable canvas snapshots |
//! | [`history`] | Truncating snapshot log with undo/redo cursor |
//! | [`geometry`] | Points, rectangles, and drag-position clamping |
//! | [`hit`] | Hit-testing the pointer against text boxes |
//! | [`input`] | Pointer buttons and the drag gesture state machine |
//! | [`style`] | Two-state style toggles |
//! | [`render`] | Pure view description of a snapshot |
//! | [`config`] | Editor configuration and defaults |
//! | [`error`] | Error type for fallible parsing |
//! | [`consts`] | Shared numeric and string constants |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod history;
pub mod hit;
pub mod input;
pub mod render;
pub mod style;
