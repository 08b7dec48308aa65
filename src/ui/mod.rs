//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Layout of the main view, messages, log, and footer
//! - Theme management
//! - Widget components (spinner, styling)
//! - View rendering (product list, detail, editor, confirmation)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub const SPINNER_FRAME_COUNT: usize = widgets::spinner::FRAMES.len();

pub use render::render;
pub use theme::{ColorSpec, Theme};
