//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`header`]: Title and subtitle
//! - [`form`]: Shape selector, dimension inputs and the Calculate button
//! - [`visual`]: Animated drawing of the current shape
//! - [`results`]: Area and perimeter of the last calculation
//! - [`status`]: Status bar with keybindings
//!
//! Each pane module exports a stateless `render_*` function taking the frame,
//! its area and borrowed application state.

pub mod form;
pub mod header;
pub mod results;
pub mod status;
pub mod visual;

// Re-export render functions for convenience
pub use form::render_form_pane;
pub use header::render_title;
pub use results::render_results_pane;
pub use status::render_status_bar;
pub use visual::render_visual_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
