//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`menu`]: Algorithm list with the active selection
//! - [`info`]: Complexity, description, and color legend for the active algorithm
//! - [`chart`]: Bar chart of the current snapshot, one bar per element
//! - [`step`]: Description of the decision the current snapshot shows
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Each pane module exports a single `render_*` function that reads from the
//! session and never mutates it.

pub mod chart;
pub mod info;
pub mod menu;
pub mod status;
pub mod step;

pub use chart::render_chart_pane;
pub use info::render_info_pane;
pub use menu::render_menu_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use step::render_step_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focused/unfocused border style
fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}
