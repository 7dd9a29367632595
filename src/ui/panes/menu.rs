//! Algorithm selection menu

use super::pane_block;
use crate::algorithms::{Algorithm, AlgorithmRegistry};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{List, ListItem},
    Frame,
};

/// Render the list of algorithms with `selected` highlighted
pub fn render_menu_pane(
    frame: &mut Frame,
    area: Rect,
    registry: &AlgorithmRegistry,
    selected: Algorithm,
) {
    let block = pane_block(" Algorithm ", true);

    let items: Vec<ListItem> = registry
        .iter()
        .map(|info| {
            if info.algorithm == selected {
                ListItem::new(format!("▶ {}", info.name())).style(
                    Style::default()
                        .bg(DEFAULT_THEME.border_focused)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {}", info.name()))
                    .style(Style::default().fg(DEFAULT_THEME.fg))
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
