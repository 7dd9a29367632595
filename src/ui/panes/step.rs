//! Step description pane

use super::pane_block;
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render what the current snapshot shows; the seed has no description
pub fn render_step_pane(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let block = pane_block(" Step ", false);

    let paragraph = match snapshot.description.as_deref() {
        Some(text) => Paragraph::new(text).style(Style::default().fg(DEFAULT_THEME.fg)),
        None => Paragraph::new("Press → to step or space to play")
            .style(Style::default().fg(DEFAULT_THEME.comment)),
    };

    frame.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}
