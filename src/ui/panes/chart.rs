//! Bar chart of the current snapshot
//!
//! One bar per element, colored by its tag through the theme. Bar width adapts
//! to the pane so every element stays visible.

use super::pane_block;
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

/// Width and gap that fit `count` bars into `width` columns
fn bar_geometry(width: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let count = count as u16;
    let gap = if width >= count * 3 { 1 } else { 0 };
    let usable = width.saturating_sub(gap * count.saturating_sub(1));
    ((usable / count).max(1), gap)
}

/// Render the bar chart pane
pub fn render_chart_pane(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let block = pane_block(" Array ", false);

    if snapshot.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2);
    let (bar_width, bar_gap) = bar_geometry(inner_width, snapshot.len());

    let bars: Vec<Bar> = snapshot
        .elements
        .iter()
        .map(|element| {
            let color = DEFAULT_THEME.tag_color(element.tag);
            Bar::default()
                .value(element.value.max(0) as u64)
                .label(Line::from(element.label.clone()))
                .text_value(element.label.clone())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(DEFAULT_THEME.bar_label).bg(color))
        })
        .collect();

    let max = snapshot
        .elements
        .iter()
        .map(|e| e.value.max(0) as u64)
        .max()
        .unwrap_or(0)
        .max(1);

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .data(BarGroup::default().bars(&bars))
        .max(max);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_geometry_fits_width() {
        let (width, gap) = bar_geometry(80, 15);
        assert!(width * 15 + gap * 14 <= 80);
        assert_eq!(gap, 1);

        // too narrow for gaps: one column per bar
        assert_eq!(bar_geometry(20, 40), (1, 0));
    }
}
