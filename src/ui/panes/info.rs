//! Algorithm info pane: complexity, description paragraphs, and the color legend

use super::pane_block;
use crate::algorithms::AlgorithmInfo;
use crate::snapshot::Tag;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Tags shown in the legend, in display order
const LEGEND: [Tag; 4] = [Tag::None, Tag::Finalized, Tag::Comparing, Tag::Tracked];

fn legend_line() -> Line<'static> {
    let mut spans = Vec::new();
    for tag in LEGEND {
        spans.push(Span::styled(
            "■ ",
            Style::default().fg(DEFAULT_THEME.tag_color(tag)),
        ));
        spans.push(Span::styled(
            format!("{}  ", tag.label()),
            Style::default().fg(DEFAULT_THEME.fg),
        ));
    }
    Line::from(spans)
}

/// Render the info pane for the selected algorithm
pub fn render_info_pane(frame: &mut Frame, area: Rect, info: &AlgorithmInfo) {
    let title = format!(" {} ", info.name());
    let block = pane_block(&title, false);

    let label = Style::default()
        .fg(DEFAULT_THEME.fg)
        .add_modifier(Modifier::BOLD);
    let complexity = Style::default().fg(DEFAULT_THEME.complexity);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Time: ", label),
            Span::styled(info.time.to_string(), complexity),
            Span::raw("   "),
            Span::styled("Space: ", label),
            Span::styled(info.space.to_string(), complexity),
        ]),
        legend_line(),
        Line::default(),
    ];

    for paragraph in info.description {
        lines.push(Line::styled(
            *paragraph,
            Style::default().fg(DEFAULT_THEME.fg),
        ));
    }

    if let Some(link) = info.link {
        lines.push(Line::styled(
            format!("See more: {}", link),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
