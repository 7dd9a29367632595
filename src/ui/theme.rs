use crate::snapshot::Tag;
use ratatui::style::Color;

pub struct Theme {
    #[allow(dead_code)] // Background color field for future use
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub bar: Color,         // Untagged bars
    pub bar_label: Color,   // Value text inside bars
    pub complexity: Color,  // Big-O annotations
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    bar: Color::Rgb(205, 214, 244),
    bar_label: Color::Rgb(30, 30, 46),
    complexity: Color::Rgb(148, 226, 213), // Cyan/teal
};

impl Theme {
    /// Color a bar according to its semantic tag
    pub fn tag_color(&self, tag: Tag) -> Color {
        match tag {
            Tag::None => self.bar,
            Tag::Comparing | Tag::Swapping => self.error,
            Tag::Tracked => self.primary,
            Tag::Finalized => self.success,
        }
    }
}
