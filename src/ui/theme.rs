use crate::geometry::ShapeKind;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Purple
    pub secondary: Color, // Blue
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(203, 166, 247),   // Purple
    secondary: Color::Rgb(137, 180, 250), // Blue
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),
};

/// Fill colour of a shape, brighter once calculated
pub fn shape_color(kind: ShapeKind, calculated: bool) -> Color {
    match (kind, calculated) {
        (ShapeKind::Circle, false) => Color::Rgb(196, 181, 253),
        (ShapeKind::Circle, true) => Color::Rgb(139, 92, 246),
        (ShapeKind::Rectangle, false) => Color::Rgb(147, 197, 253),
        (ShapeKind::Rectangle, true) => Color::Rgb(59, 130, 246),
        (ShapeKind::Square, false) => Color::Rgb(110, 231, 183),
        (ShapeKind::Square, true) => Color::Rgb(16, 185, 129),
        (ShapeKind::Triangle, false) => Color::Rgb(249, 168, 212),
        (ShapeKind::Triangle, true) => Color::Rgb(236, 72, 153),
    }
}
