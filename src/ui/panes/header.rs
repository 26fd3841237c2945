//! Title bar above the panes

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub fn render_title(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            "Shape Calculator",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Calculate area and perimeter of different shapes",
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
