//! Results pane rendering with the last area and perimeter

use super::border_style;
use crate::form::format_measure;
use crate::geometry::Measurements;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the results pane; `None` means nothing has been calculated yet
pub fn render_results_pane(frame: &mut Frame, area: Rect, result: Option<Measurements>) {
    let block = Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_style(border_style(false));

    let Some(result) = result else {
        let paragraph = Paragraph::new("Press Enter to calculate")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    render_value(frame, cells[0], "Area", result.area, DEFAULT_THEME.primary);
    render_value(
        frame,
        cells[1],
        "Perimeter",
        result.perimeter,
        DEFAULT_THEME.secondary,
    );
}

fn render_value(frame: &mut Frame, area: Rect, label: &str, value: f64, color: Color) {
    let lines = vec![
        Line::styled(format!(" {}", label), Style::default().fg(DEFAULT_THEME.comment)),
        Line::styled(
            format!(" {}", format_measure(value)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
