//! Form pane: shape selector, one input per dimension field, Calculate button

use super::border_style;
use crate::form::ShapeForm;
use crate::geometry::ShapeKind;
use crate::ui::app::Focus;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

pub fn render_form_pane(frame: &mut Frame, area: Rect, form: &ShapeForm, focus: Focus) {
    let block = Block::default()
        .title(" Select Shape ")
        .borders(Borders::ALL)
        .border_style(border_style(true))
        .padding(Padding::new(1, 1, 0, 0));

    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let mut lines = vec![
        Line::styled("Choose a shape and enter its dimensions", label_style),
        Line::default(),
        Line::styled("Shape", label_style),
        selector_line(form.kind(), focus == Focus::Selector),
    ];

    for (i, field) in form.kind().fields().iter().enumerate() {
        let is_focused = focus == Focus::Input(i);
        let text = form.input(*field);

        lines.push(Line::default());
        lines.push(Line::styled(field.label(), label_style));

        let mut spans = vec![Span::styled(
            if is_focused { "▸ " } else { "  " },
            Style::default().fg(DEFAULT_THEME.border_focused),
        )];
        if text.is_empty() && !is_focused {
            spans.push(Span::styled(
                field.placeholder(),
                Style::default()
                    .fg(DEFAULT_THEME.border_normal)
                    .add_modifier(Modifier::ITALIC),
            ));
        } else {
            spans.push(Span::styled(
                text.to_string(),
                Style::default().fg(DEFAULT_THEME.number),
            ));
        }
        if is_focused {
            spans.push(Span::styled(
                "▏",
                Style::default().fg(DEFAULT_THEME.border_focused),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    let button_style = if focus == Focus::Button {
        Style::default()
            .bg(DEFAULT_THEME.primary)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .bg(DEFAULT_THEME.current_line_bg)
            .fg(DEFAULT_THEME.primary)
    };
    lines.push(Line::from(Span::styled("  Calculate  ", button_style)));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn selector_line(kind: ShapeKind, is_focused: bool) -> Line<'static> {
    let arrow_style = if is_focused {
        Style::default().fg(DEFAULT_THEME.border_focused)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };
    let mut name_style = Style::default()
        .fg(DEFAULT_THEME.fg)
        .add_modifier(Modifier::BOLD);
    if is_focused {
        name_style = name_style.bg(DEFAULT_THEME.current_line_bg);
    }

    Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(format!(" {} ", kind.label()), name_style),
        Span::styled(" ▶", arrow_style),
    ])
}
