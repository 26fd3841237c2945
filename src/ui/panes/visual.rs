//! Visualization pane: draws the animated shape on a braille canvas

use super::border_style;
use crate::animation::{Outline, ShapeAnimation, CANVAS_EXTENT};
use crate::ui::theme::shape_color;
use ratatui::{
    layout::Rect,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Line},
        Block, Borders,
    },
    Frame,
};

pub fn render_visual_pane(frame: &mut Frame, area: Rect, animation: &ShapeAnimation) {
    let block = Block::default()
        .title(" Visualization ")
        .borders(Borders::ALL)
        .border_style(border_style(false));

    let color = shape_color(animation.kind(), animation.is_calculated());
    let outline = animation.outline();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-CANVAS_EXTENT, CANVAS_EXTENT])
        .y_bounds([-CANVAS_EXTENT, CANVAS_EXTENT])
        .paint(move |ctx| match &outline {
            Outline::Circle { radius } => ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: *radius,
                color,
            }),
            Outline::Polygon(points) => {
                for (i, &(x1, y1)) in points.iter().enumerate() {
                    let (x2, y2) = points[(i + 1) % points.len()];
                    ctx.draw(&Line {
                        x1,
                        y1,
                        x2,
                        y2,
                        color,
                    });
                }
            }
        });

    frame.render_widget(canvas, area);
}
