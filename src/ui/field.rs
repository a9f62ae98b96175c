use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::render::{self, Rgb, Surface};
use crate::world::World;

fn color(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

/// Pack two surface rows into each terminal row using the upper half block:
/// foreground is the top pixel, background the bottom one.
pub fn surface_lines(surface: &Surface) -> Vec<Line<'static>> {
    let rows = surface.height() / 2;
    (0..rows)
        .map(|row| {
            let spans: Vec<Span<'static>> = (0..surface.width())
                .map(|col| {
                    let top = surface.get(col, row * 2).unwrap_or(render::SPACE);
                    let bot = surface.get(col, row * 2 + 1).unwrap_or(render::SPACE);
                    if top == bot {
                        Span::styled(" ", Style::default().bg(color(top)))
                    } else {
                        Span::styled("▀", Style::default().fg(color(top)).bg(color(bot)))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

pub fn render_field(frame: &mut Frame, area: Rect, world: &World) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let mut surface = Surface::new(area.width as usize, area.height as usize * 2);
    render::draw_world(world, &mut surface);
    frame.render_widget(Paragraph::new(surface_lines(&surface)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_block_packing() {
        let mut s = Surface::new(2, 2);
        s.set(0, 0, render::FUEL);
        let lines = surface_lines(&s);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans.len(), 2);

        let mixed = &lines[0].spans[0];
        assert_eq!(mixed.content, "▀");
        assert_eq!(mixed.style.fg, Some(color(render::FUEL)));
        assert_eq!(mixed.style.bg, Some(color(render::SPACE)));

        let plain = &lines[0].spans[1];
        assert_eq!(plain.content, " ");
        assert_eq!(plain.style.bg, Some(color(render::SPACE)));
    }
}
