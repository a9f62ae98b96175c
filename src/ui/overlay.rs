use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::world::World;

const BANNER: [&str; 3] = [
    "╔═╗╦  ╔═╗╔═╗╔═╗╦ ╦  ╦═╗╔═╗╔═╗╦╔═╔═╗╔╦╗",
    "╠╣ ║  ╠═╣╠═╝╠═╝╚╦╝  ╠╦╝║ ║║  ╠╩╗║╣  ║ ",
    "╚  ╩═╝╩ ╩╩  ╩   ╩   ╩╚═╚═╝╚═╝╩ ╩╚═╝ ╩ ",
];

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(4));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

fn control_line(keys: &'static str, what: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<18}", keys),
            Style::default().fg(Color::Rgb(80, 200, 255)),
        ),
        Span::styled(what, Style::default().fg(Color::Rgb(140, 140, 140))),
    ])
}

pub fn render_title(frame: &mut Frame, area: Rect) {
    let box_area = centered(area, 46, 13);
    if box_area.width == 0 || box_area.height == 0 {
        return;
    }
    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(200, 120, 255)))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let banner_style = Style::default()
        .fg(Color::Rgb(255, 220, 80))
        .add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = BANNER
        .iter()
        .map(|row| Line::from(Span::styled(*row, banner_style)).alignment(Alignment::Center))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Thread the walls, grab the fuel cells.",
        Style::default().fg(Color::Rgb(180, 180, 200)),
    )));
    lines.push(Line::from(""));
    lines.push(control_line("SPACE / ↑ / click", "Thrust"));
    lines.push(control_line("R", "Restart"));
    lines.push(control_line("Q / Esc", "Quit"));

    let p = Paragraph::new(lines).style(Style::default().bg(Color::Rgb(15, 15, 25)));
    frame.render_widget(p, inner);
}

pub fn render_game_over(frame: &mut Frame, area: Rect, world: &World) {
    let box_area = centered(area, 44, 9);
    if box_area.width == 0 || box_area.height == 0 {
        return;
    }
    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(230, 70, 40)))
        .title(" 💥 GAME OVER ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(230, 70, 40))
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let cause = world.cause.map_or("Mission over", |c| c.describe());
    let seconds = world.ticks as f64 * world.config().game.frame_ms as f64 / 1000.0;

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", cause),
            Style::default()
                .fg(Color::Rgb(255, 255, 255))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  Flight time: {:.1}s", seconds),
            Style::default().fg(Color::Rgb(255, 215, 0)),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Enter",
                Style::default()
                    .fg(Color::Rgb(80, 200, 255))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" restart  ", Style::default().fg(Color::Rgb(100, 100, 130))),
            Span::styled(
                "Q",
                Style::default()
                    .fg(Color::Rgb(80, 200, 255))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" quit", Style::default().fg(Color::Rgb(100, 100, 130))),
        ]),
    ];

    let p = Paragraph::new(lines).style(Style::default().bg(Color::Rgb(15, 15, 25)));
    frame.render_widget(p, inner);
}
