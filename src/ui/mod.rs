pub mod field;
pub mod overlay;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::world::{Phase, World};

pub fn render(frame: &mut Frame, app: &App) {
    let world = &app.world;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(" 🚀 Flappy Rocket ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(200, 120, 255))
                .add_modifier(Modifier::BOLD),
        );

    let area = frame.area();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(4),    // Playfield
            Constraint::Length(1), // Help
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(status_line(world)), chunks[0]);
    field::render_field(frame, chunks[1], world);
    frame.render_widget(Paragraph::new(help_line(world.phase)), chunks[2]);

    match world.phase {
        Phase::NotStarted => overlay::render_title(frame, chunks[1]),
        Phase::GameOver => overlay::render_game_over(frame, chunks[1], world),
        Phase::Running => {}
    }
}

fn status_line(world: &World) -> Line<'static> {
    let ratio = world.fuel_ratio();
    let fuel_color = if ratio < 0.25 {
        Color::Rgb(230, 70, 40)
    } else {
        Color::Rgb(255, 220, 0)
    };
    let seconds = world.ticks as f64 * world.config().game.frame_ms as f64 / 1000.0;
    Line::from(vec![
        Span::styled(
            format!(" ⛽ Fuel: {:>3.0}% ", ratio * 100.0),
            Style::default().fg(fuel_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("⏱ {:.1}s ", seconds),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("☄ {} ", world.obstacles.len()),
            Style::default().fg(Color::Rgb(170, 170, 175)),
        ),
    ])
}

fn help_line(phase: Phase) -> Line<'static> {
    let key = Style::default().fg(Color::DarkGray);
    let sep = Style::default().fg(Color::Rgb(60, 60, 60));
    match phase {
        Phase::NotStarted => Line::from(vec![
            Span::styled(
                " ▶ Press SPACE to launch! ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("SPACE/↑/click Thrust │ Q Quit", key),
        ]),
        Phase::Running => Line::from(vec![
            Span::styled(" SPACE/↑/click Thrust ", key),
            Span::styled("│ ", sep),
            Span::styled("R Restart ", key),
            Span::styled("│ ", sep),
            Span::styled("Q Quit", key),
        ]),
        Phase::GameOver => Line::from(vec![
            Span::styled(
                " 💥 GAME OVER! ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled("Press ENTER to restart, Q to quit", Style::default().fg(Color::Gray)),
        ]),
    }
}
