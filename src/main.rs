mod app;
mod config;
mod error;
mod event;
mod logging;
mod render;
mod ui;
mod world;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use config::Config;
use error::Error;
use event::{Event, EventHandler};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

#[derive(Parser)]
#[command(name = "flappy_rocket", version)]
#[command(about = "Flappy Rocket - steer a rocket through asteroid walls")]
struct Args {
    /// Load settings from a TOML file (default: ./flappy_rocket.toml if present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the effective settings and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    let (config, source) = Config::resolve(args.config.as_deref())?;
    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if logging::init(&config.logging)? {
        match &source {
            Some(path) => log::info!("loaded config from {}", path.display()),
            None => log::info!("no config file found, using defaults"),
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("game loop failed: {}", e);
    }
    result
}

fn run(terminal: &mut Tui, config: Config) -> Result<(), Error> {
    let event_handler = EventHandler::new(&config);
    let mut app = App::new(config);
    log::info!("starting game loop");

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::SpawnObstacle => app.on_spawn_obstacle(),
            Event::SpawnPickup => app.on_spawn_pickup(),
            Event::Key(key) => app.on_key(key),
            Event::Mouse(mouse) => app.on_mouse(mouse),
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
