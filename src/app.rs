use crossterm::event::{KeyEvent, MouseEvent};

use crate::config::Config;
use crate::world::{Action, Phase, World};

pub struct App {
    pub should_quit: bool,
    pub world: World,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            world: World::new(config),
        }
    }

    pub fn on_tick(&mut self) {
        let before = self.world.phase;
        self.world.update();
        if before != Phase::GameOver && self.world.is_game_over() {
            log::debug!("frame loop halted until restart");
        }
    }

    pub fn on_spawn_obstacle(&mut self) {
        self.world.spawn_obstacle();
    }

    pub fn on_spawn_pickup(&mut self) {
        self.world.spawn_pickup();
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if let Some(action) = Action::from_key(key) {
            self.on_action(action);
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if let Some(action) = Action::from_mouse(mouse) {
            self.on_action(action);
        }
    }

    pub fn on_action(&mut self, action: Action) {
        if action == Action::Quit {
            log::info!("quit requested");
            self.should_quit = true;
            return;
        }
        self.world.apply(action);
    }
}
