mod input;
mod physics;
mod spawner;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;

pub use input::Action;

/// Fuel values at or below this count as empty.
const FUEL_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    Floor,
    Ceiling,
    FuelEmpty,
    Obstacle,
}

impl GameOverCause {
    pub fn describe(&self) -> &'static str {
        match self {
            GameOverCause::Floor => "Crashed into the ground",
            GameOverCause::Ceiling => "Flew off the top of the screen",
            GameOverCause::FuelEmpty => "Ran out of fuel",
            GameOverCause::Obstacle => "Hit an asteroid wall",
        }
    }
}

/// Axis-aligned rectangle in world pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap: rectangles that only share an edge do not touch.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rocket {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity, positive = downward.
    pub dy: f64,
    pub fuel: f64,
}

impl Rocket {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A pair of columns with an opening between `top_height` and `bottom_y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub top_height: f64,
    pub bottom_y: f64,
}

impl Obstacle {
    pub fn top_rect(&self, width: f64) -> Rect {
        Rect::new(self.x, 0.0, width, self.top_height)
    }

    pub fn bottom_rect(&self, width: f64, surface_height: f64) -> Rect {
        Rect::new(self.x, self.bottom_y, width, surface_height - self.bottom_y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuelPickup {
    pub x: f64,
    pub y: f64,
}

impl FuelPickup {
    pub fn bounds(&self, size: f64) -> Rect {
        Rect::new(self.x, self.y, size, size)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
}

pub struct World {
    pub rocket: Rocket,
    /// Oldest (leftmost) first.
    pub obstacles: Vec<Obstacle>,
    /// Oldest (leftmost) first.
    pub pickups: Vec<FuelPickup>,
    pub stars: Vec<Star>,
    pub phase: Phase,
    pub cause: Option<GameOverCause>,
    pub ticks: u64,
    config: Config,
    rng: StdRng,
}

impl World {
    pub fn new(config: Config) -> Self {
        let rng = match config.game.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: Config, rng: StdRng) -> Self {
        let mut world = Self {
            rocket: Self::fresh_rocket(&config),
            obstacles: Vec::new(),
            pickups: Vec::new(),
            stars: Vec::new(),
            phase: Self::initial_phase(&config),
            cause: None,
            ticks: 0,
            config,
            rng,
        };
        world.stars = world.make_stars();
        world
    }

    fn fresh_rocket(config: &Config) -> Rocket {
        Rocket {
            x: config.rocket.x,
            y: config.surface.height / 2.0,
            width: config.rocket.width,
            height: config.rocket.height,
            dy: 0.0,
            fuel: config.fuel.max,
        }
    }

    fn initial_phase(config: &Config) -> Phase {
        if config.game.require_start {
            Phase::NotStarted
        } else {
            Phase::Running
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Fuel as a fraction of the tank, in `0.0..=1.0`.
    pub fn fuel_ratio(&self) -> f64 {
        (self.rocket.fuel / self.config.fuel.max).clamp(0.0, 1.0)
    }

    /// Put the world back to its initial state. The star field and RNG
    /// carry over.
    pub fn reset(&mut self) {
        self.rocket = Self::fresh_rocket(&self.config);
        self.obstacles.clear();
        self.pickups.clear();
        self.phase = Self::initial_phase(&self.config);
        self.cause = None;
        self.ticks = 0;
    }

    fn end(&mut self, cause: GameOverCause) {
        if self.phase == Phase::GameOver {
            return;
        }
        log::info!(
            "game over after {} ticks: {} (fuel {:.1})",
            self.ticks,
            cause.describe(),
            self.rocket.fuel
        );
        self.phase = Phase::GameOver;
        self.cause = Some(cause);
    }
}

#[cfg(test)]
pub(crate) fn test_world() -> World {
    let mut config = Config::default();
    config.game.seed = Some(42);
    World::new(config)
}
