use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "flappy_rocket.toml";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub surface: SurfaceConfig,
    pub rocket: RocketConfig,
    pub physics: PhysicsConfig,
    pub fuel: FuelConfig,
    pub obstacles: ObstacleConfig,
    pub stars: StarConfig,
    pub game: GameConfig,
    pub display: DisplayConfig,
    pub logging: LogConfig,
}

/// Logical size of the playfield in world pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketConfig {
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for RocketConfig {
    fn default() -> Self {
        Self {
            x: 50.0,
            width: 50.0,
            height: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Velocity added per tick (positive = downward).
    pub gravity: f64,
    /// Velocity set on thrust (negative = upward).
    pub thrust: f64,
    pub max_fall_speed: f64,
    /// Leftward speed of obstacles and pickups, in px/tick.
    pub scroll_speed: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.65,
            thrust: -10.0,
            max_fall_speed: 10.0,
            scroll_speed: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelConfig {
    pub max: f64,
    pub drain_per_tick: f64,
    pub pickup_amount: f64,
    pub pickup_size: f64,
    pub spawn_interval_ms: u64,
}

impl Default for FuelConfig {
    fn default() -> Self {
        Self {
            max: 100.0,
            drain_per_tick: 0.1,
            pickup_amount: 20.0,
            pickup_size: 20.0,
            spawn_interval_ms: 3000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub width: f64,
    pub gap: f64,
    /// Smallest height of either the top or the bottom column.
    pub min_height: f64,
    /// Horizontal distance to the previous obstacle is drawn from this range.
    pub spacing_min: f64,
    pub spacing_max: f64,
    pub spawn_interval_ms: u64,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            gap: 150.0,
            min_height: 50.0,
            spacing_min: 300.0,
            spacing_max: 500.0,
            spawn_interval_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarConfig {
    pub count: usize,
    pub min_speed: f64,
    pub max_speed: f64,
    pub min_size: f64,
    pub max_size: f64,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            count: 100,
            min_speed: 1.0,
            max_speed: 3.0,
            min_size: 1.0,
            max_size: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Hold gravity, scrolling and fuel drain until the first thrust.
    pub require_start: bool,
    /// Fixed RNG seed; random when absent.
    pub seed: Option<u64>,
    pub frame_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            require_start: true,
            seed: None,
            frame_ms: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Draw bitmap sprites; plain rectangles otherwise.
    pub sprites: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { sprites: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Logging is disabled unless a file is given; the terminal is busy.
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse and validate a config from TOML text.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Load `explicit` if given, otherwise the default file when it exists,
    /// otherwise the built-in defaults. Returns the path that was used.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load_from_file(path)?, Some(path.to_path_buf())));
        }
        let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            let config = Self::load_from_file(&fallback)?;
            return Ok((config, Some(fallback)));
        }
        Ok((Self::default(), None))
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((name, _)) = self.numbers().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{} must be a finite number", name)));
        }

        let s = &self.surface;
        if s.width <= 0.0 || s.height <= 0.0 {
            return Err(invalid("surface dimensions must be positive"));
        }

        let r = &self.rocket;
        if r.width <= 0.0 || r.height <= 0.0 {
            return Err(invalid("rocket dimensions must be positive"));
        }
        if r.height > s.height || r.x < 0.0 || r.x + r.width > s.width {
            return Err(invalid("rocket does not fit on the surface"));
        }

        let p = &self.physics;
        if p.gravity < 0.0 || p.max_fall_speed < 0.0 || p.scroll_speed < 0.0 {
            return Err(invalid("gravity, max_fall_speed and scroll_speed must not be negative"));
        }

        let f = &self.fuel;
        if f.max <= 0.0 {
            return Err(invalid("fuel.max must be positive"));
        }
        if f.drain_per_tick < 0.0 || f.pickup_amount < 0.0 {
            return Err(invalid("fuel drain and pickup amount must not be negative"));
        }
        if f.pickup_size <= 0.0 || f.pickup_size > s.height {
            return Err(invalid("fuel.pickup_size must be positive and fit the surface"));
        }

        let o = &self.obstacles;
        if o.width <= 0.0 || o.gap <= 0.0 || o.min_height < 0.0 {
            return Err(invalid("obstacle width and gap must be positive"));
        }
        if o.gap + 2.0 * o.min_height > s.height {
            return Err(invalid(format!(
                "obstacle gap {} with min_height {} does not fit a surface {} high",
                o.gap, o.min_height, s.height
            )));
        }
        if o.spacing_min < 0.0 || o.spacing_min > o.spacing_max {
            return Err(invalid("obstacles.spacing_min must be within 0..=spacing_max"));
        }

        let st = &self.stars;
        if st.min_speed > st.max_speed || st.min_size > st.max_size || st.min_speed < 0.0 {
            return Err(invalid("star speed and size ranges are inverted"));
        }

        if self.game.frame_ms == 0 || o.spawn_interval_ms == 0 || f.spawn_interval_ms == 0 {
            return Err(invalid("frame and spawn intervals must be positive"));
        }
        Ok(())
    }
}

impl Config {
    fn numbers(&self) -> [(&'static str, f64); 22] {
        let (s, r, p, f, o, st) = (
            &self.surface,
            &self.rocket,
            &self.physics,
            &self.fuel,
            &self.obstacles,
            &self.stars,
        );
        [
            ("surface.width", s.width),
            ("surface.height", s.height),
            ("rocket.x", r.x),
            ("rocket.width", r.width),
            ("rocket.height", r.height),
            ("physics.gravity", p.gravity),
            ("physics.thrust", p.thrust),
            ("physics.max_fall_speed", p.max_fall_speed),
            ("physics.scroll_speed", p.scroll_speed),
            ("fuel.max", f.max),
            ("fuel.drain_per_tick", f.drain_per_tick),
            ("fuel.pickup_amount", f.pickup_amount),
            ("fuel.pickup_size", f.pickup_size),
            ("obstacles.width", o.width),
            ("obstacles.gap", o.gap),
            ("obstacles.min_height", o.min_height),
            ("obstacles.spacing_min", o.spacing_min),
            ("obstacles.spacing_max", o.spacing_max),
            ("stars.min_speed", st.min_speed),
            ("stars.max_speed", st.max_speed),
            ("stars.min_size", st.min_size),
            ("stars.max_size", st.max_size),
        ]
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}
