use rand::Rng;

use super::{FuelPickup, Obstacle, Phase, Star, World};

impl World {
    /// Queue a new obstacle to the right of the newest one.
    /// Ignored unless the run is in progress, and while the newest
    /// obstacle has not yet scrolled onto the screen.
    pub fn spawn_obstacle(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let o = &self.config.obstacles;
        let width = self.config.surface.width;
        if self.obstacles.last().is_some_and(|prev| prev.x > width) {
            return false;
        }
        let max_height = self.config.surface.height - o.gap - o.min_height;

        let top_height = self.rng.gen_range(o.min_height..=max_height);
        let spacing = self.rng.gen_range(o.spacing_min..=o.spacing_max);
        let base = self.obstacles.last().map_or(width, |prev| prev.x);
        let x = (base + spacing).max(width);

        log::debug!(
            "spawned obstacle at x={:.0} gap {:.0}..{:.0}",
            x,
            top_height,
            top_height + o.gap
        );
        self.obstacles.push(Obstacle {
            x,
            top_height,
            bottom_y: top_height + o.gap,
        });
        true
    }

    /// Queue a fuel pickup at the right edge with a random height.
    /// Ignored unless the run is in progress.
    pub fn spawn_pickup(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let max_y = self.config.surface.height - self.config.fuel.pickup_size;
        let y = self.rng.gen_range(0.0..=max_y);
        let x = self.config.surface.width;

        log::debug!("spawned fuel pickup at y={:.0}", y);
        self.pickups.push(FuelPickup { x, y });
        true
    }

    pub(super) fn make_stars(&mut self) -> Vec<Star> {
        let s = &self.config.stars;
        let (width, height) = (self.config.surface.width, self.config.surface.height);
        (0..s.count)
            .map(|_| Star {
                x: self.rng.gen_range(0.0..width),
                y: self.rng.gen_range(0.0..height),
                size: self.rng.gen_range(s.min_size..=s.max_size),
                speed: self.rng.gen_range(s.min_speed..=s.max_speed),
            })
            .collect()
    }

    pub(super) fn random_star_y(&mut self, height: f64) -> f64 {
        self.rng.gen_range(0.0..height)
    }
}
