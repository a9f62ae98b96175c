//! Per-tick update: motion integration, despawning, and collisions.

use super::{GameOverCause, Phase, World, FUEL_EPSILON};

impl World {
    /// Advance the world by one frame tick.
    pub fn update(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }

        self.update_stars();

        if self.phase != Phase::Running {
            return;
        }
        self.ticks += 1;

        self.update_rocket();
        self.scroll_entities();

        if self.phase == Phase::Running {
            self.check_obstacle_collision();
            self.collect_pickups();
        }
    }

    fn update_stars(&mut self) {
        let width = self.config.surface.width;
        let height = self.config.surface.height;
        for i in 0..self.stars.len() {
            self.stars[i].x -= self.stars[i].speed;
            if self.stars[i].x < 0.0 {
                let y = self.random_star_y(height);
                let star = &mut self.stars[i];
                star.x = width;
                star.y = y;
            }
        }
    }

    fn update_rocket(&mut self) {
        let physics = &self.config.physics;
        let surface_height = self.config.surface.height;
        let rocket = &mut self.rocket;

        rocket.dy = (rocket.dy + physics.gravity).min(physics.max_fall_speed);
        rocket.y += rocket.dy;

        rocket.fuel -= self.config.fuel.drain_per_tick;
        let empty = rocket.fuel <= FUEL_EPSILON;
        if empty {
            rocket.fuel = 0.0;
        }

        let mut hit = None;
        if rocket.y + rocket.height > surface_height {
            rocket.y = surface_height - rocket.height;
            rocket.dy = 0.0;
            hit = Some(GameOverCause::Floor);
        }
        if rocket.y < 0.0 {
            rocket.y = 0.0;
            rocket.dy = 0.0;
            hit = Some(GameOverCause::Ceiling);
        }

        if empty {
            self.end(GameOverCause::FuelEmpty);
        }
        if let Some(cause) = hit {
            self.end(cause);
        }
    }

    fn scroll_entities(&mut self) {
        let speed = self.config.physics.scroll_speed;
        let obstacle_width = self.config.obstacles.width;
        let pickup_size = self.config.fuel.pickup_size;

        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }
        // Only the head can be off-screen: the sequence is sorted by x.
        let gone = self
            .obstacles
            .iter()
            .take_while(|o| o.x < -obstacle_width)
            .count();
        if gone > 0 {
            self.obstacles.drain(..gone);
            log::debug!("despawned {} obstacle(s)", gone);
        }

        for pickup in &mut self.pickups {
            pickup.x -= speed;
        }
        let gone = self
            .pickups
            .iter()
            .take_while(|p| p.x < -pickup_size)
            .count();
        if gone > 0 {
            self.pickups.drain(..gone);
            log::debug!("despawned {} fuel pickup(s)", gone);
        }
    }

    fn check_obstacle_collision(&mut self) {
        let rocket = self.rocket.bounds();
        let width = self.config.obstacles.width;
        let height = self.config.surface.height;
        let hit = self.obstacles.iter().any(|o| {
            rocket.overlaps(&o.top_rect(width)) || rocket.overlaps(&o.bottom_rect(width, height))
        });
        if hit {
            self.end(GameOverCause::Obstacle);
        }
    }

    fn collect_pickups(&mut self) {
        let rocket = self.rocket.bounds();
        let size = self.config.fuel.pickup_size;
        let before = self.pickups.len();
        self.pickups.retain(|p| !rocket.overlaps(&p.bounds(size)));
        let collected = before - self.pickups.len();
        if collected > 0 {
            let fuel = &self.config.fuel;
            self.rocket.fuel =
                (self.rocket.fuel + fuel.pickup_amount * collected as f64).min(fuel.max);
            log::debug!(
                "collected {} fuel pickup(s), fuel now {:.1}",
                collected,
                self.rocket.fuel
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_world, FuelPickup, Obstacle};
    use super::*;
    use crate::config::Config;

    fn running_world() -> World {
        let mut world = test_world();
        world.phase = Phase::Running;
        world
    }

    /// A world where the rocket hovers: no gravity pulls it into the floor.
    fn hovering_world() -> World {
        let mut config = Config::default();
        config.game.seed = Some(3);
        config.physics.gravity = 0.0;
        let mut world = World::new(config);
        world.phase = Phase::Running;
        world
    }

    #[test]
    fn test_gravity_one_tick_from_rest() {
        let mut world = running_world();
        world.rocket.y = 0.0;
        world.rocket.dy = 0.0;
        world.update();
        assert!((world.rocket.dy - 0.65).abs() < 1e-9);
        assert!((world.rocket.y - 0.65).abs() < 1e-9);
        assert_eq!(world.phase, Phase::Running);
    }

    #[test]
    fn test_fall_speed_is_capped() {
        let mut world = running_world();
        world.rocket.y = 0.0;
        world.rocket.dy = 9.9;
        world.update();
        assert_eq!(world.rocket.dy, 10.0);
        assert!((world.rocket.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_not_started_holds_physics() {
        let mut world = test_world();
        let y = world.rocket.y;
        world.obstacles.push(Obstacle {
            x: 400.0,
            top_height: 100.0,
            bottom_y: 250.0,
        });
        for _ in 0..50 {
            world.update();
        }
        assert_eq!(world.rocket.y, y);
        assert_eq!(world.rocket.fuel, 100.0);
        assert_eq!(world.obstacles[0].x, 400.0);
        assert_eq!(world.ticks, 0);
    }

    #[test]
    fn test_stars_drift_before_start() {
        let mut world = test_world();
        let before: Vec<f64> = world.stars.iter().map(|s| s.x).collect();
        world.update();
        let moved = world
            .stars
            .iter()
            .zip(&before)
            .filter(|(s, x)| s.x != **x)
            .count();
        assert_eq!(moved, world.stars.len());
    }

    #[test]
    fn test_star_wraps_to_right_edge() {
        let mut world = test_world();
        world.stars[0].x = 0.5;
        world.stars[0].speed = 1.0;
        world.update();
        assert_eq!(world.stars[0].x, 800.0);
        assert!((0.0..=600.0).contains(&world.stars[0].y));
    }

    #[test]
    fn test_fuel_drains_to_zero_after_1000_ticks() {
        let mut world = hovering_world();
        for _ in 0..999 {
            world.update();
        }
        assert_eq!(world.phase, Phase::Running);
        assert!(world.rocket.fuel > 0.0);

        world.update();
        assert_eq!(world.rocket.fuel, 0.0);
        assert_eq!(world.phase, Phase::GameOver);
        assert_eq!(world.cause, Some(GameOverCause::FuelEmpty));
        assert_eq!(world.ticks, 1000);
    }

    #[test]
    fn test_floor_contact_clamps_and_ends() {
        let mut world = running_world();
        world.rocket.y = 545.0;
        world.rocket.dy = 5.0;
        world.update();
        assert_eq!(world.rocket.y, 550.0);
        assert_eq!(world.rocket.dy, 0.0);
        assert_eq!(world.cause, Some(GameOverCause::Floor));
    }

    #[test]
    fn test_ceiling_contact_clamps_and_ends() {
        let mut world = running_world();
        world.rocket.y = 5.0;
        world.rocket.dy = -10.0;
        world.update();
        assert_eq!(world.rocket.y, 0.0);
        assert_eq!(world.rocket.dy, 0.0);
        assert_eq!(world.cause, Some(GameOverCause::Ceiling));
    }

    #[test]
    fn test_game_over_freezes_world() {
        let mut world = running_world();
        world.end(GameOverCause::Obstacle);
        world.obstacles.push(Obstacle {
            x: 300.0,
            top_height: 100.0,
            bottom_y: 250.0,
        });
        let y = world.rocket.y;
        world.update();
        assert_eq!(world.rocket.y, y);
        assert_eq!(world.obstacles[0].x, 300.0);
    }

    #[test]
    fn test_offscreen_obstacle_dropped_from_front() {
        let mut world = hovering_world();
        world.obstacles.push(Obstacle {
            x: -49.0,
            top_height: 100.0,
            bottom_y: 250.0,
        });
        world.obstacles.push(Obstacle {
            x: 500.0,
            top_height: 100.0,
            bottom_y: 250.0,
        });
        world.update();
        assert_eq!(world.obstacles.len(), 1);
        assert_eq!(world.obstacles[0].x, 498.0);
    }

    #[test]
    fn test_partly_visible_obstacle_kept() {
        let mut world = hovering_world();
        world.obstacles.push(Obstacle {
            x: -1.0,
            top_height: 100.0,
            bottom_y: 250.0,
        });
        world.update();
        assert_eq!(world.obstacles.len(), 1);
        assert_eq!(world.obstacles[0].x, -3.0);
    }

    #[test]
    fn test_offscreen_pickup_dropped() {
        let mut world = hovering_world();
        world.pickups.push(FuelPickup { x: -19.0, y: 10.0 });
        world.pickups.push(FuelPickup { x: 700.0, y: 10.0 });
        world.update();
        assert_eq!(world.pickups.len(), 1);
        assert_eq!(world.pickups[0].x, 698.0);
    }

    #[test]
    fn test_obstacle_collision_ends_game() {
        let mut world = hovering_world();
        // Rocket spans y 300..350; the gap 100..250 misses it.
        world.obstacles.push(Obstacle {
            x: 60.0,
            top_height: 100.0,
            bottom_y: 250.0,
        });
        world.update();
        assert_eq!(world.phase, Phase::GameOver);
        assert_eq!(world.cause, Some(GameOverCause::Obstacle));
    }

    #[test]
    fn test_passing_through_gap_is_safe() {
        let mut world = hovering_world();
        world.obstacles.push(Obstacle {
            x: 60.0,
            top_height: 200.0,
            bottom_y: 380.0,
        });
        world.update();
        assert_eq!(world.phase, Phase::Running);
    }

    #[test]
    fn test_pickup_restores_fuel_clamped() {
        let mut world = hovering_world();
        world.rocket.fuel = 50.0;
        world.pickups.push(FuelPickup { x: 70.0, y: 290.0 });
        world.update();
        assert!(world.pickups.is_empty());
        assert!((world.rocket.fuel - 69.9).abs() < 1e-9);

        world.rocket.fuel = 95.0;
        world.pickups.push(FuelPickup { x: 70.0, y: 290.0 });
        world.update();
        assert_eq!(world.rocket.fuel, 100.0);
    }

    #[test]
    fn test_only_touched_pickups_collected() {
        let mut world = hovering_world();
        world.rocket.fuel = 10.0;
        world.pickups.push(FuelPickup { x: 70.0, y: 290.0 });
        world.pickups.push(FuelPickup { x: 400.0, y: 290.0 });
        world.update();
        assert_eq!(world.pickups.len(), 1);
        assert_eq!(world.pickups[0].x, 398.0);
    }

    #[test]
    fn test_invariants_hold_under_random_play() {
        let mut world = running_world();
        let mut thrust_every = 7u64;
        for round in 0..20 {
            world.reset();
            world.phase = Phase::Running;
            thrust_every = 5 + (thrust_every + round) % 9;
            for tick in 0..600u64 {
                if tick % thrust_every == 0 {
                    world.thrust();
                }
                if tick % 120 == 0 {
                    world.spawn_obstacle();
                }
                if tick % 45 == 0 {
                    world.spawn_pickup();
                }
                world.update();

                let r = &world.rocket;
                assert!((0.0..=100.0).contains(&r.fuel));
                assert!(r.y >= 0.0 && r.y <= 600.0 - r.height);
                assert!(world.obstacles.windows(2).all(|w| w[0].x < w[1].x));
                assert!(world.pickups.windows(2).all(|w| w[0].x <= w[1].x));
                if world.is_game_over() {
                    break;
                }
            }
        }
    }
}
