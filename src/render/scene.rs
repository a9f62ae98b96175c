use super::sprites::{self, FUEL_CELL, ROCKET};
use super::{
    Rgb, Surface, Viewport, BAR_BG, FUEL, FUEL_LOW, ROCK, ROCK_EDGE, ROCKET_RED, SPACE, STAR,
};
use crate::world::World;

const FUEL_BAR_WIDTH: f64 = 100.0;
const FUEL_BAR_HEIGHT: f64 = 10.0;
const FUEL_BAR_MARGIN: f64 = 20.0;
const LOW_FUEL_RATIO: f64 = 0.25;

/// Draw the whole world into `surface`. Reads the world only.
pub fn draw_world(world: &World, surface: &mut Surface) {
    let config = world.config();
    let vp = Viewport::new(config.surface.width, config.surface.height, surface);
    let sprites = config.display.sprites;

    surface.clear(SPACE);

    // Stars: bigger ones are brighter
    let size_span = (config.stars.max_size - config.stars.min_size).max(f64::EPSILON);
    for star in &world.stars {
        let t = ((star.size - config.stars.min_size) / size_span).clamp(0.0, 1.0);
        let color = Rgb::lerp(Rgb(90, 90, 120), STAR, (96.0 + t * 160.0) as u16);
        let (x, y) = vp.point(star.x, star.y);
        surface.set(x, y, color);
    }

    // Obstacles
    let width = config.obstacles.width;
    let height = config.surface.height;
    for obstacle in &world.obstacles {
        for r in [obstacle.top_rect(width), obstacle.bottom_rect(width, height)] {
            let px = vp.rect(r.x, r.y, r.w, r.h);
            surface.fill_rect(px.x, px.y, px.w, px.h, ROCK);
            surface.fill_rect(px.x, px.y, 1, px.h, ROCK_EDGE);
        }
    }

    // Fuel pickups
    let size = config.fuel.pickup_size;
    for pickup in &world.pickups {
        let px = vp.rect(pickup.x, pickup.y, size, size);
        if sprites {
            sprites::blit(surface, px, &FUEL_CELL);
        } else {
            surface.fill_rect(px.x, px.y, px.w, px.h, FUEL);
        }
    }

    // Rocket
    let r = &world.rocket;
    let px = vp.rect(r.x, r.y, r.width, r.height);
    if sprites {
        sprites::blit(surface, px, &ROCKET);
    } else {
        surface.fill_rect(px.x, px.y, px.w, px.h, ROCKET_RED);
    }

    // Fuel bar in the top-right corner
    let bar_x = config.surface.width - FUEL_BAR_WIDTH - FUEL_BAR_MARGIN;
    let bg = vp.rect(bar_x, FUEL_BAR_MARGIN, FUEL_BAR_WIDTH, FUEL_BAR_HEIGHT);
    surface.fill_rect(bg.x, bg.y, bg.w, bg.h, BAR_BG);
    let ratio = world.fuel_ratio();
    if ratio > 0.0 {
        let fill = vp.rect(bar_x, FUEL_BAR_MARGIN, ratio * FUEL_BAR_WIDTH, FUEL_BAR_HEIGHT);
        let color = if ratio < LOW_FUEL_RATIO { FUEL_LOW } else { FUEL };
        surface.fill_rect(fill.x, fill.y, fill.w.min(bg.w), fill.h, color);
    }
}
