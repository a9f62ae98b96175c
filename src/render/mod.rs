//! RGB raster the world is drawn into before it reaches the terminal.

mod scene;
mod sprites;

pub use scene::draw_world;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn lerp(a: Rgb, b: Rgb, t_256: u16) -> Rgb {
        let t = t_256 as i32;
        Rgb(
            (a.0 as i32 + (b.0 as i32 - a.0 as i32) * t / 256) as u8,
            (a.1 as i32 + (b.1 as i32 - a.1 as i32) * t / 256) as u8,
            (a.2 as i32 + (b.2 as i32 - a.2 as i32) * t / 256) as u8,
        )
    }
}

pub const SPACE: Rgb = Rgb(6, 8, 22);
pub const STAR: Rgb = Rgb(255, 255, 255);
pub const ROCK: Rgb = Rgb(128, 128, 128);
pub const ROCK_EDGE: Rgb = Rgb(170, 170, 175);
pub const FUEL: Rgb = Rgb(255, 220, 0);
pub const FUEL_LOW: Rgb = Rgb(230, 70, 40);
pub const BAR_BG: Rgb = Rgb(90, 90, 90);
pub const ROCKET_RED: Rgb = Rgb(220, 40, 40);

pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Surface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![SPACE; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, color);
            }
        }
    }
}

/// Slack for float error when snapping scaled coordinates to pixels.
const SNAP: f64 = 1e-9;

/// Maps world pixels onto surface pixels.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    sx: f64,
    sy: f64,
}

/// Integer pixel rectangle on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Viewport {
    pub fn new(world_w: f64, world_h: f64, surface: &Surface) -> Self {
        Self {
            sx: surface.width() as f64 / world_w,
            sy: surface.height() as f64 / world_h,
        }
    }

    pub fn point(&self, x: f64, y: f64) -> (i32, i32) {
        (
            (x * self.sx + SNAP).floor() as i32,
            (y * self.sy + SNAP).floor() as i32,
        )
    }

    /// Any non-empty world rectangle covers at least one pixel.
    pub fn rect(&self, x: f64, y: f64, w: f64, h: f64) -> PixelRect {
        let (x0, y0) = self.point(x, y);
        let x1 = ((x + w) * self.sx - SNAP).ceil() as i32;
        let y1 = ((y + h) * self.sy - SNAP).ceil() as i32;
        PixelRect {
            x: x0,
            y: y0,
            w: (x1 - x0).max(if w > 0.0 { 1 } else { 0 }),
            h: (y1 - y0).max(if h > 0.0 { 1 } else { 0 }),
        }
    }
}
