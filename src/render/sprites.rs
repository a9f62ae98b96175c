use super::{PixelRect, Rgb, Surface};

// Rocket pointing right, exhaust on the left.
#[rustfmt::skip]
pub const ROCKET: [&str; 8] = [
    "...RR...",
    "..WWWW..",
    "FWWBBWWN",
    "YWWBBWWN",
    "YWWWWWWN",
    "FWWWWWWN",
    "..WWWW..",
    "...RR...",
];

// Fuel canister.
#[rustfmt::skip]
pub const FUEL_CELL: [&str; 6] = [
    ".KKKK.",
    "YYYYYY",
    "YKYYKY",
    "YYKKYY",
    "YYYYYY",
    "YYYYYY",
];

fn palette(c: char) -> Option<Rgb> {
    match c {
        'R' => Some(Rgb(220, 40, 40)),
        'N' => Some(Rgb(240, 90, 60)),
        'W' => Some(Rgb(230, 230, 235)),
        'B' => Some(Rgb(70, 150, 240)),
        'F' => Some(Rgb(255, 140, 0)),
        'Y' => Some(Rgb(255, 220, 0)),
        'K' => Some(Rgb(60, 50, 20)),
        _ => None,
    }
}

/// Draw `sprite` stretched over `dst` with nearest-neighbour sampling.
/// `.` is transparent.
pub fn blit(surface: &mut Surface, dst: PixelRect, sprite: &[&str]) {
    let rows = sprite.len() as i32;
    let cols = sprite.first().map_or(0, |r| r.chars().count()) as i32;
    if rows == 0 || cols == 0 || dst.w <= 0 || dst.h <= 0 {
        return;
    }
    for dy in 0..dst.h {
        let row: Vec<char> = sprite[(dy * rows / dst.h) as usize].chars().collect();
        for dx in 0..dst.w {
            let src = (dx * cols / dst.w) as usize;
            if let Some(color) = row.get(src).copied().and_then(palette) {
                surface.set(dst.x + dx, dst.y + dy, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::SPACE;

    #[test]
    fn test_sprites_are_rectangular() {
        assert!(ROCKET.iter().all(|r| r.len() == 8));
        assert!(FUEL_CELL.iter().all(|r| r.len() == 6));
    }

    #[test]
    fn test_blit_one_to_one() {
        let mut s = Surface::new(8, 8);
        blit(&mut s, PixelRect { x: 0, y: 0, w: 8, h: 8 }, &ROCKET);
        // Transparent corner
        assert_eq!(s.get(0, 0), Some(SPACE));
        assert_eq!(s.get(3, 0), palette('R'));
        assert_eq!(s.get(3, 2), palette('B'));
    }

    #[test]
    fn test_blit_downscaled_stays_inside() {
        let mut s = Surface::new(10, 10);
        blit(&mut s, PixelRect { x: 2, y: 2, w: 3, h: 3 }, &FUEL_CELL);
        assert_eq!(s.get(1, 1), Some(SPACE));
        assert_eq!(s.get(5, 5), Some(SPACE));
        assert_eq!(s.get(2, 3), palette('Y'));
    }
}
