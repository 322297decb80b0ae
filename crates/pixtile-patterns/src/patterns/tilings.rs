//! Repeating tilings of small motifs.

use std::f64::consts::PI;

use pixtile_core::{Palette, Path, Rgb, Surface};

use super::{dims, steps};

pub fn diamonds(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    let size = 8.0;
    for y in steps(0, h as i64, 8) {
        for x in steps(0, w as i64, 8) {
            let diamond = Path::polygon(&[
                (x + size / 2.0, y),
                (x + size, y + size / 2.0),
                (x + size / 2.0, y + size),
                (x, y + size / 2.0),
            ]);
            surface.fill_path(&diamond, palette.primary());
        }
    }
}

pub fn checkerboard(surface: &mut Surface, palette: &Palette) {
    checker(surface, palette.primary(), 8);
}

pub fn large_checkerboard(surface: &mut Surface, palette: &Palette) {
    checker(surface, palette.primary(), 16);
}

fn checker(surface: &mut Surface, color: Rgb, size: usize) {
    let (w, h) = (surface.width() as usize, surface.height() as usize);
    for (row, y) in (0..h).step_by(size).enumerate() {
        for (col, x) in (0..w).step_by(size).enumerate() {
            if (row + col) % 2 == 0 {
                surface.fill_rect(x as f64, y as f64, size as f64, size as f64, color);
            }
        }
    }
}

/// Checkerboard built row by row, shifting every other row by one cell.
pub fn vertical_checkerboard(surface: &mut Surface, palette: &Palette) {
    let (w, h) = (surface.width() as i64, surface.height() as i64);
    let size = 8.0;
    for (row, y) in steps(0, h, 8).enumerate() {
        let shift = if row % 2 == 0 { 0.0 } else { size };
        for x in steps(0, w, 16) {
            surface.fill_rect(x + shift, y, size, size, palette.primary());
        }
    }
}

pub fn grid(surface: &mut Surface, palette: &Palette) {
    rule_grid(surface, palette.primary(), 8, 1.0);
}

pub fn large_grid(surface: &mut Surface, palette: &Palette) {
    rule_grid(surface, palette.primary(), 16, 2.0);
}

fn rule_grid(surface: &mut Surface, color: Rgb, spacing: usize, line_width: f64) {
    let (w, h) = dims(surface);
    for x in steps(0, w as i64, spacing) {
        surface.stroke_line((x, 0.0), (x, h), line_width, color);
    }
    for y in steps(0, h as i64, spacing) {
        surface.stroke_line((0.0, y), (w, y), line_width, color);
    }
}

/// Upward-pointing triangles on a 12px lattice.
pub fn triangles(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    let size = 12.0;
    for y in steps(0, h as i64, 12) {
        for x in steps(0, w as i64, 12) {
            let tri = Path::polygon(&[(x, y + size), (x + size / 2.0, y), (x + size, y + size)]);
            surface.fill_path(&tri, palette.primary());
        }
    }
}

/// Overlapping ring outlines, offset on alternate rows like fish scales.
pub fn scales(surface: &mut Surface, palette: &Palette) {
    let (w, h) = (surface.width() as i64, surface.height() as i64);
    let radius = 8;
    for y in (0..h + radius).step_by(radius as usize) {
        let shift = if y % (radius * 2) == 0 { 0 } else { radius };
        for x in (-radius..w + radius).step_by((radius * 2) as usize) {
            surface.stroke_circle(
                (x + shift) as f64,
                y as f64,
                radius as f64,
                1.0,
                palette.primary(),
            );
        }
    }
}

/// Hexagon outlines in offset rows.
pub fn hexagons(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    let size = 6.0;
    let column_step = size * 3.0_f64.sqrt();
    let mut y = 0.0;
    while y < h {
        let offset_x = if y % (size * 3.0) == 0.0 { 0.0 } else { column_step / 2.0 };
        let mut x = 0.0;
        while x < w {
            let corners: Vec<(f64, f64)> = (0..6)
                .map(|i| {
                    let angle = PI / 3.0 * i as f64;
                    (x + offset_x + size * angle.cos(), y + size * angle.sin())
                })
                .collect();
            surface.stroke_path(&Path::polygon(&corners), 1.0, palette.primary());
            x += column_step;
        }
        y += size * 1.5;
    }
}

/// Small hearts traced from four bezier lobes.
pub fn heart(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    let size = 6.0;
    let half = size / 2.0;
    for y in steps(10, h as i64, 10) {
        for x in steps(10, w as i64, 10) {
            let mut path = Path::new();
            path.move_to(x, y + half)
                .bezier_curve_to((x, y), (x - half, y), (x - half, y + half))
                .bezier_curve_to((x - half, y + size), (x, y + size), (x, y + size * 1.5))
                .bezier_curve_to((x, y + size), (x + half, y + size), (x + half, y + half))
                .bezier_curve_to((x + half, y), (x, y), (x, y + half));
            surface.fill_path(&path, palette.primary());
        }
    }
}

/// 10px squares turned 45° about their centers.
pub fn rotated_diamonds(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    let size = 10.0;
    let reach = size / 2.0 * 2.0_f64.sqrt();
    for y in steps(0, h as i64, 10) {
        for x in steps(0, w as i64, 10) {
            let (cx, cy) = (x + size / 2.0, y + size / 2.0);
            let square =
                Path::polygon(&[(cx, cy - reach), (cx + reach, cy), (cx, cy + reach), (cx - reach, cy)]);
            surface.fill_path(&square, palette.primary());
        }
    }
}

/// Filled pentagons on a 12px lattice.
pub fn stars(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    let size = 8.0;
    for y in steps(12, h as i64, 12) {
        for x in steps(12, w as i64, 12) {
            let points: Vec<(f64, f64)> = (0..5)
                .map(|i| {
                    let angle = PI * 2.0 * i as f64 / 5.0 - PI / 2.0;
                    (x + angle.cos() * size, y + angle.sin() * size)
                })
                .collect();
            surface.fill_path(&Path::polygon(&points), palette.primary());
        }
    }
}

/// Right-pointing arrowheads on a 12px lattice.
pub fn arrows(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    let size = 8.0;
    for y in steps(12, h as i64, 12) {
        for x in steps(12, w as i64, 12) {
            let arrow = Path::polygon(&[
                (x, y),
                (x + size, y + size / 2.0),
                (x, y + size),
                (x + size / 3.0, y + size / 2.0),
            ]);
            surface.fill_path(&arrow, palette.primary());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixtile_core::{CREAM, NAVY, TILE_SIZE};

    fn draw(f: fn(&mut Surface, &Palette)) -> Surface {
        let mut surface = Surface::new(TILE_SIZE, TILE_SIZE);
        surface.fill(NAVY);
        f(&mut surface, &Palette::default());
        surface
    }

    #[test]
    fn test_checkerboard_is_half_covered() {
        assert_eq!(draw(checkerboard).count(CREAM), 128 * 128 / 2);
        assert_eq!(draw(large_checkerboard).count(CREAM), 128 * 128 / 2);
        assert_eq!(draw(vertical_checkerboard).count(CREAM), 128 * 128 / 2);
    }

    #[test]
    fn test_checkerboard_cells() {
        let surface = draw(checkerboard);
        assert_eq!(surface.pixel(0, 0), Some(CREAM));
        assert_eq!(surface.pixel(8, 0), Some(NAVY));
        assert_eq!(surface.pixel(8, 8), Some(CREAM));
    }

    #[test]
    fn test_grid_lines_on_spacing() {
        let surface = draw(grid);
        assert_eq!(surface.pixel(8, 3), Some(CREAM));
        assert_eq!(surface.pixel(3, 16), Some(CREAM));
        assert_eq!(surface.pixel(3, 3), Some(NAVY));
    }

    #[test]
    fn test_tilings_paint_something() {
        let draws: [fn(&mut Surface, &Palette); 9] = [
            diamonds,
            large_grid,
            triangles,
            scales,
            hexagons,
            heart,
            rotated_diamonds,
            stars,
            arrows,
        ];
        for f in draws {
            let surface = draw(f);
            assert!(surface.count(CREAM) > 0);
        }
    }
}
