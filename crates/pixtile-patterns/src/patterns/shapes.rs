//! Single-figure patterns: stripes, halves, circles and centered motifs.

use std::f64::consts::PI;

use pixtile_core::{Palette, Path, Surface};

use super::dims;

pub fn top_stripe(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    surface.fill_rect(0.0, 0.0, w, h * 0.3, palette.primary());
}

pub fn bottom_stripe(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    surface.fill_rect(0.0, h * 0.7, w, h * 0.3, palette.primary());
}

pub fn left_stripe(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    surface.fill_rect(0.0, 0.0, w * 0.3, h, palette.primary());
}

pub fn right_stripe(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    surface.fill_rect(w * 0.7, 0.0, w * 0.3, h, palette.primary());
}

/// Upper-right half.
pub fn diagonal(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    surface.fill_path(&Path::polygon(&[(0.0, 0.0), (w, h), (w, 0.0)]), palette.primary());
}

/// Lower-left half.
pub fn reverse_diagonal(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    surface.fill_path(&Path::polygon(&[(0.0, 0.0), (0.0, h), (w, h)]), palette.primary());
}

pub fn circle(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    surface.fill_circle(w / 2.0, h / 2.0, w.min(h) * 0.3, palette.primary());
}

pub fn large_circle(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    surface.fill_circle(w / 2.0, h / 2.0, w.min(h) * 0.45, palette.primary());
}

/// Twenty concentric rings 3px apart.
pub fn moire(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    for i in 0..20 {
        surface.stroke_circle(w / 2.0, h / 2.0, i as f64 * 3.0, 1.0, palette.primary());
    }
}

/// A small centered plus sign.
pub fn plus(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    let (cx, cy) = (w / 2.0, h / 2.0);
    let size = 8.0;
    surface.fill_rect(cx - size / 2.0, cy - 2.0, size, 4.0, palette.primary());
    surface.fill_rect(cx - 2.0, cy - size / 2.0, 4.0, size, palette.primary());
}

/// Eight nested square outlines.
pub fn concentric_squares(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    let (cx, cy) = (w / 2.0, h / 2.0);
    for i in 1..=8 {
        let size = i as f64 * 6.0;
        surface.stroke_rect(cx - size / 2.0, cy - size / 2.0, size, size, 1.0, palette.primary());
    }
}

/// Archimedean spiral, three turns.
pub fn spiral(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    let (cx, cy) = (w / 2.0, h / 2.0);
    let mut path = Path::new();
    let mut angle = 0.0_f64;
    while angle < PI * 6.0 {
        let radius = angle * 2.0;
        path.line_to(cx + angle.cos() * radius, cy + angle.sin() * radius);
        angle += 0.1;
    }
    surface.stroke_path(&path, 2.0, palette.primary());
}

/// Quadrants: two solid corners and two hatched ones.
pub fn four_triangles(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    let (mid_x, mid_y) = (w / 2.0, h / 2.0);
    let color = palette.primary();

    surface.fill_path(&Path::polygon(&[(0.0, 0.0), (mid_x, 0.0), (0.0, mid_y)]), color);

    for i in 0..8 {
        let step = i as f64 * 2.0;
        surface.stroke_line((mid_x + step, 0.0), (w, step), 1.0, color);
    }
    for i in 0..8 {
        let step = i as f64 * 2.0;
        surface.stroke_line((0.0, mid_y + step), (step, h), 1.0, color);
    }

    surface.fill_path(
        &Path::polygon(&[(mid_x, mid_y), (w, mid_y), (w, h), (mid_x, h)]),
        color,
    );
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
    fn test_stripes_cover_thirty_percent() {
        // 0.3 * 128 = 38.4, rounded by pixel centers to 38 rows or columns.
        assert_eq!(draw(top_stripe).count(CREAM), 38 * 128);
        assert_eq!(draw(left_stripe).count(CREAM), 38 * 128);
        assert_eq!(draw(bottom_stripe).count(CREAM), 38 * 128);
        assert_eq!(draw(right_stripe).count(CREAM), 38 * 128);
    }

    #[test]
    fn test_diagonals_are_complementary() {
        let upper = draw(diagonal);
        let lower = draw(reverse_diagonal);
        assert_eq!(upper.pixel(120, 5), Some(CREAM));
        assert_eq!(upper.pixel(5, 120), Some(NAVY));
        assert_eq!(lower.pixel(5, 120), Some(CREAM));
        assert_eq!(lower.pixel(120, 5), Some(NAVY));
    }

    #[test]
    fn test_large_circle_bigger_than_circle() {
        assert!(draw(large_circle).count(CREAM) > draw(circle).count(CREAM));
    }

    #[test]
    fn test_plus_is_centered() {
        let surface = draw(plus);
        assert_eq!(surface.pixel(64, 64), Some(CREAM));
        assert_eq!(surface.pixel(60, 64), Some(CREAM));
        assert_eq!(surface.pixel(60, 60), Some(NAVY));
        assert_eq!(surface.count(CREAM), 8 * 4 * 2 - 16);
    }

    #[test]
    fn test_moire_and_spiral_leave_gaps() {
        for f in [moire as fn(&mut Surface, &Palette), spiral, concentric_squares] {
            let surface = draw(f);
            assert!(surface.count(CREAM) > 0);
            assert!(surface.count(NAVY) > surface.count(CREAM));
        }
    }

    #[test]
    fn test_four_triangles_corners() {
        let surface = draw(four_triangles);
        assert_eq!(surface.pixel(2, 2), Some(CREAM));
        assert_eq!(surface.pixel(120, 120), Some(CREAM));
        assert_eq!(surface.pixel(40, 100), Some(NAVY));
    }
}
