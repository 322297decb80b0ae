//! Line and stripe patterns.

use pixtile_core::{Palette, Path, Surface};

use super::{dims, steps};

/// 3px horizontal bars with 2px gaps.
pub fn horizontal_lines(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    for y in steps(0, h as i64, 5) {
        surface.fill_rect(0.0, y, w, 3.0, palette.primary());
    }
}

/// 2px vertical bars with 3px gaps.
pub fn vertical_lines(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    for x in steps(0, w as i64, 5) {
        surface.fill_rect(x, 0.0, 2.0, h, palette.primary());
    }
}

/// 45° strokes running down-right every 5px.
pub fn diagonal_lines(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    for i in steps(-(h as i64), w as i64, 5) {
        surface.stroke_line((i, 0.0), (i + h, h), 2.0, palette.primary());
    }
}

/// Filled 4px bands running down-left every 8px.
pub fn diagonal_stripes(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    for i in steps(-(h as i64), (w + h) as i64, 8) {
        let band = Path::polygon(&[(i, 0.0), (i - h, h), (i - h + 4.0, h), (i + 4.0, 0.0)]);
        surface.fill_path(&band, palette.primary());
    }
}

/// Four chevrons across the middle.
pub fn zigzag(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    let amplitude = h / 3.0;
    let frequency = 4.0;
    for i in 0..4 {
        let i = i as f64;
        let mut path = Path::new();
        path.move_to(i * w / frequency, h / 2.0)
            .line_to(i * w / frequency + w / (frequency * 2.0), h / 2.0 - amplitude)
            .line_to((i + 1.0) * w / frequency, h / 2.0);
        surface.stroke_path(&path, 2.0, palette.primary());
    }
}

/// Rows of sine waves every 8px.
pub fn waves(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    for y in steps(0, h as i64, 8) {
        let mut path = Path::new();
        for x in steps(0, w as i64 + 1, 2) {
            path.line_to(x, y + (x * 0.1).sin() * 5.0);
        }
        surface.stroke_path(&path, 2.0, palette.primary());
    }
}

/// Crossing diagonals every 4px.
pub fn crosshatch(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    for i in steps(0, w as i64, 4) {
        surface.stroke_line((i, 0.0), (i + h, h), 1.0, palette.primary());
        surface.stroke_line((i, h), (i + h, 0.0), 1.0, palette.primary());
    }
}

/// Diagonal strokes with a gentle wobble.
pub fn diagonal_waves(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    for i in steps(-(h as i64), (w + h) as i64, 8) {
        let mut path = Path::new();
        for j in steps(0, h as i64, 1) {
            path.line_to(i + j + (j * 0.2).sin() * 3.0, j);
        }
        surface.stroke_path(&path, 2.0, palette.primary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixtile_core::{CREAM, NAVY, TILE_SIZE};

    fn tile() -> Surface {
        let mut surface = Surface::new(TILE_SIZE, TILE_SIZE);
        surface.fill(NAVY);
        surface
    }

    #[test]
    fn test_horizontal_lines_rhythm() {
        let mut surface = tile();
        horizontal_lines(&mut surface, &Palette::default());
        for y in 0..10 {
            let expected = if y % 5 < 3 { CREAM } else { NAVY };
            assert_eq!(surface.pixel(17, y), Some(expected), "row {y}");
        }
    }

    #[test]
    fn test_vertical_lines_rhythm() {
        let mut surface = tile();
        vertical_lines(&mut surface, &Palette::default());
        assert_eq!(surface.pixel(0, 40), Some(CREAM));
        assert_eq!(surface.pixel(1, 40), Some(CREAM));
        assert_eq!(surface.pixel(2, 40), Some(NAVY));
        assert_eq!(surface.pixel(5, 40), Some(CREAM));
    }

    #[test]
    fn test_line_patterns_paint_something() {
        let draws: [fn(&mut Surface, &Palette); 6] = [
            diagonal_lines,
            diagonal_stripes,
            zigzag,
            waves,
            crosshatch,
            diagonal_waves,
        ];
        for draw in draws {
            let mut surface = tile();
            draw(&mut surface, &Palette::default());
            assert!(surface.count(CREAM) > 0);
            assert!(surface.count(NAVY) > 0);
        }
    }
}
