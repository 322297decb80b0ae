//! Dot and small-square patterns.

use pixtile_core::{Palette, Surface};

use super::{dims, dot_grid, steps};

pub fn small_dots(surface: &mut Surface, palette: &Palette) {
    dot_grid(surface, palette.primary(), 1.0, 4);
}

pub fn medium_dots(surface: &mut Surface, palette: &Palette) {
    dot_grid(surface, palette.primary(), 2.0, 6);
}

pub fn large_dots(surface: &mut Surface, palette: &Palette) {
    dot_grid(surface, palette.primary(), 4.0, 8);
}

pub fn small_squares(surface: &mut Surface, palette: &Palette) {
    dot_grid(surface, palette.primary(), 4.0, 6);
}

pub fn large_squares(surface: &mut Surface, palette: &Palette) {
    dot_grid(surface, palette.primary(), 8.0, 10);
}

/// Small dots with a solid square in the bottom-right corner.
pub fn dots_with_corner(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    dot_grid(surface, palette.primary(), 1.0, 4);
    surface.fill_rect(w - 12.0, h - 12.0, 8.0, 8.0, palette.primary());
}

/// Round dots of radius 3 every 10px.
pub fn circles(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    for y in steps(10, h as i64, 10) {
        for x in steps(10, w as i64, 10) {
            surface.fill_circle(x, y, 3.0, palette.primary());
        }
    }
}

/// A disc of fine dots with a plus sign in the middle.
pub fn dots_circle(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    let (cx, cy) = (w / 2.0, h / 2.0);
    let radius = w.min(h) * 0.35;
    for y in steps(0, h as i64, 3) {
        for x in steps(0, w as i64, 3) {
            let (dx, dy) = (x - cx, y - cy);
            if (dx * dx + dy * dy).sqrt() < radius {
                surface.fill_rect(x, y, 1.0, 1.0, palette.primary());
            }
        }
    }
    surface.fill_rect(cx - 2.0, cy - 6.0, 4.0, 12.0, palette.primary());
    surface.fill_rect(cx - 6.0, cy - 2.0, 12.0, 4.0, palette.primary());
}

/// Sparse dots offset on alternating rows.
pub fn dots_zigzag(surface: &mut Surface, palette: &Palette) {
    let (w, h) = (surface.width() as i64, surface.height() as i64);
    for (row, y) in steps(0, h, 3).enumerate() {
        let offset = if row % 2 == 0 { 0 } else { 6 };
        for x in steps(offset, w, 12) {
            surface.fill_rect(x, y, 1.0, 1.0, palette.primary());
        }
    }
}

/// Dots on every other diagonal of a 3px lattice.
pub fn dots_diagonal(surface: &mut Surface, palette: &Palette) {
    let (w, h) = (surface.width() as i64, surface.height() as i64);
    for y in (0..h).step_by(3) {
        for x in (0..w).step_by(3) {
            if (x + y) % 6 == 0 {
                surface.fill_rect(x as f64, y as f64, 1.0, 1.0, palette.primary());
            }
        }
    }
}

/// A single 3px dot in the center.
pub fn small_dot(surface: &mut Surface, palette: &Palette) {
    let (w, h) = dims(surface);
    surface.fill_circle(w / 2.0, h / 2.0, 3.0, palette.primary());
}
