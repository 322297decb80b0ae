//! Time-varying patterns. Each one repaints its full dot lattice on every
//! frame, choosing between primary, secondary and background per dot.

use pixtile_core::{Palette, Surface};

use super::{dims, steps};

const DOT_SIZE: f64 = 2.0;
const DOT_SPACING: usize = 4;

/// Phase advance per frame.
const TIME_STEP: f64 = 0.05;

/// Wave fronts pulsing out from the center.
pub fn radial(surface: &mut Surface, palette: &Palette, frame: u64) {
    let (w, h) = dims(surface);
    let (cx, cy) = (w / 2.0, h / 2.0);
    let time = frame as f64 * TIME_STEP;

    for y in steps(0, h as i64, DOT_SPACING) {
        for x in steps(0, w as i64, DOT_SPACING) {
            let (dx, dy) = (x - cx, y - cy);
            let distance = (dx * dx + dy * dy).sqrt();
            let wave = (distance * 0.1 - time).sin() * 0.5 + 0.5;

            let color = if distance < 20.0 + wave * 20.0 {
                palette.primary()
            } else if distance < 45.0 + wave * 10.0 {
                palette.secondary()
            } else {
                palette.background()
            };
            surface.fill_rect(x, y, DOT_SIZE, DOT_SIZE, color);
        }
    }
}

/// A horizontal sine band travelling sideways.
pub fn wave(surface: &mut Surface, palette: &Palette, frame: u64) {
    let (w, h) = dims(surface);
    let center_y = h / 2.0;
    let time = frame as f64 * TIME_STEP;

    for y in steps(0, h as i64, DOT_SPACING) {
        for x in steps(0, w as i64, DOT_SPACING) {
            let wave_y = (x * 0.1 + time).sin() * 20.0 + center_y;
            let gap = (y - wave_y).abs();
            let color = if gap < 15.0 {
                palette.primary()
            } else if gap < 30.0 {
                palette.secondary()
            } else {
                palette.background()
            };
            surface.fill_rect(x, y, DOT_SIZE, DOT_SIZE, color);
        }
    }
}

/// Diagonal bands whose phase shifts every frame.
pub fn animated_grid(surface: &mut Surface, palette: &Palette, frame: u64) {
    let (w, h) = dims(surface);
    let time = frame as f64 * TIME_STEP;

    for y in steps(0, h as i64, DOT_SPACING) {
        for x in steps(0, w as i64, DOT_SPACING) {
            let phase = (x * 0.05 + y * 0.05 + time).sin();
            let color = if phase > 0.0 {
                palette.primary()
            } else {
                palette.background()
            };
            surface.fill_rect(x, y, DOT_SIZE, DOT_SIZE, color);
        }
    }
}
