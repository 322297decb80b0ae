//! The built-in pattern generators.
//!
//! Every generator paints onto the surface it is given using only the
//! surface size, the palette and (for animated ones) the frame index. None
//! of them keep state between calls.

pub(crate) mod animated;
pub(crate) mod dots;
pub(crate) mod lines;
pub(crate) mod shapes;
pub(crate) mod tilings;

use pixtile_core::{Rgb, Surface};

/// Surface dimensions as floats.
fn dims(surface: &Surface) -> (f64, f64) {
    (surface.width() as f64, surface.height() as f64)
}

/// Integer positions `start, start + step, ..` below `end`, as floats.
fn steps(start: i64, end: i64, step: usize) -> impl Iterator<Item = f64> {
    (start..end).step_by(step).map(|v| v as f64)
}

/// Square dots of `size` on a regular grid starting at `spacing`.
fn dot_grid(surface: &mut Surface, color: Rgb, size: f64, spacing: usize) {
    let (w, h) = (surface.width() as i64, surface.height() as i64);
    let start = spacing as i64;
    for y in steps(start, h, spacing) {
        for x in steps(start, w, spacing) {
            surface.fill_rect(x, y, size, size, color);
        }
    }
}
