//! The full-width "warped space" banner.
//!
//! A continuously animated field of square blocks. Each block's color comes
//! from two LCG-derived pseudo-random values seeded by its position and the
//! current time step, compared against a threshold that drifts with time.

use pixtile_core::{CREAM, LCG_MODULUS, Lcg, NAVY, Rgb, Surface};
use tracing::debug;

use crate::pacing::{FrameHandle, FramePacer};

/// Fixed banner height in logical pixels.
pub const BANNER_HEIGHT: u32 = 128;

/// Extra width beyond the viewport so the right edge is always covered.
pub const VIEWPORT_MARGIN: u32 = 100;

/// Edge length of one noise block.
pub const BLOCK_SIZE: u32 = 4;

const SPARKLE_MULTIPLIER: u64 = 7919;
const SPARKLE_INCREMENT: u64 = 104729;
const SPARKLE_CHANCE: f64 = 0.95;

/// Color of the block at `(x, y)` on tick `offset`.
pub fn block_color(x: u32, y: u32, offset: u64, foreground: Rgb, background: Rgb) -> Rgb {
    let time = offset as f64 * 0.1;
    let step = (time * 10.0).floor() as u64;
    let seed = (x as u64 * 73 + y as u64 * 37 + step) % 1000;

    let primary = Lcg::step(seed) as f64 / LCG_MODULUS as f64;
    let sparkle =
        ((seed * SPARKLE_MULTIPLIER + SPARKLE_INCREMENT) % LCG_MODULUS) as f64 / LCG_MODULUS as f64;

    let threshold = 0.3 + (time + x as f64 * 0.01 + y as f64 * 0.01).sin() * 0.2;

    if sparkle > SPARKLE_CHANCE || primary < threshold {
        foreground
    } else {
        background
    }
}

/// Banner state: its surface, time counter and pending frame request.
#[derive(Debug)]
pub struct WarpedBackground {
    surface: Surface,
    offset: u64,
    pending: Option<FrameHandle>,
    foreground: Rgb,
    background: Rgb,
}

impl WarpedBackground {
    /// Size the banner for a viewport `viewport_width` pixels wide.
    pub fn new(viewport_width: u32) -> Self {
        Self {
            surface: Surface::new(viewport_width + VIEWPORT_MARGIN, BANNER_HEIGHT),
            offset: 0,
            pending: None,
            foreground: CREAM,
            background: NAVY,
        }
    }

    pub fn with_colors(mut self, foreground: Rgb, background: Rgb) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    /// Re-measure after the viewport changed size.
    pub fn resize(&mut self, viewport_width: u32) {
        let width = viewport_width + VIEWPORT_MARGIN;
        if width == self.surface.width() {
            return;
        }
        debug!(width, "resizing warped banner");
        self.surface.resize(width, BANNER_HEIGHT);
        self.render();
    }

    /// Draw the first frame and start the loop. Mounting twice is a no-op.
    pub fn mount(&mut self, pacer: &mut dyn FramePacer) {
        if self.pending.is_some() {
            return;
        }
        self.tick(pacer);
    }

    /// Stop the loop.
    pub fn unmount(&mut self, pacer: &mut dyn FramePacer) {
        if let Some(handle) = self.pending.take() {
            pacer.cancel_frame(handle);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.pending.is_some()
    }

    /// Run the tick `handle` was requested for. Returns `true` if drawn.
    pub fn on_frame(&mut self, handle: FrameHandle, pacer: &mut dyn FramePacer) -> bool {
        if self.pending != Some(handle) {
            return false;
        }
        self.tick(pacer);
        true
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Ticks drawn so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    fn tick(&mut self, pacer: &mut dyn FramePacer) {
        self.render();
        self.offset += 1;
        self.pending = Some(pacer.request_frame());
    }

    /// Paint the current time step.
    fn render(&mut self) {
        self.surface.fill(self.background);
        let block = BLOCK_SIZE as f64;
        for y in (0..self.surface.height()).step_by(BLOCK_SIZE as usize) {
            for x in (0..self.surface.width()).step_by(BLOCK_SIZE as usize) {
                let color = block_color(x, y, self.offset, self.foreground, self.background);
                if color != self.background {
                    self.surface.fill_rect(x as f64, y as f64, block, block, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacing::FrameQueue;

    #[test]
    fn test_block_color_is_deterministic() {
        for offset in [0, 1, 17, 500] {
            assert_eq!(
                block_color(12, 40, offset, CREAM, NAVY),
                block_color(12, 40, offset, CREAM, NAVY)
            );
        }
    }

    #[test]
    fn test_block_at_origin_first_tick() {
        // seed 0: r1 = 49297 / 233280 ≈ 0.211 < threshold 0.3, so foreground.
        assert_eq!(block_color(0, 0, 0, CREAM, NAVY), CREAM);
    }

    #[test]
    fn test_sparkle_overrides_threshold() {
        // seed 840: r1 ≈ 0.703 is well above threshold ≈ 0.443, but the
        // second value ≈ 0.964 clears the sparkle cut-off.
        assert_eq!(block_color(80, 0, 0, CREAM, NAVY), CREAM);
        // seed 16: r1 ≈ 0.849, r2 ≈ 0.992.
        assert_eq!(block_color(192, 0, 0, CREAM, NAVY), CREAM);
    }

    #[test]
    fn test_threshold_drifts_with_time() {
        // Offsets 1 and 1001 share seed 1 (r1 ≈ 0.251, no sparkle); only
        // the threshold moves, from ≈ 0.320 to ≈ 0.216.
        assert_eq!(block_color(0, 0, 1, CREAM, NAVY), CREAM);
        assert_eq!(block_color(0, 0, 1001, CREAM, NAVY), NAVY);
    }

    #[test]
    fn test_block_flickers_over_time() {
        let frames: Vec<Rgb> = (0..40).map(|offset| block_color(20, 8, offset, CREAM, NAVY)).collect();
        assert_eq!(frames[0], CREAM);
        assert_eq!(frames[1], NAVY);
        assert_eq!(frames[17], CREAM);
        assert_eq!(frames[27], NAVY);
    }

    #[test]
    fn test_known_blocks() {
        let cases = [
            (240, 32, 3030, NAVY),
            (936, 120, 4758, CREAM),
            (64, 0, 3843, NAVY),
            (264, 56, 1570, NAVY),
            (856, 120, 3253, CREAM),
            (652, 36, 1899, CREAM),
            (648, 36, 4285, NAVY),
            (396, 0, 524, NAVY),
        ];
        for (x, y, offset, expected) in cases {
            assert_eq!(block_color(x, y, offset, CREAM, NAVY), expected, "({x}, {y}) @ {offset}");
        }
    }

    #[test]
    fn test_sizes_to_viewport_plus_margin() {
        let mut banner = WarpedBackground::new(400);
        assert_eq!(banner.surface().width(), 500);
        assert_eq!(banner.surface().height(), BANNER_HEIGHT);
        banner.resize(640);
        assert_eq!(banner.surface().width(), 740);
    }

    #[test]
    fn test_field_mixes_colors() {
        let mut queue = FrameQueue::new();
        let mut banner = WarpedBackground::new(200);
        banner.mount(&mut queue);
        let surface = banner.surface();
        assert!(surface.count(CREAM) > 0);
        assert!(surface.count(NAVY) > 0);
    }

    #[test]
    fn test_loop_advances_and_stops() {
        let mut queue = FrameQueue::new();
        let mut banner = WarpedBackground::new(64);
        banner.mount(&mut queue);
        banner.mount(&mut queue);
        assert_eq!(queue.pending(), 1);

        for _ in 0..3 {
            for handle in queue.advance() {
                assert!(banner.on_frame(handle, &mut queue));
            }
        }
        assert_eq!(banner.offset(), 4);

        banner.unmount(&mut queue);
        banner.unmount(&mut queue);
        assert!(!banner.is_mounted());
        assert!(queue.advance().is_empty());
        assert_eq!(banner.offset(), 4);
    }
}
