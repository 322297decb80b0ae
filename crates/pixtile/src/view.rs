//! Drawing pixel surfaces into the terminal buffer.

use pixtile_core::Surface;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Upper half block: foreground paints the top pixel, background the bottom.
const UPPER_HALF: char = '▀';

/// Renders a [`Surface`] with two vertical pixels per cell, scaled with
/// nearest-neighbour sampling to fill the target area.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceView<'a> {
    surface: &'a Surface,
    crop: Option<(u32, u32)>,
}

impl<'a> SurfaceView<'a> {
    pub fn new(surface: &'a Surface) -> Self {
        Self {
            surface,
            crop: None,
        }
    }

    /// Only show the top-left `width` x `height` region of the surface.
    pub fn crop(mut self, width: u32, height: u32) -> Self {
        self.crop = Some((width, height));
        self
    }

    fn source_size(&self) -> (u32, u32) {
        let (width, height) = (self.surface.width(), self.surface.height());
        match self.crop {
            Some((w, h)) => (w.min(width), h.min(height)),
            None => (width, height),
        }
    }
}

/// Map `index` of `count` evenly spaced samples onto `0..source`.
fn sample(index: u32, count: u32, source: u32) -> u32 {
    (u64::from(index) * u64::from(source) / u64::from(count)) as u32
}

impl Widget for SurfaceView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (src_width, src_height) = self.source_size();
        if area.is_empty() || src_width == 0 || src_height == 0 {
            return;
        }

        let columns = u32::from(area.width);
        let pixel_rows = u32::from(area.height) * 2;
        for cy in 0..area.height {
            let top_y = sample(u32::from(cy) * 2, pixel_rows, src_height);
            let bottom_y = sample(u32::from(cy) * 2 + 1, pixel_rows, src_height);
            for cx in 0..area.width {
                let x = sample(u32::from(cx), columns, src_width);
                let (Some(top), Some(bottom)) =
                    (self.surface.pixel(x, top_y), self.surface.pixel(x, bottom_y))
                else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((area.x + cx, area.y + cy)) {
                    cell.set_char(UPPER_HALF)
                        .set_fg(top.into())
                        .set_bg(bottom.into());
                }
            }
        }
    }
}
