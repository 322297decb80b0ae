//! Owned raster surface and its drawing primitives.
//!
//! Shapes are rasterized without anti-aliasing: a pixel is painted when its
//! center falls inside the shape. Fills use the nonzero winding rule.

use std::ops::Range;

use crate::color::Rgb;
use crate::path::Path;

/// Offset applied to stroke geometry so a 1px stroke on an integer
/// coordinate lands on that pixel row or column instead of the one before.
const STROKE_BIAS: f64 = 1e-6;

type Edge = ((f64, f64), (f64, f64));

/// A fixed-size RGB pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Surface {
    /// Create a surface filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Change the dimensions. Contents are cleared when the size changes.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![Rgb::default(); width as usize * height as usize];
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Number of pixels currently set to `color`.
    pub fn count(&self, color: Rgb) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Paint every pixel.
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Fill an axis-aligned rectangle. Negative sizes extend left/up.
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        let (x, w) = if w < 0.0 { (x + w, -w) } else { (x, w) };
        let (y, h) = if h < 0.0 { (y + h, -h) } else { (y, h) };
        let cols = pixel_span(x, x + w, self.width);
        for py in pixel_span(y, y + h, self.height) {
            self.fill_row(py, cols.clone(), color);
        }
    }

    /// Outline a rectangle with a centered stroke of `line_width`.
    pub fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, line_width: f64, color: Rgb) {
        let half = line_width / 2.0;
        let (x, y) = (x + STROKE_BIAS, y + STROKE_BIAS);
        self.fill_rect(x - half, y - half, w + line_width, line_width, color);
        self.fill_rect(x - half, y + h - half, w + line_width, line_width, color);
        self.fill_rect(x - half, y - half, line_width, h + line_width, color);
        self.fill_rect(x + w - half, y - half, line_width, h + line_width, color);
    }

    /// Fill a disc.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb) {
        if radius <= 0.0 {
            return;
        }
        self.paint_disc_band(cx, cy, radius, |d| d <= radius, color);
    }

    /// Outline a circle with a centered stroke of `line_width`.
    pub fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, line_width: f64, color: Rgb) {
        let half = line_width / 2.0;
        if half <= 0.0 {
            return;
        }
        let (cx, cy) = (cx + STROKE_BIAS, cy + STROKE_BIAS);
        self.paint_disc_band(cx, cy, radius + half, |d| (d - radius).abs() <= half, color);
    }

    /// Stroke a straight segment with butt caps.
    pub fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), line_width: f64, color: Rgb) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let len = (dx * dx + dy * dy).sqrt();
        if len == 0.0 || line_width <= 0.0 {
            return;
        }
        let half = line_width / 2.0;
        let (nx, ny) = (-dy / len * half, dx / len * half);
        let (ax, ay) = (from.0 + STROKE_BIAS, from.1 + STROKE_BIAS);
        let (bx, by) = (to.0 + STROKE_BIAS, to.1 + STROKE_BIAS);
        let corners = [
            (ax + nx, ay + ny),
            (bx + nx, by + ny),
            (bx - nx, by - ny),
            (ax - nx, ay - ny),
        ];
        let edges: Vec<Edge> = (0..4).map(|i| (corners[i], corners[(i + 1) % 4])).collect();
        self.fill_edges(&edges, color);
    }

    /// Fill every subpath of `path`, implicitly closing open ones.
    pub fn fill_path(&mut self, path: &Path, color: Rgb) {
        let mut edges = Vec::new();
        for sub in path.subpaths() {
            let pts = &sub.points;
            if pts.len() < 3 {
                continue;
            }
            for i in 0..pts.len() {
                edges.push((pts[i], pts[(i + 1) % pts.len()]));
            }
        }
        self.fill_edges(&edges, color);
    }

    /// Stroke every segment of `path`.
    pub fn stroke_path(&mut self, path: &Path, line_width: f64, color: Rgb) {
        for sub in path.subpaths() {
            for pair in sub.points.windows(2) {
                self.stroke_line(pair[0], pair[1], line_width, color);
            }
            if sub.closed && sub.points.len() > 2 {
                let first = sub.points[0];
                let last = sub.points[sub.points.len() - 1];
                self.stroke_line(last, first, line_width, color);
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn fill_row(&mut self, y: u32, cols: Range<u32>, color: Rgb) {
        if cols.is_empty() {
            return;
        }
        let start = self.index(cols.start, y);
        let end = self.index(cols.end - 1, y) + 1;
        self.pixels[start..end].fill(color);
    }

    fn paint_disc_band(
        &mut self,
        cx: f64,
        cy: f64,
        outer: f64,
        inside: impl Fn(f64) -> bool,
        color: Rgb,
    ) {
        let cols = pixel_span(cx - outer - 1.0, cx + outer + 1.0, self.width);
        for py in pixel_span(cy - outer - 1.0, cy + outer + 1.0, self.height) {
            let dy = py as f64 + 0.5 - cy;
            for px in cols.clone() {
                let dx = px as f64 + 0.5 - cx;
                if inside((dx * dx + dy * dy).sqrt()) {
                    let i = self.index(px, py);
                    self.pixels[i] = color;
                }
            }
        }
    }

    /// Scanline fill with the nonzero winding rule.
    fn fill_edges(&mut self, edges: &[Edge], color: Rgb) {
        let Some((min_y, max_y)) = edges.iter().fold(None, |acc: Option<(f64, f64)>, e| {
            let lo = e.0.1.min(e.1.1);
            let hi = e.0.1.max(e.1.1);
            Some(acc.map_or((lo, hi), |(a, b)| (a.min(lo), b.max(hi))))
        }) else {
            return;
        };

        let mut crossings: Vec<(f64, i32)> = Vec::new();
        for py in pixel_span(min_y, max_y, self.height) {
            let y = py as f64 + 0.5;
            crossings.clear();
            for &((x0, y0), (x1, y1)) in edges {
                let dir = if y0 <= y && y1 > y {
                    1
                } else if y1 <= y && y0 > y {
                    -1
                } else {
                    continue;
                };
                let x = x0 + (y - y0) * (x1 - x0) / (y1 - y0);
                crossings.push((x, dir));
            }
            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut winding = 0;
            for k in 0..crossings.len().saturating_sub(1) {
                winding += crossings[k].1;
                if winding != 0 {
                    let cols = pixel_span(crossings[k].0, crossings[k + 1].0, self.width);
                    self.fill_row(py, cols, color);
                }
            }
        }
    }
}

/// Pixel indices whose centers lie in `[start, end)`, clamped to `0..limit`.
fn pixel_span(start: f64, end: f64, limit: u32) -> Range<u32> {
    let lo = (start - 0.5).ceil().max(0.0);
    let hi = (end - 0.5).ceil().min(limit as f64);
    if lo < hi { lo as u32..hi as u32 } else { 0..0 }
}
