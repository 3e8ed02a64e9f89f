//! Half-block pixel buffer.
//!
//! World shapes are scaled into a grid with two pixels per terminal cell
//! (upper and lower half), then stamped row by row as '▀' spans whose
//! foreground is the top pixel and background the bottom pixel.

use crate::core::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::core::geometry::Rect;
use crate::game::sprites::{Circle, Rgb, Segment};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

const HALF_BLOCK: char = '\u{2580}'; // ▀

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub struct PixelCanvas {
    cols: usize,
    rows: usize,
    x_scale: f64,
    y_scale: f64,
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    /// Canvas covering `cols` x `term_rows` terminal cells, cleared to `fill`.
    pub fn new(cols: u16, term_rows: u16, fill: Rgb) -> Self {
        let cols = cols as usize;
        let rows = term_rows as usize * 2;
        Self {
            cols,
            rows,
            x_scale: cols as f64 / WORLD_WIDTH as f64,
            y_scale: rows as f64 / WORLD_HEIGHT as f64,
            pixels: vec![fill; cols * rows],
        }
    }

    pub fn width(&self) -> usize {
        self.cols
    }

    /// Height in pixels (twice the terminal rows).
    pub fn height(&self) -> usize {
        self.rows
    }

    pub fn get(&self, px: usize, py: usize) -> Option<Rgb> {
        (px < self.cols && py < self.rows).then(|| self.pixels[py * self.cols + px])
    }

    fn set(&mut self, px: i64, py: i64, color: Rgb) {
        if px < 0 || py < 0 || px >= self.cols as i64 || py >= self.rows as i64 {
            return;
        }
        self.pixels[py as usize * self.cols + px as usize] = color;
    }

    /// Pixel span covering world range [start, end), at least one pixel wide.
    fn span(start: i32, end: i32, scale: f64) -> (i64, i64) {
        let a = (start as f64 * scale).round() as i64;
        let b = (end as f64 * scale).round() as i64;
        (a, b.max(a + 1))
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let (x0, x1) = Self::span(rect.left(), rect.right(), self.x_scale);
        let (y0, y1) = Self::span(rect.top(), rect.bottom(), self.y_scale);
        for py in y0..y1 {
            for px in x0..x1 {
                self.set(px, py, color);
            }
        }
    }

    /// Filled ellipse inscribed in `bounds`.
    pub fn fill_ellipse(&mut self, bounds: Rect, color: Rgb) {
        let (x0, x1) = Self::span(bounds.left(), bounds.right(), self.x_scale);
        let (y0, y1) = Self::span(bounds.top(), bounds.bottom(), self.y_scale);
        let cx = (x0 + x1) as f64 / 2.0;
        let cy = (y0 + y1) as f64 / 2.0;
        let rx = ((x1 - x0) as f64 / 2.0).max(0.5);
        let ry = ((y1 - y0) as f64 / 2.0).max(0.5);

        for py in y0..y1 {
            for px in x0..x1 {
                let dx = (px as f64 + 0.5 - cx) / rx;
                let dy = (py as f64 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.set(px, py, color);
                }
            }
        }
    }

    pub fn fill_circle(&mut self, circle: Circle, color: Rgb) {
        let r = circle.radius;
        self.fill_ellipse(
            Rect::new(circle.cx - r, circle.cy - r, r * 2, r * 2),
            color,
        );
    }

    pub fn draw_segment(&mut self, seg: Segment, color: Rgb) {
        let x0 = seg.x0 as f64 * self.x_scale;
        let y0 = seg.y0 as f64 * self.y_scale;
        let x1 = seg.x1 as f64 * self.x_scale;
        let y1 = seg.y1 as f64 * self.y_scale;
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as i64;

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let px = (x0 + (x1 - x0) * t).floor() as i64;
            let py = (y0 + (y1 - y0) * t).floor() as i64;
            self.set(px, py, color);
        }
    }

    /// Terminal row that world coordinate `y` falls on.
    pub fn term_row(&self, y: i32) -> u16 {
        ((y as f64 * self.y_scale) / 2.0).floor().max(0.0) as u16
    }

    /// Collapse pixel pairs into styled half-block lines, merging equal runs.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.rows / 2);

        for term_row in 0..self.rows / 2 {
            let top = &self.pixels[term_row * 2 * self.cols..(term_row * 2 + 1) * self.cols];
            let bottom = &self.pixels[(term_row * 2 + 1) * self.cols..(term_row * 2 + 2) * self.cols];

            let mut spans: Vec<Span> = Vec::new();
            let mut run: Option<(Rgb, Rgb)> = None;
            let mut text = String::new();

            for (&fg, &bg) in top.iter().zip(bottom.iter()) {
                if run != Some((fg, bg)) && !text.is_empty() {
                    if let Some((rfg, rbg)) = run {
                        spans.push(Span::styled(
                            std::mem::take(&mut text),
                            Style::default().fg(to_color(rfg)).bg(to_color(rbg)),
                        ));
                    }
                }
                run = Some((fg, bg));
                text.push(HALF_BLOCK);
            }
            if let Some((rfg, rbg)) = run {
                if !text.is_empty() {
                    spans.push(Span::styled(
                        text,
                        Style::default().fg(to_color(rfg)).bg(to_color(rbg)),
                    ));
                }
            }

            lines.push(Line::from(spans));
        }

        lines
    }
}
