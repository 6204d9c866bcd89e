// The paintable pixel grid.
// Visual: this is the white area at the top of the window that strokes,
// fills and replaces change.

use crate::error::{Error, Result};
use crate::types::{Color, Position};
use image::RgbImage;

#[derive(Clone)]
pub struct Canvas {
    image: RgbImage, // one Rgb<u8> per cell, row-major
}

impl Canvas {
    /// Create a `width` x `height` grid with every cell set to `background`.
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Self { image: RgbImage::from_pixel(width as u32, height as u32, background) }
    }

    pub fn width(&self) -> usize {
        self.image.width() as usize
    }

    pub fn height(&self) -> usize {
        self.image.height() as usize
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width() && pos.y < self.height()
    }

    /// Read one cell.
    pub fn get_pixel(&self, pos: Position) -> Result<Color> {
        if !self.contains(pos) {
            return Err(Error::OutOfBounds { x: pos.x, y: pos.y });
        }
        Ok(*self.image.get_pixel(pos.x as u32, pos.y as u32))
    }

    /// Write one cell. Positions off the grid are ignored.
    pub fn set_pixel(&mut self, pos: Position, color: Color) {
        if self.contains(pos) {
            self.image.put_pixel(pos.x as u32, pos.y as u32, color);
        }
    }

    #[inline]
    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        self.set_pixel(Position::new(x as usize, y as usize), color);
    }

    /// Fill a `thickness` x `thickness` square centered on (cx, cy).
    fn stamp_square(&mut self, cx: i64, cy: i64, thickness: i64, color: Color) {
        let lo = -(thickness / 2);
        for dy in lo..lo + thickness {
            for dx in lo..lo + thickness {
                self.plot(cx + dx, cy + dy, color);
            }
        }
    }

    /// Draw a straight segment from `p0` to `p1`, both ends included.
    ///
    /// Bresenham walks the center line; at every step a span of `thickness`
    /// pixels is laid across the minor axis, and both ends get a square cap.
    /// A zero-length segment is therefore a square dot.
    pub fn draw_line(&mut self, p0: Position, p1: Position, color: Color, thickness: u32) {
        let t = thickness.max(1) as i64;
        let lo = -(t / 2);
        let (mut x0, mut y0) = (p0.x as i64, p0.y as i64);
        let (x1, y1) = (p1.x as i64, p1.y as i64);

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        // Mostly vertical lines get horizontal spans and vice versa.
        let steep = -dy > dx;
        let mut err = dx + dy;
        loop {
            for o in lo..lo + t {
                if steep {
                    self.plot(x0 + o, y0, color);
                } else {
                    self.plot(x0, y0 + o, color);
                }
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }

        self.stamp_square(p0.x as i64, p0.y as i64, t, color);
        self.stamp_square(x1, y1, t, color);
    }

    /// Set every cell to `background`.
    pub fn clear(&mut self, background: Color) {
        for px in self.image.pixels_mut() {
            *px = background;
        }
    }

    /// Row-major view of every cell.
    pub fn pixels(&self) -> impl Iterator<Item = &Color> {
        self.image.pixels()
    }

    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut Color> {
        self.image.pixels_mut()
    }
}
