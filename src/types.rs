// Core value types shared by the canvas, the tools and the window.

use crate::error::Error;
use image::Rgb;

/// One pixel color. Equality is exact per channel; there is no alpha.
pub type Color = Rgb<u8>;

pub const WHITE: Color = Rgb([255, 255, 255]);
pub const BLACK: Color = Rgb([0, 0, 0]);
pub const RED: Color = Rgb([255, 0, 0]);
pub const GREEN: Color = Rgb([0, 255, 0]);
pub const BLUE: Color = Rgb([0, 0, 255]);
pub const YELLOW: Color = Rgb([255, 255, 0]);
pub const CYAN: Color = Rgb([0, 255, 255]);
pub const MAGENTA: Color = Rgb([255, 0, 255]);

/// Pack a color as 0x00RRGGBB, the layout minifb expects.
#[inline]
pub fn pack_rgb(color: Color) -> u32 {
    let [r, g, b] = color.0;
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Parse `RRGGBB` or `#RRGGBB`.
pub fn parse_color(text: &str) -> Result<Color, Error> {
    let hex = text.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(Error::InvalidColor(text.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidColor(text.to_string()))
    };
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// A pixel coordinate on the window. Always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in window pixels. `x..x+width`, `y..y+height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle of the given size whose center sits on (cx, cy).
    pub const fn centered(cx: usize, cy: usize, width: usize, height: usize) -> Self {
        Self::new(cx - width / 2, cy - height / 2, width, height)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.x
            && pos.y >= self.y
            && pos.x < self.x + self.width
            && pos.y < self.y + self.height
    }

    /// Same center, `by` pixels smaller on every side.
    pub fn inset(&self, by: usize) -> Self {
        Self::new(
            self.x + by,
            self.y + by,
            self.width.saturating_sub(2 * by),
            self.height.saturating_sub(2 * by),
        )
    }
}

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // window width (pixels)
    pub height: usize,     // window height (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn packs_channels_as_xrgb() {
        assert_eq!(pack_rgb(Rgb([0x12, 0x34, 0x56])), 0x0012_3456);
        assert_eq!(pack_rgb(WHITE), 0x00FF_FFFF);
    }

    #[test]
    fn parses_hex_colors_with_or_without_hash() {
        assert_eq!(parse_color("ff0000").unwrap(), RED);
        assert_eq!(parse_color("#00FFff").unwrap(), CYAN);
        assert!(matches!(parse_color("fff"), Err(Error::InvalidColor(_))));
        assert!(matches!(parse_color("gg0000"), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10, 20, 16, 16);
        assert!(r.contains(Position::new(10, 20)));
        assert!(r.contains(Position::new(25, 35)));
        assert!(!r.contains(Position::new(26, 35)));
        assert!(!r.contains(Position::new(9, 20)));
        assert_eq!(Rect::centered(320, 544, 20, 18), Rect::new(310, 535, 20, 18));
        assert_eq!(r.inset(1), Rect::new(11, 21, 14, 14));
    }
}
