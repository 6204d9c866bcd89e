// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window showing the canvas with the control strip underneath.
// 2) The strip's buttons, with the current tool/size/color highlighted.
// 3) A tiny 5x7 bitmap font for the button glyphs.

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::input::{DisplaySurface, InputSample, InputSource};
use crate::panel::ControlStrip;
use crate::tool::Selection;
use crate::types::{BLACK, CYAN, Color, FrameBuffer, Position, RED, Rect, WHITE, pack_rgb};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,      // the on-screen window you see
    strip: ControlStrip, // where the buttons go
    screen: FrameBuffer, // reused every frame
}

impl Drawer {
    /// Create a window tall enough for the canvas plus the control strip.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, canvas_width: usize, canvas_height: usize, strip: ControlStrip, fps: usize) -> Result<Self> {
        let height = canvas_height + ControlStrip::HEIGHT;
        let mut window = Window::new(title, canvas_width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self { window, strip, screen: FrameBuffer::new(canvas_width, height) })
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current mouse position in window pixels; None once it leaves the window.
    pub fn mouse_pos(&self) -> Option<Position> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Position::new(x.max(0.0) as usize, y.max(0.0) as usize))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }
}

impl InputSource for Drawer {
    fn poll(&mut self) -> InputSample {
        InputSample {
            quit: !self.is_open() || self.esc_pressed(),
            pressed: self.left_mouse_down(),
            cursor: self.mouse_pos(),
        }
    }
}

impl DisplaySurface for Drawer {
    /// Push the pixels for this frame to the screen.
    /// minifb also refreshes mouse/keyboard state here, so polling only sees
    /// new input after a present.
    fn present(&mut self, canvas: &Canvas, selection: &Selection) -> Result<()> {
        compose(&mut self.screen, canvas, &self.strip, selection);
        self.window
            .update_with_buffer(&self.screen.pixels, self.screen.width, self.screen.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }
}

/// Build one frame: canvas on top, strip below.
pub fn compose(fb: &mut FrameBuffer, canvas: &Canvas, strip: &ControlStrip, selection: &Selection) {
    let w = canvas.width().min(fb.width);
    for (i, color) in canvas.pixels().enumerate() {
        let (x, y) = (i % canvas.width(), i / canvas.width());
        if x < w && y < fb.height {
            fb.pixels[y * fb.width + x] = pack_rgb(*color);
        }
    }
    draw_strip(fb, strip, selection);
}

/// Render the control strip, highlighting what `selection` says is active.
/// Visual: cyan buttons, red for the current tool and size; the current
/// color swatch is drawn one pixel smaller than the others.
pub fn draw_strip(fb: &mut FrameBuffer, strip: &ControlStrip, selection: &Selection) {
    fill_rect(fb, Rect::new(0, strip.origin_y, fb.width, ControlStrip::HEIGHT), WHITE);

    for region in &strip.tools {
        let bg = if region.value == selection.tool { RED } else { CYAN };
        draw_button(fb, region.bounds, region.label, bg);
    }
    for region in &strip.thicknesses {
        let bg = if region.value == selection.thickness { RED } else { CYAN };
        draw_button(fb, region.bounds, region.label, bg);
    }
    for region in &strip.colors {
        let swatch = if region.value == selection.color { region.bounds.inset(1) } else { region.bounds };
        fill_rect(fb, swatch, region.value);
    }
}

fn draw_button(fb: &mut FrameBuffer, bounds: Rect, label: &str, bg: Color) {
    fill_rect(fb, bounds, bg);
    // Glyphs are drawn at 2x: 10x14 pixels each.
    let text_w = label.chars().count() as i32 * 12 - 2;
    let x = bounds.x as i32 + (bounds.width as i32 - text_w) / 2;
    let y = bounds.y as i32 + (bounds.height as i32 - 14) / 2;
    draw_text_5x7(fb, x, y, label, 2, pack_rgb(BLACK));
}

/* ---------- Software drawing: pixels, rectangles, tiny bitmap font ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Fill a rectangle, clipped to the framebuffer.
pub fn fill_rect(fb: &mut FrameBuffer, rect: Rect, color: Color) {
    let packed = pack_rgb(color);
    for y in rect.y..(rect.y + rect.height).min(fb.height) {
        for x in rect.x..(rect.x + rect.width).min(fb.width) {
            fb.pixels[y * fb.width + x] = packed;
        }
    }
}

/* ---------- 5x7 bitmap font (just the button glyphs) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Brush sizes
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),

        // Tools: Fill, Draw, Erase, Replace, Clear
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y), each font pixel `scale` screen pixels wide.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, scale: i32, color: u32) {
    let Some(rows) = glyph5x7(ch) else {
        return;
    };
    for (ry, rowbits) in rows.iter().enumerate() {
        for rx in 0..5 {
            if (rowbits & (1 << (4 - rx))) == 0 {
                continue;
            }
            for sy in 0..scale {
                for sx in 0..scale {
                    put_pixel(fb, x + rx * scale + sx, y + ry as i32 * scale + sy, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs with one font pixel of spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, scale: i32, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, scale, color);
        x += 6 * scale;
    }
}
