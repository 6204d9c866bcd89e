// What the interaction loop needs from the outside world.
// The minifb window implements both traits (see draw.rs); tests swap in a
// scripted stand-in.

use crate::canvas::Canvas;
use crate::error::Result;
use crate::tool::Selection;
use crate::types::Position;

/// One poll of the input devices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSample {
    pub quit: bool,                 // window closed or Escape held
    pub pressed: bool,              // left mouse button down
    pub cursor: Option<Position>,   // None when the pointer is outside the window
}

impl InputSample {
    /// Cursor position, but only while a press is held.
    pub fn press(&self) -> Option<Position> {
        if self.pressed { self.cursor } else { None }
    }
}

pub trait InputSource {
    /// Sample the current input state. Never blocks.
    fn poll(&mut self) -> InputSample;
}

pub trait DisplaySurface {
    /// Show the canvas and the strip highlighted for `selection`.
    fn present(&mut self, canvas: &Canvas, selection: &Selection) -> Result<()>;
}
