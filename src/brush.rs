// The paintbrush: current color, stroke width and draw/erase mode.
// Visual: turns two consecutive cursor samples into one stroke segment.

use crate::canvas::Canvas;
use crate::types::{BLACK, Color, Position};

/// The four fixed stroke widths offered by the control strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Thickness {
    #[default]
    Narrow,
    Medium,
    Wide,
    Widest,
}

impl Thickness {
    pub const ALL: [Thickness; 4] = [Self::Narrow, Self::Medium, Self::Wide, Self::Widest];

    /// Stroke width in pixels.
    pub const fn pixels(self) -> u32 {
        match self {
            Self::Narrow => 10,
            Self::Medium => 20,
            Self::Wide => 30,
            Self::Widest => 40,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Brush {
    pub color: Color,
    pub thickness: Thickness,
    /// true paints with `color`, false paints with the background (eraser).
    pub painting: bool,
}

impl Default for Brush {
    fn default() -> Self {
        Self { color: BLACK, thickness: Thickness::default(), painting: true }
    }
}

impl Brush {
    pub fn new(color: Color, thickness: Thickness) -> Self {
        Self { color, thickness, painting: true }
    }

    /// Extend the current stroke to `cur`.
    ///
    /// `cur` is `None` when no press is active; that breaks the stroke and
    /// `None` comes back so the caller forgets its previous sample. A missing
    /// `prev` starts a new stroke at `cur` (a dot). Samples over the control
    /// strip paint nothing and also break the stroke.
    ///
    /// Returns the position the next segment should start from.
    pub fn apply_stroke(
        &self,
        canvas: &mut Canvas,
        prev: Option<Position>,
        cur: Option<Position>,
        background: Color,
    ) -> Option<Position> {
        let cur = cur?;
        let prev = prev.unwrap_or(cur);

        if cur.y >= canvas.height() {
            return None;
        }

        let color = if self.painting { self.color } else { background };
        log::trace!("stroke {:?} -> {:?} ({} px)", prev, cur, self.thickness.pixels());
        canvas.draw_line(prev, cur, color, self.thickness.pixels());
        Some(cur)
    }
}
