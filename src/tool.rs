// Tool selection state machine.
// Each tick the cursor is hit-tested against the control strip and a new
// Selection value comes back; nothing here draws or mutates widgets.

use crate::brush::Thickness;
use crate::panel::ControlStrip;
use crate::types::{BLACK, Color, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Draw,
    Erase,
    Fill,
    Replace,
    Clear,
}

impl Tool {
    /// Left-to-right order of the tool buttons.
    pub const STRIP_ORDER: [Tool; 5] = [Self::Fill, Self::Draw, Self::Erase, Self::Replace, Self::Clear];

    /// Button glyph.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draw => "D",
            Self::Erase => "E",
            Self::Fill => "F",
            Self::Replace => "R",
            Self::Clear => "C",
        }
    }
}

/// Everything the user has picked: active tool, brush color and width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub tool: Tool,
    pub color: Color,
    pub thickness: Thickness,
}

impl Default for Selection {
    fn default() -> Self {
        Self { tool: Tool::Draw, color: BLACK, thickness: Thickness::Narrow }
    }
}

pub struct ToolController {
    strip: ControlStrip,
    canvas_height: usize, // rows above this belong to the paintable area
}

impl ToolController {
    pub fn new(strip: ControlStrip, canvas_height: usize) -> Self {
        Self { strip, canvas_height }
    }

    pub fn strip(&self) -> &ControlStrip {
        &self.strip
    }

    fn over_canvas(&self, pos: Position) -> bool {
        pos.y < self.canvas_height
    }

    /// Resolve this tick's selection.
    ///
    /// With no cursor, or a cursor over the canvas, `previous` comes back
    /// untouched so dragging across the canvas never reselects anything.
    /// Over the strip, color and thickness follow the cursor, while the tool
    /// only changes when its button is actually pressed.
    pub fn resolve(&self, previous: Selection, cursor: Option<Position>, pressed: bool) -> Selection {
        let Some(pos) = cursor else {
            return previous;
        };
        if self.over_canvas(pos) {
            return previous;
        }

        let color = self.strip.color_at(pos).unwrap_or(previous.color);
        let thickness = self.strip.thickness_at(pos).unwrap_or(previous.thickness);
        let tool = match self.strip.tool_at(pos) {
            Some(tool) if pressed => tool,
            _ => previous.tool,
        };
        Selection { tool, color, thickness }
    }
}
