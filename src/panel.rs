// Control strip layout: the named buttons below the canvas.
// Visual: a row of color swatches, four brush-size buttons (1-4) and five
// tool buttons (F D E R C). This file only knows *where* they are; drawing
// them lives in draw.rs.

use crate::brush::Thickness;
use crate::tool::Tool;
use crate::types::{BLACK, BLUE, CYAN, Color, GREEN, MAGENTA, Position, RED, Rect, YELLOW};

/// A hit-region carrying the value it selects.
#[derive(Debug, Clone)]
pub struct Region<T> {
    pub label: &'static str,
    pub value: T,
    pub bounds: Rect,
}

impl<T: Copy> Region<T> {
    pub fn new(label: &'static str, value: T, bounds: Rect) -> Self {
        Self { label, value, bounds }
    }
}

/// First region (in order) whose bounds contain `pos`.
fn hit<T: Copy>(regions: &[Region<T>], pos: Position) -> Option<T> {
    regions.iter().find(|r| r.bounds.contains(pos)).map(|r| r.value)
}

#[derive(Debug, Clone)]
pub struct ControlStrip {
    pub origin_y: usize, // first window row of the strip (= canvas height)
    pub colors: Vec<Region<Color>>,
    pub thicknesses: Vec<Region<Thickness>>,
    pub tools: Vec<Region<Tool>>,
}

impl ControlStrip {
    /// Rows the strip adds under the canvas.
    pub const HEIGHT: usize = 130;
    /// Narrowest window that still shows every button.
    pub const MIN_WIDTH: usize = 440;

    const SWATCH: usize = 16;
    const BUTTON_W: usize = 20;
    const BUTTON_H: usize = 18;

    /// The classic layout, placed directly under a canvas `origin_y` rows tall.
    pub fn standard(origin_y: usize) -> Self {
        let palette: [(&'static str, Color); 7] = [
            ("red", RED),
            ("blue", BLUE),
            ("yellow", YELLOW),
            ("magenta", MAGENTA),
            ("green", GREEN),
            ("cyan", CYAN),
            ("black", BLACK),
        ];
        let colors = palette
            .iter()
            .enumerate()
            .map(|(i, &(label, color))| {
                Region::new(label, color, Rect::new(64 + i * Self::SWATCH, origin_y + 46, Self::SWATCH, Self::SWATCH))
            })
            .collect();

        let labels = ["1", "2", "3", "4"];
        let thicknesses = Thickness::ALL
            .iter()
            .zip(labels)
            .enumerate()
            .map(|(i, (&t, label))| {
                Region::new(label, t, Rect::centered(332 + i * 24, origin_y + 62, Self::BUTTON_W, Self::BUTTON_H))
            })
            .collect();

        let tools = Tool::STRIP_ORDER
            .iter()
            .enumerate()
            .map(|(i, &tool)| {
                Region::new(tool.label(), tool, Rect::centered(320 + i * 24, origin_y + 94, Self::BUTTON_W, Self::BUTTON_H))
            })
            .collect();

        Self { origin_y, colors, thicknesses, tools }
    }

    pub fn color_at(&self, pos: Position) -> Option<Color> {
        hit(&self.colors, pos)
    }

    pub fn thickness_at(&self, pos: Position) -> Option<Thickness> {
        hit(&self.thicknesses, pos)
    }

    pub fn tool_at(&self, pos: Position) -> Option<Tool> {
        hit(&self.tools, pos)
    }
}
