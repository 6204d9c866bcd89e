// The interaction loop: one tick = poll input, resolve the selection,
// run the active tool, present the frame.

use crate::brush::Brush;
use crate::canvas::Canvas;
use crate::error::Result;
use crate::fill::flood_fill;
use crate::input::{DisplaySurface, InputSample, InputSource};
use crate::panel::ControlStrip;
use crate::replace::replace_all;
use crate::tool::{Selection, Tool, ToolController};
use crate::types::{Color, Position};

/// Whether the loop should keep going after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Quit,
}

/// Which one-shot action a press triggers while Fill or Replace is active.
#[derive(Debug, Clone, Copy)]
enum PressAction {
    Fill,
    Replace,
}

pub struct PaintApp<B> {
    backend: B,
    canvas: Canvas,
    background: Color,
    controller: ToolController,
    brush: Brush,
    selection: Selection,
    cursor: Option<Position>, // last pressed position, sticky between presses
    stroke: Option<Position>, // start of the next stroke segment
}

impl<B: InputSource + DisplaySurface> PaintApp<B> {
    /// `canvas` should already be filled with `background`.
    pub fn new(backend: B, canvas: Canvas, strip: ControlStrip, background: Color) -> Self {
        let controller = ToolController::new(strip, canvas.height());
        let selection = Selection::default();
        Self {
            backend,
            canvas,
            background,
            controller,
            brush: Brush::new(selection.color, selection.thickness),
            selection,
            cursor: None,
            stroke: None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Tick until the user quits.
    pub fn run(&mut self) -> Result<()> {
        log::info!(
            "painting on a {}x{} canvas",
            self.canvas.width(),
            self.canvas.height()
        );
        self.backend.present(&self.canvas, &self.selection)?;
        let mut ticks: u64 = 0;
        while self.tick()? == Tick::Continue {
            ticks += 1;
        }
        log::info!("quit after {ticks} ticks");
        Ok(())
    }

    /// Run one iteration of the loop.
    pub fn tick(&mut self) -> Result<Tick> {
        /* 1) Quit wins over everything else this tick. */
        let sample = self.backend.poll();
        if sample.quit {
            return Ok(Tick::Quit);
        }

        /* 2) Position only moves while a press is held. */
        if let Some(pos) = sample.press() {
            self.cursor = Some(pos);
        }

        /* 3) Selection + brush */
        let resolved = self.controller.resolve(self.selection, self.cursor, sample.pressed);
        if resolved != self.selection {
            log::debug!("selection {:?} -> {:?}", self.selection, resolved);
        }
        self.selection = resolved;
        self.brush.color = resolved.color;
        self.brush.thickness = resolved.thickness;

        /* 4) Active tool */
        match resolved.tool {
            Tool::Draw | Tool::Erase => {
                self.brush.painting = resolved.tool == Tool::Draw;
                self.stroke =
                    self.brush
                        .apply_stroke(&mut self.canvas, self.stroke, sample.press(), self.background);
            }
            Tool::Clear => {
                self.stroke = None;
                log::trace!("clear");
                self.canvas.clear(self.background);
            }
            Tool::Fill => {
                self.stroke = None;
                if self.on_next_press(sample, PressAction::Fill)? == Tick::Quit {
                    return Ok(Tick::Quit);
                }
            }
            Tool::Replace => {
                self.stroke = None;
                if self.on_next_press(sample, PressAction::Replace)? == Tick::Quit {
                    return Ok(Tick::Quit);
                }
            }
        }

        /* 5) Show the result */
        self.backend.present(&self.canvas, &self.selection)?;
        Ok(Tick::Continue)
    }

    /// Wait for a press, then run `action` once at the pressed pixel.
    ///
    /// `first` is this tick's sample and counts as the first poll. Every
    /// further iteration presents (which also pumps window events) and polls
    /// again, returning `Quit` as soon as the user asks for it.
    fn on_next_press(&mut self, first: InputSample, action: PressAction) -> Result<Tick> {
        let mut sample = first;
        let pos = loop {
            if sample.quit {
                return Ok(Tick::Quit);
            }
            if let Some(pos) = sample.press() {
                break pos;
            }
            self.backend.present(&self.canvas, &self.selection)?;
            sample = self.backend.poll();
        };
        self.cursor = Some(pos);

        let target = match self.canvas.get_pixel(pos) {
            Ok(color) => color,
            Err(e) => {
                log::debug!("{action:?} ignored: {e}");
                return Ok(Tick::Continue);
            }
        };
        let replacement = self.brush.color;
        let changed = match action {
            PressAction::Fill => flood_fill(&mut self.canvas, pos, target, replacement),
            PressAction::Replace => replace_all(&mut self.canvas, target, replacement),
        };
        log::debug!("{action:?} at {pos:?}: {changed} pixels recolored");
        Ok(Tick::Continue)
    }
}
