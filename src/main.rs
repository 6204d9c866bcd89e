// What you SEE:
// • A white canvas with a control strip underneath.
// • Hold Left Mouse on the canvas to paint with the current tool.
// • Hover a swatch or size button to pick a color/width; click F D E R C to
//   switch tool (Fill, Draw, Erase, Replace, Clear). ESC quits.

use clap::Parser;
use pixel_paint::canvas::Canvas;
use pixel_paint::config::{AppConfig, CliArgs};
use pixel_paint::draw::Drawer;
use pixel_paint::logging::init_logging;
use pixel_paint::{Error, PaintApp};

fn main() -> Result<(), Error> {
    let config = AppConfig::from_args(CliArgs::parse())?;
    init_logging(config.logging.clone());

    /* --- Window + canvas setup ---
       Visual: window opens with a blank canvas and the strip below it. */
    let strip = config.strip();
    let drawer = Drawer::new(&config.title, config.width, config.height, strip.clone(), config.fps)?;
    let canvas = Canvas::new(config.width, config.height, config.background);

    let mut app = PaintApp::new(drawer, canvas, strip, config.background);
    app.run()
}
