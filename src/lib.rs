//! A raster paint surface: a pixel canvas driven by five tools (draw, erase,
//! fill, replace, clear) with a selectable brush color and width.
//!
//! The interaction core ([`app::PaintApp`]) only talks to the outside world
//! through [`input::InputSource`] and [`input::DisplaySurface`];
//! [`draw::Drawer`] implements both on a minifb window.

pub mod app;
pub mod brush;
pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod fill;
pub mod input;
pub mod logging;
pub mod panel;
pub mod replace;
pub mod tool;
pub mod types;

pub use app::{PaintApp, Tick};
pub use error::{Error, Result};
