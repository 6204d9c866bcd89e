// Error type for the paint surface.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing the framebuffer to the window failed
    #[error("Pixel ({x}, {y}) is outside the canvas")]
    OutOfBounds { x: usize, y: usize }, // Reading a pixel that isn't on the grid
    #[error("Invalid color {0:?}: expected RRGGBB hex")]
    InvalidColor(String), // Parsing a color flag failed
    #[error("Invalid config: {0}")]
    InvalidConfig(String), // Flags parsed but don't describe a usable window
}

pub type Result<T> = std::result::Result<T, Error>;
