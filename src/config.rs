// Command-line flags and the validated settings built from them.

use clap::Parser;

use crate::error::{Error, Result};
use crate::logging::LoggingConfig;
use crate::panel::ControlStrip;
use crate::types::{Color, parse_color};

/// A small raster paint program: draw, erase, fill, replace and clear.
#[derive(Parser, Debug, Clone)]
#[command(name = "pixel-paint", version, about)]
pub struct CliArgs {
    /// Canvas width in pixels (also the window width).
    #[arg(long, default_value_t = 450)]
    pub width: usize,

    /// Canvas height in pixels. The control strip is added below it.
    #[arg(long, default_value_t = 450)]
    pub height: usize,

    /// Background color as RRGGBB hex; also what the eraser paints.
    #[arg(long, default_value = "ffffff", value_parser = parse_color)]
    pub background: Color,

    /// Frames per second the window is limited to.
    #[arg(long, default_value_t = 60)]
    pub fps: usize,

    /// Window title.
    #[arg(long, default_value = "Paint")]
    pub title: String,

    /// Log filter in env_logger syntax (overrides RUST_LOG).
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub width: usize,
    pub height: usize,
    pub background: Color,
    pub fps: usize,
    pub title: String,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        if args.width < ControlStrip::MIN_WIDTH {
            return Err(Error::InvalidConfig(format!(
                "width {} is narrower than the control strip ({} px)",
                args.width,
                ControlStrip::MIN_WIDTH
            )));
        }
        if args.height == 0 {
            return Err(Error::InvalidConfig("height must be at least 1".into()));
        }
        if args.fps == 0 {
            return Err(Error::InvalidConfig("fps must be at least 1".into()));
        }
        Ok(Self {
            width: args.width,
            height: args.height,
            background: args.background,
            fps: args.fps,
            title: args.title,
            logging: LoggingConfig { env_filter: args.log_filter, ..LoggingConfig::default() },
        })
    }

    /// The control strip placed under this config's canvas.
    pub fn strip(&self) -> ControlStrip {
        ControlStrip::standard(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MAGENTA, WHITE};
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("pixel-paint").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_the_classic_window() {
        let config = AppConfig::from_args(parse(&[])).unwrap();
        assert_eq!(config.width, 450);
        assert_eq!(config.height, 450);
        assert_eq!(config.background, WHITE);
        assert_eq!(config.fps, 60);
        assert_eq!(config.title, "Paint");
        assert_eq!(config.logging.env_filter, None);
        assert_eq!(config.strip().origin_y, 450);
    }

    #[test]
    fn flags_override_defaults() {
        let config = AppConfig::from_args(parse(&[
            "--width", "600", "--height", "300", "--background", "#ff00ff", "--log-filter", "debug",
        ]))
        .unwrap();
        assert_eq!((config.width, config.height), (600, 300));
        assert_eq!(config.background, MAGENTA);
        assert_eq!(config.logging.env_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn bad_background_is_rejected_by_the_parser() {
        let argv = ["pixel-paint", "--background", "white"];
        assert!(CliArgs::try_parse_from(argv).is_err());
    }

    #[test]
    fn narrow_or_empty_windows_are_rejected() {
        assert!(matches!(
            AppConfig::from_args(parse(&["--width", "200"])),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            AppConfig::from_args(parse(&["--height", "0"])),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            AppConfig::from_args(parse(&["--fps", "0"])),
            Err(Error::InvalidConfig(_))
        ));
    }
}
