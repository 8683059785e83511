use anyhow::{Result, bail};
use clap::Parser;

use quadlight_engine::coords::Vec2;
use quadlight_engine::logging::LoggingConfig;

/// Command line of the studio.
#[derive(Debug, Parser)]
#[command(name = "quadlight-studio", version, about = "Hover-highlight overlay demo across two layout panes")]
pub struct Cli {
    /// Replay a scripted pointer path headlessly instead of opening a window.
    #[arg(long)]
    pub replay: bool,

    /// Log filter in env_logger syntax, e.g. `quadlight_overlay=trace`. Overrides RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,

    /// Initial window size in logical pixels.
    #[arg(long, value_name = "WxH", default_value = "960x540", value_parser = parse_size)]
    pub size: Vec2,
}

/// Studio configuration.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub title: String,
    /// Initial window size in logical pixels.
    pub size: Vec2,
    /// Replay a scripted pointer path headlessly instead of opening a window.
    pub replay: bool,
    pub logging: LoggingConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            title: "Quadlight Studio".to_string(),
            size: Vec2::new(960.0, 540.0),
            replay: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl From<Cli> for StudioConfig {
    fn from(cli: Cli) -> Self {
        let mut config = Self { size: cli.size, replay: cli.replay, ..Self::default() };
        if let Some(filter) = cli.log {
            config.logging = config.logging.with_filter(filter);
        }
        config
    }
}

fn parse_size(s: &str) -> Result<Vec2> {
    let Some((w, h)) = s.split_once('x') else {
        bail!("expected <w>x<h>, e.g. 1280x720");
    };
    let (w, h): (f32, f32) = (w.trim().parse()?, h.trim().parse()?);
    if !(w >= 64.0 && h >= 64.0 && w.is_finite() && h.is_finite()) {
        bail!("{s:?} is too small (minimum 64x64)");
    }
    Ok(Vec2::new(w, h))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<StudioConfig, clap::Error> {
        let argv = std::iter::once("quadlight-studio").chain(args.iter().copied());
        Cli::try_parse_from(argv).map(StudioConfig::from)
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_without_arguments() {
        let config = parse(&[]).unwrap();
        assert!(!config.replay);
        assert!(config.logging.env_filter.is_none());
        assert_eq!(config.size, Vec2::new(960.0, 540.0));
    }

    #[test]
    fn replay_log_and_size() {
        let config = parse(&["--replay", "--log", "trace", "--size", "1280x720"]).unwrap();
        assert!(config.replay);
        assert_eq!(config.logging.env_filter.as_deref(), Some("trace"));
        assert_eq!(config.size, Vec2::new(1280.0, 720.0));
    }

    #[test]
    fn equals_form_is_accepted() {
        let config = parse(&["--size=1280x720", "--log=quadlight_overlay=debug"]).unwrap();
        assert_eq!(config.size, Vec2::new(1280.0, 720.0));
        assert_eq!(config.logging.env_filter.as_deref(), Some("quadlight_overlay=debug"));
    }

    #[test]
    fn help_is_reported_by_clap() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn bad_arguments_are_errors() {
        assert_eq!(parse(&["--frobnicate"]).unwrap_err().kind(), ErrorKind::UnknownArgument);
        assert!(parse(&["--log"]).is_err());
        assert_eq!(parse(&["--size", "wide"]).unwrap_err().kind(), ErrorKind::ValueValidation);
        assert_eq!(parse(&["--size", "10x10"]).unwrap_err().kind(), ErrorKind::ValueValidation);
    }
}
