mod config;
mod editor;
mod replay;
mod runtime;

use anyhow::Result;
use clap::Parser;

use quadlight_engine::logging::init_logging;

use crate::config::{Cli, StudioConfig};

fn main() -> Result<()> {
    let config = StudioConfig::from(Cli::parse());

    init_logging(config.logging.clone());
    log::info!("{} starting ({}x{})", config.title, config.size.x, config.size.y);

    if config.replay {
        replay::run(&config)
    } else {
        runtime::run(config)
    }
}
