//! Play DVD Quest.
//!
//! Reads `dvd_quest.toml` from the working directory when it exists, otherwise the defaults are used.

use std::path::Path;

use dvd_quest::{assets::Assets, window, DvdQuest, FastRandom, GameConfig};
use miette::Result;

/// Optional configuration file overriding the defaults.
const CONFIG_FILE: &str = "dvd_quest.toml";

fn main() -> Result<()> {
    // Show info logs unless `RUST_LOG` says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = if Path::new(CONFIG_FILE).exists() {
        log::info!("Reading configuration from '{CONFIG_FILE}'");

        GameConfig::load(CONFIG_FILE)?
    } else {
        GameConfig::default()
    };

    let assets = Assets::load(&config.asset_dir)?;

    let game = DvdQuest::new(&config, assets.button_sheet.width(), FastRandom::new());

    window::run(game, &config, assets)
}
