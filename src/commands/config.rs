use std::path::PathBuf;

use anyhow::{Context, Result};
use eventboard_core::config::BoardConfig;
use owo_colors::OwoColorize;

pub fn run(data_dir: Option<PathBuf>) -> Result<()> {
    let config_path = BoardConfig::config_path().context("Could not locate configuration")?;
    let mut config = BoardConfig::load().context("Could not load configuration")?;

    if let Some(dir) = data_dir {
        config.data_dir = dir;
        config.save().context("Could not save configuration")?;
        println!("{}", "Updated".green());
    }

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Events:  {}", config.data_path().display());

    Ok(())
}
