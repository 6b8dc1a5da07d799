use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render;

pub fn run() -> Result<()> {
    let store = super::open_loaded_store()?;

    if store.events().is_empty() {
        println!("{}", "No events yet".dimmed());
        return Ok(());
    }

    render::print_events(store.events());
    Ok(())
}
