use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(date: &str) -> Result<()> {
    let mut store = super::open_loaded_store()?;

    let before = store.events().len();
    let remaining = store.delete(date).len();

    let removed = before - remaining;
    if removed == 0 {
        println!("{}", format!("No events on {}", date).dimmed());
    } else {
        println!("{}", format!("Deleted {} event(s) on {}", removed, date).green());
    }

    Ok(())
}
