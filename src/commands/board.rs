//! The interactive board: a welcome screen, then the main event list.
//!
//! This is the direct-manipulation surface the controller was built for. The
//! list and its view state live here for the duration of the session; nothing
//! is shared process-wide.

use anyhow::{Context, Result};
use dialoguer::{Input, Select};
use eventboard_core::config::BoardConfig;
use eventboard_core::{Event, EventBoardError, EventDraft, EventListController, EventListView};
use owo_colors::OwoColorize;

use crate::render;

/// Terminal rendition of the main screen. Holds the last published snapshot;
/// the board loop re-renders it between actions.
#[derive(Default)]
struct TerminalView {
    events: Vec<Event>,
}

impl EventListView for TerminalView {
    fn show_events(&mut self, events: &[Event]) {
        self.events = events.to_vec();
    }

    fn show_notice(&mut self, message: &str) {
        println!("{}", message.yellow());
    }

    fn close_create_form(&mut self) {
        // The creation form is modal in the prompt flow; nothing to tear down
    }

    fn scroll_to_top(&mut self) {
        // The loop reprints the whole list from the top after each action
    }
}

pub fn run() -> Result<()> {
    welcome()?;

    let config = BoardConfig::load().context("Could not load configuration")?;
    let mut controller = EventListController::new(config.open_store(), TerminalView::default());
    controller.activate();

    loop {
        println!();
        if controller.view().events.is_empty() {
            println!("{}", "No events yet".dimmed());
        } else {
            render::print_events(&controller.view().events);
        }

        let actions = ["Add event", "Delete event", "Scroll to top", "Quit"];
        let choice = Select::new()
            .with_prompt("Board")
            .items(&actions)
            .default(0)
            .interact()?;

        match choice {
            0 => add_event(&mut controller)?,
            1 => delete_event(&mut controller)?,
            2 => controller.request_scroll_to_top(),
            _ => break,
        }
    }

    Ok(())
}

/// The welcome screen: a single "begin" action.
fn welcome() -> Result<()> {
    println!("{}", "Welcome!".bold());
    Select::new().items(&["Begin"]).default(0).interact()?;
    Ok(())
}

/// The creation form: five required fields, submitted as one draft. An empty
/// field keeps the form open behind a blocking prompt.
fn add_event(controller: &mut EventListController<TerminalView>) -> Result<()> {
    loop {
        println!("{}", "New event".bold());

        let draft = EventDraft {
            name: prompt("  Name")?,
            date: prompt("  Date")?,
            location: prompt("  Location")?,
            description: prompt("  Description")?,
            image_ref: prompt("  Image link")?,
        };

        match controller.submit_create(draft) {
            Ok(()) => {
                println!("{}", "  Created".green());
                return Ok(());
            }
            Err(e @ EventBoardError::Validation(_)) => {
                eprintln!("  {}", e.to_string().red());
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn delete_event(controller: &mut EventListController<TerminalView>) -> Result<()> {
    if controller.events().is_empty() {
        println!("{}", "Nothing to delete".dimmed());
        return Ok(());
    }

    let labels: Vec<String> = controller
        .events()
        .iter()
        .map(|e| format!("{} ({})", e.name, e.date))
        .collect();

    let choice = Select::new()
        .with_prompt("Delete which event?")
        .items(&labels)
        .default(0)
        .interact()?;

    let date = controller.events()[choice].date.clone();
    controller.request_delete(&date);
    Ok(())
}

/// A single form field. Empty input is allowed here; the controller's
/// validation decides whether the draft goes through.
fn prompt(label: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}
