use anyhow::Result;
use dialoguer::Input;
use eventboard_core::EventDraft;
use owo_colors::OwoColorize;

pub fn run(
    name: Option<String>,
    date: Option<String>,
    location: Option<String>,
    description: Option<String>,
    image: Option<String>,
) -> Result<()> {
    let interactive = name.is_none()
        || date.is_none()
        || location.is_none()
        || description.is_none()
        || image.is_none();

    let draft = EventDraft {
        name: field_value("  Name", name)?,
        date: field_value("  Date", date)?,
        location: field_value("  Location", location)?,
        description: field_value("  Description", description)?,
        image_ref: field_value("  Image link", image)?,
    };

    // Flags can still hand us empty strings; prompts cannot
    let event = draft.validate()?;
    let created_name = event.name.clone();

    let mut store = super::open_loaded_store()?;
    store.create(event);

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {}", created_name).green());

    Ok(())
}

/// Use the flag value when given, otherwise prompt until non-empty.
fn field_value(prompt: &str, flag: Option<String>) -> Result<String> {
    match flag {
        Some(value) => Ok(value),
        None => loop {
            let input: String = Input::new().with_prompt(prompt).interact_text()?;
            if !input.is_empty() {
                break Ok(input);
            }
            eprintln!("  {}", "This field is required".red());
        },
    }
}
