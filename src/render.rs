//! Terminal rendering of the event list.

use eventboard_core::Event;
use owo_colors::OwoColorize;

/// Print events top-to-bottom in insertion order.
pub fn print_events(events: &[Event]) {
    for event in events {
        println!("{}", event.name.bold());
        println!("  Date: {}", event.date);
        println!("  Location: {}", event.location);
        println!("  {}", event.description);
        println!("  {}", event.image_ref.dimmed());
        println!();
    }
}
