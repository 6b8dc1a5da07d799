//! Main-screen controller: UI intents in, list snapshots out.
//!
//! The view layer never touches the event list directly. It raises intents
//! (activate, submit a creation form, request a delete) and gets back
//! snapshots and signals through the [`EventListView`] boundary.

use tracing::warn;

use crate::error::EventBoardResult;
use crate::event::{Event, EventDraft};
use crate::store::EventStore;

/// Signals the main screen's view must be able to receive.
pub trait EventListView {
    /// Render this snapshot of the list, top to bottom.
    fn show_events(&mut self, events: &[Event]);

    /// Surface a non-fatal notice (storage fallbacks and the like).
    fn show_notice(&mut self, message: &str);

    /// Dismiss the creation form after a successful create.
    fn close_create_form(&mut self);

    /// Bring the top of the list back into view.
    fn scroll_to_top(&mut self);
}

/// Capability hook behind each item's "register" affordance.
///
/// Nothing is wired to it yet; [`NoopRegister`] is the current
/// implementation.
pub trait OnRegister {
    fn register(&mut self, event: &Event);
}

/// Inert [`OnRegister`] implementation.
pub struct NoopRegister;

impl OnRegister for NoopRegister {
    fn register(&mut self, _event: &Event) {}
}

/// Mediates between the main screen and the store.
pub struct EventListController<V: EventListView> {
    store: EventStore,
    view: V,
    on_register: Box<dyn OnRegister>,
}

impl<V: EventListView> EventListController<V> {
    pub fn new(store: EventStore, view: V) -> Self {
        EventListController {
            store,
            view,
            on_register: Box::new(NoopRegister),
        }
    }

    /// Replace the register hook.
    pub fn with_on_register(mut self, on_register: Box<dyn OnRegister>) -> Self {
        self.on_register = on_register;
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Screen activation: load the persisted list and publish it.
    ///
    /// A store that cannot be read is not fatal; the screen starts from an
    /// empty list and the user gets a notice.
    pub fn activate(&mut self) {
        match self.store.load() {
            Ok(events) => self.view.show_events(events),
            Err(e) => {
                warn!(error = %e, "could not load persisted events");
                self.view
                    .show_notice("Stored events could not be read; starting with an empty list");
                self.view.show_events(&[]);
            }
        }
    }

    /// Creation-form submit.
    ///
    /// A validation failure aborts with no state change; the caller surfaces
    /// it as a blocking prompt and keeps the form open.
    pub fn submit_create(&mut self, draft: EventDraft) -> EventBoardResult<()> {
        let event = draft.validate()?;

        let events = self.store.create(event);
        self.view.show_events(events);
        self.view.close_create_form();
        self.view.scroll_to_top();
        Ok(())
    }

    /// Delete every event with this date and publish the result. No
    /// confirmation, no undo.
    pub fn request_delete(&mut self, date: &str) {
        let events = self.store.delete(date);
        self.view.show_events(events);
    }

    /// Pure view signal; the list is untouched.
    pub fn request_scroll_to_top(&mut self) {
        self.view.scroll_to_top();
    }

    /// Forward an item's register affordance to the hook.
    pub fn request_register(&mut self, date: &str) {
        if let Some(event) = self.store.events().iter().find(|e| e.date == date) {
            self.on_register.register(event);
        }
    }

    /// The current list, for rendering outside `show_events`.
    pub fn events(&self) -> &[Event] {
        self.store.events()
    }
}
