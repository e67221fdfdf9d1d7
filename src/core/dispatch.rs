//! Cooperative event queue.
//!
//! UI callbacks never call into the router directly. They post an [`Event`]
//! through a [`Dispatcher`], which drains the queue unless a drain is already
//! running further up the stack; in that case the event waits its turn and is
//! handled by the active drain. One event is fully handled before the next
//! starts.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::core::drag::Point;
use crate::models::Language;

/// Discrete input to the navigation controller.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Push `path` onto the history stack and resolve it
    Navigate(String),
    /// Corrective navigation requested by a handler
    Redirect(String),
    /// Resolve the current history entry
    Resolve,
    /// The host moved through its history (`popstate`)
    HistoryPopped,
    /// Leave the current view through the back affordance
    Back,
    /// Explicit language switch request
    SwitchLanguage(Language),
    /// The localizer reported a new language
    LanguageChanged(Language),
    TogglePanel,
    ClosePanel,
    /// Pointer pressed on the content window's title bar
    DragStart { pointer: Point, origin: Point },
    DragMove(Point),
    DragEnd,
}

/// Shared FIFO of pending events.
#[derive(Clone, Debug, Default)]
pub struct Mailbox(Rc<RefCell<VecDeque<Event>>>);

impl Mailbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&self, event: Event) {
        self.0.borrow_mut().push_back(event);
    }

    pub fn take(&self) -> Option<Event> {
        self.0.borrow_mut().pop_front()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// Something that drains a [`Mailbox`].
pub trait Pump {
    fn pump(&mut self);
}

/// Clonable handle for posting events from UI callbacks.
#[derive(Clone)]
pub struct Dispatcher {
    mailbox: Mailbox,
    target: Rc<RefCell<dyn Pump>>,
}

impl Dispatcher {
    pub fn new(mailbox: Mailbox, target: Rc<RefCell<dyn Pump>>) -> Self {
        Self { mailbox, target }
    }

    pub fn send(&self, event: Event) {
        self.mailbox.post(event);
        match self.target.try_borrow_mut() {
            Ok(mut target) => target.pump(),
            Err(_) => tracing::trace!("event queued behind the active drain"),
        }
    }

    pub fn navigate(&self, path: impl Into<String>) {
        self.send(Event::Navigate(path.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        mailbox: Mailbox,
        handled: Vec<Event>,
        echo: Option<Dispatcher>,
    }

    impl Pump for Recorder {
        fn pump(&mut self) {
            while let Some(event) = self.mailbox.take() {
                // Re-enter while handling the first event
                if event == Event::Resolve
                    && let Some(echo) = &self.echo
                {
                    echo.send(Event::ClosePanel);
                }
                self.handled.push(event);
            }
        }
    }

    #[test]
    fn test_mailbox_fifo() {
        let mailbox = Mailbox::new();
        mailbox.post(Event::Resolve);
        mailbox.post(Event::Back);
        assert_eq!(mailbox.len(), 2);
        assert_eq!(mailbox.take(), Some(Event::Resolve));
        assert_eq!(mailbox.take(), Some(Event::Back));
        assert!(mailbox.is_empty());
    }

    #[test]
    fn test_reentrant_send_is_queued_not_nested() {
        let mailbox = Mailbox::new();
        let recorder = Rc::new(RefCell::new(Recorder {
            mailbox: mailbox.clone(),
            handled: Vec::new(),
            echo: None,
        }));
        let dispatcher = Dispatcher::new(mailbox.clone(), recorder.clone());
        recorder.borrow_mut().echo = Some(dispatcher.clone());

        dispatcher.send(Event::Resolve);

        // The nested send could not borrow the recorder; the outer drain
        // picked it up after finishing the first event.
        assert_eq!(recorder.borrow().handled, vec![Event::Resolve, Event::ClosePanel]);
        assert!(mailbox.is_empty());
    }
}
