//! A recognizer paired with the emitter its events go out through.
//!
//! The DOM layer feeds a session from native pointer notifications; tests and
//! non-browser hosts can feed it directly.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::GestureOptions;
use crate::emitter::{EventEmitter, Listener, make_emitter};
use crate::model::{GestureEventType, GestureKind, PointerInput};
use crate::state::Recognizer;

pub struct GestureSession {
    recognizer: RefCell<Box<dyn Recognizer>>,
    emitter: Rc<dyn EventEmitter>,
}

impl GestureSession {
    pub fn new(recognizer: Box<dyn Recognizer>) -> Self {
        Self::with_emitter(recognizer, make_emitter())
    }

    pub fn with_emitter(recognizer: Box<dyn Recognizer>, emitter: Rc<dyn EventEmitter>) -> Self {
        Self {
            recognizer: RefCell::new(recognizer),
            emitter,
        }
    }

    pub fn for_kind(kind: GestureKind, options: &GestureOptions) -> Self {
        Self::new(kind.recognizer(options))
    }

    pub fn emitter(&self) -> &Rc<dyn EventEmitter> {
        &self.emitter
    }

    pub fn add_event_listener(&self, kind: GestureEventType, listener: Listener) {
        self.emitter.add_event_listener(kind, listener);
    }

    pub fn remove_event_listener(&self, kind: GestureEventType, listener: &Listener) {
        self.emitter.remove_event_listener(kind, listener);
    }

    /// Runs one pointer notification through the recognizer, then dispatches
    /// whatever it produced.
    pub fn feed(&self, input: &PointerInput) {
        let events = self.recognizer.borrow_mut().handle(input);
        for event in &events {
            log::trace!("gesture {} from pointer {}", event.event_type(), input.id);
            self.emitter.dispatch_event(event);
        }
    }
}
