//! Publish/subscribe for gesture events.
//!
//! Two implementations sit behind [`EventEmitter`]: a native one that
//! delegates to a browser `EventTarget`, and [`ListenerList`], which keeps the
//! listeners itself for runtimes where `new EventTarget()` throws (older iOS
//! Safari). [`make_emitter`] picks one when a recognizer is attached.

use std::cell::RefCell;
use std::rc::Rc;

use crate::model::{GestureEvent, GestureEventType};

/// Listeners are compared by `Rc` identity, so keep a clone of the `Rc` you
/// registered to be able to remove it.
pub type Listener = Rc<dyn Fn(&GestureEvent)>;

pub trait EventEmitter {
    /// Registering the same listener twice for one type has no effect.
    fn add_event_listener(&self, kind: GestureEventType, listener: Listener);
    fn remove_event_listener(&self, kind: GestureEventType, listener: &Listener);
    /// Invokes the listeners registered for the event's type at the time of
    /// the call, in registration order.
    fn dispatch_event(&self, event: &GestureEvent);
}

#[derive(Default)]
pub struct ListenerList {
    listeners: RefCell<Vec<(GestureEventType, Listener)>>,
}

impl ListenerList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }
}

impl EventEmitter for ListenerList {
    fn add_event_listener(&self, kind: GestureEventType, listener: Listener) {
        let mut listeners = self.listeners.borrow_mut();
        if listeners
            .iter()
            .any(|(k, l)| *k == kind && Rc::ptr_eq(l, &listener))
        {
            return;
        }
        listeners.push((kind, listener));
    }

    fn remove_event_listener(&self, kind: GestureEventType, listener: &Listener) {
        let mut listeners = self.listeners.borrow_mut();
        if let Some(idx) = listeners
            .iter()
            .position(|(k, l)| *k == kind && Rc::ptr_eq(l, listener))
        {
            listeners.remove(idx);
        }
    }

    fn dispatch_event(&self, event: &GestureEvent) {
        let kind = event.event_type();
        // Snapshot first: listeners may add or remove listeners while running.
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, l)| l.clone())
            .collect();
        for listener in snapshot {
            listener(event);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use native::NativeEmitter;

#[cfg(target_arch = "wasm32")]
mod native {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::{CustomEvent, CustomEventInit, EventTarget};

    use super::{EventEmitter, Listener};
    use crate::model::{GestureEvent, GestureEventType};

    struct Registration {
        kind: GestureEventType,
        listener: Listener,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    }

    /// Delegates to a detached `EventTarget`. Events go out as `CustomEvent`s
    /// whose `detail` is the JSON form of the gesture event; Rust listeners
    /// read the typed event from `in_flight` instead of decoding `detail`.
    pub struct NativeEmitter {
        target: EventTarget,
        in_flight: Rc<Cell<Option<GestureEvent>>>,
        registered: RefCell<Vec<Registration>>,
        // Callbacks removed mid-dispatch cannot be freed while the browser
        // may still be running them.
        retired: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>>,
        depth: Cell<u32>,
    }

    impl NativeEmitter {
        pub fn new() -> Result<Self, JsValue> {
            Ok(Self {
                target: EventTarget::new()?,
                in_flight: Rc::new(Cell::new(None)),
                registered: RefCell::new(Vec::new()),
                retired: RefCell::new(Vec::new()),
                depth: Cell::new(0),
            })
        }

        pub fn event_target(&self) -> &EventTarget {
            &self.target
        }

        fn build_event(event: &GestureEvent) -> Result<CustomEvent, JsValue> {
            let init = CustomEventInit::new();
            let json = serde_json::to_string(event).map_err(|e| JsValue::from_str(&e.to_string()))?;
            init.set_detail(&js_sys::JSON::parse(&json)?);
            CustomEvent::new_with_event_init_dict(event.event_type().as_str(), &init)
        }
    }

    impl EventEmitter for NativeEmitter {
        fn add_event_listener(&self, kind: GestureEventType, listener: Listener) {
            let mut registered = self.registered.borrow_mut();
            if registered
                .iter()
                .any(|r| r.kind == kind && Rc::ptr_eq(&r.listener, &listener))
            {
                return;
            }
            let in_flight = self.in_flight.clone();
            let forward = listener.clone();
            let callback = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                if let Some(event) = in_flight.get() {
                    forward(&event);
                }
            }) as Box<dyn FnMut(_)>);
            if let Err(err) = self
                .target
                .add_event_listener_with_callback(kind.as_str(), callback.as_ref().unchecked_ref())
            {
                log::warn!("failed to register {kind} listener: {err:?}");
                return;
            }
            registered.push(Registration {
                kind,
                listener,
                callback,
            });
        }

        fn remove_event_listener(&self, kind: GestureEventType, listener: &Listener) {
            let mut registered = self.registered.borrow_mut();
            let Some(idx) = registered
                .iter()
                .position(|r| r.kind == kind && Rc::ptr_eq(&r.listener, listener))
            else {
                return;
            };
            let registration = registered.remove(idx);
            let _ = self.target.remove_event_listener_with_callback(
                kind.as_str(),
                registration.callback.as_ref().unchecked_ref(),
            );
            if self.depth.get() > 0 {
                self.retired.borrow_mut().push(registration.callback);
            }
        }

        fn dispatch_event(&self, event: &GestureEvent) {
            let dom_event = match Self::build_event(event) {
                Ok(e) => e,
                Err(err) => {
                    log::warn!("failed to build {} event: {err:?}", event.event_type());
                    return;
                }
            };
            let previous = self.in_flight.replace(Some(*event));
            self.depth.set(self.depth.get() + 1);
            let _ = self.target.dispatch_event(&dom_event);
            self.depth.set(self.depth.get() - 1);
            self.in_flight.set(previous);
            if self.depth.get() == 0 {
                self.retired.borrow_mut().clear();
            }
        }
    }
}

/// Returns the native emitter when the runtime can construct an
/// `EventTarget`, the listener list otherwise.
pub fn make_emitter() -> Rc<dyn EventEmitter> {
    #[cfg(target_arch = "wasm32")]
    {
        match NativeEmitter::new() {
            Ok(native) => return Rc::new(native),
            Err(err) => log::debug!("EventTarget unavailable ({err:?}), using listener list"),
        }
    }
    Rc::new(ListenerList::new())
}
