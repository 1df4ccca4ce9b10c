//! Touch gesture recognition for DOM elements: pinch zoom, one/two-finger
//! pan, double tap and swipe, built from raw pointer events.
//!
//! Each `attach_*` call creates an independent recognizer that listens to
//! pointer notifications on the element (and an optional bounding container)
//! and reports `start` / `change` / `end` (or `done`) gesture events through
//! its own emitter.
//!
//! ```no_run
//! use std::rc::Rc;
//! use touch_gestures::{GestureEvent, GestureEventType, Listener, attach_zoom};
//!
//! # fn demo(element: &web_sys::Element) -> Result<(), wasm_bindgen::JsValue> {
//! let zoom = attach_zoom(element, None)?;
//! let on_change: Listener = Rc::new(|event: &GestureEvent| log::info!("{event:?}"));
//! zoom.add_event_listener(GestureEventType::Change, on_change);
//! zoom.forget();
//! # Ok(())
//! # }
//! ```

pub mod attach;
pub mod bindings;
pub mod config;
pub mod emitter;
pub mod hooks;
pub mod model;
pub mod session;
pub mod state;
pub mod util;

pub use attach::{Attachment, attach, attach_double_tap, attach_move, attach_swipe, attach_zoom};
pub use config::GestureOptions;
pub use emitter::{EventEmitter, Listener, ListenerList, make_emitter};
pub use hooks::{use_gesture, use_gesture_with_options};
pub use model::{
    ContactSample, Delta, Direction, GestureEvent, GestureEventType, GestureKind, PointerEventKind,
    PointerId, PointerInput,
};
pub use session::GestureSession;
pub use state::Recognizer;
pub use util::init_logging;
