//! Wiring between DOM pointer notifications and gesture sessions.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, Event, EventTarget, Node, PointerEvent};

use crate::config::GestureOptions;
use crate::emitter::Listener;
use crate::model::{GestureEventType, GestureKind, PointerEventKind, PointerInput};
use crate::session::GestureSession;

struct DomListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// A recognizer attached to an element. Dropping it detaches every DOM
/// listener it installed; call [`Attachment::forget`] to keep it for the
/// lifetime of the page instead.
pub struct Attachment {
    kind: GestureKind,
    session: Rc<GestureSession>,
    listeners: Vec<DomListener>,
}

impl Attachment {
    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    pub fn session(&self) -> &Rc<GestureSession> {
        &self.session
    }

    pub fn add_event_listener(&self, kind: GestureEventType, listener: Listener) {
        self.session.add_event_listener(kind, listener);
    }

    pub fn remove_event_listener(&self, kind: GestureEventType, listener: &Listener) {
        self.session.remove_event_listener(kind, listener);
    }

    pub fn forget(mut self) {
        for listener in std::mem::take(&mut self.listeners) {
            listener.callback.forget();
        }
    }
}

impl Drop for Attachment {
    fn drop(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        log::debug!("detaching {:?} recognizer", self.kind);
        for l in &self.listeners {
            let _ = l
                .target
                .remove_event_listener_with_callback(l.event, l.callback.as_ref().unchecked_ref());
        }
    }
}

pub fn attach_zoom(target: &Element, container: Option<&Element>) -> Result<Attachment, JsValue> {
    attach(GestureKind::Zoom, target, container, &GestureOptions::default())
}

pub fn attach_move(target: &Element, container: Option<&Element>) -> Result<Attachment, JsValue> {
    attach(GestureKind::Move, target, container, &GestureOptions::default())
}

pub fn attach_double_tap(element: &Element) -> Result<Attachment, JsValue> {
    attach(GestureKind::DoubleTap, element, None, &GestureOptions::default())
}

pub fn attach_swipe(target: &Element, container: Option<&Element>) -> Result<Attachment, JsValue> {
    attach(GestureKind::Swipe, target, container, &GestureOptions::default())
}

/// Attaches a fresh recognizer of `kind`. Contacts start on `target`; moves
/// and releases are observed on `container`, which defaults to `target`.
/// Double tap ignores `container` and observes everything on `target`.
pub fn attach(
    kind: GestureKind,
    target: &Element,
    container: Option<&Element>,
    options: &GestureOptions,
) -> Result<Attachment, JsValue> {
    let container = match kind {
        GestureKind::DoubleTap => target.clone(),
        _ => container.unwrap_or(target).clone(),
    };
    let session = Rc::new(GestureSession::for_kind(kind, options));
    let mut listeners = Vec::new();

    if options.prevent_native_gestures {
        listeners.push(suppress_touch_start(target.clone(), &container)?);
    }

    listeners.push(listen(
        target,
        "pointerdown",
        forward(session.clone(), PointerEventKind::Down),
    )?);
    match kind {
        GestureKind::DoubleTap => {
            listeners.push(listen(target, "pointerup", forward(session.clone(), PointerEventKind::Up))?);
        }
        GestureKind::Zoom | GestureKind::Move | GestureKind::Swipe => {
            for (event, pointer_kind) in [
                ("pointermove", PointerEventKind::Move),
                ("pointerup", PointerEventKind::Up),
                ("pointercancel", PointerEventKind::Cancel),
                ("pointerleave", PointerEventKind::Leave),
            ] {
                listeners.push(listen(&container, event, forward(session.clone(), pointer_kind))?);
            }
            listeners.push(listen(&container, "pointerout", forward_out(session.clone(), container.clone()))?);
        }
    }

    log::debug!("attached {kind:?} recognizer with {} listeners", listeners.len());
    Ok(Attachment {
        kind,
        session,
        listeners,
    })
}

fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<DomListener, JsValue> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    Ok(DomListener {
        target: target.clone(),
        event,
        callback,
    })
}

// Non-passive so preventDefault can cancel the browser's own scroll/zoom.
fn suppress_touch_start(target: Element, container: &Element) -> Result<DomListener, JsValue> {
    let callback = Closure::wrap(Box::new(move |e: Event| {
        let inside = e
            .target()
            .and_then(|t| t.dyn_into::<Node>().ok())
            .is_some_and(|node| target.contains(Some(&node)));
        if inside {
            e.prevent_default();
        }
    }) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    container.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    Ok(DomListener {
        target: container.clone().into(),
        event: "touchstart",
        callback,
    })
}

fn forward(session: Rc<GestureSession>, kind: PointerEventKind) -> impl FnMut(Event) + 'static {
    move |e: Event| {
        if let Some(pe) = e.dyn_ref::<PointerEvent>() {
            session.feed(&pointer_input(pe, kind));
        }
    }
}

fn forward_out(session: Rc<GestureSession>, container: Element) -> impl FnMut(Event) + 'static {
    move |e: Event| {
        if let Some(pe) = e.dyn_ref::<PointerEvent>() {
            let within_container = is_child_of(&container, e.target());
            session.feed(&pointer_input(pe, PointerEventKind::Out { within_container }));
        }
    }
}

fn pointer_input(e: &PointerEvent, kind: PointerEventKind) -> PointerInput {
    let x = client_coord(e, "clientX").unwrap_or_else(|| e.client_x() as f64);
    let y = client_coord(e, "clientY").unwrap_or_else(|| e.client_y() as f64);
    PointerInput::new(e.pointer_id(), kind, x, y).at(js_sys::Date::now())
}

// web-sys exposes clientX/clientY as i32; pointer events carry sub-pixel values.
fn client_coord(e: &PointerEvent, key: &str) -> Option<f64> {
    js_sys::Reflect::get(e.as_ref(), &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
}

/// Whether `child` is a strict descendant of `parent`.
fn is_child_of(parent: &Element, child: Option<EventTarget>) -> bool {
    let Some(node) = child.and_then(|t| t.dyn_into::<Node>().ok()) else {
        return false;
    };
    let parent: &Node = parent.as_ref();
    let mut current = node.parent_node();
    while let Some(n) = current {
        if &n == parent {
            return true;
        }
        current = n.parent_node();
    }
    false
}
