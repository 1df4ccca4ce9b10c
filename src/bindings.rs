//! JavaScript entry points: `attachZoom`, `attachMove`, `attachDoubleTap` and
//! `attachSwipe` return an object with `addEventListener`/`removeEventListener`.
//! Handlers receive the event as a plain object, e.g.
//! `{type: "change", changeX: 12, changeY: -3}`.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Element;

use crate::attach::{Attachment, attach};
use crate::config::GestureOptions;
use crate::emitter::Listener;
use crate::model::{GestureEvent, GestureEventType, GestureKind, UnknownEventType};

#[wasm_bindgen]
pub struct GestureTarget {
    attachment: Attachment,
    handlers: RefCell<Vec<(GestureEventType, Function, Listener)>>,
}

#[wasm_bindgen]
impl GestureTarget {
    #[wasm_bindgen(js_name = addEventListener)]
    pub fn add_event_listener(&self, kind: &str, callback: Function) -> Result<(), JsValue> {
        let kind = parse_type(kind)?;
        let mut handlers = self.handlers.borrow_mut();
        if handlers.iter().any(|(k, f, _)| *k == kind && *f == callback) {
            return Ok(());
        }
        let listener: Listener = {
            let callback = callback.clone();
            Rc::new(move |event: &GestureEvent| {
                let result = to_js(event).and_then(|value| callback.call1(&JsValue::NULL, &value));
                if let Err(err) = result {
                    log::warn!("{} handler failed: {err:?}", event.event_type());
                }
            })
        };
        self.attachment.add_event_listener(kind, listener.clone());
        handlers.push((kind, callback, listener));
        Ok(())
    }

    #[wasm_bindgen(js_name = removeEventListener)]
    pub fn remove_event_listener(&self, kind: &str, callback: &Function) -> Result<(), JsValue> {
        let kind = parse_type(kind)?;
        let removed = {
            let mut handlers = self.handlers.borrow_mut();
            let idx = handlers.iter().position(|(k, f, _)| *k == kind && f == callback);
            idx.map(|idx| handlers.remove(idx))
        };
        if let Some((_, _, listener)) = removed {
            self.attachment.remove_event_listener(kind, &listener);
        }
        Ok(())
    }
}

#[wasm_bindgen(js_name = attachZoom)]
pub fn attach_zoom_js(element: &Element, container: Option<Element>) -> Result<GestureTarget, JsValue> {
    new_target(GestureKind::Zoom, element, container.as_ref(), None)
}

#[wasm_bindgen(js_name = attachMove)]
pub fn attach_move_js(element: &Element, container: Option<Element>) -> Result<GestureTarget, JsValue> {
    new_target(GestureKind::Move, element, container.as_ref(), None)
}

#[wasm_bindgen(js_name = attachDoubleTap)]
pub fn attach_double_tap_js(element: &Element, options: Option<String>) -> Result<GestureTarget, JsValue> {
    new_target(GestureKind::DoubleTap, element, None, options)
}

#[wasm_bindgen(js_name = attachSwipe)]
pub fn attach_swipe_js(element: &Element, container: Option<Element>) -> Result<GestureTarget, JsValue> {
    new_target(GestureKind::Swipe, element, container.as_ref(), None)
}

fn new_target(
    kind: GestureKind,
    element: &Element,
    container: Option<&Element>,
    options: Option<String>,
) -> Result<GestureTarget, JsValue> {
    let options = match options {
        Some(raw) => GestureOptions::from_json(&raw).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => GestureOptions::default(),
    };
    Ok(GestureTarget {
        attachment: attach(kind, element, container, &options)?,
        handlers: RefCell::new(Vec::new()),
    })
}

fn parse_type(kind: &str) -> Result<GestureEventType, JsValue> {
    kind.parse::<GestureEventType>()
        .map_err(|e: UnknownEventType| js_sys::TypeError::new(&e.to_string()).into())
}

fn to_js(event: &GestureEvent) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(event).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}
