// yew integration.

use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::attach::attach;
use crate::config::GestureOptions;
use crate::emitter::Listener;
use crate::model::{GestureEvent, GestureKind};

/// Attaches a `kind` recognizer to the element behind `node` once it is
/// mounted and forwards every event it emits to `on_event`. The recognizer is
/// detached when the component unmounts.
#[hook]
pub fn use_gesture(node: NodeRef, kind: GestureKind, on_event: Callback<GestureEvent>) {
    use_gesture_with_options(node, kind, GestureOptions::default(), on_event)
}

#[hook]
pub fn use_gesture_with_options(
    node: NodeRef,
    kind: GestureKind,
    options: GestureOptions,
    on_event: Callback<GestureEvent>,
) {
    // always dispatch to the callback from the latest render
    let on_event_ref = use_mut_ref(|| on_event.clone());
    *on_event_ref.borrow_mut() = on_event;

    use_effect_with((kind, options), move |(kind, options)| {
        let attachment = node.cast::<Element>().and_then(|el| {
            match attach(*kind, &el, None, options) {
                Ok(a) => Some(a),
                Err(err) => {
                    log::warn!("could not attach {kind:?} recognizer: {err:?}");
                    None
                }
            }
        });
        if let Some(a) = &attachment {
            let listener: Listener = Rc::new(move |event: &GestureEvent| {
                let cb = on_event_ref.borrow().clone();
                cb.emit(*event);
            });
            for ty in kind.event_types() {
                a.add_event_listener(*ty, listener.clone());
            }
        }
        move || drop(attachment)
    });
}
