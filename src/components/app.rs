use super::{event_log::EventLog, gesture_pad::GesturePad, status_panel::StatusPanel};
use crate::pad::{PadAction, PadState};
use touch_gestures::{GestureEvent, GestureKind, GestureOptions};
use yew::prelude::*;

const OPTIONS_KEY: &str = "touch_gestures_options";

#[function_component(App)]
pub fn app() -> Html {
    let pad = use_reducer(PadState::default);
    // Persisted options, e.g. {"doubleTapWindowMs": 350}. A missing entry is
    // seeded with the defaults so it can be edited in place.
    let options = use_memo((), |_| {
        GestureOptions::load_from_storage(OPTIONS_KEY).unwrap_or_else(|| {
            let options = GestureOptions::default();
            if let Err(err) = options.save_to_storage(OPTIONS_KEY) {
                log::warn!("could not store gesture options: {err:?}");
            }
            options
        })
    });

    let on_gesture = {
        let pad = pad.clone();
        Callback::from(move |(kind, event): (GestureKind, GestureEvent)| {
            pad.dispatch(PadAction::Gesture(kind, event));
        })
    };
    let on_reset = {
        let pad = pad.clone();
        Callback::from(move |()| pad.dispatch(PadAction::Reset))
    };

    let (offset_x, offset_y) = pad.effective_offset();
    let swipe = pad.swipe.map(|d| format!("{d:?}").to_lowercase());
    let entries: Vec<String> = pad.log.iter().cloned().collect();

    html! {<div style="position:relative; width:100vw; height:100vh; color:#c9d1d9; font-family:sans-serif;">
        <GesturePad transform={pad.css_transform()} options={(*options).clone()} on_gesture={on_gesture} />
        <StatusPanel scale={pad.effective_scale()} offset_x={offset_x} offset_y={offset_y} swipe={swipe} double_taps={pad.double_taps} on_reset={on_reset} />
        <EventLog entries={entries} />
    </div>}
}
