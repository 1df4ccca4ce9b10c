use touch_gestures::{GestureEvent, GestureKind, GestureOptions, use_gesture_with_options};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GesturePadProps {
    pub transform: String,
    pub options: GestureOptions,
    pub on_gesture: Callback<(GestureKind, GestureEvent)>,
}

#[function_component(GesturePad)]
pub fn gesture_pad(props: &GesturePadProps) -> Html {
    let pad_ref = use_node_ref();

    let tagged = |kind: GestureKind| {
        let cb = props.on_gesture.clone();
        Callback::from(move |event: GestureEvent| cb.emit((kind, event)))
    };
    use_gesture_with_options(pad_ref.clone(), GestureKind::Zoom, props.options.clone(), tagged(GestureKind::Zoom));
    use_gesture_with_options(pad_ref.clone(), GestureKind::Move, props.options.clone(), tagged(GestureKind::Move));
    use_gesture_with_options(pad_ref.clone(), GestureKind::Swipe, props.options.clone(), tagged(GestureKind::Swipe));
    use_gesture_with_options(pad_ref.clone(), GestureKind::DoubleTap, props.options.clone(), tagged(GestureKind::DoubleTap));

    html! {<div ref={pad_ref} style="position:relative; width:100%; height:100%; overflow:hidden; touch-action:none; background:#0e1116;">
        <div style={format!("position:absolute; left:50%; top:50%; width:160px; height:160px; margin:-80px 0 0 -80px; background:#1f6feb; border-radius:16px; transform:{};", props.transform)}></div>
    </div>}
}
