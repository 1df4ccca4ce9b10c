use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusPanelProps {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub swipe: Option<String>,
    pub double_taps: u32,
    pub on_reset: Callback<()>,
}

#[function_component(StatusPanel)]
pub fn status_panel(props: &StatusPanelProps) -> Html {
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; font-size:12px; line-height:1.6;">
        <div>{ format!("scale: {:.2}", props.scale) }</div>
        <div>{ format!("offset: {:.0}, {:.0}", props.offset_x, props.offset_y) }</div>
        <div>{ format!("swipe: {}", props.swipe.as_deref().unwrap_or("-")) }</div>
        <div>{ format!("double taps: {}", props.double_taps) }</div>
        <button onclick={reset_cb} style="margin-top:6px; padding:4px 10px;">{"Reset"}</button>
    </div>}
}
