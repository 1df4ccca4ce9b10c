use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EventLogProps {
    pub entries: Vec<String>,
}

#[function_component(EventLog)]
pub fn event_log(props: &EventLogProps) -> Html {
    html! {<div style="position:absolute; right:12px; bottom:12px; width:320px; max-height:40vh; overflow:auto; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; font-family:monospace; font-size:11px; pointer-events:none;">
        { for props.entries.iter().map(|line| html! { <div>{ line.clone() }</div> }) }
    </div>}
}
