mod components;
mod pad;

use components::app::App;

fn main() {
    console_error_panic_hook::set_once();
    touch_gestures::init_logging(log::Level::Debug);
    yew::Renderer::<App>::new().render();
}
