pub mod double_tap;
pub mod pan;
pub mod swipe;
pub mod tracker;
pub mod zoom;

pub use double_tap::DoubleTapRecognizer;
pub use pan::PanRecognizer;
pub use swipe::SwipeRecognizer;
pub use tracker::{PointerTracker, TrackedContact};
pub use zoom::ZoomRecognizer;

use crate::model::{GestureEvent, PointerInput};

/// A gesture state machine fed one pointer notification at a time.
///
/// Events are returned in emission order rather than dispatched directly so
/// that listeners run after the recognizer has finished mutating itself.
pub trait Recognizer {
    fn handle(&mut self, input: &PointerInput) -> Vec<GestureEvent>;
}
