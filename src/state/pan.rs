// One- or two-contact pan recognizer. The reference point is the single
// contact, or the midpoint of two.

use super::{PointerTracker, Recognizer};
use crate::model::{Delta, GestureEvent, PointerEventKind, PointerInput};
use crate::util::{midpoint, round_half_up};

#[derive(Debug, Clone)]
pub struct PanRecognizer {
    pointers: PointerTracker,
    start_position: (f64, f64),
    last_change: (f64, f64),
}

impl PanRecognizer {
    pub fn new() -> Self {
        Self {
            pointers: PointerTracker::new(2),
            start_position: (0.0, 0.0),
            last_change: (0.0, 0.0),
        }
    }

    fn reference_point(&self, use_down: bool) -> (f64, f64) {
        let pick = |idx: usize| {
            self.pointers
                .get(idx)
                .map(|c| if use_down { c.down } else { c.latest })
        };
        match (pick(0), pick(1)) {
            (Some(a), Some(b)) => midpoint(&a, &b),
            (Some(a), None) => (a.x, a.y),
            _ => (0.0, 0.0),
        }
    }

    fn start(&mut self) -> GestureEvent {
        self.start_position = self.reference_point(true);
        GestureEvent::Start
    }

    fn end(&mut self) -> GestureEvent {
        let (change_x, change_y) = self.last_change;
        self.last_change = (0.0, 0.0);
        self.pointers.rebaseline();
        GestureEvent::End(Delta::Offset { change_x, change_y })
    }
}

impl Default for PanRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer for PanRecognizer {
    fn handle(&mut self, input: &PointerInput) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        match input.kind {
            PointerEventKind::Down => {
                if !self.pointers.press(input) {
                    return events;
                }
                if self.pointers.len() > 1 {
                    events.push(self.end());
                }
                events.push(self.start());
            }
            PointerEventKind::Move => {
                if !self.pointers.update(input) {
                    return events;
                }
                let (x, y) = self.reference_point(false);
                let change_x = round_half_up(x - self.start_position.0);
                let change_y = round_half_up(y - self.start_position.1);
                self.last_change = (change_x, change_y);
                events.push(GestureEvent::Change(Delta::Offset { change_x, change_y }));
            }
            kind if kind.releases() => {
                if self.pointers.release(input.id) {
                    events.push(self.end());
                    if !self.pointers.is_empty() {
                        events.push(self.start());
                    }
                }
            }
            _ => {}
        }
        events
    }
}
