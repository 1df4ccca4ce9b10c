// Double-tap detector: looks at the last four touch/release transitions.

use std::collections::VecDeque;

use super::{PointerTracker, Recognizer};
use crate::model::{GestureEvent, PointerEventKind, PointerInput};

pub const DEFAULT_WINDOW_MS: f64 = 500.0;

const HISTORY_LEN: usize = 4;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transition {
    Down = 0,
    Up = 1,
}

#[derive(Debug, Clone)]
pub struct DoubleTapRecognizer {
    pointers: PointerTracker,
    history: VecDeque<(Transition, f64)>,
    window_ms: f64,
}

impl DoubleTapRecognizer {
    pub fn new(window_ms: f64) -> Self {
        Self {
            pointers: PointerTracker::new(1),
            history: VecDeque::with_capacity(HISTORY_LEN + 1),
            window_ms,
        }
    }

    fn record(&mut self, transition: Transition, timestamp: f64) {
        self.history.push_back((transition, timestamp));
        while self.history.len() > HISTORY_LEN {
            self.history.pop_front();
        }
    }

    fn is_double_tap(&self) -> bool {
        if self.history.len() != HISTORY_LEN {
            return false;
        }
        // 1*k1 + 2*k2 + 3*k3 + 4*k4 == 6 only for down, up, down, up
        let checksum: u32 = self
            .history
            .iter()
            .enumerate()
            .map(|(i, (t, _))| (i as u32 + 1) * (*t as u32))
            .sum();
        let elapsed = self.history[HISTORY_LEN - 1].1 - self.history[0].1;
        checksum == 6 && elapsed < self.window_ms
    }
}

impl Default for DoubleTapRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MS)
    }
}

impl Recognizer for DoubleTapRecognizer {
    fn handle(&mut self, input: &PointerInput) -> Vec<GestureEvent> {
        match input.kind {
            PointerEventKind::Down => {
                if self.pointers.press(input) {
                    self.record(Transition::Down, input.timestamp);
                }
            }
            // A cancelled contact is dropped without counting as a release.
            PointerEventKind::Cancel => {
                self.pointers.release(input.id);
            }
            PointerEventKind::Up => {
                if self.pointers.release(input.id) && self.pointers.is_empty() {
                    self.record(Transition::Up, input.timestamp);
                    if self.is_double_tap() {
                        return vec![GestureEvent::Done];
                    }
                }
            }
            _ => {}
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PointerId;

    fn tap(recognizer: &mut DoubleTapRecognizer, id: PointerId, down: f64, up: f64) -> Vec<GestureEvent> {
        let mut events = recognizer.handle(&PointerInput::new(id, PointerEventKind::Down, 0.0, 0.0).at(down));
        events.extend(recognizer.handle(&PointerInput::new(id, PointerEventKind::Up, 0.0, 0.0).at(up)));
        events
    }

    #[test]
    fn two_quick_taps_fire_done() {
        let mut dt = DoubleTapRecognizer::default();
        assert!(tap(&mut dt, 1, 0.0, 50.0).is_empty());
        assert_eq!(tap(&mut dt, 1, 150.0, 200.0), vec![GestureEvent::Done]);
    }

    #[test]
    fn slow_taps_do_not_fire() {
        let mut dt = DoubleTapRecognizer::default();
        tap(&mut dt, 1, 0.0, 50.0);
        assert!(tap(&mut dt, 1, 550.0, 600.0).is_empty());
    }

    #[test]
    fn window_is_exclusive() {
        let mut dt = DoubleTapRecognizer::default();
        tap(&mut dt, 1, 0.0, 50.0);
        assert!(tap(&mut dt, 1, 450.0, 500.0).is_empty());

        let mut dt = DoubleTapRecognizer::new(1000.0);
        tap(&mut dt, 1, 0.0, 50.0);
        assert_eq!(tap(&mut dt, 1, 450.0, 500.0), vec![GestureEvent::Done]);
    }

    #[test]
    fn only_the_last_four_transitions_count() {
        let mut dt = DoubleTapRecognizer::default();
        tap(&mut dt, 1, 0.0, 50.0);
        tap(&mut dt, 1, 2000.0, 2050.0);
        assert_eq!(tap(&mut dt, 1, 2100.0, 2150.0), vec![GestureEvent::Done]);
        // third tap pairs with the second
        assert_eq!(tap(&mut dt, 1, 2200.0, 2250.0), vec![GestureEvent::Done]);
    }

    #[test]
    fn second_simultaneous_contact_is_ignored() {
        let mut dt = DoubleTapRecognizer::default();
        dt.handle(&PointerInput::new(1, PointerEventKind::Down, 0.0, 0.0).at(0.0));
        dt.handle(&PointerInput::new(2, PointerEventKind::Down, 0.0, 0.0).at(10.0));
        dt.handle(&PointerInput::new(2, PointerEventKind::Up, 0.0, 0.0).at(20.0));
        assert_eq!(dt.history.len(), 1);
        dt.handle(&PointerInput::new(1, PointerEventKind::Up, 0.0, 0.0).at(50.0));
        assert_eq!(tap(&mut dt, 3, 100.0, 150.0), vec![GestureEvent::Done]);
    }

    #[test]
    fn moves_and_leaves_do_not_count() {
        let mut dt = DoubleTapRecognizer::default();
        dt.handle(&PointerInput::new(1, PointerEventKind::Down, 0.0, 0.0).at(0.0));
        assert!(dt.handle(&PointerInput::new(1, PointerEventKind::Leave, 0.0, 0.0).at(10.0)).is_empty());
        assert!(dt.handle(&PointerInput::new(1, PointerEventKind::Move, 5.0, 0.0).at(20.0)).is_empty());
        assert_eq!(dt.history.len(), 1);
        assert!(dt.pointers.contains(1));
    }

    #[test]
    fn cancelled_tap_does_not_complete_pattern() {
        let mut dt = DoubleTapRecognizer::default();
        dt.handle(&PointerInput::new(1, PointerEventKind::Down, 0.0, 0.0).at(0.0));
        assert!(dt.handle(&PointerInput::new(1, PointerEventKind::Cancel, 0.0, 0.0).at(40.0)).is_empty());
        assert!(!dt.pointers.contains(1));
        assert!(tap(&mut dt, 1, 100.0, 150.0).is_empty());
        // the next tap pairs with the completed one
        assert_eq!(tap(&mut dt, 1, 200.0, 250.0), vec![GestureEvent::Done]);
    }
}
