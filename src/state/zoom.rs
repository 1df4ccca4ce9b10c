// Two-contact pinch recognizer.

use super::{PointerTracker, Recognizer};
use crate::model::{Delta, GestureEvent, PointerEventKind, PointerInput};
use crate::util::distance;

#[derive(Debug, Clone)]
pub struct ZoomRecognizer {
    pointers: PointerTracker,
    start_distance: f64,
    last_change: f64,
    /// Set when the pair dropped to one contact that is still down.
    restarting: bool,
}

impl ZoomRecognizer {
    pub fn new() -> Self {
        Self {
            pointers: PointerTracker::new(2),
            start_distance: 0.0,
            last_change: 1.0,
            restarting: false,
        }
    }

    fn start(&mut self) -> GestureEvent {
        // A contact that stayed down while its partner was replaced keeps
        // measuring from where it is now.
        if self.restarting {
            self.pointers.rebaseline();
            self.restarting = false;
        }
        if let (Some(a), Some(b)) = (self.pointers.get(0), self.pointers.get(1)) {
            self.start_distance = distance(&a.down, &b.down);
        }
        GestureEvent::Start
    }

    fn current_distance(&self) -> Option<f64> {
        let a = self.pointers.get(0)?;
        let b = self.pointers.get(1)?;
        Some(distance(&a.latest, &b.latest))
    }
}

impl Default for ZoomRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer for ZoomRecognizer {
    fn handle(&mut self, input: &PointerInput) -> Vec<GestureEvent> {
        match input.kind {
            PointerEventKind::Down => {
                if self.pointers.press(input) && self.pointers.len() == 2 {
                    return vec![self.start()];
                }
            }
            PointerEventKind::Move => {
                if !self.pointers.update(input) {
                    return Vec::new();
                }
                if let Some(current) = self.current_distance() {
                    self.last_change = current / self.start_distance;
                    return vec![GestureEvent::Change(Delta::Scale {
                        change: self.last_change,
                    })];
                }
            }
            kind if kind.releases() => {
                if !self.pointers.release(input.id) {
                    return Vec::new();
                }
                if self.pointers.is_empty() {
                    self.restarting = false;
                } else if self.pointers.len() == 1 {
                    self.restarting = true;
                    return vec![GestureEvent::End(Delta::Scale {
                        change: self.last_change,
                    })];
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

    fn input(id: PointerId, kind: PointerEventKind, x: f64, y: f64) -> PointerInput {
        PointerInput::new(id, kind, x, y)
    }

    fn scale(event: &GestureEvent) -> f64 {
        match event.delta() {
            Some(Delta::Scale { change }) => change,
            other => panic!("expected scale delta, got {other:?}"),
        }
    }

    #[test]
    fn ratio_against_start_distance() {
        let mut zoom = ZoomRecognizer::new();
        assert!(zoom.handle(&input(1, PointerEventKind::Down, 0.0, 0.0)).is_empty());
        assert_eq!(
            zoom.handle(&input(2, PointerEventKind::Down, 100.0, 0.0)),
            vec![GestureEvent::Start]
        );
        assert_eq!(zoom.start_distance, 100.0);

        let events = zoom.handle(&input(2, PointerEventKind::Move, 200.0, 0.0));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), crate::model::GestureEventType::Change);
        assert_eq!(scale(&events[0]), 2.0);
    }

    #[test]
    fn end_reports_last_change() {
        let mut zoom = ZoomRecognizer::new();
        zoom.handle(&input(1, PointerEventKind::Down, 0.0, 0.0));
        zoom.handle(&input(2, PointerEventKind::Down, 100.0, 0.0));
        let change = zoom.handle(&input(1, PointerEventKind::Move, 50.0, 0.0));
        let end = zoom.handle(&input(2, PointerEventKind::Up, 300.0, 0.0));
        assert_eq!(end, vec![GestureEvent::End(Delta::Scale { change: 0.5 })]);
        assert_eq!(end[0].delta(), change[0].delta());
    }

    #[test]
    fn single_contact_moves_emit_nothing() {
        let mut zoom = ZoomRecognizer::new();
        zoom.handle(&input(1, PointerEventKind::Down, 0.0, 0.0));
        assert!(zoom.handle(&input(1, PointerEventKind::Move, 10.0, 0.0)).is_empty());
        assert!(zoom.handle(&input(1, PointerEventKind::Up, 10.0, 0.0)).is_empty());
    }

    #[test]
    fn restart_uses_current_position_of_remaining_contact() {
        let mut zoom = ZoomRecognizer::new();
        zoom.handle(&input(1, PointerEventKind::Down, 0.0, 0.0));
        zoom.handle(&input(2, PointerEventKind::Down, 100.0, 0.0));
        zoom.handle(&input(2, PointerEventKind::Up, 100.0, 0.0));
        zoom.handle(&input(1, PointerEventKind::Move, 50.0, 0.0));

        let events = zoom.handle(&input(3, PointerEventKind::Down, 150.0, 0.0));
        assert_eq!(events, vec![GestureEvent::Start]);
        assert_eq!(zoom.start_distance, 100.0);

        let events = zoom.handle(&input(3, PointerEventKind::Move, 250.0, 0.0));
        assert_eq!(scale(&events[0]), 2.0);
    }

    #[test]
    fn first_start_uses_down_samples() {
        let mut zoom = ZoomRecognizer::new();
        zoom.handle(&input(1, PointerEventKind::Down, 0.0, 0.0));
        zoom.handle(&input(1, PointerEventKind::Move, 50.0, 0.0));
        zoom.handle(&input(2, PointerEventKind::Down, 100.0, 0.0));
        assert_eq!(zoom.start_distance, 100.0);

        let events = zoom.handle(&input(2, PointerEventKind::Move, 250.0, 0.0));
        assert_eq!(scale(&events[0]), 2.0);
    }

    #[test]
    fn fresh_pair_after_full_release_uses_down_samples() {
        let mut zoom = ZoomRecognizer::new();
        zoom.handle(&input(1, PointerEventKind::Down, 0.0, 0.0));
        zoom.handle(&input(2, PointerEventKind::Down, 100.0, 0.0));
        zoom.handle(&input(2, PointerEventKind::Up, 100.0, 0.0));
        zoom.handle(&input(1, PointerEventKind::Up, 0.0, 0.0));

        zoom.handle(&input(3, PointerEventKind::Down, 0.0, 0.0));
        zoom.handle(&input(3, PointerEventKind::Move, 40.0, 0.0));
        zoom.handle(&input(4, PointerEventKind::Down, 200.0, 0.0));
        assert_eq!(zoom.start_distance, 200.0);
    }

    #[test]
    fn duplicate_down_and_third_contact_are_ignored() {
        let mut zoom = ZoomRecognizer::new();
        zoom.handle(&input(1, PointerEventKind::Down, 0.0, 0.0));
        assert!(zoom.handle(&input(1, PointerEventKind::Down, 5.0, 0.0)).is_empty());
        zoom.handle(&input(2, PointerEventKind::Down, 100.0, 0.0));
        assert!(zoom.handle(&input(3, PointerEventKind::Down, 40.0, 0.0)).is_empty());
        assert!(zoom.handle(&input(3, PointerEventKind::Move, 90.0, 0.0)).is_empty());
        assert!(zoom.handle(&input(3, PointerEventKind::Up, 90.0, 0.0)).is_empty());
        assert_eq!(zoom.pointers.len(), 2);
    }

    #[test]
    fn cancel_leave_and_out_release_like_up() {
        for kind in [
            PointerEventKind::Cancel,
            PointerEventKind::Leave,
            PointerEventKind::Out { within_container: false },
        ] {
            let mut zoom = ZoomRecognizer::new();
            zoom.handle(&input(1, PointerEventKind::Down, 0.0, 0.0));
            zoom.handle(&input(2, PointerEventKind::Down, 100.0, 0.0));
            let events = zoom.handle(&input(2, kind, 0.0, 0.0));
            assert_eq!(events, vec![GestureEvent::End(Delta::Scale { change: 1.0 })]);
        }
    }

    #[test]
    fn out_within_container_keeps_contact() {
        let mut zoom = ZoomRecognizer::new();
        zoom.handle(&input(1, PointerEventKind::Down, 0.0, 0.0));
        zoom.handle(&input(2, PointerEventKind::Down, 100.0, 0.0));
        let out = PointerEventKind::Out { within_container: true };
        assert!(zoom.handle(&input(2, out, 0.0, 0.0)).is_empty());
        assert_eq!(zoom.pointers.len(), 2);
    }

    #[test]
    fn release_of_untracked_id_is_ignored() {
        let mut zoom = ZoomRecognizer::new();
        zoom.handle(&input(1, PointerEventKind::Down, 0.0, 0.0));
        zoom.handle(&input(2, PointerEventKind::Down, 100.0, 0.0));
        assert!(zoom.handle(&input(9, PointerEventKind::Up, 0.0, 0.0)).is_empty());
        assert_eq!(zoom.pointers.len(), 2);
    }
}
