// Single-contact directional drag.

use super::{PointerTracker, Recognizer};
use crate::model::{Delta, Direction, GestureEvent, PointerEventKind, PointerInput};

#[derive(Debug, Clone)]
pub struct SwipeRecognizer {
    pointers: PointerTracker,
    started: bool,
    last_change: (f64, f64, Option<Direction>),
}

impl SwipeRecognizer {
    pub fn new() -> Self {
        Self {
            pointers: PointerTracker::new(1),
            started: false,
            last_change: (0.0, 0.0, None),
        }
    }
}

impl Default for SwipeRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer for SwipeRecognizer {
    fn handle(&mut self, input: &PointerInput) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        match input.kind {
            PointerEventKind::Down => {
                if self.pointers.press(input) {
                    self.started = false;
                }
            }
            PointerEventKind::Move => {
                if !self.pointers.update(input) {
                    return events;
                }
                let Some(contact) = self.pointers.get(0) else {
                    return events;
                };
                let change_x = contact.latest.x - contact.down.x;
                let change_y = contact.latest.y - contact.down.y;
                let direction = Direction::classify(change_x, change_y);
                if !self.started {
                    self.started = true;
                    events.push(GestureEvent::Start);
                }
                self.last_change = (change_x, change_y, Some(direction));
                events.push(GestureEvent::Change(Delta::Swipe {
                    change_x,
                    change_y,
                    direction: Some(direction),
                }));
            }
            kind if kind.releases() => {
                if self.pointers.release(input.id) {
                    let (change_x, change_y, direction) = self.last_change;
                    events.push(GestureEvent::End(Delta::Swipe {
                        change_x,
                        change_y,
                        direction,
                    }));
                    self.last_change = (0.0, 0.0, None);
                    self.started = false;
                }
            }
            _ => {}
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PointerId;

    fn input(id: PointerId, kind: PointerEventKind, x: f64, y: f64) -> PointerInput {
        PointerInput::new(id, kind, x, y)
    }

    fn swipe(change_x: f64, change_y: f64, direction: Direction) -> Delta {
        Delta::Swipe {
            change_x,
            change_y,
            direction: Some(direction),
        }
    }

    #[test]
    fn first_move_starts_and_ties_go_vertical() {
        let mut sw = SwipeRecognizer::new();
        assert!(sw.handle(&input(1, PointerEventKind::Down, 0.0, 0.0)).is_empty());
        assert_eq!(
            sw.handle(&input(1, PointerEventKind::Move, 30.0, 30.0)),
            vec![
                GestureEvent::Start,
                GestureEvent::Change(swipe(30.0, 30.0, Direction::Down))
            ]
        );
        assert_eq!(
            sw.handle(&input(1, PointerEventKind::Move, -60.0, -5.0)),
            vec![GestureEvent::Change(swipe(-60.0, -5.0, Direction::Left))]
        );
        assert_eq!(
            sw.handle(&input(1, PointerEventKind::Up, -61.0, -5.0)),
            vec![GestureEvent::End(swipe(-60.0, -5.0, Direction::Left))]
        );
    }

    #[test]
    fn changes_are_not_rounded() {
        let mut sw = SwipeRecognizer::new();
        sw.handle(&input(1, PointerEventKind::Down, 0.5, 0.0));
        let events = sw.handle(&input(1, PointerEventKind::Move, 0.0, 2.25));
        assert_eq!(
            events.last(),
            Some(&GestureEvent::Change(swipe(-0.5, 2.25, Direction::Down)))
        );
    }

    #[test]
    fn second_contact_is_ignored_until_release() {
        let mut sw = SwipeRecognizer::new();
        sw.handle(&input(1, PointerEventKind::Down, 0.0, 0.0));
        assert!(sw.handle(&input(2, PointerEventKind::Down, 50.0, 50.0)).is_empty());
        assert!(sw.handle(&input(2, PointerEventKind::Move, 90.0, 50.0)).is_empty());
        assert!(sw.handle(&input(2, PointerEventKind::Up, 90.0, 50.0)).is_empty());

        sw.handle(&input(1, PointerEventKind::Move, 0.0, -10.0));
        let end = sw.handle(&input(1, PointerEventKind::Cancel, 0.0, -10.0));
        assert_eq!(end, vec![GestureEvent::End(swipe(0.0, -10.0, Direction::Up))]);
    }

    #[test]
    fn release_resets_for_a_fresh_gesture() {
        let mut sw = SwipeRecognizer::new();
        sw.handle(&input(1, PointerEventKind::Down, 0.0, 0.0));
        sw.handle(&input(1, PointerEventKind::Move, 10.0, 0.0));
        sw.handle(&input(1, PointerEventKind::Up, 10.0, 0.0));

        sw.handle(&input(2, PointerEventKind::Down, 100.0, 100.0));
        assert_eq!(
            sw.handle(&input(2, PointerEventKind::Move, 100.0, 120.0)),
            vec![
                GestureEvent::Start,
                GestureEvent::Change(swipe(0.0, 20.0, Direction::Down))
            ]
        );
    }

    #[test]
    fn release_without_move_has_no_direction() {
        let mut sw = SwipeRecognizer::new();
        sw.handle(&input(4, PointerEventKind::Down, 0.0, 0.0));
        assert_eq!(
            sw.handle(&input(4, PointerEventKind::Up, 0.0, 0.0)),
            vec![GestureEvent::End(Delta::Swipe {
                change_x: 0.0,
                change_y: 0.0,
                direction: None,
            })]
        );
    }
}
