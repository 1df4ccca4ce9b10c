//! Core data models for gesture recognition.
//! Pointer input coming from the host and the gesture events produced from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::GestureOptions;
use crate::state::{
    DoubleTapRecognizer, PanRecognizer, Recognizer, SwipeRecognizer, ZoomRecognizer,
};

/// Host-assigned identity of one contact, stable from down to release.
pub type PointerId = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
    Leave,
    /// Pointer left an element. `within_container` is set when the element it
    /// left is a descendant of the container, which does not end the contact.
    Out { within_container: bool },
}

impl PointerEventKind {
    /// Whether this notification ends the participation of its contact.
    pub fn releases(self) -> bool {
        match self {
            PointerEventKind::Up | PointerEventKind::Cancel | PointerEventKind::Leave => true,
            PointerEventKind::Out { within_container } => !within_container,
            PointerEventKind::Down | PointerEventKind::Move => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub x: f64,
    pub y: f64,
    /// Wall-clock milliseconds at processing time.
    pub timestamp: f64,
}

impl PointerInput {
    pub fn new(id: PointerId, kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self {
            id,
            kind,
            x,
            y,
            timestamp: 0.0,
        }
    }

    pub fn at(mut self, timestamp: f64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn sample(&self) -> ContactSample {
        ContactSample {
            id: self.id,
            x: self.x,
            y: self.y,
        }
    }
}

/// One contact at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactSample {
    pub id: PointerId,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureEventType {
    Start,
    Change,
    End,
    Done,
}

impl GestureEventType {
    pub const ALL: [GestureEventType; 4] = [
        GestureEventType::Start,
        GestureEventType::Change,
        GestureEventType::End,
        GestureEventType::Done,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GestureEventType::Start => "start",
            GestureEventType::Change => "change",
            GestureEventType::End => "end",
            GestureEventType::Done => "done",
        }
    }
}

impl fmt::Display for GestureEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownEventType(pub String);

impl fmt::Display for UnknownEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gesture event type `{}`", self.0)
    }
}

impl std::error::Error for UnknownEventType {}

impl FromStr for GestureEventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GestureEventType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownEventType(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Dominant-axis classification; ties go to the vertical axis.
    pub fn classify(change_x: f64, change_y: f64) -> Self {
        if change_x.abs() > change_y.abs() {
            if change_x < 0.0 { Direction::Left } else { Direction::Right }
        } else if change_y < 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

/// Payload of `change` and `end` events.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Delta {
    /// Ratio of the current contact distance to the baseline distance.
    Scale { change: f64 },
    /// Rounded pixel offset of the pan reference point.
    #[serde(rename_all = "camelCase")]
    Offset { change_x: f64, change_y: f64 },
    /// Raw displacement of a single contact plus its dominant direction.
    /// `direction` is `None` only when a contact is released without moving.
    #[serde(rename_all = "camelCase")]
    Swipe {
        change_x: f64,
        change_y: f64,
        direction: Option<Direction>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GestureEvent {
    Start,
    Change(Delta),
    End(Delta),
    Done,
}

impl GestureEvent {
    pub fn event_type(&self) -> GestureEventType {
        match self {
            GestureEvent::Start => GestureEventType::Start,
            GestureEvent::Change(_) => GestureEventType::Change,
            GestureEvent::End(_) => GestureEventType::End,
            GestureEvent::Done => GestureEventType::Done,
        }
    }

    pub fn delta(&self) -> Option<Delta> {
        match self {
            GestureEvent::Change(delta) | GestureEvent::End(delta) => Some(*delta),
            GestureEvent::Start | GestureEvent::Done => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Zoom,
    Move,
    DoubleTap,
    Swipe,
}

impl GestureKind {
    pub fn event_types(self) -> &'static [GestureEventType] {
        const CONTINUOUS: &[GestureEventType] = &[
            GestureEventType::Start,
            GestureEventType::Change,
            GestureEventType::End,
        ];
        match self {
            GestureKind::DoubleTap => &[GestureEventType::Done],
            GestureKind::Zoom | GestureKind::Move | GestureKind::Swipe => CONTINUOUS,
        }
    }

    pub fn recognizer(self, options: &GestureOptions) -> Box<dyn Recognizer> {
        match self {
            GestureKind::Zoom => Box::new(ZoomRecognizer::new()),
            GestureKind::Move => Box::new(PanRecognizer::new()),
            GestureKind::DoubleTap => {
                Box::new(DoubleTapRecognizer::new(options.double_tap_window_ms))
            }
            GestureKind::Swipe => Box::new(SwipeRecognizer::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn out_inside_container_does_not_release() {
        assert!(!PointerEventKind::Out { within_container: true }.releases());
        assert!(PointerEventKind::Out { within_container: false }.releases());
        assert!(PointerEventKind::Leave.releases());
        assert!(!PointerEventKind::Move.releases());
    }

    #[test]
    fn events_serialize_with_host_field_names() {
        let pan = GestureEvent::End(Delta::Offset {
            change_x: 30.0,
            change_y: 20.0,
        });
        assert_eq!(
            serde_json::to_value(pan).unwrap(),
            json!({"type": "end", "changeX": 30.0, "changeY": 20.0})
        );

        let swipe = GestureEvent::Change(Delta::Swipe {
            change_x: -60.0,
            change_y: -5.0,
            direction: Some(Direction::Left),
        });
        assert_eq!(
            serde_json::to_value(swipe).unwrap(),
            json!({"type": "change", "changeX": -60.0, "changeY": -5.0, "direction": "left"})
        );

        assert_eq!(
            serde_json::to_value(GestureEvent::Change(Delta::Scale { change: 2.0 })).unwrap(),
            json!({"type": "change", "change": 2.0})
        );
        assert_eq!(
            serde_json::to_value(GestureEvent::Done).unwrap(),
            json!({"type": "done"})
        );
    }

    #[test]
    fn event_type_parses_from_str() {
        assert_eq!("change".parse::<GestureEventType>(), Ok(GestureEventType::Change));
        assert_eq!(
            "tap".parse::<GestureEventType>(),
            Err(UnknownEventType("tap".to_string()))
        );
    }

    #[test]
    fn direction_ties_resolve_vertically() {
        assert_eq!(Direction::classify(30.0, 30.0), Direction::Down);
        assert_eq!(Direction::classify(-30.0, -30.0), Direction::Up);
        assert_eq!(Direction::classify(-60.0, -5.0), Direction::Left);
        assert_eq!(Direction::classify(7.0, 2.0), Direction::Right);
    }
}
