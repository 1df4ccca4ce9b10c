//! Demo pad state: the transform the gestures drive plus a short event log.

use std::collections::VecDeque;
use std::rc::Rc;

use touch_gestures::{Delta, Direction, GestureEvent, GestureKind};
use yew::Reducible;

const LOG_LEN: usize = 12;

#[derive(Clone, Debug, PartialEq)]
pub struct PadState {
    pub scale: f64,
    pub live_scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub live_offset: (f64, f64),
    pub swipe: Option<Direction>,
    pub double_taps: u32,
    pub log: VecDeque<String>,
}

impl Default for PadState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            live_scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            live_offset: (0.0, 0.0),
            swipe: None,
            double_taps: 0,
            log: VecDeque::with_capacity(LOG_LEN),
        }
    }
}

impl PadState {
    pub fn effective_scale(&self) -> f64 {
        self.scale * self.live_scale
    }

    pub fn effective_offset(&self) -> (f64, f64) {
        (
            self.offset_x + self.live_offset.0,
            self.offset_y + self.live_offset.1,
        )
    }

    pub fn css_transform(&self) -> String {
        let (x, y) = self.effective_offset();
        format!("translate({}px, {}px) scale({})", x, y, self.effective_scale())
    }

    fn push_log(&mut self, kind: GestureKind, event: &GestureEvent) {
        let payload = serde_json::to_string(event).unwrap_or_default();
        if self.log.len() == LOG_LEN {
            self.log.pop_back();
        }
        self.log.push_front(format!("{kind:?} {payload}"));
    }
}

pub enum PadAction {
    Gesture(GestureKind, GestureEvent),
    Reset,
}

impl Reducible for PadState {
    type Action = PadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            PadAction::Reset => {
                let taps = new.double_taps;
                let log = std::mem::take(&mut new.log);
                new = PadState {
                    double_taps: taps,
                    log,
                    ..PadState::default()
                };
            }
            PadAction::Gesture(kind, event) => {
                new.push_log(kind, &event);
                match (kind, event) {
                    (GestureKind::Zoom, GestureEvent::Start) => new.live_scale = 1.0,
                    (GestureKind::Zoom, GestureEvent::Change(Delta::Scale { change })) => {
                        new.live_scale = change;
                    }
                    (GestureKind::Zoom, GestureEvent::End(Delta::Scale { change })) => {
                        new.scale *= change;
                        new.live_scale = 1.0;
                    }
                    (GestureKind::Move, GestureEvent::Start) => new.live_offset = (0.0, 0.0),
                    (GestureKind::Move, GestureEvent::Change(Delta::Offset { change_x, change_y })) => {
                        new.live_offset = (change_x, change_y);
                    }
                    (GestureKind::Move, GestureEvent::End(Delta::Offset { change_x, change_y })) => {
                        new.offset_x += change_x;
                        new.offset_y += change_y;
                        new.live_offset = (0.0, 0.0);
                    }
                    (GestureKind::Swipe, GestureEvent::Change(Delta::Swipe { direction, .. }))
                    | (GestureKind::Swipe, GestureEvent::End(Delta::Swipe { direction, .. })) => {
                        if direction.is_some() {
                            new.swipe = direction;
                        }
                    }
                    (GestureKind::DoubleTap, GestureEvent::Done) => {
                        new.double_taps += 1;
                        new.scale = 1.0;
                        new.live_scale = 1.0;
                        new.offset_x = 0.0;
                        new.offset_y = 0.0;
                        new.live_offset = (0.0, 0.0);
                    }
                    _ => {}
                }
            }
        }
        Rc::new(new)
    }
}
