// Active contacts of one recognizer, keyed by pointer id in arrival order.

use crate::model::{ContactSample, PointerId, PointerInput};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedContact {
    /// Position at contact start, moved forward when a gesture re-baselines.
    pub down: ContactSample,
    pub latest: ContactSample,
}

#[derive(Debug, Clone)]
pub struct PointerTracker {
    capacity: usize,
    contacts: Vec<TrackedContact>,
}

impl PointerTracker {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            contacts: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contains(&self, id: PointerId) -> bool {
        self.contacts.iter().any(|c| c.down.id == id)
    }

    /// Starts tracking the contact. Returns false when the id is already
    /// tracked or the tracker is full.
    pub fn press(&mut self, input: &PointerInput) -> bool {
        if self.contacts.len() >= self.capacity || self.contains(input.id) {
            return false;
        }
        let sample = input.sample();
        self.contacts.push(TrackedContact {
            down: sample,
            latest: sample,
        });
        true
    }

    /// Records the latest position of a tracked contact.
    pub fn update(&mut self, input: &PointerInput) -> bool {
        match self.contacts.iter_mut().find(|c| c.down.id == input.id) {
            Some(contact) => {
                contact.latest = input.sample();
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, id: PointerId) -> bool {
        match self.contacts.iter().position(|c| c.down.id == id) {
            Some(idx) => {
                self.contacts.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Makes every contact's latest position its new down position.
    pub fn rebaseline(&mut self) {
        for contact in &mut self.contacts {
            contact.down = contact.latest;
        }
    }

    pub fn get(&self, idx: usize) -> Option<&TrackedContact> {
        self.contacts.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedContact> {
        self.contacts.iter()
    }
}
