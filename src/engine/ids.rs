//! Id generation owned by each engine instance.

use uuid::Uuid;

/// Source of fresh character and effect ids.
pub trait IdGenerator: Send + Sync {
    /// Produce an id not handed out before by this generator.
    fn next_id(&mut self) -> String;

    /// Note an id that already exists (e.g. from a restored snapshot) so it
    /// is never produced again. Default does nothing.
    fn observe(&mut self, _id: &str) {}
}

/// Monotonic decimal ids: "1", "2", "3", ...
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Resume after a known id.
    pub fn starting_after(last: u64) -> Self {
        Self {
            next: last.saturating_add(1),
        }
    }

    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id.to_string()
    }

    fn observe(&mut self, id: &str) {
        if let Ok(n) = id.parse::<u64>() {
            if n >= self.next {
                self.next = n.saturating_add(1);
            }
        }
    }
}

/// Random v4 UUID ids; no coordination with restored snapshots needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}
