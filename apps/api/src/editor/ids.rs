use crate::models::ResumeDocument;

/// Source of entry ids for one editing session.
///
/// Ids are decimal strings of a counter that moves forward and wraps back to
/// 1 after `u64::MAX`. Callers go through [`IdSequence::next_unused`], so a
/// wrapped counter still never hands out an id that is already taken.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn starting_at(next: u64) -> Self {
        IdSequence { next }
    }

    /// Seeds the counter past every numeric id already in `doc`. Non-numeric
    /// ids (hand-edited records, older clock-based ids) are ignored; the
    /// collision check in [`IdSequence::next_unused`] still covers them.
    pub fn seeded_from(doc: &ResumeDocument) -> Self {
        let highest = doc
            .entry_ids()
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        IdSequence::starting_at(highest.checked_add(1).unwrap_or(1))
    }

    pub fn next_id(&mut self) -> String {
        let id = self.next;
        self.next = self.next.checked_add(1).unwrap_or(1);
        id.to_string()
    }

    /// Returns the next id for which `taken` is false.
    pub fn next_unused<F>(&mut self, taken: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        loop {
            let id = self.next_id();
            if !taken(&id) {
                return id;
            }
        }
    }
}
