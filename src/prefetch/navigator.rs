use crate::records::RecordId;

/// Handle for one press-driven navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTicket {
    seq: u64,
    target: RecordId,
}

impl NavigationTicket {
    pub fn target(&self) -> &RecordId {
        &self.target
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Issues navigation tickets; only the most recent one may commit.
///
/// Owned by the UI loop, so plain `&mut self` is enough.
#[derive(Debug, Default)]
pub struct Navigator {
    latest: u64,
}

impl Navigator {
    /// Start a navigation to `target`, superseding any earlier ticket.
    pub fn begin(&mut self, target: RecordId) -> NavigationTicket {
        self.latest += 1;
        NavigationTicket {
            seq: self.latest,
            target,
        }
    }

    pub fn is_current(&self, ticket: &NavigationTicket) -> bool {
        ticket.seq == self.latest
    }

    /// Resolve a ticket: returns the target if the ticket is still current.
    pub fn commit(&self, ticket: &NavigationTicket) -> Option<RecordId> {
        self.is_current(ticket).then(|| ticket.target.clone())
    }

    /// Supersede every outstanding ticket without starting a new one, e.g.
    /// when the user navigates some other way.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
