/// Orders overlapping refreshes: every refresh gets a ticket, and a response older
/// than the newest applied one is dropped.
#[derive(Debug, Default)]
pub struct RefreshSequencer {
    issued: u64,
    applied: Option<u64>,
}

impl RefreshSequencer {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// False when a newer refresh has already been applied.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.applied.is_none_or(|applied| ticket >= applied)
    }

    /// Records `ticket` as applied if it is current.
    pub fn accept(&mut self, ticket: u64) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.applied = Some(ticket);
        true
    }

    pub fn latest_issued(&self) -> u64 {
        self.issued
    }

    pub fn latest_applied(&self) -> Option<u64> {
        self.applied
    }
}

#[cfg(test)]
#[path = "../tests/console/refresh_tests.rs"]
mod tests;
