//! Per-session action counters

use crate::game::{Action, Outcome};

/// Tally of what happened during one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub played: u32,
    pub inserted: u32,
    pub reserved: u32,
    pub used: u32,
    /// Actions refused for any reason
    pub rejected: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an action outcome
    pub fn record(&mut self, outcome: &Outcome) {
        if !outcome.is_success() {
            self.rejected += 1;
            return;
        }
        match outcome.action() {
            Action::Play => self.played += 1,
            Action::Insert => self.inserted += 1,
            Action::Reserve => self.reserved += 1,
            Action::UseReserved => self.used += 1,
        }
    }

    /// Actions that went through
    pub fn accepted(&self) -> u32 {
        self.played + self.inserted + self.reserved + self.used
    }
}
