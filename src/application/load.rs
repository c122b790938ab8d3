//! Load generation guard
//!
//! Forest loads resolve in any order. Each load takes a ticket; only the
//! result carrying the latest ticket may be applied, older ones are discarded.

/// Issued when a load starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct LoadGeneration {
    current: u64,
}

impl LoadGeneration {
    pub fn begin(&mut self) -> LoadTicket {
        self.current += 1;
        LoadTicket(self.current)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.current
    }

    pub fn current(&self) -> u64 {
        self.current
    }
}

/// What happened to a completed load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { roots: usize, nodes: usize },
    /// A newer load was started before this one resolved
    Discarded,
}
