// Lucky Draw Contest - Draw State
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::registry::{Participant, TicketNumber};

/// Prize tier awarded to a winner, by draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrizeTier {
    /// First successful draw of the session
    Grand,
    /// Every successful draw after the first
    Second,
}

impl PrizeTier {
    /// Tier for the draw made after `completed_draws` successful draws.
    pub fn for_completed_draws(completed_draws: u64) -> Self {
        if completed_draws == 0 {
            PrizeTier::Grand
        } else {
            PrizeTier::Second
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrizeTier::Grand => "Grand Prize",
            PrizeTier::Second => "Second Prize",
        }
    }
}

impl fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of one successful draw.
#[derive(Debug, Clone)]
pub struct Winner {
    /// Who won
    pub participant: Arc<Participant>,
    /// The ticket that won
    pub ticket: TicketNumber,
    /// Tier assigned by draw order
    pub prize: PrizeTier,
}

/// Which tickets have been drawn this session, and how many draws have
/// completed.
///
/// Starts empty and lives in memory for the session. Mutated only by the
/// draw engine; everything public here is read-only.
#[derive(Debug, Clone, Default)]
pub struct DrawState {
    drawn: HashSet<TicketNumber>,
    history: Vec<TicketNumber>,
    draw_count: u64,
}

impl DrawState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `ticket` has already been drawn.
    pub fn is_drawn(&self, ticket: TicketNumber) -> bool {
        self.drawn.contains(&ticket)
    }

    /// Drawn tickets, in draw order.
    pub fn drawn_tickets(&self) -> &[TicketNumber] {
        &self.history
    }

    /// Completed draws this session.
    pub fn draw_count(&self) -> u64 {
        self.draw_count
    }

    /// Record a completed draw. The ticket must not have been drawn before.
    pub(crate) fn record(&mut self, ticket: TicketNumber) {
        debug_assert!(!self.drawn.contains(&ticket));
        self.drawn.insert(ticket);
        self.history.push(ticket);
        self.draw_count += 1;
    }
}
