// Lucky Draw Contest - Draw Engine
use rand::Rng;
use tracing::debug;

use crate::error::DrawError;
use crate::index::TicketIndex;
use crate::registry::{Registry, TicketNumber};
use crate::state::{DrawState, PrizeTier, Winner};

/// Draws winners from the remaining eligible tickets.
///
/// Owns the read-only [`TicketIndex`] and the session [`DrawState`]. Each
/// engine instance is an isolated session; drawing takes `&mut self`, so
/// overlapping draw calls cannot be expressed.
#[derive(Debug)]
pub struct DrawEngine {
    index: TicketIndex,
    state: DrawState,
}

impl DrawEngine {
    /// Engine over a pre-built index, with fresh session state.
    pub fn new(index: TicketIndex) -> Self {
        Self {
            index,
            state: DrawState::new(),
        }
    }

    /// Build the index from `registry` and wrap it.
    pub fn from_registry(registry: &Registry) -> Self {
        Self::new(TicketIndex::build(registry))
    }

    /// Draw one winner with the thread-local generator.
    ///
    /// Selection is uniform over the remaining tickets. The generator is a
    /// general-purpose PRNG, not a cryptographic one.
    pub fn draw(&mut self) -> Result<Winner, DrawError> {
        self.draw_with_rng(&mut rand::thread_rng())
    }

    /// Draw one winner using the supplied generator.
    ///
    /// Fails with [`DrawError::ExhaustedPool`] when no tickets remain, and
    /// with [`DrawError::Integrity`] when the selected ticket has no owner
    /// in the index. State is untouched on either failure.
    pub fn draw_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Winner, DrawError> {
        let pool: Vec<TicketNumber> = self
            .index
            .tickets()
            .iter()
            .copied()
            .filter(|&ticket| !self.state.is_drawn(ticket))
            .collect();

        if pool.is_empty() {
            return Err(DrawError::ExhaustedPool);
        }

        let ticket = pool[rng.gen_range(0..pool.len())];
        let participant = self
            .index
            .owner(ticket)
            .cloned()
            .ok_or(DrawError::Integrity(ticket))?;

        // Tier comes from the count before this draw lands.
        let prize = PrizeTier::for_completed_draws(self.state.draw_count());
        self.state.record(ticket);

        debug!(
            "Draw {}: ticket {} won {} for participant {} ({})",
            self.state.draw_count(),
            ticket,
            prize,
            participant.id,
            participant.name
        );

        Ok(Winner {
            participant,
            ticket,
            prize,
        })
    }

    /// Tickets still eligible, in registration order.
    pub fn remaining_tickets(&self) -> Vec<TicketNumber> {
        self.index
            .tickets()
            .iter()
            .copied()
            .filter(|&ticket| !self.state.is_drawn(ticket))
            .collect()
    }

    /// Session draw state, read-only.
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    /// The index the engine draws from.
    pub fn index(&self) -> &TicketIndex {
        &self.index
    }
}
