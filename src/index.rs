// Lucky Draw Contest - Ticket Index
use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::registry::{Participant, Registry, TicketNumber};

/// Lookup from ticket number to owning participant.
///
/// Built once after the registry is loaded and read-only afterwards. Ticket
/// numbers are also kept in registration order, so the eligible pool
/// iterates the same way on every pass.
#[derive(Debug, Clone)]
pub struct TicketIndex {
    owners: HashMap<TicketNumber, Arc<Participant>>,
    tickets: Vec<TicketNumber>,
}

impl TicketIndex {
    /// Map every ticket of every participant to its owner.
    ///
    /// A ticket number claimed by two participants keeps the later owner
    /// (last-write-wins); uniqueness is guaranteed upstream and not
    /// validated here. The number is listed once either way.
    pub fn build(registry: &Registry) -> Self {
        let mut owners = HashMap::new();
        let mut tickets = Vec::new();

        for participant in registry.participants() {
            for &ticket in &participant.tickets {
                if let Some(prev) = owners.insert(ticket, Arc::clone(participant)) {
                    warn!(
                        "Ticket {} reassigned from participant {} to participant {}",
                        ticket, prev.id, participant.id
                    );
                } else {
                    tickets.push(ticket);
                }
            }
        }

        info!(
            "Indexed {} tickets across {} participants",
            tickets.len(),
            registry.len()
        );
        Self { owners, tickets }
    }

    /// Owner of `ticket`, if the ticket is registered.
    pub fn owner(&self, ticket: TicketNumber) -> Option<&Arc<Participant>> {
        self.owners.get(&ticket)
    }

    /// All registered ticket numbers, in registration order.
    pub fn tickets(&self) -> &[TicketNumber] {
        &self.tickets
    }

    /// Number of registered tickets.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Drop the owner mapping while leaving the ticket listed. Corruption
    /// injection for engine tests.
    #[cfg(test)]
    pub(crate) fn remove_owner(&mut self, ticket: TicketNumber) {
        self.owners.remove(&ticket);
    }
}
