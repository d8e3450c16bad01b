// Lucky Draw Contest - Participant Registry
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::error::LoadError;

/// A ticket number entered into the draw.
pub type TicketNumber = u32;

/// A contest participant and the tickets they hold.
///
/// Loaded once from the roster data and immutable afterwards. Ticket numbers
/// are unique across the whole roster; the data source guarantees this and
/// the loader does not re-check it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Participant {
    /// Stable participant ID
    pub id: u32,
    /// Display name
    pub name: String,
    /// Ticket numbers held, in issue order
    pub tickets: Vec<TicketNumber>,
}

/// The loaded-once participant roster.
#[derive(Debug, Clone)]
pub struct Registry {
    participants: Vec<Arc<Participant>>,
}

impl Registry {
    /// Build a registry from already-validated participant records.
    pub fn new(participants: Vec<Participant>) -> Self {
        Self {
            participants: participants.into_iter().map(Arc::new).collect(),
        }
    }

    /// Load a registry from a JSON array of participant records.
    ///
    /// Rejects an empty roster and participants without tickets. Ticket
    /// uniqueness across participants is the data source's responsibility.
    pub fn from_json(data: &str) -> Result<Self, LoadError> {
        let participants: Vec<Participant> = serde_json::from_str(data)?;
        if participants.is_empty() {
            return Err(LoadError::NoParticipants);
        }
        for participant in &participants {
            if participant.tickets.is_empty() {
                return Err(LoadError::NoTickets {
                    id: participant.id,
                    name: participant.name.clone(),
                });
            }
        }
        info!("Loaded {} participants", participants.len());
        Ok(Self::new(participants))
    }

    /// All participants, in load order.
    pub fn participants(&self) -> &[Arc<Participant>] {
        &self.participants
    }

    /// Number of participants in the roster.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
