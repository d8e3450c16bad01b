// Lucky Draw Contest - Errors
use thiserror::Error;

use crate::registry::TicketNumber;

/// Errors returned by the draw engine.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// Every registered ticket has already been drawn. Recoverable: the
    /// caller should stop requesting draws, state remains queryable.
    #[error("No eligible tickets remain")]
    ExhaustedPool,

    /// A selected ticket has no owner in the index. A data-construction
    /// defect: the caller should abort the contest flow.
    #[error("No participant owns ticket {0}")]
    Integrity(TicketNumber),
}

/// Errors from the participant loading boundary.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Invalid participant data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Participant list is empty")]
    NoParticipants,

    #[error("Participant {id} ({name}) owns no tickets")]
    NoTickets { id: u32, name: String },
}
