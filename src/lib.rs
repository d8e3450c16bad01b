// Lucky Draw Contest
// Randomized prize draws over a ticket roster: load participants once,
// index their tickets, then draw winners with no repeats and a prize tier
// set by draw order.

pub mod engine;
pub mod error;
pub mod index;
pub mod registry;
pub mod state;

pub use engine::DrawEngine;
pub use error::{DrawError, LoadError};
pub use index::TicketIndex;
pub use registry::{Participant, Registry, TicketNumber};
pub use state::{DrawState, PrizeTier, Winner};
