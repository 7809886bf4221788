//! The linked-list teaching game.
//!
//! A player picks an [`Operation`], submits a value, and earns points for
//! every operation that succeeds. Points scale with difficulty, which tracks
//! the player's level up to a cap, plus a bonus for longer lists.

pub use event::Event;
pub use event::Listener;
pub use event::Snapshot;
pub use feedback::Feedback;
pub use feedback::Tone;
pub use input::parse_value;
pub use operation::Operation;
pub use record::Record;
pub use state::GameState;

pub mod event;
pub mod feedback;
pub mod input;
pub mod operation;
pub mod record;
pub mod state;
