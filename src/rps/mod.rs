//! Rock Paper Scissors against a uniformly random computer.
//!
//! Rock crushes scissors, scissors cut paper, paper covers rock.
//! Identical throws tie.

pub use moves::Move;
pub use outcome::Outcome;
pub use round::Round;
pub use round::play;
pub use tally::Tally;

pub mod moves;
pub mod outcome;
pub mod round;
pub mod tally;
