use super::outcome::Outcome;
use super::round::Round;

/// Running score across a session of rounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
}

impl Tally {
    pub fn record(&mut self, round: &Round) {
        match round.outcome() {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
    pub fn rounds(&self) -> usize {
        self.wins + self.losses + self.ties
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "W {} / L {} / T {}", self.wins, self.losses, self.ties)
    }
}
