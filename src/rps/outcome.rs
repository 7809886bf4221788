/// Result of a round from the player's side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    Win,
    Lose,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Tie => write!(f, "TIE"),
            Outcome::Win => write!(f, "WIN"),
            Outcome::Lose => write!(f, "LOSE"),
        }
    }
}
