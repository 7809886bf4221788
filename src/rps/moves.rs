use crate::Arbitrary;
use rand::Rng;

/// Rock, Paper, Scissors
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    pub fn prey(&self) -> Self {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }
    pub fn beats(&self, other: &Self) -> bool {
        self.prey() == *other
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        Self::from(rand::rng().random_range(0..3u8))
    }
}

/// u8 isomorphism
impl From<u8> for Move {
    fn from(n: u8) -> Self {
        match n {
            0 => Move::Rock,
            1 => Move::Paper,
            2 => Move::Scissors,
            _ => panic!("invalid move u8: {}", n),
        }
    }
}
impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Move {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" => Ok(Move::Rock),
            "p" | "paper" => Ok(Move::Paper),
            "s" | "scissors" => Ok(Move::Scissors),
            other => Err(anyhow::anyhow!("invalid move: {}", other)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Move::Rock => "rock",
                Move::Paper => "paper",
                Move::Scissors => "scissors",
            }
        )
    }
}
