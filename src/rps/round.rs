use super::moves::Move;
use super::outcome::Outcome;
use crate::Arbitrary;

/// One simultaneous throw by the player and the computer.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Round {
    pub player: Move,
    pub computer: Move,
}

impl Round {
    pub fn outcome(&self) -> Outcome {
        if self.player == self.computer {
            Outcome::Tie
        } else if self.player.beats(&self.computer) {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }
}

impl From<(Move, Move)> for Round {
    fn from((player, computer): (Move, Move)) -> Self {
        Self { player, computer }
    }
}

/// Play `player` against a uniformly random computer move.
pub fn play(player: Move) -> Round {
    let round = Round::from((player, Move::random()));
    log::debug!("{} vs {} -> {}", round.player, round.computer, round.outcome());
    round
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome() {
            Outcome::Tie => write!(f, "It's a tie! You both chose {}.", self.player),
            Outcome::Win => write!(f, "You win! {} beats {}.", self.player, self.computer),
            Outcome::Lose => write!(f, "You lose! {} beats {}.", self.computer, self.player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_table() {
        for player in Move::ALL {
            for computer in Move::ALL {
                let expected = match (player, computer) {
                    (p, c) if p == c => Outcome::Tie,
                    (Move::Rock, Move::Scissors)
                    | (Move::Paper, Move::Rock)
                    | (Move::Scissors, Move::Paper) => Outcome::Win,
                    _ => Outcome::Lose,
                };
                assert_eq!(Round::from((player, computer)).outcome(), expected);
            }
        }
    }

    #[test]
    fn messages() {
        let tie = Round::from((Move::Rock, Move::Rock));
        let win = Round::from((Move::Rock, Move::Scissors));
        let lose = Round::from((Move::Rock, Move::Paper));
        assert_eq!(tie.to_string(), "It's a tie! You both chose rock.");
        assert_eq!(win.to_string(), "You win! rock beats scissors.");
        assert_eq!(lose.to_string(), "You lose! paper beats rock.");
    }

    #[test]
    fn play_keeps_player_move() {
        assert!((0..32).all(|_| play(Move::Paper).player == Move::Paper));
    }
}
