use crate::rps::Move;
use crate::rps::Outcome;
use crate::rps::Round;
use crate::rps::Tally;
use colored::Colorize;
use dialoguer::Select;

/// Rock-paper-scissors against the computer, one throw or many.
#[derive(Debug, Default)]
pub struct RpsSession {
    tally: Tally,
}

impl RpsSession {
    pub fn run(&mut self, choice: Option<Move>) -> anyhow::Result<()> {
        match choice {
            Some(player) => self.throw(player),
            None => loop {
                let selection = Select::new()
                    .with_prompt(format!("{}", self.tally))
                    .report(false)
                    .items(&["Rock", "Paper", "Scissors", "Quit"])
                    .default(0)
                    .interact()?;
                match selection {
                    i @ 0..=2 => self.throw(Move::ALL[i]),
                    _ => break,
                }
            },
        }
        log::info!("rock paper scissors session ended {}", self.tally);
        Ok(())
    }

    fn throw(&mut self, player: Move) {
        let round = crate::rps::play(player);
        self.tally.record(&round);
        println!("{}", Self::paint(&round));
    }

    fn paint(round: &Round) -> String {
        let message = round.to_string();
        match round.outcome() {
            Outcome::Win => message.green().to_string(),
            Outcome::Lose => message.red().to_string(),
            Outcome::Tie => message.yellow().to_string(),
        }
    }
}
