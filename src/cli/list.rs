use super::terminal::Terminal;
use crate::game::GameState;
use crate::game::Operation;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;

/// Interactive linked-list game.
#[derive(Debug, Default)]
pub struct ListSession {
    game: GameState,
    terminal: Terminal,
}

impl ListSession {
    const MENU: [&'static str; 7] = [
        "Insert", "Delete", "Search", "Reverse", "New game", "History", "Quit",
    ];

    pub fn run(&mut self) -> anyhow::Result<()> {
        log::info!("launching linked list game");
        self.game.start(&mut self.terminal);
        loop {
            let selection = Select::new()
                .with_prompt(self.terminal.prompt("Choose an operation"))
                .report(false)
                .items(&Self::MENU)
                .default(0)
                .interact()?;
            match selection {
                i @ 0..=3 => self.turn(Operation::ALL[i])?,
                4 => self.game.start(&mut self.terminal),
                5 => self.history(),
                _ => break,
            }
        }
        log::info!(
            "linked list game over at score {} level {}",
            self.game.score(),
            self.game.level()
        );
        Ok(())
    }

    fn turn(&mut self, operation: Operation) -> anyhow::Result<()> {
        self.game.select(operation, &mut self.terminal);
        let input = match operation.needs_value() {
            true => Input::<String>::new()
                .with_prompt("Value")
                .allow_empty(true)
                .report(false)
                .interact_text()?,
            false => String::new(),
        };
        self.game.submit(&input, &mut self.terminal);
        Ok(())
    }

    fn history(&self) {
        match self.game.history().is_empty() {
            true => println!("{}", "No moves yet".dimmed()),
            false => self
                .game
                .history()
                .iter()
                .enumerate()
                .for_each(|(i, record)| println!("{:>3}. {}", i + 1, record)),
        }
    }
}
