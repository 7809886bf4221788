use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Command {
    #[command(
        about = "Practice insert, delete, search and reverse on a linked list",
        alias = "ll"
    )]
    List,
    #[command(about = "Throw rock, paper or scissors against the computer")]
    Rps {
        /// Play a single round with this move instead of the menu.
        choice: Option<String>,
    },
    #[command(about = "Keep a todo list saved to a JSON file")]
    Todo {
        #[arg(long, env = "ARCADE_STORE", default_value = crate::TODO_STORAGE_PATH)]
        store: PathBuf,
    },
}

impl Command {
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Command::List => super::ListSession::default().run(),
            Command::Rps { choice } => {
                let choice = choice
                    .as_deref()
                    .map(crate::rps::Move::try_from)
                    .transpose()?;
                super::RpsSession::default().run(choice)
            }
            Command::Todo { store } => super::TodoSession::new(store)?.run(),
        }
    }
}
