use crate::todo::Disk;
use crate::todo::TaskId;
use crate::todo::Todos;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;
use std::path::PathBuf;

/// Todo list editor that saves to disk after every change.
#[derive(Debug)]
pub struct TodoSession {
    todos: Todos,
    store: Disk,
}

impl TodoSession {
    const MENU: [&'static str; 5] = ["Add", "Toggle", "Remove", "Clear completed", "Quit"];

    pub fn new(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let store = Disk::new(path);
        let todos = Todos::load(&store)?;
        log::info!(
            "loaded {} tasks from {}",
            todos.len(),
            store.path().display()
        );
        Ok(Self { todos, store })
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.show();
            let selection = Select::new()
                .with_prompt(format!("{} pending", self.todos.pending()))
                .report(false)
                .items(&Self::MENU)
                .default(0)
                .interact()?;
            let changed = match selection {
                0 => self.add()?,
                1 => {
                    let id = Self::id()?;
                    self.todos.toggle(id)
                }
                2 => {
                    let id = Self::id()?;
                    self.todos.remove(id)
                }
                3 => self.todos.clear_completed() > 0,
                _ => break,
            };
            if changed {
                self.save();
            }
        }
        Ok(())
    }

    fn add(&mut self) -> anyhow::Result<bool> {
        let text = Input::<String>::new()
            .with_prompt("Task")
            .allow_empty(true)
            .report(false)
            .interact_text()?;
        match self.todos.add(&text) {
            Ok(_) => Ok(true),
            Err(e) => {
                println!("{}", e.to_string().red());
                Ok(false)
            }
        }
    }

    fn id() -> anyhow::Result<TaskId> {
        Ok(Input::<TaskId>::new()
            .with_prompt("Task #")
            .report(false)
            .interact_text()?)
    }

    fn save(&mut self) {
        if let Err(e) = self.todos.save(&mut self.store) {
            log::warn!("failed to save {}: {}", self.store.path().display(), e);
        }
    }

    fn show(&self) {
        match self.todos.is_empty() {
            true => println!("\n{}", "Nothing to do".italic().dimmed()),
            false => {
                println!();
                for task in self.todos.iter() {
                    match task.done {
                        true => println!("{}", task.to_string().dimmed().strikethrough()),
                        false => println!("{}", task),
                    }
                }
            }
        }
    }
}
