use crate::game::Event;
use crate::game::Feedback;
use crate::game::Listener;
use crate::game::Snapshot;
use crate::game::Tone;
use colored::Colorize;
use std::time::Instant;

/// Draws game events to stdout and remembers the latest feedback until its
/// ttl runs out.
#[derive(Debug, Default)]
pub struct Terminal {
    shown: Option<(Feedback, Instant)>,
}

impl Terminal {
    /// Latest feedback, if it has not yet expired.
    pub fn fresh(&self) -> Option<&Feedback> {
        self.shown
            .as_ref()
            .filter(|(feedback, at)| !feedback.expired(*at))
            .map(|(feedback, _)| feedback)
    }

    /// Menu prompt: the latest unexpired feedback, or `fallback`.
    pub fn prompt(&self, fallback: &str) -> String {
        match self.fresh() {
            Some(feedback) => Self::paint(feedback),
            None => fallback.to_string(),
        }
    }

    pub fn board(snapshot: &Snapshot) -> String {
        let arrow = " → ".blue().to_string();
        let chain = match snapshot.values.is_empty() {
            true => "Empty linked list".italic().dimmed().to_string(),
            false => snapshot
                .values
                .iter()
                .map(|v| format!("[{}]", v).bold().to_string())
                .chain(std::iter::once("null".dimmed().to_string()))
                .collect::<Vec<String>>()
                .join(arrow.as_str()),
        };
        format!(
            "\n{}  {}\n{}\n",
            format!("SCORE {:>5}", snapshot.score).yellow(),
            format!("LEVEL {:>2}", snapshot.level).magenta(),
            chain
        )
    }

    pub fn paint(feedback: &Feedback) -> String {
        match feedback.tone {
            Tone::Info => feedback.message.cyan().to_string(),
            Tone::Success => feedback.message.green().to_string(),
            Tone::Error => feedback.message.red().to_string(),
        }
    }
}

impl Listener for Terminal {
    fn emit(&mut self, event: Event) {
        match event {
            Event::Refresh(ref snapshot) => println!("{}", Self::board(snapshot)),
            Event::Feedback(feedback) => {
                println!("{}", Self::paint(&feedback));
                self.shown = Some((feedback, Instant::now()));
            }
            Event::LevelUp(level) => {
                println!("{}", format!("*** LEVEL {} ***", level).bold().yellow())
            }
            Event::Selected(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_lists_every_value() {
        colored::control::set_override(false);
        let snapshot = Snapshot {
            values: vec![5, 10],
            score: 20,
            level: 1,
        };
        let board = Terminal::board(&snapshot);
        assert!(board.contains("[5] → [10] → null"));
        assert!(board.contains("SCORE    20"));
    }

    #[test]
    fn prompt_shows_feedback_until_expired() {
        colored::control::set_override(false);
        let mut terminal = Terminal::default();
        assert_eq!(terminal.prompt("Choose"), "Choose");
        terminal.emit(Event::Feedback(Feedback::success("Inserted")));
        assert_eq!(terminal.prompt("Choose"), "Inserted");
        terminal.emit(Event::Feedback(Feedback {
            ttl: std::time::Duration::ZERO,
            ..Feedback::info("Gone")
        }));
        assert!(terminal.fresh().is_none());
        assert_eq!(terminal.prompt("Choose"), "Choose");
    }

    #[test]
    fn board_marks_empty_list() {
        colored::control::set_override(false);
        let snapshot = Snapshot {
            values: vec![],
            score: 0,
            level: 1,
        };
        assert!(Terminal::board(&snapshot).contains("Empty linked list"));
    }
}
