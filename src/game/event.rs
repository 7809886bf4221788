use super::feedback::Feedback;
use super::operation::Operation;
use crate::Level;
use crate::Score;
use crate::Value;

/// Everything a renderer needs to redraw the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub values: Vec<Value>,
    pub score: Score,
    pub level: Level,
}

/// Notifications emitted by [`super::GameState`] as it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Feedback(Feedback),
    LevelUp(Level),
    Refresh(Snapshot),
    Selected(Option<Operation>),
}

/// Receiver of game events. Terminal front ends draw them; tests collect them.
pub trait Listener {
    fn emit(&mut self, event: Event);
}

impl Listener for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}

impl<L: Listener + ?Sized> Listener for &mut L {
    fn emit(&mut self, event: Event) {
        (**self).emit(event);
    }
}
