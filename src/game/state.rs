use super::event::Event;
use super::event::Listener;
use super::event::Snapshot;
use super::feedback::Feedback;
use super::input::parse_value;
use super::operation::Operation;
use super::record::Record;
use crate::Level;
use crate::Score;
use crate::Value;
use crate::list::LinkedList;

/// Score, level and history of one linked-list game, plus the list itself.
///
/// Every transition reports what happened to a [`Listener`] instead of
/// drawing anything, so the same state drives a terminal or a test.
#[derive(Debug)]
pub struct GameState {
    list: LinkedList,
    score: Score,
    level: Level,
    difficulty: Score,
    operation: Option<Operation>,
    history: Vec<Record>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
            score: 0,
            level: 1,
            difficulty: 1,
            operation: None,
            history: Vec::new(),
        }
    }

    pub fn list(&self) -> &LinkedList {
        &self.list
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn level(&self) -> Level {
        self.level
    }
    pub fn difficulty(&self) -> Score {
        self.difficulty
    }
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }
    pub fn history(&self) -> &[Record] {
        &self.history
    }
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            values: self.list.to_array(),
            score: self.score,
            level: self.level,
        }
    }

    /// Reset everything and seed the list with a few nodes.
    pub fn start(&mut self, mut listener: impl Listener) {
        *self = Self::new();
        self.list.extend(crate::SEED_VALUES);
        log::info!("new game started with {}", self.list);
        listener.emit(Event::Refresh(self.snapshot()));
        listener.emit(Event::Feedback(Feedback::info(
            "New game started! The linked list has been initialized with some values.",
        )));
    }

    pub fn select(&mut self, operation: Operation, mut listener: impl Listener) {
        log::debug!("selected {}", operation);
        self.operation = Some(operation);
        listener.emit(Event::Selected(self.operation));
        listener.emit(Event::Feedback(Feedback::info(operation.instructions())));
    }

    /// Validate raw player input and run the selected operation with it.
    /// Reverse ignores the input entirely.
    pub fn submit(&mut self, input: &str, mut listener: impl Listener) {
        match self.operation {
            Some(operation) if !operation.needs_value() => self.execute(None, listener),
            _ => match parse_value(input) {
                Ok(value) => self.execute(Some(value), listener),
                Err(e) => {
                    log::debug!("rejected input: {}", e);
                    listener.emit(Event::Feedback(Self::invalid()));
                }
            },
        }
    }

    /// Apply the selected operation to the list, then score it.
    pub fn execute(&mut self, value: Option<Value>, mut listener: impl Listener) {
        let Some(operation) = self.operation else {
            listener.emit(Event::Feedback(Feedback::error(
                "Please select an operation first!",
            )));
            return;
        };
        let (success, message) = match (operation, value) {
            (Operation::Reverse, _) => (
                self.list.reverse(),
                String::from("Successfully reversed the linked list!"),
            ),
            (_, None) => {
                listener.emit(Event::Feedback(Self::invalid()));
                return;
            }
            (Operation::Insert, Some(v)) => (
                self.list.insert(v),
                format!("Successfully inserted {} into the linked list!", v),
            ),
            (Operation::Delete, Some(v)) => match self.list.delete(v) {
                true => (true, format!("Successfully deleted {} from the linked list!", v)),
                false => (false, format!("Value {} not found in the linked list", v)),
            },
            (Operation::Search, Some(v)) => match self.list.search(v) {
                true => (true, format!("Value {} found in the linked list!", v)),
                false => (true, format!("Value {} not found in the linked list", v)),
            },
        };
        log::debug!("{} {:?} -> {} ({})", operation, value, success, self.list);
        if success {
            self.score += self.points();
            self.level_up(&mut listener);
            self.history.push(Record::new(operation, value, success));
        }
        listener.emit(Event::Feedback(match success {
            true => Feedback::success(message),
            false => Feedback::error(message),
        }));
        listener.emit(Event::Refresh(self.snapshot()));
        self.operation = None;
        listener.emit(Event::Selected(None));
    }

    /// Points for a successful operation at the current size and difficulty.
    pub fn points(&self) -> Score {
        let step = crate::SIZE_BONUS_STEP;
        let bonus = (self.list.size() / step * step) as Score;
        crate::BASE_POINTS * self.difficulty + bonus
    }

    fn level_up(&mut self, listener: &mut impl Listener) {
        let level = self.score / crate::POINTS_PER_LEVEL + 1;
        if level > self.level {
            self.level = level;
            self.difficulty = level.min(crate::MAX_DIFFICULTY);
            log::info!("level up to {} (difficulty {})", level, self.difficulty);
            listener.emit(Event::LevelUp(level));
            listener.emit(Event::Feedback(Feedback::success(format!(
                "Level Up! You're now at level {}!",
                level
            ))));
        }
    }

    fn invalid() -> Feedback {
        Feedback::error(format!(
            "Please enter a valid number between {} and {}",
            crate::VALUE_MIN,
            crate::VALUE_MAX
        ))
    }
}
