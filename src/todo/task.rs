use serde::Deserialize;
use serde::Serialize;

/// Identifier handed out by [`super::Todos::add`].
pub type TaskId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub done: bool,
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = if self.done { "x" } else { " " };
        write!(f, "[{}] {:>3}. {}", mark, self.id, self.text)
    }
}
