use super::store::Store;
use super::task::Task;
use super::task::TaskId;
use serde::Deserialize;
use serde::Serialize;

/// Ordered todo list. Ids are never reused within one list.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todos {
    tasks: Vec<Task>,
    next: TaskId,
}

impl Todos {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }
    pub fn len(&self) -> usize {
        self.tasks.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }

    pub fn add(&mut self, text: &str) -> anyhow::Result<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return Err(anyhow::anyhow!("task text is empty"));
        }
        self.next += 1;
        self.tasks.push(Task {
            id: self.next,
            text: text.to_string(),
            done: false,
        });
        Ok(self.next)
    }

    /// Flip the done flag. False if there is no such task.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() < before
    }

    /// Drop every finished task, returning how many went.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.done);
        before - self.tasks.len()
    }

    pub fn load(store: &impl Store) -> anyhow::Result<Self> {
        match store.get(crate::TODO_STORAGE_KEY)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(Self::new()),
        }
    }

    pub fn save(&self, store: &mut impl Store) -> anyhow::Result<()> {
        store.set(crate::TODO_STORAGE_KEY, serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::Memory;

    #[test]
    fn add_trims_and_numbers() {
        let mut todos = Todos::new();
        assert_eq!(todos.add("  milk ").ok(), Some(1));
        assert_eq!(todos.add("eggs").ok(), Some(2));
        assert_eq!(todos.tasks()[0].text, "milk");
        assert_eq!(todos.pending(), 2);
    }

    #[test]
    fn add_rejects_blank() {
        let mut todos = Todos::new();
        assert!(todos.add("   ").is_err());
        assert!(todos.is_empty());
    }

    #[test]
    fn toggle_and_clear() {
        let mut todos = Todos::new();
        let a = todos.add("a").unwrap_or_default();
        let b = todos.add("b").unwrap_or_default();
        assert!(todos.toggle(a));
        assert!(!todos.toggle(99));
        assert_eq!(todos.pending(), 1);
        assert_eq!(todos.clear_completed(), 1);
        assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn ids_not_reused_after_remove() {
        let mut todos = Todos::new();
        let a = todos.add("a").unwrap_or_default();
        assert!(todos.remove(a));
        assert!(!todos.remove(a));
        assert_eq!(todos.add("b").ok(), Some(a + 1));
    }

    #[test]
    fn persists_through_store() {
        let mut store = Memory::default();
        assert_eq!(Todos::load(&store).ok(), Some(Todos::new()));
        let mut todos = Todos::new();
        todos.add("write tests").ok();
        todos.toggle(1);
        assert!(todos.save(&mut store).is_ok());
        assert_eq!(Todos::load(&store).ok(), Some(todos));
    }
}
