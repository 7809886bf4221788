//! Todo list persisted as a single JSON blob in a key-value [`Store`].

pub use store::Disk;
pub use store::Memory;
pub use store::Store;
pub use task::Task;
pub use task::TaskId;
pub use todos::Todos;

pub mod store;
pub mod task;
pub mod todos;
