pub use command::Command;
pub use list::ListSession;
pub use rps::RpsSession;
pub use terminal::Terminal;
pub use todo::TodoSession;

pub mod command;
pub mod list;
pub mod rps;
pub mod terminal;
pub mod todo;
