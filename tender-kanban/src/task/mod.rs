//! Task commands

mod add;
mod delete;
mod mv;

pub use add::AddTask;
pub use delete::DeleteTask;
pub use mv::MoveTask;
