//! Task list management and persistence

pub mod error;
pub mod model;
pub mod storage;

pub use error::TaskError;
pub use model::{Task, TaskList};
pub use storage::Storage;
