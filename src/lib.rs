//! Tickdown library - task list management, persistence, and the countdown timer

pub mod cli;
pub mod task;
pub mod timer;
