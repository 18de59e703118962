//! Task data model

use serde::{Deserialize, Serialize};

use super::error::{Result, TaskError};

/// A titled unit of work with an estimated duration and completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task title
    pub title: String,

    /// Short free-form description
    pub description: String,

    /// Whether the task has been completed
    #[serde(rename = "isDone")]
    pub is_done: bool,

    /// Estimated duration in minutes; drives the countdown timer
    #[serde(rename = "timeInMinute")]
    pub minutes: u64,
}

impl Task {
    /// Create a new pending task
    pub fn new(title: impl Into<String>, description: impl Into<String>, minutes: u64) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            is_done: false,
            minutes,
        }
    }

    /// Format as a display line. `position` is the 1-based list position.
    pub fn display_line(&self, position: usize) -> String {
        let marker = if self.is_done { 'X' } else { ' ' };
        format!(
            "{}. [{}] {} | {} | {}",
            position, marker, self.title, self.description, self.minutes
        )
    }
}

/// The ordered, persisted collection of all tasks.
///
/// Insertion order is display order is persisted order. Indices are 0-based
/// here; the CLI layer converts from the 1-based indices shown to users.
/// Removal shifts subsequent tasks down, so displayed indices are only valid
/// until the next mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task to the end of the list. No dedup, no title validation.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn get(&self, index: usize) -> Result<&Task> {
        self.tasks.get(index).ok_or(TaskError::IndexOutOfRange {
            index,
            len: self.tasks.len(),
        })
    }

    /// Display lines for every task, re-derived from state on each call.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, task)| task.display_line(i + 1))
    }

    /// Display lines for tasks that are not done yet. Positions reflect the
    /// unfiltered list, so they stay valid arguments for `done` and `remove`.
    pub fn pending_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| !task.is_done)
            .map(|(i, task)| task.display_line(i + 1))
    }

    /// Mark the task at `index` as done. Idempotent for already-done tasks.
    pub fn mark_done(&mut self, index: usize) -> Result<()> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(TaskError::IndexOutOfRange { index, len })?;
        task.is_done = true;
        Ok(())
    }

    /// Remove and return the task at `index`, shifting subsequent tasks down.
    pub fn remove(&mut self, index: usize) -> Result<Task> {
        if index >= self.tasks.len() {
            return Err(TaskError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(self.tasks.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_tasks() -> TaskList {
        let mut list = TaskList::new();
        list.add(Task::new("write report", "quarterly numbers", 30));
        list.add(Task::new("review PR", "storage refactor", 15));
        list.add(Task::new("standup", "daily sync", 10));
        list
    }

    #[test]
    fn test_add_appends_as_pending() {
        let mut list = three_tasks();
        list.add(Task::new("new task", "added last", 5));

        let lines: Vec<String> = list.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "4. [ ] new task | added last | 5");
    }

    #[test]
    fn test_lines_restartable() {
        let list = three_tasks();
        let first: Vec<String> = list.lines().collect();
        let second: Vec<String> = list.lines().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_marks_done_tasks() {
        let mut list = three_tasks();
        list.mark_done(1).unwrap();

        let lines: Vec<String> = list.lines().collect();
        assert_eq!(lines[0], "1. [ ] write report | quarterly numbers | 30");
        assert_eq!(lines[1], "2. [X] review PR | storage refactor | 15");
    }

    #[test]
    fn test_mark_done_idempotent() {
        let mut list = three_tasks();
        list.mark_done(0).unwrap();
        list.mark_done(0).unwrap();
        assert!(list.tasks[0].is_done);
    }

    #[test]
    fn test_mark_done_out_of_range_leaves_list_unmodified() {
        let mut list = three_tasks();
        let before = list.clone();

        let err = list.mark_done(99).unwrap_err();
        assert!(matches!(
            err,
            TaskError::IndexOutOfRange { index: 99, len: 3 }
        ));
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_shifts_indices_down() {
        let mut list = three_tasks();
        let removed = list.remove(0).unwrap();

        assert_eq!(removed.title, "write report");
        assert_eq!(list.len(), 2);
        let lines: Vec<String> = list.lines().collect();
        assert_eq!(lines[0], "1. [ ] review PR | storage refactor | 15");
        assert_eq!(lines[1], "2. [ ] standup | daily sync | 10");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list = three_tasks();
        assert!(list.remove(3).is_err());
        assert!(list.remove(99).is_err());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_from_empty_list() {
        let mut list = TaskList::new();
        let err = list.remove(0).unwrap_err();
        assert!(matches!(err, TaskError::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_pending_excludes_done_and_keeps_positions() {
        let mut list = three_tasks();
        list.mark_done(1).unwrap();

        let pending: Vec<String> = list.pending_lines().collect();
        assert_eq!(pending.len(), 2);
        // Position 2 is done and skipped; position 3 keeps its number.
        assert_eq!(pending[0], "1. [ ] write report | quarterly numbers | 30");
        assert_eq!(pending[1], "3. [ ] standup | daily sync | 10");

        let total = list.lines().count();
        let done = total - pending.len();
        assert_eq!(pending.len() + done, list.len());
    }

    #[test]
    fn test_get_out_of_range() {
        let list = three_tasks();
        assert!(list.get(2).is_ok());
        assert!(list.get(3).is_err());
    }

    #[test]
    fn test_serialized_field_names() {
        let task = Task::new("t", "d", 7);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["title"], "t");
        assert_eq!(json["description"], "d");
        assert_eq!(json["isDone"], false);
        assert_eq!(json["timeInMinute"], 7);
    }

    #[test]
    fn test_document_shape() {
        let mut list = TaskList::new();
        list.add(Task::new("t", "d", 1));
        let json = serde_json::to_value(&list).unwrap();
        assert!(json["tasks"].is_array());
        assert_eq!(json["tasks"].as_array().unwrap().len(), 1);
    }
}
