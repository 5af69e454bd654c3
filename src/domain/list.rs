use crate::domain::task::Task;

/// Insertion-ordered task collection. Indexes here are 0-based; the
/// 1-based numbering users see is the dispatcher's concern.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn remove(&mut self, index: usize) -> Option<Task> {
        // Vec::remove panics on a bad index, so bounds-check through get first.
        self.get(index)?;
        Some(self.tasks.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, keyword: &str) -> Vec<&Task> {
        let keyword = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| task.description().to_lowercase().contains(&keyword))
            .collect()
    }
}
