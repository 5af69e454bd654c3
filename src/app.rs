use tracing::warn;

use crate::domain::list::TaskList;
use crate::domain::task::Task;
use crate::error::YaruError;
use crate::parser;
use crate::storage::Storage;

pub const WELCOME: &str = "Hello! I'm Yaru\nWhat can I do for you?";
const GOODBYE: &str = "Bye. Hope to see you again soon!";

/// Owns the task list for the session and turns one command line into one
/// response string. Shells only call [`App::process_command`] and watch
/// [`App::is_exit`]; they never see the error types.
pub struct App {
    tasks: TaskList,
    storage: Storage,
    is_exit: bool,
}

impl App {
    pub fn new(storage: Storage) -> Self {
        let tasks = match storage.load() {
            Ok(tasks) => TaskList::from_tasks(tasks),
            Err(err) => {
                warn!(%err, "could not load saved tasks; starting with an empty list");
                TaskList::new()
            }
        };
        Self {
            tasks,
            storage,
            is_exit: false,
        }
    }

    pub fn is_exit(&self) -> bool {
        self.is_exit
    }

    pub fn process_command(&mut self, input: &str) -> String {
        match self.execute(input) {
            Ok(response) => response,
            Err(err) => err.to_string(),
        }
    }

    fn execute(&mut self, input: &str) -> Result<String, YaruError> {
        let (keyword, args) = parser::parse_command(input)?;
        let response = match keyword.to_lowercase().as_str() {
            "bye" => {
                self.is_exit = true;
                return Ok(GOODBYE.to_string());
            }
            "list" => return Ok(self.render_list()),
            "find" => return self.find(args),
            "mark" => self.set_done(args, true)?,
            "unmark" => self.set_done(args, false)?,
            "todo" => self.add_todo(args)?,
            "deadline" => self.add_deadline(args)?,
            "event" => self.add_event(args)?,
            "delete" => self.delete(args)?,
            _ => return Err(YaruError::UnknownCommand),
        };
        // Only fully successful mutations reach this save. If it fails the
        // mutation stays in memory and rides along with the next save.
        if let Err(err) = self.storage.save(self.tasks.all()) {
            warn!(%err, "could not save tasks");
            return Err(err.into());
        }
        Ok(response)
    }

    fn set_done(&mut self, args: &str, done: bool) -> Result<String, YaruError> {
        let verb = if done { "mark" } else { "unmark" };
        if args.is_empty() {
            return Err(YaruError::MissingTaskNumber(verb));
        }
        let index = parse_task_number(args)?;
        let task = self.tasks.get_mut(index).ok_or(YaruError::TaskNotFound)?;
        if done {
            task.mark_done();
        } else {
            task.mark_undone();
        }
        let state = if task.is_done() { "done" } else { "not done yet" };
        Ok(format!("Okay. I've marked this task as {state}:\n{task}"))
    }

    fn add_todo(&mut self, args: &str) -> Result<String, YaruError> {
        if args.is_empty() {
            return Err(YaruError::MissingDescription("todo task"));
        }
        Ok(self.push_task(Task::todo(args)))
    }

    fn add_deadline(&mut self, args: &str) -> Result<String, YaruError> {
        if args.is_empty() {
            return Err(YaruError::MissingDescription("deadline task"));
        }
        let (description, by) = parser::parse_deadline_args(args)?;
        if description.is_empty() {
            return Err(YaruError::MissingDescription("deadline task"));
        }
        Ok(self.push_task(Task::deadline(description, by)?))
    }

    fn add_event(&mut self, args: &str) -> Result<String, YaruError> {
        if args.is_empty() {
            return Err(YaruError::MissingDescription("event"));
        }
        let (description, from, to) = parser::parse_event_args(args)?;
        if description.is_empty() {
            return Err(YaruError::MissingDescription("event"));
        }
        Ok(self.push_task(Task::event(description, from, to)?))
    }

    fn push_task(&mut self, task: Task) -> String {
        let rendered = task.to_string();
        self.tasks.add(task);
        format!(
            "Got it. I've added this task:\n{rendered}\nNow you have {} task(s) in the list.",
            self.tasks.len()
        )
    }

    fn delete(&mut self, args: &str) -> Result<String, YaruError> {
        if args.is_empty() {
            return Err(YaruError::MissingTaskNumber("delete"));
        }
        let index = parse_task_number(args)?;
        let task = self.tasks.remove(index).ok_or(YaruError::TaskNotFound)?;
        Ok(format!(
            "Noted. I've removed this task:\n{task}\nNow you have {} task(s) in the list.",
            self.tasks.len()
        ))
    }

    fn find(&self, keyword: &str) -> Result<String, YaruError> {
        if keyword.is_empty() {
            return Err(YaruError::MissingKeyword);
        }
        let matches = self.tasks.find(keyword);
        if matches.is_empty() {
            return Ok(format!("No tasks found containing: {keyword}"));
        }
        Ok(render_numbered("Here are the matching tasks in your list:", matches))
    }

    fn render_list(&self) -> String {
        if self.tasks.is_empty() {
            return "Your task list is empty!".to_string();
        }
        render_numbered("Here are the tasks in your list:", self.tasks.all())
    }
}

// Commands carry 1-based task numbers; the list is 0-based underneath.
fn parse_task_number(text: &str) -> Result<usize, YaruError> {
    let number: usize = text.parse().map_err(|_| YaruError::InvalidTaskNumber)?;
    number.checked_sub(1).ok_or(YaruError::TaskNotFound)
}

fn render_numbered<'a>(header: &str, tasks: impl IntoIterator<Item = &'a Task>) -> String {
    let mut out = String::from(header);
    for (number, task) in tasks.into_iter().enumerate() {
        out.push_str(&format!("\n{}.{task}", number + 1));
    }
    out
}
