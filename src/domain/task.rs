use std::fmt;

use time::PrimitiveDateTime;
use time::macros::format_description;

use crate::error::YaruError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline {
        by: PrimitiveDateTime,
    },
    Event {
        from: PrimitiveDateTime,
        to: PrimitiveDateTime,
    },
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    pub fn deadline(description: impl Into<String>, by: &str) -> Result<Self, YaruError> {
        Ok(Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline {
                by: parse_datetime(by)?,
            },
        })
    }

    pub fn event(description: impl Into<String>, from: &str, to: &str) -> Result<Self, YaruError> {
        let from = parse_datetime(from)?;
        let to = parse_datetime(to)?;
        if to < from {
            return Err(YaruError::EventEndsBeforeStart);
        }
        Ok(Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Event { from, to },
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    pub fn to_line(&self) -> String {
        let status = if self.done { "1" } else { "0" };
        match &self.kind {
            TaskKind::Todo => format!("T | {status} | {}", self.description),
            TaskKind::Deadline { by } => {
                format!("D | {status} | {} | {}", self.description, encode_datetime(*by))
            }
            TaskKind::Event { from, to } => format!(
                "E | {status} | {} | {} | {}",
                self.description,
                encode_datetime(*from),
                encode_datetime(*to)
            ),
        }
    }

    /// Rebuilds a task from its storage line. Returns `None` for anything
    /// that does not describe a valid task; a corrupted line is dropped,
    /// never an abort.
    pub fn from_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split(" | ").collect();
        if parts.len() < 3 || parts[2].is_empty() {
            return None;
        }
        let description = parts[2];
        let mut task = match parts[0] {
            "T" => Task::todo(description),
            "D" => Task::deadline(description, parts.get(3)?).ok()?,
            "E" => Task::event(description, parts.get(3)?, parts.get(4)?).ok()?,
            _ => return None,
        };
        if parts[1] == "1" {
            task.mark_done();
        }
        Some(task)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = if self.done { "X" } else { " " };
        match &self.kind {
            TaskKind::Todo => write!(f, "[T][{icon}] {}", self.description),
            TaskKind::Deadline { by } => {
                write!(f, "[D][{icon}] {} (by: {})", self.description, display_datetime(*by))
            }
            TaskKind::Event { from, to } => write!(
                f,
                "[E][{icon}] {} (from: {} to: {})",
                self.description,
                display_datetime(*from),
                display_datetime(*to)
            ),
        }
    }
}

fn parse_datetime(text: &str) -> Result<PrimitiveDateTime, YaruError> {
    let format = format_description!("[year]-[month]-[day] [hour][minute]");
    PrimitiveDateTime::parse(text, format).map_err(|_| YaruError::InvalidDate)
}

fn encode_datetime(value: PrimitiveDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour][minute]");
    value.format(format).unwrap_or_else(|_| value.to_string())
}

fn display_datetime(value: PrimitiveDateTime) -> String {
    let format = format_description!(
        "[month repr:short] [day padding:none] [year] [hour repr:12 padding:none]:[minute][period]"
    );
    value.format(format).unwrap_or_else(|_| value.to_string())
}
