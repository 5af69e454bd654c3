use thiserror::Error;

/// Everything a command can fail with. The `#[error]` strings are the
/// exact responses shown to the user; none of these end the session.
#[derive(Debug, Error)]
pub enum YaruError {
    #[error("Empty command entered.")]
    EmptyInput,

    #[error("Sorry :((( I don't know what that means")]
    UnknownCommand,

    #[error("Please specify a task number to {0}")]
    MissingTaskNumber(&'static str),

    #[error("What is your {0}?")]
    MissingDescription(&'static str),

    #[error("Please specify a keyword to search for. Example: find book")]
    MissingKeyword,

    #[error("Sorry, please key in a valid task number!")]
    InvalidTaskNumber,

    #[error("Oops!! The task number provided does not exist :(")]
    TaskNotFound,

    #[error("Please specify the deadline using /by. Example: deadline return book /by 2025-12-29 1800")]
    MissingDeadline,

    #[error("Please specify the event duration using /from and /to.")]
    MissingDuration,

    #[error("Please enter a valid date/time format (yyyy-MM-dd HHmm). Example: 2025-12-29 1800")]
    InvalidDate,

    #[error("An event cannot end before it starts.")]
    EventEndsBeforeStart,

    #[error("I couldn't update your task file: {0}")]
    Io(#[from] std::io::Error),
}
