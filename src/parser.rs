use crate::error::YaruError;

/// Splits raw input into a keyword and the rest of the line. A single
/// split at the first whitespace run; the argument text stays opaque for
/// the per-command sub-parsers.
pub fn parse_command(input: &str) -> Result<(&str, &str), YaruError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(YaruError::EmptyInput);
    }
    match input.split_once(char::is_whitespace) {
        Some((keyword, rest)) => Ok((keyword, rest.trim_start())),
        None => Ok((input, "")),
    }
}

/// Splits `desc /by when` at the first `/by` only, so a `/by` inside the
/// date text is left for the date parser to reject.
pub fn parse_deadline_args(args: &str) -> Result<(&str, &str), YaruError> {
    let (description, by) = args.split_once("/by").ok_or(YaruError::MissingDeadline)?;
    let by = by.trim();
    if by.is_empty() {
        return Err(YaruError::MissingDeadline);
    }
    Ok((description.trim(), by))
}

/// Splits `desc /from start /to end` at every `/from` or `/to`. Segments
/// that are blank after trimming are passed through; date parsing and the
/// description check downstream catch them.
pub fn parse_event_args(args: &str) -> Result<(&str, &str, &str), YaruError> {
    let mut segments = split_on_markers(args, &["/from", "/to"]);
    while segments.last().is_some_and(|segment| segment.is_empty()) {
        segments.pop();
    }
    if segments.len() < 3 {
        return Err(YaruError::MissingDuration);
    }
    Ok((segments[0].trim(), segments[1].trim(), segments[2].trim()))
}

// Cuts the text at every occurrence of any marker, keeping what lies
// between the cuts.
fn split_on_markers<'a>(text: &'a str, markers: &[&str]) -> Vec<&'a str> {
    let mut segments = Vec::new();
    let mut rest = text;
    loop {
        let next = markers
            .iter()
            .filter_map(|marker| rest.find(marker).map(|at| (at, marker.len())))
            .min_by_key(|&(at, _)| at);
        match next {
            Some((at, len)) => {
                segments.push(&rest[..at]);
                rest = &rest[at + len..];
            }
            None => {
                segments.push(rest);
                break;
            }
        }
    }
    segments
}
