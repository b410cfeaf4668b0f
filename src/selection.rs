use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("'{0}' is not a valid index")]
    NotAnInteger(String),
    #[error("index {index} is out of range for {count} file(s)")]
    OutOfRange { index: i64, count: usize },
}

pub fn all_indices(count: usize) -> Vec<usize> {
    (0..count).collect()
}

/// Selection that needs no prompt: everything when `select_all` is set, or the
/// only entry when exactly one file was discovered.
pub fn implicit_selection(count: usize, select_all: bool) -> Option<Vec<usize>> {
    if select_all {
        Some(all_indices(count))
    } else if count == 1 {
        Some(vec![0])
    } else {
        None
    }
}

/// Parses whitespace-separated indices. Blank input selects everything; any bad
/// token rejects the whole input.
pub fn parse_indices(input: &str, count: usize) -> Result<Vec<usize>, SelectionError> {
    if input.trim().is_empty() {
        return Ok(all_indices(count));
    }
    input
        .split_whitespace()
        .map(|token| {
            let index: i64 = token
                .parse()
                .map_err(|_| SelectionError::NotAnInteger(token.to_string()))?;
            usize::try_from(index)
                .ok()
                .filter(|i| *i < count)
                .ok_or(SelectionError::OutOfRange { index, count })
        })
        .collect()
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
