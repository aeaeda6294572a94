use thiserror::Error;

/// Errors returned by graph payload parsing and reading.
///
/// A rejected payload is not fatal anywhere: the display layer logs it and
/// keeps the previous series on screen.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("graph payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}
