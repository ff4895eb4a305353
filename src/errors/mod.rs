use std::num::ParseIntError;

use anyhow::Context as _;
use thiserror::Error;

/// The single failure a tournament page extraction can signal
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("tournament has no extractable info")]
    TournamentInfoUnavailable(#[source] AssemblyFailure),
}

/// Why a tournament record could not be assembled. Diagnostics only.
#[derive(Debug, Error)]
pub enum AssemblyFailure {
    #[error("tournament name not found")]
    MissingName,

    #[error("{field} is not an integer: {value:?}")]
    InvalidRound {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl From<AssemblyFailure> for ExtractError {
    fn from(failure: AssemblyFailure) -> Self {
        ExtractError::TournamentInfoUnavailable(failure)
    }
}

/// Add context to file read errors
pub fn read_context(path: &str) -> String {
    format!("Failed to read HTML from: {}", path)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to output errors
pub fn output_context(data_type: &str) -> String {
    format!("Failed to serialize {}", data_type)
}

/// Wrap result with read context
pub fn with_read_context<T, E>(result: Result<T, E>, path: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(read_context(path))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}

/// Wrap result with output context
pub fn with_output_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(output_context(data_type))
}
