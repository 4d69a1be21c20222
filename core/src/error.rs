use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the theming core.
///
/// Two broad families exist and callers treat them very differently:
///
/// - **Resource load failures** ([`ArchiveRead`], [`ArchiveParse`],
///   [`RecordNotFound`], [`ConfigLoad`]) are recovered at the resolver
///   boundary: log a warning and keep the previously applied theme.
/// - **Generation preconditions and write failures** ([`EmptyAxis`],
///   [`ArchiveWrite`]) are fatal to a batch run and must abort it with a
///   non-zero exit so operators notice.
///
/// [`ArchiveRead`]: ThemeError::ArchiveRead
/// [`ArchiveParse`]: ThemeError::ArchiveParse
/// [`RecordNotFound`]: ThemeError::RecordNotFound
/// [`ConfigLoad`]: ThemeError::ConfigLoad
/// [`EmptyAxis`]: ThemeError::EmptyAxis
/// [`ArchiveWrite`]: ThemeError::ArchiveWrite
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Theme configuration document could not be read or parsed.
    #[error("failed to load theme config '{path}': {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    /// A selection axis of the config is empty; generation cannot proceed.
    #[error("theme config has no entries for '{axis}'")]
    EmptyAxis { axis: &'static str },

    /// Archive file missing for a requested date or alias.
    #[error("no archived theme for '{key}'")]
    RecordNotFound { key: String },

    /// Archive file exists but could not be read.
    #[error("failed to read archive file '{path}': {source}")]
    ArchiveRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Archive file content is not a valid theme record.
    #[error("failed to parse archive file '{path}': {source}")]
    ArchiveParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Archive directory or file could not be created or written.
    #[error("failed to write archive file '{path}': {reason}")]
    ArchiveWrite { path: PathBuf, reason: String },

    /// A date string did not match the expected format.
    #[error("invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    /// Auxiliary content document (profile, quotes) failed to load.
    #[error("failed to load content document '{path}': {reason}")]
    ContentLoad { path: PathBuf, reason: String },
}

impl ThemeError {
    /// Whether the resolver may swallow this error (log and keep the
    /// previously applied theme) instead of propagating it.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ThemeError::ConfigLoad { .. }
                | ThemeError::RecordNotFound { .. }
                | ThemeError::ArchiveRead { .. }
                | ThemeError::ArchiveParse { .. }
                | ThemeError::ContentLoad { .. }
        )
    }
}

pub type ThemeResult<T> = Result<T, ThemeError>;
