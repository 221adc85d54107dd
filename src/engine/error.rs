use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure the reader can report. All of them are fatal.
#[derive(Error, Debug)]
pub enum RsvpError {
    #[error("File '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("File '{}' is not valid UTF-8 text", .0.display())]
    InvalidEncoding(PathBuf),

    #[error("Error reading file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("WPM should be between {min} and {max} (got {wpm})")]
    WpmOutOfRange { wpm: i64, min: u32, max: u32 },

    #[error("No words found in file '{}'", .0.display())]
    NoWords(PathBuf),

    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl RsvpError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Classifies an I/O failure that happened while reading `path`.
    pub fn from_read(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => RsvpError::FileNotFound(path),
            io::ErrorKind::InvalidData => RsvpError::InvalidEncoding(path),
            _ => RsvpError::FileRead { path, source: err },
        }
    }
}
