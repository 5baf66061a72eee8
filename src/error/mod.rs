//! Error handling for Bookpedia.
//!
//! The detail screen itself has no failure path: absent fields are display
//! conditions, not errors. Errors only arise at the edges of the program
//! (loading a book or string table from disk, driving the terminal, parsing
//! command-line arguments).
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | `Io` | Reading book / string files, terminal writes |
//! | `Json` | Malformed book or string table JSON |
//! | `BookNotFound` | `--book` path that does not exist |
//! | `Terminal` | Raw mode / alternate screen setup |
//! | `InvalidArgument` | Unparseable command-line flag values |

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for Bookpedia.
#[derive(Debug, Error)]
pub enum BookpediaError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A book or string table could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested book file does not exist.
    #[error("book file not found: {}", path.display())]
    BookNotFound { path: PathBuf },

    /// Terminal setup or teardown failed.
    #[error("terminal error: {message}")]
    Terminal { message: String },

    /// A command-line flag had a missing or malformed value.
    #[error("invalid argument {flag}: {message}")]
    InvalidArgument { flag: String, message: String },
}

impl BookpediaError {
    /// Create a terminal error from any displayable cause.
    pub fn terminal(message: impl std::fmt::Display) -> Self {
        Self::Terminal {
            message: message.to_string(),
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(flag: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            flag: flag.into(),
            message: message.into(),
        }
    }

    /// Short, user-facing message printed before exiting.
    pub fn user_message(&self) -> String {
        match self {
            BookpediaError::Io(_) => "Could not read a required file.".to_string(),
            BookpediaError::Json(_) => "The file is not valid Bookpedia JSON.".to_string(),
            BookpediaError::BookNotFound { path } => {
                format!("No book file at {}.", path.display())
            }
            BookpediaError::Terminal { .. } => {
                "Failed to initialize the terminal. Please check your terminal settings."
                    .to_string()
            }
            BookpediaError::InvalidArgument { flag, .. } => {
                format!("Invalid value for {}. Run with --help for usage.", flag)
            }
        }
    }
}

/// Result alias used throughout Bookpedia.
pub type BookpediaResult<T> = Result<T, BookpediaError>;
