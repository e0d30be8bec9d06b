//! Input acquisition.
//!
//! The whole input document is read into memory before parsing. Stdin goes
//! through the [`StdinReader`] trait so tests can simulate piped input.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

/// Errors that can occur while reading the input document.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Failed to read from stdin.
    #[error("failed to read stdin: {0}")]
    StdinFailed(#[source] io::Error),

    /// Failed to read the input file.
    #[error("failed to read input file {}: {source}", path.display())]
    FileFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Abstraction over stdin reading.
pub trait StdinReader: Send + Sync {
    /// Check if stdin is a terminal (TTY).
    fn is_terminal(&self) -> bool;

    /// Read all content from stdin.
    fn read_to_string(&self) -> io::Result<String>;
}

/// Real stdin reader using std::io.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn is_terminal(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn read_to_string(&self) -> io::Result<String> {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

/// Mock stdin reader for testing.
///
/// # Example
///
/// ```rust
/// use goat::cli::{MockStdin, StdinReader};
///
/// let stdin = MockStdin::piped("a,b\n1,2\n");
/// assert!(!stdin.is_terminal());
/// assert_eq!(stdin.read_to_string().unwrap(), "a,b\n1,2\n");
/// ```
#[derive(Debug, Clone)]
pub struct MockStdin {
    content: Option<String>,
    is_terminal: bool,
}

impl MockStdin {
    /// Simulate piped input.
    pub fn piped(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            is_terminal: false,
        }
    }

    /// Simulate an interactive terminal with nothing typed.
    pub fn terminal() -> Self {
        Self {
            content: None,
            is_terminal: true,
        }
    }

    /// Simulate stdin that fails to read.
    pub fn broken() -> Self {
        Self {
            content: None,
            is_terminal: false,
        }
    }
}

impl StdinReader for MockStdin {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn read_to_string(&self) -> io::Result<String> {
        match (&self.content, self.is_terminal) {
            (Some(content), _) => Ok(content.clone()),
            (None, true) => Ok(String::new()),
            (None, false) => Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed")),
        }
    }
}

/// Where the input document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input, an unnamed stream
    Stdin,
    /// A named file
    File(PathBuf),
}

impl InputSource {
    /// Reads the whole document.
    pub fn read<R: StdinReader + ?Sized>(&self, stdin: &R) -> Result<String, InputError> {
        match self {
            InputSource::Stdin => {
                if stdin.is_terminal() {
                    log::warn!("reading input from the terminal, end it with Ctrl-D");
                }
                stdin.read_to_string().map_err(InputError::StdinFailed)
            }
            InputSource::File(path) => {
                std::fs::read_to_string(path).map_err(|source| InputError::FileFailed {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}
