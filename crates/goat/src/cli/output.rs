//! Output destinations.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination for rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    /// Write to standard output
    Stdout,
    /// Write to a specific file, created or truncated
    File(PathBuf),
}

impl OutputDestination {
    /// Writes `content` exactly as rendered, no trailing newline added.
    ///
    /// `stdout` is the stream used for [`OutputDestination::Stdout`].
    pub fn write<W: Write + ?Sized>(&self, content: &str, stdout: &mut W) -> std::io::Result<()> {
        match self {
            OutputDestination::Stdout => {
                stdout.write_all(content.as_bytes())?;
                stdout.flush()
            }
            OutputDestination::File(path) => {
                validate_path(path)?;
                std::fs::write(path, content)
            }
        }
    }
}

/// Validates that a file path's parent directory exists.
fn validate_path(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("parent directory does not exist: {}", parent.display()),
            ));
        }
    }
    Ok(())
}
