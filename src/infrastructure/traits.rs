//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::domain::builder::{BuildResult, NameSource};
use crate::domain::DomainError;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create parent directories if needed.
    fn ensure_parent(&self, path: &Path) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }
}

/// Line-oriented name source: prompts go to `output`, answers come from `input`.
pub struct PromptNameSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptNameSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptNameSource<io::StdinLock<'static>, io::Stderr> {
    /// Read answers from stdin, prompt on stderr so stdout stays clean for data.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> NameSource for PromptNameSource<R, W> {
    fn request_line(&mut self, prompt: &str) -> BuildResult<String> {
        let exhausted = || DomainError::InputExhausted {
            prompt: prompt.to_string(),
        };
        write!(self.output, "{} ", prompt.cyan()).map_err(|_| exhausted())?;
        self.output.flush().map_err(|_| exhausted())?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => Err(exhausted()),
            Ok(_) => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    fn notice(&mut self, message: &str) {
        writeln!(self.output, "{}: {}", "Warning".yellow(), message).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_source_reads_lines_until_eof() {
        let mut out = Vec::new();
        let mut source = PromptNameSource::new("Odo\r\n\n".as_bytes(), &mut out);
        assert_eq!(source.request_line("Name:").unwrap(), "Odo");
        assert_eq!(source.request_line("Name:").unwrap(), "");
        assert!(matches!(
            source.request_line("Name:"),
            Err(DomainError::InputExhausted { .. })
        ));
        drop(source);
        assert!(String::from_utf8_lossy(&out).contains("Name:"));
    }
}
