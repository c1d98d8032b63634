//! Attach the team file path to failures from file access.

use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Adds "what was attempted on which file" to any fallible result.
pub trait PathContext<T> {
    /// Wrap the error as [`ApplicationError::OperationFailed`] with
    /// `"<action>: <path>"` as its context, keeping the cause as the source.
    ///
    /// ```ignore
    /// let text = fs.read_to_string(path).path_context("read team file", path)?;
    /// ```
    fn path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T, E> PathContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{action}: {}", path.display()),
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn keeps_cause_and_names_the_file() {
        let failed: io::Result<()> = Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));

        let err = failed
            .path_context("read team file", Path::new("/teams/ds9.json"))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "operation failed: read team file: /teams/ds9.json"
        );
        assert_eq!(err.source().map(|s| s.to_string()), Some("denied".to_string()));
    }
}
