//! Input handling for stdin and file sources.

use std::io::Read;
use std::path::Path;

use crate::error::TransformError;

/// Read the whole input document into memory.
///
/// A path of `-` (or no path at all) reads from stdin, so the tool can sit
/// at the end of a pipe. Failures surface as
/// [`TransformError::SourceUnavailable`] with the offending path.
pub fn read_input(path: Option<&Path>) -> Result<String, TransformError> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            std::fs::read_to_string(p).map_err(|source| TransformError::SourceUnavailable {
                path: p.display().to_string(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map_err(|source| {
                TransformError::SourceUnavailable {
                    path: "<stdin>".to_string(),
                    source,
                }
            })?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "# Hello").unwrap();
        let content = read_input(Some(file.path())).unwrap();
        assert_eq!(content, "# Hello");
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let err = read_input(Some(Path::new("/no/such/file.md"))).unwrap_err();
        match err {
            TransformError::SourceUnavailable { path, .. } => {
                assert_eq!(path, "/no/such/file.md");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
