use super::{LoadError, LoadedText};
use std::fs;
use std::io;
use std::path::Path;

/// Load a UTF-8 text file into memory.
///
/// Missing files map to [`LoadError::FileNotFound`]; files containing only
/// whitespace are rejected as [`LoadError::Empty`].
pub fn load_text(path: &str) -> Result<LoadedText, LoadError> {
    let path = Path::new(path);

    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if text.trim().is_empty() {
        return Err(LoadError::Empty(path.display().to_string()));
    }

    log::info!("loaded {} bytes from {}", text.len(), path.display());

    Ok(LoadedText {
        text,
        source: format!("file:{}", path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_nonexistent_file_error() {
        let result = load_text("/nonexistent/stressmark/poem.txt");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_empty_file_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let result = load_text(path);
        assert!(matches!(result, Err(LoadError::Empty(_))));
    }

    #[test]
    fn test_whitespace_file_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"  \n\t\n").unwrap();

        let result = load_text(file.path().to_str().unwrap());
        assert!(matches!(result, Err(LoadError::Empty(_))));
    }

    #[test]
    fn test_valid_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"water is wet").unwrap();
        let path = file.path().to_str().unwrap();

        let loaded = load_text(path).unwrap();
        assert_eq!(loaded.text, "water is wet");
        assert!(loaded.source.starts_with("file:"));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();

        let result = load_text(file.path().to_str().unwrap());
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
