use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::engine::error::RsvpError;
use crate::reading::tokenize_text;

/// A text file split into the words that will be played back.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub words: Vec<String>,
    pub source: PathBuf,
}

/// Reads a UTF-8 text file.
pub fn load_text_file(path: &Path) -> Result<String, RsvpError> {
    fs::read_to_string(path).map_err(|err| RsvpError::from_read(path, err))
}

/// Reads and tokenizes a file, rejecting files with no words.
pub fn load_document(path: &Path) -> Result<LoadedDocument, RsvpError> {
    let text = load_text_file(path)?;
    let words = tokenize_text(&text);

    if words.is_empty() {
        return Err(RsvpError::NoWords(path.to_path_buf()));
    }

    info!("Loaded {} words from {}", words.len(), path.display());

    Ok(LoadedDocument {
        words,
        source: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_valid_file_loads() {
        let file = temp_file(b"Hello,  world!\n");
        let document = load_document(file.path()).unwrap();
        assert_eq!(document.words, vec!["Hello,", "world!"]);
        assert_eq!(document.source, file.path());
    }

    #[test]
    fn test_nonexistent_file_error() {
        let result = load_document(Path::new("nonexistent_file_12345.txt"));
        match result {
            Err(RsvpError::FileNotFound(path)) => {
                assert_eq!(path, PathBuf::from("nonexistent_file_12345.txt"))
            }
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_file_error() {
        let file = temp_file(b"");
        assert!(matches!(load_document(file.path()), Err(RsvpError::NoWords(_))));
    }

    #[test]
    fn test_whitespace_only_file_error() {
        let file = temp_file(b"  \n\t\n   ");
        assert!(matches!(load_document(file.path()), Err(RsvpError::NoWords(_))));
    }

    #[test]
    fn test_invalid_utf8_error() {
        let file = temp_file(&[0x66, 0x6f, 0xff, 0xfe, 0x6f]);
        assert!(matches!(
            load_document(file.path()),
            Err(RsvpError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_text_file(dir.path()).unwrap_err();
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }
}
