use std::path::{Path, PathBuf};

use super::error::{ProviderError, ProviderResult};

/// Source of the raw text of one feed
pub trait DataProvider {
    fn fetch_text(&self) -> ProviderResult<String>;
}

/// Reads a feed from a file
#[derive(Debug, Clone)]
pub struct FileDataProvider {
    path: PathBuf,
}

impl FileDataProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileDataProvider {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DataProvider for FileDataProvider {
    fn fetch_text(&self) -> ProviderResult<String> {
        log::debug!("Reading {}", self.path.display());
        let text = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                ProviderError::NotFound(self.path.display().to_string())
            }
            _ => ProviderError::Io(e),
        })?;
        log::trace!("Read {} bytes", text.len());
        Ok(text)
    }
}

/// Serves a fixed string, for feeds already in memory
#[derive(Debug, Clone, Default)]
pub struct StaticDataProvider {
    text: String,
}

impl StaticDataProvider {
    pub fn new(text: impl Into<String>) -> Self {
        StaticDataProvider { text: text.into() }
    }
}

impl DataProvider for StaticDataProvider {
    fn fetch_text(&self) -> ProviderResult<String> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod test {

    use std::io::Write;

    use super::*;

    #[test]
    fn test_file_provider() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "N099-W1;49.1;-123.1").unwrap();

        let provider = FileDataProvider::new(file.path());
        assert_eq!(provider.fetch_text().unwrap(), "N099-W1;49.1;-123.1");
    }

    #[test]
    fn test_file_provider_missing() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileDataProvider::new(dir.path().join("routes.json"));

        assert!(matches!(provider.fetch_text(), Err(ProviderError::NotFound(_))));
    }

    #[test]
    fn test_file_provider_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileDataProvider::new(dir.path());

        assert!(matches!(provider.fetch_text(), Err(ProviderError::Io(_))));
    }

    #[test]
    fn test_static_provider() {
        let provider = StaticDataProvider::new("[]");
        assert_eq!(provider.fetch_text().unwrap(), "[]");
    }
}
