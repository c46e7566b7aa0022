//! Session token persisted in a plain file between invocations.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::application::session::TokenStore;

use super::error::InfraError;

#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, InfraError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(InfraError::Io(err)),
        }
    }

    fn save(&self, token: &str) -> Result<(), InfraError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), InfraError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(InfraError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_and_clears() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileTokenStore::new(dir.path().join("nested/token"));

        assert_eq!(store.load().expect("load"), None);
        store.save("abc").expect("save");
        assert_eq!(store.load().expect("load"), Some("abc".to_string()));

        store.clear().expect("clear");
        assert_eq!(store.load().expect("load"), None);
        store.clear().expect("clearing twice is fine");
    }

    #[test]
    fn blank_file_means_no_token() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("token");
        fs::write(&path, "  \n").expect("write");
        assert_eq!(FileTokenStore::new(path).load().expect("load"), None);
    }
}
