//! Project directory handling
//!
//! The project root is an explicit value handed to every step. The process
//! working directory is never changed.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use tracing::debug;

/// Root directory of the project being generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDirectory {
    root: Utf8PathBuf,
}

impl WorkingDirectory {
    /// Create `<parent>/<name>` and return it as the working directory
    ///
    /// Fails if the directory already exists or cannot be created.
    pub fn create(parent: &Utf8Path, name: &str) -> Result<Self> {
        let root = parent.join(name);
        std::fs::create_dir(&root).map_err(|source| Error::DirectoryCreate {
            path: root.clone(),
            source,
        })?;
        debug!("Created project directory {}", root);
        Ok(Self { root })
    }

    /// Use an existing directory as the working directory
    pub fn open(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Resolve a project-relative path
    pub fn join(&self, relative: impl AsRef<Utf8Path>) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// Read a project file, `None` when it does not exist
    pub fn read_optional(&self, relative: &str) -> Result<Option<String>> {
        let path = self.join(relative);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write a project file, creating parent directories as needed
    pub fn write(&self, relative: &str, content: &str) -> Result<Utf8PathBuf> {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::file_write(parent.to_path_buf(), e))?;
        }
        std::fs::write(&path, content).map_err(|e| Error::file_write(path.clone(), e))?;
        debug!("Wrote {}", path);
        Ok(path)
    }

    /// Serialize `value` as pretty JSON with a trailing newline
    pub fn write_json<T: Serialize + ?Sized>(
        &self,
        relative: &str,
        value: &T,
    ) -> Result<Utf8PathBuf> {
        let mut content = serde_json::to_string_pretty(value)?;
        content.push('\n');
        self.write(relative, &content)
    }
}
