// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed configuration store adapter.
//!
//! This module provides [`FileStore`], a [`ConfigStore`] that keeps a whole
//! configuration file in memory and delegates the text format to a
//! [`ConfigParser`].

use crate::domain::section::section_mut;
use crate::domain::{CaseSensitivity, RawValue, Result, SampleError, Section, MAIN_SECTION};
use crate::ports::{ConfigParser, ConfigStore};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Maximum allowed size for configuration files (10MB)
const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// INI file store.
#[cfg(feature = "ini")]
pub type IniFileStore = FileStore<crate::adapters::IniParser>;

/// YAML file store.
#[cfg(feature = "yaml")]
pub type YamlFileStore = FileStore<crate::adapters::YamlParser>;

#[derive(Debug)]
enum Handle {
    Read(File),
    Write(File),
}

/// Configuration store backed by a single file.
///
/// Stores opened with [`ConfigStore::open`] hold a read-only handle and cannot
/// be saved. Stores made with [`ConfigStore::create`] truncate the file and
/// hold a write handle that [`ConfigStore::save`] rewrites through.
///
/// # Examples
///
/// ```rust,no_run
/// use samplify::adapters::IniFileStore;
/// use samplify::domain::{CaseSensitivity, RawValue};
/// use samplify::ports::ConfigStore;
///
/// # fn main() -> samplify::domain::Result<()> {
/// let mut store = IniFileStore::create("out.ini", CaseSensitivity::Sensitive)?;
/// store.set("host", RawValue::from("IPv4 address"), "db");
/// store.save()?;
/// store.close()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FileStore<P> {
    /// Short identifier used in logs
    name: String,
    /// Path to the configuration file
    file_path: PathBuf,
    /// Case setting fixed at open time
    case: CaseSensitivity,
    /// Sections in file order, bootstrap section first
    sections: Vec<Section>,
    /// Format parser
    parser: P,
    /// Open file handle, released by `close`
    handle: Option<Handle>,
}

impl<P: ConfigParser + Default> FileStore<P> {
    fn with_parts(path: &Path, case: CaseSensitivity, sections: Vec<Section>, handle: Handle) -> Self {
        let parser = P::default();
        let name = format!(
            "{}-file",
            parser.supported_extensions().first().copied().unwrap_or("config")
        );

        Self {
            name,
            file_path: path.to_path_buf(),
            case,
            sections,
            parser,
            handle: Some(handle),
        }
    }

    /// Returns true while the file handle is held.
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }
}

impl<P: ConfigParser + Default> ConfigStore for FileStore<P> {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(path: impl AsRef<Path>, case: CaseSensitivity) -> Result<Self> {
        let path = path.as_ref();

        let mut file = File::open(path)
            .map_err(|e| SampleError::source_read(path, "Failed to open configuration file", e))?;

        // Check file size before reading to prevent DoS via large files
        let metadata = file
            .metadata()
            .map_err(|e| SampleError::source_read(path, "Failed to read file metadata", e))?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(SampleError::SourceRead {
                path: path.to_path_buf(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_CONFIG_FILE_SIZE
                ),
                source: None,
            });
        }

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| SampleError::source_read(path, "Failed to read configuration file", e))?;

        let sections = P::default().parse(&content, case)?;
        let store = Self::with_parts(path, case, sections, Handle::Read(file));
        tracing::debug!(
            "Opened {} '{}' with {} sections",
            store.name,
            path.display(),
            store.sections.len()
        );
        Ok(store)
    }

    fn create(path: impl AsRef<Path>, case: CaseSensitivity) -> Result<Self> {
        let path = path.as_ref();

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| {
                SampleError::destination_write(path, "Failed to create configuration file", e)
            })?;

        Ok(Self::with_parts(
            path,
            case,
            vec![Section::new(MAIN_SECTION)],
            Handle::Write(file),
        ))
    }

    fn path(&self) -> &Path {
        &self.file_path
    }

    fn case_sensitivity(&self) -> CaseSensitivity {
        self.case
    }

    fn sections(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.name().to_string()).collect()
    }

    fn items(&self, section: &str) -> Option<Vec<(String, RawValue)>> {
        self.sections
            .iter()
            .find(|s| s.name() == section)
            .map(Section::to_items)
    }

    fn add_section(&mut self, name: &str) {
        section_mut(&mut self.sections, name);
    }

    fn set(&mut self, key: &str, value: RawValue, section: &str) {
        let key = self.case.normalize(key);
        section_mut(&mut self.sections, section).set(key, value);
    }

    fn remove_section_if_present(&mut self, name: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.name() != name);
        self.sections.len() != before
    }

    fn save(&mut self) -> Result<()> {
        let file = match self.handle.as_mut() {
            Some(Handle::Write(file)) => file,
            Some(Handle::Read(_)) => {
                return Err(SampleError::ReadOnlyStore {
                    path: self.file_path.clone(),
                })
            }
            None => {
                return Err(SampleError::StoreClosed {
                    path: self.file_path.clone(),
                })
            }
        };

        let path = &self.file_path;
        let content = self
            .parser
            .render(&self.sections)
            .map_err(|e| SampleError::DestinationWrite {
                path: path.clone(),
                message: "Failed to render configuration".to_string(),
                source: Some(Box::new(e)),
            })?;

        file.set_len(0)
            .and_then(|_| file.seek(SeekFrom::Start(0)).map(|_| ()))
            .and_then(|_| file.write_all(content.as_bytes()))
            .and_then(|_| file.flush())
            .map_err(|e| SampleError::destination_write(path, "Failed to save configuration", e))?;

        tracing::debug!("Saved {} bytes to '{}'", content.len(), path.display());
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(handle) = self.handle.take() {
            tracing::debug!("Closing {} '{}'", self.name, self.file_path.display());
            drop(handle);
        }
        Ok(())
    }
}
