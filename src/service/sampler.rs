// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sample generation service.
//!
//! This module provides the [`Sampler`], which reads every section of a source
//! store, classifies each value and writes the resulting labels into a fresh
//! destination store of the same kind.

use crate::domain::{classify, CaseSensitivity, RawValue, Result, SampleError, MAIN_SECTION};
use crate::ports::ConfigStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to the source path when no destination is given.
pub const SAMPLE_SUFFIX: &str = ".sample";

/// Summary of a generated sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleReport {
    /// Where the sample was written
    pub destination: PathBuf,
    /// Number of sections written
    pub sections: usize,
    /// Number of keys written across all sections
    pub keys: usize,
}

/// Generates sample configurations from a source store.
///
/// The sampler owns the source store for its whole lifetime and releases the
/// store's file handle when it is closed or dropped, whichever comes first.
///
/// # Examples
///
/// ```rust,no_run
/// use samplify::adapters::IniFileStore;
/// use samplify::domain::CaseSensitivity;
/// use samplify::service::Sampler;
///
/// # fn main() -> samplify::domain::Result<()> {
/// let sampler = Sampler::<IniFileStore>::open("settings.ini", CaseSensitivity::Sensitive)?;
/// let report = sampler.create(None)?;
/// assert_eq!(report.destination.to_str(), Some("settings.ini.sample"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Sampler<S: ConfigStore> {
    source: S,
}

impl<S: ConfigStore> Sampler<S> {
    /// Opens the source configuration at `path`.
    ///
    /// # Errors
    ///
    /// * `SampleError::SourceRead` - the source is missing or unreadable
    /// * `SampleError::Parse` - the source is malformed
    pub fn open(path: impl AsRef<Path>, case: CaseSensitivity) -> Result<Self> {
        Ok(Self::from_store(S::open(path, case)?))
    }

    /// Wraps an already opened source store.
    pub fn from_store(source: S) -> Self {
        Self { source }
    }

    /// Returns the source store.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns `<source path>.sample`.
    pub fn default_destination(&self) -> PathBuf {
        let mut path = self.source.path().as_os_str().to_owned();
        path.push(SAMPLE_SUFFIX);
        PathBuf::from(path)
    }

    /// Writes a sample of the source store.
    ///
    /// Any existing file at the destination is removed first. The destination
    /// uses the source's case setting. The bootstrap section is not written.
    ///
    /// # Arguments
    ///
    /// * `destination` - Where to write the sample, defaulting to
    ///   [`default_destination`](Sampler::default_destination)
    ///
    /// # Errors
    ///
    /// * `SampleError::DestinationIsSource` - `destination` is the source file
    /// * `SampleError::DestinationWrite` - the destination cannot be removed,
    ///   created or saved
    pub fn create(&self, destination: Option<&Path>) -> Result<SampleReport> {
        let destination = destination
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.default_destination());

        if self.is_source(&destination) {
            return Err(SampleError::DestinationIsSource { path: destination });
        }

        if remove_if_exists(&destination)? {
            tracing::debug!("Removed existing sample '{}'", destination.display());
        }

        let mut sample = S::create(&destination, self.source.case_sensitivity())?;

        for section in self.source.sections() {
            let items = self.source.items(&section).unwrap_or_default();
            tracing::debug!("Sampling section '{}' ({} keys)", section, items.len());
            sample.add_section(&section);

            for (key, value) in items {
                let label = classify(&value);
                tracing::debug!("[{}] {} -> {}", section, key, label);
                sample.set(&key, RawValue::Str(label.to_string()), &section);
            }
        }

        sample.remove_section_if_present(MAIN_SECTION);

        let sections = sample.sections();
        let keys = sections
            .iter()
            .filter_map(|s| sample.items(s))
            .map(|items| items.len())
            .sum::<usize>();

        sample.save()?;
        sample.close()?;

        tracing::info!(
            "Wrote sample '{}' from '{}' ({} sections, {} keys)",
            destination.display(),
            self.source.path().display(),
            sections.len(),
            keys
        );

        Ok(SampleReport {
            destination,
            sections: sections.len(),
            keys,
        })
    }

    /// Releases the source store. Closing twice is a no-op.
    pub fn close(&mut self) -> Result<()> {
        self.source.close()
    }

    fn is_source(&self, destination: &Path) -> bool {
        let source = self.source.path();
        if destination == source {
            return true;
        }
        match (destination.canonicalize(), source.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

/// Removes a file, treating a missing file as success.
fn remove_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(SampleError::destination_write(
            path,
            "Failed to remove existing sample",
            e,
        )),
    }
}

impl<S: ConfigStore> Drop for Sampler<S> {
    fn drop(&mut self) {
        if let Err(e) = self.source.close() {
            tracing::warn!(
                "Failed to close source '{}': {}",
                self.source.path().display(),
                e
            );
        }
    }
}
