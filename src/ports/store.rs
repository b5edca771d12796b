// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration store trait definition.
//!
//! This module defines the `ConfigStore` trait, the port through which the
//! sampler reads a source configuration and writes the generated sample. The
//! sampler never touches files or formats directly.

use crate::domain::{CaseSensitivity, RawValue, Result};
use std::path::Path;

/// A sectioned key/value configuration store.
///
/// A store is an ordered collection of sections, each an ordered mapping from
/// unique keys to values. Every store carries the bootstrap section
/// [`MAIN_SECTION`](crate::domain::MAIN_SECTION) as its first section.
///
/// # Lifecycle
///
/// Stores are either opened read-only from an existing file with
/// [`open`](ConfigStore::open) or created fresh and writable with
/// [`create`](ConfigStore::create). The underlying file handle is held until
/// [`close`](ConfigStore::close) is called.
///
/// # Examples
///
/// ```rust,no_run
/// use samplify::adapters::IniFileStore;
/// use samplify::domain::CaseSensitivity;
/// use samplify::ports::ConfigStore;
///
/// # fn main() -> samplify::domain::Result<()> {
/// let mut store = IniFileStore::open("settings.ini", CaseSensitivity::Sensitive)?;
/// for section in store.sections() {
///     println!("[{}]", section);
/// }
/// store.close()?;
/// # Ok(())
/// # }
/// ```
pub trait ConfigStore: Sized {
    /// Returns a short identifier for logging, such as "ini-file".
    fn name(&self) -> &str;

    /// Opens an existing configuration read-only.
    ///
    /// # Errors
    ///
    /// * `SampleError::SourceRead` - the file is missing or unreadable
    /// * `SampleError::Parse` - the file is malformed
    fn open(path: impl AsRef<Path>, case: CaseSensitivity) -> Result<Self>;

    /// Creates a new, empty and writable configuration at `path`.
    ///
    /// The new store only contains the bootstrap section.
    ///
    /// # Errors
    ///
    /// * `SampleError::DestinationWrite` - the file cannot be created
    fn create(path: impl AsRef<Path>, case: CaseSensitivity) -> Result<Self>;

    /// Returns the path backing this store.
    fn path(&self) -> &Path;

    /// Returns the case setting fixed when the store was opened.
    fn case_sensitivity(&self) -> CaseSensitivity;

    /// Returns the section names in store order.
    fn sections(&self) -> Vec<String>;

    /// Returns the key/value pairs of a section in store order, or `None` when
    /// the section does not exist.
    fn items(&self, section: &str) -> Option<Vec<(String, RawValue)>>;

    /// Adds an empty section unless it already exists.
    fn add_section(&mut self, name: &str);

    /// Sets `key` to `value` in `section`, creating the section if needed.
    ///
    /// The key is normalized according to the store's case setting.
    fn set(&mut self, key: &str, value: RawValue, section: &str);

    /// Removes a section if it exists and reports whether it did.
    fn remove_section_if_present(&mut self, name: &str) -> bool;

    /// Writes the store back to its file.
    ///
    /// # Errors
    ///
    /// * `SampleError::ReadOnlyStore` - the store was opened read-only
    /// * `SampleError::StoreClosed` - the store was already closed
    /// * `SampleError::DestinationWrite` - writing failed
    fn save(&mut self) -> Result<()>;

    /// Releases the underlying file handle. Closing twice is a no-op.
    fn close(&mut self) -> Result<()>;
}
