// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generate redacted sample configuration files.
//!
//! This crate reads a sectioned key/value configuration file and writes a
//! "sample" counterpart with the same sections and keys, where every value is
//! replaced by a label describing its shape: `"file path"`,
//! `"email address"`, `"URL"`, `"IPv4 address"`, `"IPv6 address"`, or the
//! literal type name (`"str"`, `"int"`, `"float"`, `"bool"`). A project can
//! ship the sample next to its real configuration without leaking secrets.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Value model, labels and the classifier (`RawValue`,
//!   `Label`, `classify`, errors)
//! - **Ports**: Trait definitions (`ConfigStore`, `ConfigParser`)
//! - **Adapters**: A file-backed store with INI and YAML formats, and the CLI
//! - **Service**: The `Sampler` that turns a source store into a sample
//!
//! # Feature Flags
//!
//! - `ini`: Enable INI file support (default)
//! - `yaml`: Enable YAML file support (default)
//! - `cli`: Enable the `samplify` binary and its argument parsing (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use samplify::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let sampler = Sampler::<IniFileStore>::open("settings.ini", CaseSensitivity::Sensitive)?;
//! let report = sampler.create(None)?;
//! println!("wrote {}", report.destination.display());
//! # Ok(())
//! # }
//! ```
//!
//! Classifying a single value:
//!
//! ```rust
//! use samplify::prelude::*;
//!
//! assert_eq!(classify(&RawValue::from("::1")).to_string(), "IPv6 address");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        classify, CaseSensitivity, Label, RawValue, Result, SampleError, Section,
    };
    pub use crate::ports::{ConfigParser, ConfigStore};
    pub use crate::service::{SampleReport, Sampler};

    // Re-export adapters based on feature flags
    pub use crate::adapters::FileStore;
    #[cfg(feature = "ini")]
    pub use crate::adapters::{IniFileStore, IniParser};
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlFileStore, YamlParser};
}
