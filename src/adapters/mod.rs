// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing store and format implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer: a file-backed [`ConfigStore`](crate::ports::ConfigStore), the
//! text formats it can read and write, and the command-line entry point.

#[cfg(feature = "cli")]
pub mod cli;
pub mod file_store;
#[cfg(feature = "ini")]
pub mod ini;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use file_store::FileStore;
// Re-export adapters based on feature flags
#[cfg(feature = "ini")]
pub use file_store::IniFileStore;
#[cfg(feature = "yaml")]
pub use file_store::YamlFileStore;
#[cfg(feature = "ini")]
pub use ini::IniParser;
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;
