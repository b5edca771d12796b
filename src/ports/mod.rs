// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that decouple the
//! sampler from concrete configuration formats. Adapters implement them.

pub mod parser;
pub mod store;

// Re-export commonly used types
pub use parser::ConfigParser;
pub use store::ConfigStore;
