// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module holds the value model, the labels written into samples and the
//! classifier that maps one to the other. It has no knowledge of files or
//! configuration formats.

pub mod classifier;
pub mod errors;
pub mod label;
pub mod raw_value;
pub mod section;

// Re-export commonly used types
pub use classifier::classify;
pub use errors::{Result, SampleError};
pub use label::Label;
pub use raw_value::RawValue;
pub use section::{CaseSensitivity, Section, MAIN_SECTION};
