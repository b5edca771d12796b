// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the sample generator.
//!
//! The sampler composes the classifier with the `ConfigStore` port.

pub mod sampler;

// Re-export commonly used types
pub use sampler::{SampleReport, Sampler, SAMPLE_SUFFIX};
