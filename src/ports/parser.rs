// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which converts configuration
//! text in a given format to ordered sections and back.

use crate::domain::{CaseSensitivity, Result, Section};

/// A trait for reading and writing one configuration text format.
///
/// # Section Layout
///
/// `parse` always returns the bootstrap section
/// [`MAIN_SECTION`](crate::domain::MAIN_SECTION) first, holding any keys that
/// do not belong to a named section. `render` accepts sections in the same
/// shape and writes them so that parsing the output yields them again.
///
/// # Examples
///
/// ```rust
/// use samplify::domain::{CaseSensitivity, Result, Section, MAIN_SECTION};
/// use samplify::ports::ConfigParser;
///
/// struct LineParser;
///
/// impl ConfigParser for LineParser {
///     fn parse(&self, content: &str, _case: CaseSensitivity) -> Result<Vec<Section>> {
///         let mut main = Section::new(MAIN_SECTION);
///         for line in content.lines() {
///             main.set(line, line.into());
///         }
///         Ok(vec![main])
///     }
///
///     fn render(&self, sections: &[Section]) -> Result<String> {
///         Ok(sections
///             .iter()
///             .flat_map(|s| s.iter().map(|(k, _)| format!("{}\n", k)))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["lines"]
///     }
/// }
///
/// let sections = LineParser.parse("a\nb", CaseSensitivity::Sensitive).unwrap();
/// assert_eq!(sections[0].len(), 2);
/// ```
pub trait ConfigParser {
    /// Parses configuration text into ordered sections.
    ///
    /// Keys are normalized according to `case`.
    ///
    /// # Errors
    ///
    /// * `SampleError::Parse` - the content is malformed
    fn parse(&self, content: &str, case: CaseSensitivity) -> Result<Vec<Section>>;

    /// Renders ordered sections as configuration text.
    ///
    /// # Errors
    ///
    /// * `SampleError::Render` - a value cannot be expressed in the format
    fn render(&self, sections: &[Section]) -> Result<String>;

    /// Returns the file extensions (without the leading dot) this parser reads.
    fn supported_extensions(&self) -> &[&str];
}
