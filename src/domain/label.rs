// SPDX-License-Identifier: MIT OR Apache-2.0

//! Placeholder labels written in place of real values.

use serde::{Serialize, Serializer};
use std::fmt;

/// A short description of the shape of a configuration value.
///
/// # Examples
///
/// ```
/// use samplify::domain::Label;
///
/// assert_eq!(Label::IpAddress(4).to_string(), "IPv4 address");
/// assert_eq!(Label::Literal("int").to_string(), "int");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    /// An absolute filesystem path
    FilePath,
    /// Something shaped like an email address
    EmailAddress,
    /// A URL with scheme, host and path
    Url,
    /// An IP address of the given version (4 or 6)
    IpAddress(u8),
    /// The literal type name of the value
    Literal(&'static str),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::FilePath => f.write_str("file path"),
            Label::EmailAddress => f.write_str("email address"),
            Label::Url => f.write_str("URL"),
            Label::IpAddress(version) => write!(f, "IPv{} address", version),
            Label::Literal(name) => f.write_str(name),
        }
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display() {
        assert_eq!(Label::FilePath.to_string(), "file path");
        assert_eq!(Label::EmailAddress.to_string(), "email address");
        assert_eq!(Label::Url.to_string(), "URL");
        assert_eq!(Label::IpAddress(4).to_string(), "IPv4 address");
        assert_eq!(Label::IpAddress(6).to_string(), "IPv6 address");
        assert_eq!(Label::Literal("str").to_string(), "str");
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_label_serializes_as_text() {
        let yaml = serde_yaml::to_string(&Label::EmailAddress).unwrap();
        assert_eq!(yaml.trim(), "email address");
    }
}
