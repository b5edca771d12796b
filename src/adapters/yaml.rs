// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML configuration format.
//!
//! Top-level mappings are sections. Top-level scalars belong to the bootstrap
//! section. Anything nested deeper inside a section is flattened using dot
//! notation, the same way sequences are flattened using their indices.

use crate::domain::section::section_mut;
use crate::domain::{CaseSensitivity, RawValue, Result, SampleError, Section, MAIN_SECTION};
use crate::ports::ConfigParser;
use serde_yaml::{Mapping, Value};

/// YAML parser implementation.
///
/// # Examples
///
/// ```rust
/// use samplify::adapters::YamlParser;
/// use samplify::domain::{CaseSensitivity, RawValue};
/// use samplify::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let yaml_content = "database:\n  host: localhost\n  port: 5432";
/// let sections = parser.parse(yaml_content, CaseSensitivity::Sensitive).unwrap();
/// assert_eq!(sections[1].name(), "database");
/// assert_eq!(sections[1].get("port"), Some(&RawValue::from(5432)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Flattens a YAML value into a section with dot notation keys.
    fn flatten_yaml(value: &Value, prefix: &str, section: &mut Section, case: CaseSensitivity) {
        match value {
            Value::Mapping(map) => {
                for (key, val) in map {
                    let Some(key_str) = Self::key_text(key) else {
                        tracing::debug!("Skipping non-scalar YAML key under '{}'", prefix);
                        continue;
                    };
                    let new_prefix = if prefix.is_empty() {
                        key_str
                    } else {
                        format!("{}.{}", prefix, key_str)
                    };
                    Self::flatten_yaml(val, &new_prefix, section, case);
                }
            }
            Value::Sequence(seq) => {
                for (i, val) in seq.iter().enumerate() {
                    let new_prefix = format!("{}.{}", prefix, i);
                    Self::flatten_yaml(val, &new_prefix, section, case);
                }
            }
            Value::Tagged(tagged) => Self::flatten_yaml(&tagged.value, prefix, section, case),
            scalar => section.set(case.normalize(prefix), Self::to_raw(scalar)),
        }
    }

    fn key_text(key: &Value) -> Option<String> {
        match key {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn to_raw(value: &Value) -> RawValue {
        match value {
            Value::String(s) => RawValue::from(s.as_str()),
            Value::Number(n) => match n.as_i64() {
                Some(i) => RawValue::Int(i),
                None => RawValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::Bool(b) => RawValue::Bool(*b),
            _ => RawValue::Null,
        }
    }

    fn to_value(value: &RawValue) -> Result<Value> {
        serde_yaml::to_value(value)
            .map_err(|e| SampleError::render("Failed to serialize YAML value", e))
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str, case: CaseSensitivity) -> Result<Vec<Section>> {
        let mut sections = vec![Section::new(MAIN_SECTION)];
        if content.trim().is_empty() {
            return Ok(sections);
        }

        let value: Value = serde_yaml::from_str(content).map_err(|e| SampleError::Parse {
            line: e.location().map(|l| l.line()).unwrap_or(0),
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        })?;

        let map = match value {
            Value::Null => return Ok(sections),
            Value::Mapping(map) => map,
            _ => {
                return Err(SampleError::parse_at(
                    1,
                    "top-level YAML document must be a mapping",
                ))
            }
        };

        for (key, val) in &map {
            let Some(name) = Self::key_text(key) else {
                tracing::debug!("Skipping non-scalar top-level YAML key");
                continue;
            };
            match val {
                Value::Mapping(_) => {
                    Self::flatten_yaml(val, "", section_mut(&mut sections, &name), case)
                }
                _ => Self::flatten_yaml(val, &name, &mut sections[0], case),
            }
        }

        Ok(sections)
    }

    fn render(&self, sections: &[Section]) -> Result<String> {
        let mut root = Mapping::new();

        for section in sections.iter().filter(|s| s.name() == MAIN_SECTION) {
            for (key, value) in section.iter() {
                root.insert(Value::from(key), Self::to_value(value)?);
            }
        }

        for section in sections.iter().filter(|s| s.name() != MAIN_SECTION) {
            let mut entries = Mapping::new();
            for (key, value) in section.iter() {
                entries.insert(Value::from(key), Self::to_value(value)?);
            }
            root.insert(Value::from(section.name()), Value::Mapping(entries));
        }

        serde_yaml::to_string(&root).map_err(|e| SampleError::render("Failed to render YAML", e))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
