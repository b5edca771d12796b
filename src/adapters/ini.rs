// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI configuration format.
//!
//! This module provides a parser for the INI-like `[section]` / `key = value`
//! text format.

use crate::domain::section::section_mut;
use crate::domain::{CaseSensitivity, RawValue, Result, SampleError, Section, MAIN_SECTION};
use crate::ports::ConfigParser;

/// INI parser implementation.
///
/// Values are typed when they are read: quoted text is a string, whole numbers
/// are integers, numeric literals with a fraction or exponent are floats and
/// `true`/`false` are booleans. Everything else is kept as written.
///
/// # Examples
///
/// ```rust
/// use samplify::adapters::IniParser;
/// use samplify::domain::{CaseSensitivity, RawValue};
/// use samplify::ports::ConfigParser;
///
/// let parser = IniParser::new();
/// let content = "[db]\nhost = \"127.0.0.1\"\nport = 5432";
/// let sections = parser.parse(content, CaseSensitivity::Sensitive).unwrap();
/// assert_eq!(sections[1].get("port"), Some(&RawValue::from(5432)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IniParser;

impl IniParser {
    /// Creates a new INI parser.
    pub fn new() -> Self {
        IniParser
    }

    /// Types a raw value as written after the delimiter.
    fn infer_value(text: &str) -> RawValue {
        let text = text.trim();

        if let Some(inner) = Self::unquote(text) {
            return RawValue::from(inner);
        }
        if let Ok(n) = text.parse::<i64>() {
            return RawValue::Int(n);
        }
        if Self::is_float_literal(text) {
            if let Ok(n) = text.parse::<f64>() {
                return RawValue::Float(n);
            }
        }
        if text.eq_ignore_ascii_case("true") {
            return RawValue::Bool(true);
        }
        if text.eq_ignore_ascii_case("false") {
            return RawValue::Bool(false);
        }
        RawValue::from(text)
    }

    fn unquote(text: &str) -> Option<&str> {
        ['"', '\''].iter().find_map(|&quote| {
            text.strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        })
    }

    // Rejects words such as "inf" or "NaN" that f64 would accept
    fn is_float_literal(text: &str) -> bool {
        text.chars().any(|c| c.is_ascii_digit())
            && text
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    }

    fn render_value(value: &RawValue) -> String {
        match value {
            RawValue::Str(s) => {
                // Multi-line values continue on indented lines
                let s = s.replace('\n', "\n    ");
                if !s.contains('"') {
                    format!("\"{}\"", s)
                } else if !s.contains('\'') {
                    format!("'{}'", s)
                } else {
                    s
                }
            }
            other => other.to_string(),
        }
    }
}

/// A key whose value may still grow by indented continuation lines.
struct PendingEntry {
    key: String,
    value: String,
    indent: usize,
}

impl PendingEntry {
    fn store(self, sections: &mut Vec<Section>, section: &str) {
        section_mut(sections, section).set(self.key, IniParser::infer_value(&self.value));
    }
}

impl ConfigParser for IniParser {
    fn parse(&self, content: &str, case: CaseSensitivity) -> Result<Vec<Section>> {
        let mut sections = vec![Section::new(MAIN_SECTION)];
        let mut current = MAIN_SECTION.to_string();
        let mut pending: Option<PendingEntry> = None;
        let mut blank_lines = 0;

        for (index, raw_line) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = raw_line.trim();

            if line.is_empty() {
                blank_lines += 1;
                continue;
            }
            if line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let indent = raw_line.len() - raw_line.trim_start().len();
            if let Some(entry) = pending.as_mut().filter(|entry| indent > entry.indent) {
                for _ in 0..blank_lines {
                    entry.value.push('\n');
                }
                entry.value.push('\n');
                entry.value.push_str(line);
                blank_lines = 0;
                continue;
            }
            blank_lines = 0;

            if let Some(entry) = pending.take() {
                entry.store(&mut sections, &current);
            }

            if let Some(header) = line.strip_prefix('[') {
                let name = header
                    .strip_suffix(']')
                    .ok_or_else(|| SampleError::parse_at(line_no, "unterminated section header"))?
                    .trim();
                if name.is_empty() {
                    return Err(SampleError::parse_at(line_no, "empty section name"));
                }
                current = name.to_string();
                section_mut(&mut sections, &current);
                continue;
            }

            let split = line
                .find(['=', ':'])
                .ok_or_else(|| SampleError::parse_at(line_no, "expected 'key = value'"))?;
            let key = line[..split].trim();
            if key.is_empty() {
                return Err(SampleError::parse_at(line_no, "empty key"));
            }

            pending = Some(PendingEntry {
                key: case.normalize(key),
                value: line[split + 1..].trim().to_string(),
                indent,
            });
        }

        if let Some(entry) = pending {
            entry.store(&mut sections, &current);
        }

        Ok(sections)
    }

    fn render(&self, sections: &[Section]) -> Result<String> {
        let mut out = String::new();

        // Bootstrap keys go first, before any header, so they parse back into it
        for section in sections.iter().filter(|s| s.name() == MAIN_SECTION) {
            for (key, value) in section.iter() {
                out.push_str(&format!("{} = {}\n", key, Self::render_value(value)));
            }
        }

        for section in sections.iter().filter(|s| s.name() != MAIN_SECTION) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("[{}]\n", section.name()));
            for (key, value) in section.iter() {
                out.push_str(&format!("{} = {}\n", key, Self::render_value(value)));
            }
        }

        Ok(out)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["ini", "cfg", "conf"]
    }
}
