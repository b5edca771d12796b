// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line interface adapter.
//!
//! This module defines the command-line arguments of the `samplify` binary and
//! the entry point that turns them into a sample.

use crate::adapters::IniFileStore;
#[cfg(feature = "yaml")]
use crate::adapters::YamlFileStore;
use crate::domain::{CaseSensitivity, Result};
#[cfg(feature = "yaml")]
use crate::ports::ConfigParser;
use crate::ports::ConfigStore;
use crate::service::{SampleReport, Sampler};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Default sample file name used by the command line.
pub const DEFAULT_OUTPUT: &str = "settings.ini.sample";

/// Configuration file formats understood by the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreFormat {
    /// `[section]` / `key = value` text
    Ini,
    /// YAML mappings
    #[cfg(feature = "yaml")]
    Yaml,
}

impl StoreFormat {
    /// Picks a format from the file extension, falling back to INI.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use samplify::adapters::cli::StoreFormat;
    ///
    /// assert_eq!(StoreFormat::detect("settings.ini"), StoreFormat::Ini);
    /// assert_eq!(StoreFormat::detect("settings"), StoreFormat::Ini);
    /// ```
    pub fn detect(path: impl AsRef<Path>) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        #[cfg(feature = "yaml")]
        if crate::adapters::YamlParser::new()
            .supported_extensions()
            .contains(&extension.as_str())
        {
            return StoreFormat::Yaml;
        }

        tracing::debug!("Using INI format for extension '{}'", extension);
        StoreFormat::Ini
    }
}

/// Generate a sample configuration file from an existing one
#[derive(Debug, Clone, Parser)]
#[command(name = "samplify", version, about, long_about = None)]
pub struct CliArgs {
    /// Configuration file to sample
    pub filename: PathBuf,

    /// Filename of sample
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Convert all keys to lowercase
    #[arg(long)]
    pub no_retain_case: bool,

    /// Configuration format, detected from the file extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<StoreFormat>,
}

impl CliArgs {
    /// Returns the key case setting selected by the flags.
    pub fn case_sensitivity(&self) -> CaseSensitivity {
        CaseSensitivity::from_retain_case(!self.no_retain_case)
    }

    /// Returns the format selected by the flags or the file extension.
    pub fn store_format(&self) -> StoreFormat {
        self.format
            .unwrap_or_else(|| StoreFormat::detect(&self.filename))
    }

    /// Returns the line printed before sampling starts.
    pub fn banner(&self) -> String {
        format!(
            "Generating sample file {} from {}",
            self.output.display(),
            self.filename.display()
        )
    }
}

/// Runs the command line: samples `args.filename` into `args.output`.
///
/// # Errors
///
/// Store errors are returned unchanged.
///
/// # Examples
///
/// ```rust,no_run
/// use clap::Parser;
/// use samplify::adapters::cli::{run, CliArgs};
///
/// let args = CliArgs::parse_from(["samplify", "settings.ini", "-o", "settings.ini.sample"]);
/// let report = run(&args).unwrap();
/// println!("{} keys", report.keys);
/// ```
pub fn run(args: &CliArgs) -> Result<SampleReport> {
    let case = args.case_sensitivity();

    match args.store_format() {
        StoreFormat::Ini => sample_with::<IniFileStore>(&args.filename, &args.output, case),
        #[cfg(feature = "yaml")]
        StoreFormat::Yaml => sample_with::<YamlFileStore>(&args.filename, &args.output, case),
    }
}

fn sample_with<S: ConfigStore>(
    source: &Path,
    output: &Path,
    case: CaseSensitivity,
) -> Result<SampleReport> {
    let mut sampler = Sampler::<S>::open(source, case)?;
    tracing::debug!("Sampling with {} store", sampler.source().name());
    let report = sampler.create(Some(output))?;
    sampler.close()?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SampleError;
    use std::fs;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> CliArgs {
        let mut argv = vec!["samplify"];
        argv.extend_from_slice(list);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_defaults() {
        let args = args(&["settings.ini"]);
        assert_eq!(args.filename, PathBuf::from("settings.ini"));
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(!args.no_retain_case);
        assert_eq!(args.case_sensitivity(), CaseSensitivity::Sensitive);
        assert!(args.format.is_none());
    }

    #[test]
    fn test_cli_short_output() {
        let args = args(&["app.ini", "-o", "app.sample"]);
        assert_eq!(args.output, PathBuf::from("app.sample"));
    }

    #[test]
    fn test_cli_long_output_and_case_flag() {
        let args = args(&["app.ini", "--output", "out.ini", "--no-retain-case"]);
        assert_eq!(args.output, PathBuf::from("out.ini"));
        assert_eq!(args.case_sensitivity(), CaseSensitivity::Insensitive);
    }

    #[test]
    fn test_cli_requires_filename() {
        assert!(CliArgs::try_parse_from(["samplify"]).is_err());
    }

    #[test]
    fn test_cli_banner() {
        let args = args(&["settings.ini"]);
        assert_eq!(
            args.banner(),
            "Generating sample file settings.ini.sample from settings.ini"
        );
    }

    #[test]
    fn test_store_format_detection() {
        assert_eq!(StoreFormat::detect("a.ini"), StoreFormat::Ini);
        assert_eq!(StoreFormat::detect("a.cfg"), StoreFormat::Ini);
        assert_eq!(StoreFormat::detect("noext"), StoreFormat::Ini);
        #[cfg(feature = "yaml")]
        {
            assert_eq!(StoreFormat::detect("a.yaml"), StoreFormat::Yaml);
            assert_eq!(StoreFormat::detect("a.YML"), StoreFormat::Yaml);
        }
    }

    #[test]
    fn test_cli_format_override() {
        let args = args(&["settings.txt", "--format", "ini"]);
        assert_eq!(args.store_format(), StoreFormat::Ini);
    }

    #[test]
    fn test_run_ini() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("settings.ini");
        let output = dir.path().join("settings.ini.sample");
        fs::write(&source, "[db]\nHost = \"127.0.0.1\"\nport = 5432\n").unwrap();

        let args = args(&[
            source.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--no-retain-case",
        ]);
        let report = run(&args).unwrap();

        assert_eq!(report.destination, output);
        assert_eq!(report.keys, 2);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "[db]\nhost = \"IPv4 address\"\nport = \"int\"\n"
        );
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_run_yaml() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("settings.yaml");
        let output = dir.path().join("settings.yaml.sample");
        fs::write(&source, "db:\n  host: 127.0.0.1\n").unwrap();

        let args = args(&[source.to_str().unwrap(), "-o", output.to_str().unwrap()]);
        run(&args).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "db:\n  host: IPv4 address\n"
        );
    }

    #[test]
    fn test_run_missing_source() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.sample");
        let missing = dir.path().join("missing.ini");

        let args = args(&[missing.to_str().unwrap(), "-o", output.to_str().unwrap()]);
        let result = run(&args);

        assert!(matches!(result, Err(SampleError::SourceRead { .. })));
        assert!(!output.exists());
    }
}
