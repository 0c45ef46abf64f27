//! Swap configuration.
//!
//! `defaults/anyswap.default.toml` is compiled in and always forms the bottom layer, so a
//! user file only needs the keys it changes. The command-line host stacks, in order: the
//! defaults, `.anyswap.toml` in the working directory if present, an explicit `--config`
//! file, then flag overrides.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::anyswap::error::Result;

const DEFAULT_TOML: &str = include_str!("../../defaults/anyswap.default.toml");

/// Top-level configuration consumed by [SwapCommand](crate::anyswap::swap::SwapCommand).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SwapConfig {
    pub scan: ScanConfig,
    pub cursor: CursorConfig,
}

/// Controls how much text is tokenized around the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScanConfig {
    /// Extra lines reached in the swap direction
    pub extend_lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CursorConfig {
    pub follow_swap: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { extend_lines: 1 }
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self { follow_swap: true }
    }
}

/// Layers configuration sources over the embedded defaults, later layers winning.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file when it exists, such as a per-project `.anyswap.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Force a single dotted key (`scan.extend_lines`), e.g. from a command-line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<SwapConfig> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
