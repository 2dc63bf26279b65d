//! Raw, partially specified preset options.

use std::path::Path;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use super::{ColorMode, Preflights};
use crate::error::{PresetError, Result};

/// User-facing options, every field optional.
///
/// Field *values* are kept loosely typed so that malformed input reaches
/// [`Config::normalize`](super::Config::normalize) and is replaced by a default
/// rather than aborting. The set of field *names* is closed: unknown keys are
/// rejected when parsing.
///
/// # Example: Builder
///
/// ```rust
/// use preset_radix::{ColorMode, PresetOptions, Preflights};
///
/// let options = PresetOptions::new()
///     .alias("brand", "blue")
///     .alias("neutral", "slate")
///     .prefix("color")
///     .media(ColorMode::Dark)
///     .preflights(Preflights::only(["brand"]));
/// ```
///
/// # Example: YAML
///
/// ```rust
/// use preset_radix::PresetOptions;
///
/// let options = PresetOptions::from_yaml(r#"
/// palette:
///   brand: blue
/// dark: false
/// preflights: "*"
/// "#).unwrap();
///
/// assert!(PresetOptions::from_yaml("colour: red").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetOptions {
    pub(crate) palette: Option<Value>,
    pub(crate) prefix: Option<Value>,
    pub(crate) extends: Option<Value>,
    pub(crate) light: Option<Value>,
    pub(crate) dark: Option<Value>,
    pub(crate) media: Option<Value>,
    pub(crate) preflights: Option<Value>,
}

impl PresetOptions {
    /// Creates options with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from YAML (or JSON, which YAML accepts).
    ///
    /// An empty document yields default options.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::Options`] on syntax errors, unknown fields, or a
    /// document that is not a mapping.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| PresetError::Options {
            path: None,
            message: e.to_string(),
        })
    }

    /// Reads and parses an options file.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::Io`] if the file cannot be read, or
    /// [`PresetError::Options`] (carrying the path) if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| PresetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|e| e.with_path(path))
    }

    /// Binds `alias` to `scale`, adding to any palette already set.
    pub fn alias(mut self, alias: &str, scale: &str) -> Self {
        let mut map = match self.palette.take() {
            Some(Value::Mapping(map)) => map,
            _ => Mapping::new(),
        };
        map.insert(Value::from(alias), Value::from(scale));
        self.palette = Some(Value::Mapping(map));
        self
    }

    /// Replaces the palette with the given `(alias, scale)` pairs.
    pub fn palette<I, A, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (A, S)>,
        A: Into<String>,
        S: Into<String>,
    {
        let map: Mapping = entries
            .into_iter()
            .map(|(alias, scale)| (Value::String(alias.into()), Value::String(scale.into())))
            .collect();
        self.palette = Some(Value::Mapping(map));
        self
    }

    /// Sets the CSS variable prefix. It is normalized to `--…-`.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(Value::String(prefix.into()));
        self
    }

    /// Merge generated colors into (`true`) or replace (`false`) the host theme colors.
    pub fn extends(mut self, extends: bool) -> Self {
        self.extends = Some(Value::Bool(extends));
        self
    }

    /// Sets the selector wrapping light-mode declarations.
    pub fn light(mut self, selector: impl Into<String>) -> Self {
        self.light = Some(Value::String(selector.into()));
        self
    }

    /// Disables the light selector block.
    pub fn disable_light(mut self) -> Self {
        self.light = Some(Value::Bool(false));
        self
    }

    /// Sets the selector wrapping dark-mode declarations.
    pub fn dark(mut self, selector: impl Into<String>) -> Self {
        self.dark = Some(Value::String(selector.into()));
        self
    }

    /// Disables the dark selector block.
    pub fn disable_dark(mut self) -> Self {
        self.dark = Some(Value::Bool(false));
        self
    }

    /// Emits a `prefers-color-scheme` media block for `mode`.
    pub fn media(mut self, mode: ColorMode) -> Self {
        self.media = Some(Value::String(mode.as_str().to_string()));
        self
    }

    /// Sets the preflight emission policy.
    pub fn preflights(mut self, preflights: Preflights) -> Self {
        self.preflights = Some(match preflights {
            Preflights::OnDemand => Value::Bool(true),
            Preflights::Disabled => Value::Bool(false),
            Preflights::All => Value::String("*".to_string()),
            Preflights::Only(aliases) => {
                Value::Sequence(aliases.into_iter().map(Value::String).collect())
            }
        });
        self
    }
}
