//! Preset configuration: raw options and their normalized form.
//!
//! [`PresetOptions`] is what users write. [`Config`] is what the rest of the
//! crate consumes, and it is only ever produced by [`Config::normalize`], which
//! never fails: every malformed or missing value is replaced by a documented
//! default.
//!
//! | Option | Accepted | Default |
//! |--------|----------|---------|
//! | `palette` | non-empty mapping of alias → scale | every base scale aliased to itself |
//! | `prefix` | string, normalized to `--…-` | `--` |
//! | `extends` | bool | `true` |
//! | `light` | selector string or `false` | `:root` |
//! | `dark` | selector string or `false` | `.dark` |
//! | `media` | `"dark"`, `"light"` | disabled |
//! | `preflights` | bool, `"*"`, list of aliases | `true` |

mod options;

use std::collections::BTreeMap;
use std::fmt;

use log::warn;
use serde_yaml::Value;

use crate::colors::ColorSource;

pub use options::PresetOptions;

/// Default light selector.
pub const DEFAULT_LIGHT_SELECTOR: &str = ":root";

/// Default dark selector.
pub const DEFAULT_DARK_SELECTOR: &str = ".dark";

/// Default CSS variable prefix.
pub const DEFAULT_PREFIX: &str = "--";

/// Light or dark color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Returns the `prefers-color-scheme` keyword for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When CSS variable declarations are emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preflights {
    /// Emit a declaration the first time a class uses it (`true`).
    OnDemand,
    /// Never emit declarations, only class rules (`false`).
    Disabled,
    /// Emit every declaration of every alias up front (`"*"`).
    All,
    /// Emit the listed aliases up front, the rest on demand.
    Only(Vec<String>),
}

impl Preflights {
    /// Convenience constructor for [`Preflights::Only`].
    pub fn only<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Preflights::Only(aliases.into_iter().map(Into::into).collect())
    }

    /// Returns true if `alias` is emitted up front.
    pub fn is_eager(&self, alias: &str) -> bool {
        match self {
            Preflights::All => true,
            Preflights::Only(aliases) => aliases.iter().any(|a| a == alias),
            Preflights::OnDemand | Preflights::Disabled => false,
        }
    }
}

/// Fully resolved preset configuration.
///
/// # Example
///
/// ```rust
/// use preset_radix::{colors::radix, Config, PresetOptions};
///
/// let config = Config::normalize(&PresetOptions::new().prefix("color"), &*radix());
/// assert_eq!(config.prefix, "--color-");
/// assert_eq!(config.light.as_deref(), Some(":root"));
/// assert_eq!(config.dark.as_deref(), Some(".dark"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Alias → canonical scale name.
    pub palette: BTreeMap<String, String>,
    /// CSS variable prefix, always `--…-` shaped.
    pub prefix: String,
    /// Merge into (`true`) or replace (`false`) the host theme colors.
    pub extends: bool,
    /// Light selector; `None` disables the block.
    pub light: Option<String>,
    /// Dark selector; `None` disables the block.
    pub dark: Option<String>,
    /// Mode emitted inside a `prefers-color-scheme` media block, if any.
    pub media: Option<ColorMode>,
    /// Declaration emission policy.
    pub preflights: Preflights,
}

impl Config {
    /// Resolves every option, substituting defaults for missing or malformed values.
    ///
    /// The default palette aliases each base scale of `source` to itself.
    pub fn normalize(options: &PresetOptions, source: &dyn ColorSource) -> Self {
        Self {
            palette: normalize_palette(options.palette.as_ref(), source),
            prefix: normalize_prefix(options.prefix.as_ref()),
            extends: match &options.extends {
                Some(Value::Bool(extends)) => *extends,
                Some(other) => {
                    warn!("ignoring extends {:?}: expected a boolean", other);
                    true
                }
                None => true,
            },
            light: normalize_selector("light", options.light.as_ref(), DEFAULT_LIGHT_SELECTOR),
            dark: normalize_selector("dark", options.dark.as_ref(), DEFAULT_DARK_SELECTOR),
            media: normalize_media(options.media.as_ref()),
            preflights: normalize_preflights(options.preflights.as_ref()),
        }
    }

    /// Returns the default palette for `source`.
    pub fn default_palette(source: &dyn ColorSource) -> BTreeMap<String, String> {
        source
            .base_scale_names()
            .into_iter()
            .map(|name| (name.to_string(), name.to_string()))
            .collect()
    }

    /// Returns the selector configured for `mode`.
    pub fn selector(&self, mode: ColorMode) -> Option<&str> {
        match mode {
            ColorMode::Light => self.light.as_deref(),
            ColorMode::Dark => self.dark.as_deref(),
        }
    }

    /// Returns true if some output block consumes declarations for `mode`.
    pub fn renders(&self, mode: ColorMode) -> bool {
        self.selector(mode).is_some() || self.media == Some(mode)
    }
}

fn normalize_palette(value: Option<&Value>, source: &dyn ColorSource) -> BTreeMap<String, String> {
    let map = match value {
        Some(Value::Mapping(map)) if !map.is_empty() => map,
        Some(other) if !matches!(other, Value::Mapping(_)) => {
            warn!("ignoring palette {:?}: expected a mapping", other);
            return Config::default_palette(source);
        }
        _ => return Config::default_palette(source),
    };

    let mut palette = BTreeMap::new();
    for (alias, scale) in map {
        match (alias, scale) {
            (Value::String(alias), Value::String(scale)) => {
                palette.insert(alias.clone(), scale.clone());
            }
            (Value::Number(alias), Value::String(scale)) => {
                palette.insert(alias.to_string(), scale.clone());
            }
            _ => warn!("dropping palette entry {:?}: {:?}", alias, scale),
        }
    }
    palette
}

/// Normalizes a prefix so it starts with `--` and ends with `-`.
///
/// ```rust
/// use preset_radix::config::fix_prefix;
///
/// assert_eq!(fix_prefix("color"), "--color-");
/// assert_eq!(fix_prefix("-x"), "--x-");
/// assert_eq!(fix_prefix("--already-"), "--already-");
/// ```
pub fn fix_prefix(prefix: &str) -> String {
    let mut fixed = if prefix.starts_with("--") {
        prefix.to_string()
    } else if prefix.starts_with('-') {
        format!("-{}", prefix)
    } else {
        format!("--{}", prefix)
    };
    if !fixed.ends_with('-') {
        fixed.push('-');
    }
    fixed
}

fn normalize_prefix(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(prefix)) => fix_prefix(prefix),
        Some(other) => {
            warn!("ignoring prefix {:?}: expected a string", other);
            DEFAULT_PREFIX.to_string()
        }
        None => DEFAULT_PREFIX.to_string(),
    }
}

fn normalize_selector(name: &str, value: Option<&Value>, default: &str) -> Option<String> {
    match value {
        Some(Value::String(selector)) => Some(selector.clone()),
        Some(Value::Bool(false)) => None,
        Some(other) => {
            warn!("ignoring {} {:?}: expected a selector or false", name, other);
            Some(default.to_string())
        }
        None => Some(default.to_string()),
    }
}

fn normalize_media(value: Option<&Value>) -> Option<ColorMode> {
    match value {
        Some(Value::String(mode)) if mode == "dark" => Some(ColorMode::Dark),
        Some(Value::String(mode)) if mode == "light" => Some(ColorMode::Light),
        Some(Value::Bool(false)) | None => None,
        Some(other) => {
            warn!("ignoring media {:?}: expected \"dark\", \"light\" or false", other);
            None
        }
    }
}

fn normalize_preflights(value: Option<&Value>) -> Preflights {
    match value {
        Some(Value::Bool(true)) | None => Preflights::OnDemand,
        Some(Value::Bool(false)) => Preflights::Disabled,
        Some(Value::String(s)) if s == "*" => Preflights::All,
        Some(Value::Sequence(items)) => Preflights::Only(
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(alias) => Some(alias.clone()),
                    other => {
                        warn!("dropping preflights entry {:?}: expected an alias", other);
                        None
                    }
                })
                .collect(),
        ),
        Some(other) => {
            warn!("ignoring preflights {:?}: expected a bool, \"*\" or a list", other);
            Preflights::OnDemand
        }
    }
}
