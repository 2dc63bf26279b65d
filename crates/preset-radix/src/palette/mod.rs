//! Palette building: from a normalized [`Config`] to theme colors and a class
//! matcher.
//!
//! Each palette entry binds an alias to a scale. Building the palette:
//!
//! 1. prunes entries whose scale is unknown, or names a dark or alpha family
//!    (overlays excepted),
//! 2. registers the alias and its alpha form (`<alias>A`) with the matcher,
//! 3. maps every step to a CSS variable reference, `var(--brand6)` for the
//!    plain alias and `var(--brandA6)` for the alpha alias (overlays only get
//!    the alpha alias),
//! 4. emits all declarations of eager aliases up front,
//! 5. leaves out aliases that ended up with no steps.
//!
//! # Example
//!
//! ```rust
//! use preset_radix::colors::radix;
//! use preset_radix::emit::Declarations;
//! use preset_radix::palette::{Palette, ThemeColor};
//! use preset_radix::{Config, PresetOptions};
//!
//! let source = radix();
//! let mut config = Config::normalize(&PresetOptions::new().alias("brand", "blue"), &*source);
//! let mut declarations = Declarations::new();
//! let palette = Palette::build(&mut config, &*source, &mut declarations).unwrap();
//!
//! let colors = palette.theme_colors();
//! let Some(ThemeColor::Shades(shades)) = colors.get("brandA") else { panic!() };
//! assert_eq!(shades[&6], "var(--brandA6)");
//! ```

mod matcher;

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Serialize;

use crate::colors::{is_base_scale, is_overlay, trailing_number, ColorSource, ALPHA_MARKER};
use crate::config::Config;
use crate::emit::{Declarations, Emitter, STEPS};
use crate::error::Result;

pub use matcher::{ClassMatch, ClassMatcher};

/// Theme color map handed to the host: name → color.
pub type ThemeColors = BTreeMap<String, ThemeColor>;

/// One theme color entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ThemeColor {
    /// A single value, e.g. `currentColor`.
    Plain(String),
    /// Step → value, e.g. `6 → var(--brand6)`.
    Shades(BTreeMap<u8, String>),
}

impl ThemeColor {
    /// Returns the value for `step`, if this entry has shades.
    pub fn shade(&self, step: u8) -> Option<&str> {
        match self {
            ThemeColor::Plain(_) => None,
            ThemeColor::Shades(shades) => shades.get(&step).map(String::as_str),
        }
    }
}

/// A palette alias after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    /// Canonical scale name.
    pub scale: String,
    /// True for `whiteA` / `blackA`.
    pub overlay: bool,
    /// Step → `var(<prefix><alias><step>)`; empty for overlays.
    pub plain: BTreeMap<u8, String>,
    /// Step → `var(<prefix><alias>A<step>)`.
    pub alpha: BTreeMap<u8, String>,
}

/// The built palette of one preset instance.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: BTreeMap<String, AliasEntry>,
    matcher: ClassMatcher,
}

impl Palette {
    /// Validates `config.palette` against `source` and builds the palette.
    ///
    /// Invalid entries are removed from `config.palette`. Eager aliases push
    /// their declarations into `declarations`.
    ///
    /// # Errors
    ///
    /// Only fails if the class pattern cannot be compiled.
    pub fn build(
        config: &mut Config,
        source: &dyn ColorSource,
        declarations: &mut Declarations,
    ) -> Result<Self> {
        config.palette.retain(|alias, scale| {
            let valid = source.has_scale(scale) && (is_overlay(scale) || is_base_scale(scale));
            if !valid {
                warn!("dropping palette alias '{}': unusable scale '{}'", alias, scale);
            }
            valid
        });

        let mut entries = BTreeMap::new();
        let mut aliases = Vec::with_capacity(config.palette.len() * 2);
        for (alias, scale) in &config.palette {
            aliases.push(alias.clone());
            aliases.push(format!("{}{}", alias, ALPHA_MARKER));

            let overlay = is_overlay(scale);
            let entry = if overlay {
                AliasEntry {
                    scale: scale.clone(),
                    overlay,
                    plain: BTreeMap::new(),
                    alpha: step_mapping(source, scale, &config.prefix, alias, true),
                }
            } else {
                let alpha_scale = format!("{}{}", scale, ALPHA_MARKER);
                AliasEntry {
                    scale: scale.clone(),
                    overlay,
                    plain: step_mapping(source, scale, &config.prefix, alias, false),
                    alpha: step_mapping(source, &alpha_scale, &config.prefix, alias, true),
                }
            };
            entries.insert(alias.clone(), entry);
        }

        let config = &*config;
        let mut emitter = Emitter::new(config, source, declarations);
        for (alias, entry) in &entries {
            if config.preflights.is_eager(alias) {
                emitter.emit_eager(alias, &entry.scale);
            }
        }

        debug!("built palette with {} aliases", entries.len());
        Ok(Self {
            entries,
            matcher: ClassMatcher::new(aliases)?,
        })
    }

    /// Returns the entry for `alias`.
    pub fn get(&self, alias: &str) -> Option<&AliasEntry> {
        self.entries.get(alias)
    }

    /// Returns every alias entry, ordered by alias.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &AliasEntry)> {
        self.entries.iter().map(|(alias, entry)| (alias.as_str(), entry))
    }

    /// Returns the matcher over all registered aliases.
    pub fn matcher(&self) -> &ClassMatcher {
        &self.matcher
    }

    /// Returns the generated theme colors: `<alias>` and `<alias>A` step maps,
    /// leaving out those without steps.
    pub fn theme_colors(&self) -> ThemeColors {
        let mut colors = ThemeColors::new();
        for (alias, entry) in self.entries() {
            if !entry.plain.is_empty() {
                colors.insert(alias.to_string(), ThemeColor::Shades(entry.plain.clone()));
            }
            if !entry.alpha.is_empty() {
                colors.insert(
                    format!("{}{}", alias, ALPHA_MARKER),
                    ThemeColor::Shades(entry.alpha.clone()),
                );
            }
        }
        colors
    }
}

/// Maps each step key present in `scale` to the alias's variable reference.
fn step_mapping(
    source: &dyn ColorSource,
    scale: &str,
    prefix: &str,
    alias: &str,
    alpha: bool,
) -> BTreeMap<u8, String> {
    source
        .step_keys(scale)
        .into_iter()
        .filter_map(|key| trailing_number(key).and_then(|n| u8::try_from(n).ok()))
        .filter(|step| STEPS.contains(step))
        .map(|step| {
            let marker = if alpha { ALPHA_MARKER } else { "" };
            (step, format!("var({}{}{}{})", prefix, alias, marker, step))
        })
        .collect()
}
