//! The preset object a utility-CSS host drives.
//!
//! A host holds one or more [`Preset`]s. For each generation pass it:
//!
//! 1. lets every preset extend the theme colors ([`Preset::extend_theme`]),
//! 2. offers every candidate class name to the presets in order
//!    ([`Preset::resolve_class`]); `None` falls through to the next preset,
//! 3. collects preflight CSS ([`Preset::preflight_css`]) into the preset's
//!    [`Layer`], before the utility rules.
//!
//! [`RadixPreset`] is one session: it owns its normalized configuration, its
//! palette and its declaration buckets. Two instances never share emitted
//! declarations, even when built from the same options.

use std::sync::Arc;

use log::debug;

use crate::colors::{radix, ColorSource};
use crate::config::{Config, PresetOptions};
use crate::emit::{Declarations, Emitter, RuleBody};
use crate::error::Result;
use crate::palette::{ClassMatch, Palette, ThemeColor, ThemeColors};

/// Name the radix preset registers under.
pub const PRESET_NAME: &str = "preset-radix";

/// Output layer of the radix preflight CSS.
pub const RADIX_LAYER: Layer = Layer {
    name: "radix",
    order: -1,
};

/// Keyword colors kept when the generated colors replace the host theme.
pub const KEYWORD_COLORS: &[(&str, &str)] = &[
    ("white", "white"),
    ("black", "black"),
    ("transparent", "transparent"),
    ("current", "currentColor"),
    ("inherit", "inherit"),
];

/// A named output layer; lower orders come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layer {
    pub name: &'static str,
    pub order: i32,
}

/// Contract between a utility-CSS host and a preset.
pub trait Preset {
    /// Unique preset name.
    fn name(&self) -> &str;

    /// Layer the preflight CSS belongs to.
    fn layer(&self) -> Layer;

    /// Adds this preset's colors to the host theme colors.
    fn extend_theme(&self, colors: &mut ThemeColors);

    /// Offers a class name to the preset.
    ///
    /// Returns `None` if the preset does not handle the class, or the rule
    /// body it contributes (possibly empty) if it does.
    fn resolve_class(&mut self, class: &str) -> Option<RuleBody>;

    /// Returns the CSS emitted ahead of all utility rules.
    fn preflight_css(&self) -> String;
}

/// Radix colors exposed as CSS custom properties.
///
/// # Example
///
/// ```rust
/// use preset_radix::{Preset, PresetOptions, RadixPreset};
///
/// let mut preset = RadixPreset::new(&PresetOptions::new().alias("brand", "blue")).unwrap();
/// assert!(preset.resolve_class("bg-brand-9").is_some());
/// assert!(preset.resolve_class("bg-other-9").is_none());
///
/// assert_eq!(
///     preset.preflight_css(),
///     ":root {\n  --brand9: #0090ff;\n}\n.dark {\n  --brand9: #0090ff;\n}"
/// );
/// ```
pub struct RadixPreset {
    config: Config,
    source: Arc<dyn ColorSource + Send + Sync>,
    palette: Palette,
    declarations: Declarations,
}

impl RadixPreset {
    /// Builds a preset over the bundled Radix color table.
    ///
    /// # Errors
    ///
    /// See [`Palette::build`].
    pub fn new(options: &PresetOptions) -> Result<Self> {
        Self::with_source(options, radix())
    }

    /// Builds a preset over a custom color source.
    pub fn with_source(
        options: &PresetOptions,
        source: Arc<dyn ColorSource + Send + Sync>,
    ) -> Result<Self> {
        let mut config = Config::normalize(options, &*source);
        let mut declarations = Declarations::new();
        let palette = Palette::build(&mut config, &*source, &mut declarations)?;
        Ok(Self {
            config,
            source,
            palette,
            declarations,
        })
    }

    /// The normalized configuration, with invalid palette entries pruned.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Declarations emitted so far in this session.
    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    /// The generated theme colors, without any host colors merged in.
    pub fn theme_colors(&self) -> ThemeColors {
        self.palette.theme_colors()
    }
}

impl Preset for RadixPreset {
    fn name(&self) -> &str {
        PRESET_NAME
    }

    fn layer(&self) -> Layer {
        RADIX_LAYER
    }

    fn extend_theme(&self, colors: &mut ThemeColors) {
        let generated = self.theme_colors();
        if self.config.extends {
            colors.extend(generated);
        } else {
            *colors = generated;
            for (name, value) in KEYWORD_COLORS {
                colors.insert(name.to_string(), ThemeColor::Plain(value.to_string()));
            }
        }
    }

    fn resolve_class(&mut self, class: &str) -> Option<RuleBody> {
        match self.palette.matcher().matches(class) {
            ClassMatch::Matched {
                alias, alpha, step, ..
            } => {
                debug!("'{}' matched alias '{}' step {}", class, alias, step);
                Emitter::new(&self.config, &*self.source, &mut self.declarations)
                    .emit_match(alias, alpha, step)
            }
            ClassMatch::Unmatched => None,
        }
    }

    fn preflight_css(&self) -> String {
        self.declarations.css(&self.config)
    }
}

impl std::fmt::Debug for RadixPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadixPreset")
            .field("config", &self.config)
            .field("palette", &self.palette)
            .field("declarations", &self.declarations)
            .finish_non_exhaustive()
    }
}
