//! CSS variable declaration emission.
//!
//! Declarations are formatted as `<prefix><alias>[A]<step>: <literal>;` and
//! collected into three [`Bucket`]s, one per output block:
//!
//! - **light**: wrapped in the light selector (`:root` by default)
//! - **dark**: wrapped in the dark selector (`.dark` by default)
//! - **media**: wrapped in `@media (prefers-color-scheme: <mode>)`
//!
//! A declaration for a mode is routed to every bucket whose block renders that
//! mode, and to none when no block does. Each bucket is sorted with
//! [`natural_cmp`] on output, so insertion order never shows in the CSS.
//!
//! # Output Shape
//!
//! ```css
//! :root {
//!   --blue1: #fbfdff;
//!   --blueA1: #0080ff04;
//! }
//! .dark {
//!   --blue1: #0d1520;
//! }
//! @media (prefers-color-scheme: dark) {
//!   :root {
//!     --blue1: #0d1520;
//!   }
//! }
//! ```

mod bucket;
mod sort;

use log::debug;

use crate::colors::{is_overlay, step_key, ColorSource, ALPHA_MARKER, DARK_MARKER};
use crate::config::{ColorMode, Config, Preflights};

pub use bucket::Bucket;
pub use sort::{natural_cmp, sort_natural};

/// Steps every scale provides.
pub const STEPS: std::ops::RangeInclusive<u8> = 1..=12;

/// Selector used for the media block when the preferred selector is disabled.
pub const FALLBACK_SELECTOR: &str = ":root";

/// Output block a bucket feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Light,
    Dark,
    Media,
}

/// Body of a utility rule contributed by a preset.
///
/// The radix preset always returns an empty body: the color effect of a class
/// is expressed through the emitted variables and the theme color the host
/// resolves the class against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleBody {
    declarations: Vec<(String, String)>,
}

impl RuleBody {
    /// Creates an empty rule body.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds a `property: value` pair, returning `self` for chaining.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }

    /// Returns the `(property, value)` pairs.
    pub fn declarations(&self) -> &[(String, String)] {
        &self.declarations
    }

    /// Returns true if the body holds no declarations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// The three declaration buckets of one generation session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    light: Bucket,
    dark: Bucket,
    media: Bucket,
}

impl Declarations {
    /// Creates empty buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bucket feeding `target`.
    pub fn bucket(&self, target: Target) -> &Bucket {
        match target {
            Target::Light => &self.light,
            Target::Dark => &self.dark,
            Target::Media => &self.media,
        }
    }

    /// Returns true if no bucket holds a declaration.
    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty() && self.media.is_empty()
    }

    /// Routes a declaration for `mode` into the buckets whose blocks render it.
    pub fn push(&mut self, config: &Config, mode: ColorMode, declaration: String) {
        if !config.renders(mode) {
            return;
        }
        if config.selector(mode).is_some() {
            let bucket = match mode {
                ColorMode::Light => &mut self.light,
                ColorMode::Dark => &mut self.dark,
            };
            bucket.push(declaration.clone());
        }
        if config.media == Some(mode) {
            self.media.push(declaration);
        }
    }

    /// Serializes the non-empty blocks into CSS text.
    ///
    /// Returns an empty string when nothing was emitted.
    pub fn css(&self, config: &Config) -> String {
        let mut blocks = Vec::new();

        if let Some(selector) = config.light.as_deref() {
            if !self.light.is_empty() {
                blocks.push(render_block(selector, &self.light.sorted(), ""));
            }
        }
        if let Some(selector) = config.dark.as_deref() {
            if !self.dark.is_empty() {
                blocks.push(render_block(selector, &self.dark.sorted(), ""));
            }
        }
        if let Some(mode) = config.media {
            if !self.media.is_empty() {
                let selector = match mode {
                    ColorMode::Dark => config.light.as_deref(),
                    ColorMode::Light => config.dark.as_deref(),
                }
                .unwrap_or(FALLBACK_SELECTOR);
                blocks.push(format!(
                    "@media (prefers-color-scheme: {}) {{\n{}\n}}",
                    mode,
                    render_block(selector, &self.media.sorted(), "  ")
                ));
            }
        }

        blocks.join("\n")
    }
}

fn render_block(selector: &str, declarations: &[String], indent: &str) -> String {
    let mut block = format!("{}{} {{\n", indent, selector);
    for declaration in declarations {
        block.push_str(indent);
        block.push_str("  ");
        block.push_str(declaration);
        block.push('\n');
    }
    block.push_str(indent);
    block.push('}');
    block
}

/// Formats `<prefix><alias>[A]<step>: <literal>;`.
pub fn format_declaration(prefix: &str, alias: &str, alpha: bool, step: u8, literal: &str) -> String {
    format!(
        "{}{}{}{}: {};",
        prefix,
        alias,
        if alpha { ALPHA_MARKER } else { "" },
        step,
        literal
    )
}

/// Resolves literals and pushes declarations for one session.
///
/// Borrows the session's configuration, color source and buckets; the palette
/// builder uses it for eager aliases and the preset for every matched class.
pub struct Emitter<'a> {
    config: &'a Config,
    source: &'a dyn ColorSource,
    declarations: &'a mut Declarations,
}

impl<'a> Emitter<'a> {
    pub fn new(
        config: &'a Config,
        source: &'a dyn ColorSource,
        declarations: &'a mut Declarations,
    ) -> Self {
        Self {
            config,
            source,
            declarations,
        }
    }

    /// Emits every declaration of `alias` up front.
    ///
    /// Non-overlay scales yield plain-light, alpha-light, alpha-dark and
    /// plain-dark declarations per step. Overlay scales yield a single light
    /// alpha declaration per step, as their literal serves both modes.
    pub fn emit_eager(&mut self, alias: &str, scale: &str) {
        debug!("emitting all steps of '{}' ({}) up front", alias, scale);
        for step in STEPS {
            if is_overlay(scale) {
                self.push_literal(ColorMode::Light, alias, true, step, scale);
                continue;
            }
            let alpha_scale = format!("{}{}", scale, ALPHA_MARKER);
            let dark_scale = format!("{}{}", scale, DARK_MARKER);
            let dark_alpha_scale = format!("{}{}{}", scale, DARK_MARKER, ALPHA_MARKER);

            self.push_literal(ColorMode::Light, alias, false, step, scale);
            self.push_literal(ColorMode::Light, alias, true, step, &alpha_scale);
            self.push_literal(ColorMode::Dark, alias, true, step, &dark_alpha_scale);
            self.push_literal(ColorMode::Dark, alias, false, step, &dark_scale);
        }
    }

    /// Emits the declarations a matched class needs.
    ///
    /// `alias` is the captured alias, possibly ending in the alpha marker.
    /// Returns `None` when the class should fall through to other presets
    /// (unknown alias, missing literal), and an empty [`RuleBody`] otherwise.
    pub fn emit_match(&mut self, alias: &str, alpha: bool, step: u8) -> Option<RuleBody> {
        let (alias, alpha) = match alias.strip_suffix(ALPHA_MARKER) {
            Some(stripped) => (stripped, true),
            None => (alias, alpha),
        };

        let Some(scale) = self.config.palette.get(alias) else {
            debug!("ignoring '{}': not in palette", alias);
            return None;
        };
        let overlay = is_overlay(scale);
        let lookup = if alpha && !overlay {
            format!("{}{}", scale, ALPHA_MARKER)
        } else {
            scale.clone()
        };

        if self.config.preflights == Preflights::Disabled || self.config.preflights.is_eager(alias) {
            return Some(RuleBody::empty());
        }

        let key = step_key(&lookup, step);
        let Some(light) = self.source.color(&lookup, &key) else {
            debug!("ignoring '{}': no literal for {}", alias, key);
            return None;
        };
        let declaration = format_declaration(&self.config.prefix, alias, alpha, step, light);
        self.declarations
            .push(self.config, ColorMode::Light, declaration);

        if !overlay {
            let dark_scale = if alpha {
                format!("{}{}{}", scale, DARK_MARKER, ALPHA_MARKER)
            } else {
                format!("{}{}", scale, DARK_MARKER)
            };
            if let Some(dark) = self.source.color(&dark_scale, &key) {
                let declaration = format_declaration(&self.config.prefix, alias, alpha, step, dark);
                self.declarations
                    .push(self.config, ColorMode::Dark, declaration);
            }
        }

        Some(RuleBody::empty())
    }

    fn push_literal(&mut self, mode: ColorMode, alias: &str, alpha: bool, step: u8, scale: &str) {
        let key = step_key(scale, step);
        match self.source.color(scale, &key) {
            Some(literal) => {
                let declaration =
                    format_declaration(&self.config.prefix, alias, alpha, step, literal);
                self.declarations.push(self.config, mode, declaration);
            }
            None => debug!("no literal for {} in {}", key, scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::radix;
    use crate::config::PresetOptions;

    fn config(options: PresetOptions) -> Config {
        Config::normalize(&options.alias("brand", "blue").alias("overlay", "blackA"), &*radix())
    }

    #[test]
    fn test_format_declaration() {
        assert_eq!(
            format_declaration("--", "brand", false, 6, "#acd8fc"),
            "--brand6: #acd8fc;"
        );
        assert_eq!(
            format_declaration("--color-", "brand", true, 12, "#002359ee"),
            "--color-brandA12: #002359ee;"
        );
    }

    #[test]
    fn test_emit_match_plain() {
        let config = config(PresetOptions::new());
        let source = radix();
        let mut declarations = Declarations::new();

        let body = Emitter::new(&config, &*source, &mut declarations).emit_match("brand", false, 6);
        assert_eq!(body, Some(RuleBody::empty()));
        assert_eq!(declarations.bucket(Target::Light).entries(), ["--brand6: #acd8fc;"]);
        assert_eq!(declarations.bucket(Target::Dark).entries(), ["--brand6: #104d87;"]);
        assert!(declarations.bucket(Target::Media).is_empty());
    }

    #[test]
    fn test_emit_match_alpha_marker_on_alias() {
        let config = config(PresetOptions::new());
        let source = radix();
        let mut declarations = Declarations::new();

        Emitter::new(&config, &*source, &mut declarations).emit_match("brandA", false, 2);
        assert_eq!(
            declarations.bucket(Target::Light).entries(),
            ["--brandA2: #008cff0b;"]
        );
        assert_eq!(
            declarations.bucket(Target::Dark).entries(),
            ["--brandA2: #1166fb18;"]
        );
    }

    #[test]
    fn test_emit_match_overlay_has_no_dark() {
        let config = config(PresetOptions::new());
        let source = radix();
        let mut declarations = Declarations::new();

        Emitter::new(&config, &*source, &mut declarations).emit_match("overlay", true, 9);
        assert_eq!(
            declarations.bucket(Target::Light).entries(),
            ["--overlayA9: #000000b3;"]
        );
        assert!(declarations.bucket(Target::Dark).is_empty());
    }

    #[test]
    fn test_emit_match_unknown_alias_falls_through() {
        let config = config(PresetOptions::new());
        let source = radix();
        let mut declarations = Declarations::new();

        let body = Emitter::new(&config, &*source, &mut declarations).emit_match("nope", false, 3);
        assert_eq!(body, None);
        assert!(declarations.is_empty());
    }

    #[test]
    fn test_emit_match_skips_when_disabled_or_eager() {
        let source = radix();
        for preflights in [Preflights::Disabled, Preflights::only(["brand"]), Preflights::All] {
            let config = config(PresetOptions::new().preflights(preflights));
            let mut declarations = Declarations::new();
            let body =
                Emitter::new(&config, &*source, &mut declarations).emit_match("brand", true, 4);
            assert_eq!(body, Some(RuleBody::empty()));
            assert!(declarations.is_empty());
        }
    }

    #[test]
    fn test_emit_eager_non_overlay() {
        let config = config(PresetOptions::new());
        let source = radix();
        let mut declarations = Declarations::new();

        Emitter::new(&config, &*source, &mut declarations).emit_eager("brand", "blue");
        assert_eq!(declarations.bucket(Target::Light).len(), 24);
        assert_eq!(declarations.bucket(Target::Dark).len(), 24);
        assert!(declarations.bucket(Target::Light).contains("--brand1: #fbfdff;"));
        assert!(declarations.bucket(Target::Light).contains("--brandA1: #0080ff04;"));
        assert!(declarations.bucket(Target::Dark).contains("--brand1: #0d1520;"));
        assert!(declarations.bucket(Target::Dark).contains("--brandA1: #004df211;"));
    }

    #[test]
    fn test_emit_eager_overlay_light_only() {
        let config = config(PresetOptions::new());
        let source = radix();
        let mut declarations = Declarations::new();

        Emitter::new(&config, &*source, &mut declarations).emit_eager("overlay", "blackA");
        assert_eq!(declarations.bucket(Target::Light).len(), 12);
        assert!(declarations.bucket(Target::Light).contains("--overlayA1: #0000000d;"));
        assert!(declarations.bucket(Target::Dark).is_empty());
    }

    #[test]
    fn test_push_routes_by_config() {
        let config = config(PresetOptions::new().disable_dark().media(ColorMode::Dark));
        let mut declarations = Declarations::new();
        declarations.push(&config, ColorMode::Dark, "--a1: b;".to_string());
        declarations.push(&config, ColorMode::Light, "--a1: c;".to_string());

        assert!(declarations.bucket(Target::Dark).is_empty());
        assert_eq!(declarations.bucket(Target::Media).entries(), ["--a1: b;"]);
        assert_eq!(declarations.bucket(Target::Light).entries(), ["--a1: c;"]);
    }

    #[test]
    fn test_css_empty() {
        let config = config(PresetOptions::new());
        assert_eq!(Declarations::new().css(&config), "");
    }

    #[test]
    fn test_css_media_falls_back_to_root() {
        let config = config(
            PresetOptions::new()
                .disable_light()
                .dark(".night")
                .media(ColorMode::Dark),
        );
        let mut declarations = Declarations::new();
        declarations.push(&config, ColorMode::Dark, "--a1: b;".to_string());

        assert_eq!(
            declarations.css(&config),
            ".night {\n  --a1: b;\n}\n@media (prefers-color-scheme: dark) {\n  :root {\n    --a1: b;\n  }\n}"
        );
    }

    #[test]
    fn test_css_sorts_each_block() {
        let config = config(PresetOptions::new());
        let mut declarations = Declarations::new();
        declarations.push(&config, ColorMode::Light, "--brand10: x;".to_string());
        declarations.push(&config, ColorMode::Light, "--brand9: y;".to_string());

        assert_eq!(
            declarations.css(&config),
            ":root {\n  --brand9: y;\n  --brand10: x;\n}"
        );
    }

    #[test]
    fn test_rule_body_builder() {
        let body = RuleBody::empty().with("color", "var(--brand6)");
        assert!(!body.is_empty());
        assert_eq!(
            body.declarations(),
            [("color".to_string(), "var(--brand6)".to_string())]
        );
    }
}
