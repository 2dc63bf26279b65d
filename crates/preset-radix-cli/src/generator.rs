//! A small utility-CSS host driving [`Preset`]s.
//!
//! The generator scans arbitrary text (HTML, templates, source files) for class
//! candidates, offers each one to its presets, and writes:
//!
//! 1. the presets' preflight CSS, ordered by layer,
//! 2. one rule per color utility whose color resolves against the theme,
//!    sorted by class name.
//!
//! | Utility | Property |
//! |---------|----------|
//! | `bg` | `background-color` |
//! | `text` | `color` |
//! | `border` | `border-color` |
//! | `outline` | `outline-color` |
//! | `fill` | `fill` |
//! | `stroke` | `stroke` |
//! | `ring` | `--ring-color` |
//! | `decoration` | `text-decoration-color` |
//! | `accent` | `accent-color` |
//! | `caret` | `caret-color` |
//!
//! Colors resolve as `<name>-<step>` (`brand-6`), `<name>-a<step>` (`brand-a6`,
//! looked up under `brandA`), or a plain theme name (`current`).

use std::collections::{BTreeMap, HashSet};

use cssparser::serialize_identifier;
use log::debug;
use preset_radix::{Preset, RuleBody, ThemeColor, ThemeColors};

/// Color utilities and the property each one sets.
pub const COLOR_UTILITIES: &[(&str, &str)] = &[
    ("bg", "background-color"),
    ("text", "color"),
    ("border", "border-color"),
    ("outline", "outline-color"),
    ("fill", "fill"),
    ("stroke", "stroke"),
    ("ring", "--ring-color"),
    ("decoration", "text-decoration-color"),
    ("accent", "accent-color"),
    ("caret", "caret-color"),
];

/// Drives presets over class candidates found in text.
///
/// Presets keep their emitted declarations between [`Generator::generate`]
/// calls, so one generator corresponds to one build.
#[derive(Default)]
pub struct Generator {
    presets: Vec<Box<dyn Preset>>,
    theme: ThemeColors,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a preset and lets it extend the theme colors.
    pub fn preset(mut self, preset: impl Preset + 'static) -> Self {
        preset.extend_theme(&mut self.theme);
        self.presets.push(Box::new(preset));
        self
    }

    /// Current theme colors.
    pub fn theme(&self) -> &ThemeColors {
        &self.theme
    }

    /// Generates CSS for every class candidate found in `inputs`.
    pub fn generate<'a, I>(&mut self, inputs: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        let mut rules = BTreeMap::new();

        for input in inputs {
            for class in extract_candidates(input) {
                if !seen.insert(class) {
                    continue;
                }
                let body = self
                    .presets
                    .iter_mut()
                    .find_map(|preset| preset.resolve_class(class))
                    .unwrap_or_default();
                let body = match self.utility_body(class) {
                    Some(utility) => body.with(utility.0, utility.1),
                    None => body,
                };
                if !body.is_empty() {
                    rules.insert(class.to_string(), body);
                }
            }
        }
        debug!("generated {} utility rules", rules.len());

        let mut presets: Vec<&dyn Preset> = self.presets.iter().map(|p| p.as_ref()).collect();
        presets.sort_by_key(|preset| preset.layer().order);

        let mut blocks: Vec<String> = presets
            .into_iter()
            .map(|preset| preset.preflight_css())
            .filter(|css| !css.is_empty())
            .collect();
        blocks.extend(rules.iter().map(|(class, body)| render_rule(class, body)));
        blocks.join("\n")
    }

    /// Resolves `<utility>-<color>` against the theme.
    fn utility_body(&self, class: &str) -> Option<(&'static str, String)> {
        let (utility, color) = class.split_once('-')?;
        let property = COLOR_UTILITIES
            .iter()
            .find(|(name, _)| *name == utility)
            .map(|(_, property)| *property)?;
        resolve_color(&self.theme, color).map(|value| (property, value))
    }
}

/// Looks a color reference up in the theme.
pub fn resolve_color(theme: &ThemeColors, color: &str) -> Option<String> {
    if let Some((name, step)) = color.rsplit_once('-') {
        let (name, step) = match step.strip_prefix('a') {
            Some(step) => (format!("{}A", name), step),
            None => (name.to_string(), step),
        };
        if let Ok(step) = step.parse::<u8>() {
            return theme.get(&name)?.shade(step).map(str::to_string);
        }
    }
    match theme.get(color)? {
        ThemeColor::Plain(value) => Some(value.clone()),
        ThemeColor::Shades(_) => None,
    }
}

/// Splits text into class candidates.
pub fn extract_candidates(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '`' | '<' | '>' | '='))
        .filter(|token| !token.is_empty())
}

/// Escapes a class name for use in a selector.
pub fn escape_class(class: &str) -> String {
    let mut escaped = String::with_capacity(class.len());
    // Writing into a String never fails.
    let _ = serialize_identifier(class, &mut escaped);
    escaped
}

fn render_rule(class: &str, body: &RuleBody) -> String {
    let mut rule = format!(".{} {{\n", escape_class(class));
    for (property, value) in body.declarations() {
        rule.push_str(&format!("  {}: {};\n", property, value));
    }
    rule.push('}');
    rule
}
