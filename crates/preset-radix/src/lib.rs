//! preset-radix - Radix color scales as CSS custom properties.
//!
//! The preset lets utility classes such as `bg-brand-6` or `text-neutral-a11`
//! refer to Radix color steps through user-chosen aliases. It contributes:
//!
//! - theme colors mapping each alias and step to a CSS variable reference
//!   (`brand.6 → var(--brand6)`),
//! - a matcher recognizing `<utility>-<alias>-[a]<step>` class names,
//! - preflight CSS declaring only the variables actually used, for light mode,
//!   dark mode and optionally a `prefers-color-scheme` media block.
//!
//! # Quick Start
//!
//! ```rust
//! use preset_radix::{Preset, PresetOptions, RadixPreset, ThemeColors};
//!
//! let options = PresetOptions::new()
//!     .alias("brand", "blue")
//!     .alias("overlay", "blackA");
//! let mut preset = RadixPreset::new(&options).unwrap();
//!
//! let mut colors = ThemeColors::new();
//! preset.extend_theme(&mut colors);
//! assert_eq!(colors["brand"].shade(6), Some("var(--brand6)"));
//!
//! preset.resolve_class("bg-brand-6");
//! preset.resolve_class("text-overlay-a9");
//!
//! assert_eq!(
//!     preset.preflight_css(),
//!     ":root {\n  --brand6: #acd8fc;\n  --overlayA9: #000000b3;\n}\n.dark {\n  --brand6: #104d87;\n}"
//! );
//! ```
//!
//! # Options
//!
//! Options are written in YAML or JSON (see [`PresetOptions::from_yaml`]) or
//! built in code. Malformed values never fail generation: [`Config::normalize`]
//! replaces them with defaults.
//!
//! ```yaml
//! palette:
//!   brand: blue
//!   neutral: slate
//!   overlay: blackA
//! prefix: color        # variables become --color-brand6
//! extends: true        # merge into host theme colors
//! light: ":root"       # or false
//! dark: ".dark"        # or false
//! media: dark          # or light, or false
//! preflights: [brand]  # true, false, "*", or a list of eager aliases
//! ```
//!
//! # Modules
//!
//! - [`colors`]: the [`ColorSource`](colors::ColorSource) trait and the bundled table
//! - [`config`]: options and normalization
//! - [`palette`]: theme colors and the class matcher
//! - [`emit`]: declaration buckets and CSS serialization

pub mod colors;
pub mod config;
pub mod emit;
mod error;
pub mod palette;
mod preset;

pub use config::{ColorMode, Config, Preflights, PresetOptions};
pub use emit::RuleBody;
pub use error::{PresetError, Result};
pub use palette::{ClassMatch, ClassMatcher, ThemeColor, ThemeColors};
pub use preset::{Layer, Preset, RadixPreset, KEYWORD_COLORS, PRESET_NAME, RADIX_LAYER};
