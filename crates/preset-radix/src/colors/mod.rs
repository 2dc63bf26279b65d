//! Color data consumed by the preset.
//!
//! The preset never computes colors. It relabels literals that come from a
//! [`ColorSource`]: a table of named scales, each mapping step keys such as
//! `blue6` to a literal color string.
//!
//! # Scale Families
//!
//! Every base scale `X` comes in four families:
//!
//! | Scale name | Step keys | Meaning |
//! |------------|-----------|---------|
//! | `X` | `X1`..`X12` | light, solid |
//! | `XA` | `XA1`..`XA12` | light, alpha |
//! | `XDark` | `X1`..`X12` | dark, solid |
//! | `XDarkA` | `XA1`..`XA12` | dark, alpha |
//!
//! Dark scales reuse the light step keys: the `Dark` marker only appears in the
//! scale name. Two overlay scales, `blackA` and `whiteA`, exist in alpha form
//! only and have no dark family.
//!
//! # Sources
//!
//! - [`radix`]: the bundled table, every Radix scale and both overlays
//! - [`ColorTable::from_json`]: the upstream export shape, for other tables
//!
//! ```rust
//! use preset_radix::colors::{radix, ColorSource};
//!
//! let source = radix();
//! assert_eq!(source.color("blue", "blue9"), Some("#0090ff"));
//! assert_eq!(source.color("blueDark", "blue12"), Some("#c2e6ff"));
//! ```

mod radix;
mod table;

pub use table::{radix, ColorTable};
pub(crate) use table::trailing_number;

/// Marker appended to a scale name for its dark family.
pub const DARK_MARKER: &str = "Dark";

/// Marker appended to a scale name (and alias) for its alpha family.
pub const ALPHA_MARKER: &str = "A";

/// Scales that only exist in alpha form and have no dark family.
pub const OVERLAY_SCALES: &[&str] = &["whiteA", "blackA"];

/// Read-only access to a table of color scales.
///
/// Implementations must be cheap to query; the preset looks up literals once
/// per matched class.
pub trait ColorSource {
    /// Returns every scale name in the source, in a stable order.
    fn scale_names(&self) -> Vec<&str>;

    /// Returns the literal for `key` in `scale`, if both exist.
    fn color(&self, scale: &str, key: &str) -> Option<&str>;

    /// Returns the step keys of `scale` (e.g. `blue1`..`blue12`), in step order.
    fn step_keys(&self, scale: &str) -> Vec<&str>;

    /// Returns true if the source knows `scale`.
    fn has_scale(&self, scale: &str) -> bool {
        !self.step_keys(scale).is_empty()
    }

    /// Returns every base scale name: those naming neither a dark nor an alpha family.
    fn base_scale_names(&self) -> Vec<&str> {
        self.scale_names()
            .into_iter()
            .filter(|name| is_base_scale(name))
            .collect()
    }
}

/// Returns true for the fixed overlay scales (`whiteA`, `blackA`).
pub fn is_overlay(scale: &str) -> bool {
    OVERLAY_SCALES.contains(&scale)
}

/// Returns true if `scale` names neither a dark nor an alpha family.
pub fn is_base_scale(scale: &str) -> bool {
    !scale.contains(DARK_MARKER) && !scale.contains(ALPHA_MARKER)
}

/// Returns the step key a scale uses for `step`: `blueDarkA` + 6 gives `blueA6`.
pub fn step_key(scale: &str, step: u8) -> String {
    format!("{}{}", scale.replace(DARK_MARKER, ""), step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_overlay_closed_list() {
        assert!(is_overlay("blackA"));
        assert!(is_overlay("whiteA"));
        assert!(!is_overlay("blueA"));
        assert!(!is_overlay("black"));
    }

    #[test]
    fn test_is_base_scale() {
        assert!(is_base_scale("blue"));
        assert!(!is_base_scale("blueA"));
        assert!(!is_base_scale("blueDark"));
        assert!(!is_base_scale("blueDarkA"));
        assert!(!is_base_scale("blackA"));
    }

    #[test]
    fn test_step_key_strips_dark_marker() {
        assert_eq!(step_key("blue", 1), "blue1");
        assert_eq!(step_key("blueA", 12), "blueA12");
        assert_eq!(step_key("blueDark", 6), "blue6");
        assert_eq!(step_key("blueDarkA", 6), "blueA6");
        assert_eq!(step_key("blackA", 3), "blackA3");
    }

    #[test]
    fn test_base_scale_names_excludes_families() {
        let source = radix();
        let names = source.base_scale_names();
        assert!(names.contains(&"blue"));
        assert!(names.contains(&"slate"));
        assert!(!names.contains(&"blueA"));
        assert!(!names.contains(&"blueDark"));
        assert!(!names.contains(&"blackA"));
    }
}
