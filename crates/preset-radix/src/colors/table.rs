//! Data-driven [`ColorSource`] implementation.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::{radix::SCALES, step_key, ColorSource};
use crate::error::{PresetError, Result};

static RADIX: Lazy<Arc<ColorTable>> = Lazy::new(|| Arc::new(ColorTable::from_scales(SCALES)));

/// Returns the bundled Radix color table.
///
/// The table is built once and shared; cloning the returned `Arc` is cheap.
pub fn radix() -> Arc<ColorTable> {
    Arc::clone(&RADIX)
}

/// A table of color scales: scale name → step key → literal.
///
/// # Example
///
/// ```rust
/// use preset_radix::colors::{ColorSource, ColorTable};
///
/// let table = ColorTable::from_json(r##"{
///     "brand": { "brand1": "#fff", "brand2": "#eee" },
///     "brandDark": { "brand1": "#000", "brand2": "#111" }
/// }"##).unwrap();
///
/// assert_eq!(table.color("brandDark", "brand2"), Some("#111"));
/// assert_eq!(table.step_keys("brand"), vec!["brand1", "brand2"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTable {
    scales: BTreeMap<String, BTreeMap<String, String>>,
}

impl ColorTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from scales given as twelve literals in step order.
    pub fn from_scales(scales: &[(&str, [&str; 12])]) -> Self {
        let mut table = Self::new();
        for (name, literals) in scales {
            for (index, literal) in literals.iter().enumerate() {
                table.insert(name, &step_key(name, index as u8 + 1), literal);
            }
        }
        table
    }

    /// Parses a table from JSON in the upstream export shape.
    ///
    /// ```json
    /// { "blue": { "blue1": "#fbfdff", ... }, "blueDark": { "blue1": "#0d1520", ... } }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::Source`] if the document is not a map of maps of
    /// strings, or holds no scales.
    pub fn from_json(json: &str) -> Result<Self> {
        let scales: BTreeMap<String, BTreeMap<String, String>> =
            serde_json::from_str(json).map_err(|e| PresetError::Source {
                path: None,
                message: e.to_string(),
            })?;
        let table = Self { scales };
        if table.is_empty() {
            return Err(PresetError::Source {
                path: None,
                message: "no color scales".to_string(),
            });
        }
        Ok(table)
    }

    /// Reads and parses a JSON table from disk.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::Io`] if the file cannot be read, or
    /// [`PresetError::Source`] (carrying the path) if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| PresetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|e| e.with_path(path))
    }

    /// Adds (or replaces) a single literal.
    pub fn insert(&mut self, scale: &str, key: &str, literal: &str) {
        self.scales
            .entry(scale.to_string())
            .or_default()
            .insert(key.to_string(), literal.to_string());
    }

    /// Returns the number of scales.
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Returns true if the table holds no scales.
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

impl ColorSource for ColorTable {
    fn scale_names(&self) -> Vec<&str> {
        self.scales.keys().map(String::as_str).collect()
    }

    fn color(&self, scale: &str, key: &str) -> Option<&str> {
        self.scales.get(scale)?.get(key).map(String::as_str)
    }

    fn step_keys(&self, scale: &str) -> Vec<&str> {
        let Some(entries) = self.scales.get(scale) else {
            return Vec::new();
        };
        let mut keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        keys.sort_by_key(|key| (trailing_number(key), *key));
        keys
    }
}

/// Parses the numeric suffix of a step key (`blueA12` → 12).
pub(crate) fn trailing_number(key: &str) -> Option<u32> {
    let digits = key.len() - key.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    key[key.len() - digits..].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix_has_all_families() {
        let table = radix();
        assert!(!table.is_empty());
        for scale in ["blue", "blueA", "blueDark", "blueDarkA", "blackA", "whiteA"] {
            assert!(table.has_scale(scale), "missing {}", scale);
            assert_eq!(table.step_keys(scale).len(), 12);
        }
        assert!(!table.has_scale("blackDarkA"));
    }

    #[test]
    fn test_radix_dark_scales_reuse_light_keys() {
        let table = radix();
        assert_eq!(table.color("blueDark", "blue1"), Some("#0d1520"));
        assert_eq!(table.color("blueDarkA", "blueA12"), Some("#c2e6ff"));
        assert_eq!(table.color("blueDark", "blueDark1"), None);
    }

    #[test]
    fn test_step_keys_numeric_order() {
        let table = radix();
        let keys = table.step_keys("blue");
        assert_eq!(keys.first(), Some(&"blue1"));
        assert_eq!(keys[8], "blue9");
        assert_eq!(keys[9], "blue10");
        assert_eq!(keys.last(), Some(&"blue12"));
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        let err = ColorTable::from_json(r##"{ "blue": ["#fff"] }"##).unwrap_err();
        assert!(matches!(err, PresetError::Source { .. }));
    }

    #[test]
    fn test_from_json_rejects_empty_table() {
        assert!(ColorTable::new().is_empty());
        let err = ColorTable::from_json("{}").unwrap_err();
        assert!(err.to_string().contains("no color scales"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = ColorTable::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, PresetError::Io { .. }));
    }

    #[test]
    fn test_from_file_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        std::fs::write(&path, r##"{ "ink": { "ink1": "#101010" } }"##).unwrap();

        let table = ColorTable::from_file(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.color("ink", "ink1"), Some("#101010"));
    }

    #[test]
    fn test_trailing_number() {
        assert_eq!(trailing_number("blue1"), Some(1));
        assert_eq!(trailing_number("blueA12"), Some(12));
        assert_eq!(trailing_number("blue"), None);
    }
}
