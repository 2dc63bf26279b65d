//! Recognizes `<prefix>-<alias>-[a]<step>` class names.

use regex::Regex;

use crate::error::Result;

/// Outcome of matching one class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassMatch<'c> {
    Matched {
        /// Utility part before the alias, e.g. `bg` or `hover:text`.
        prefix: &'c str,
        /// Registered alias as written in the class, possibly ending in `A`.
        alias: &'c str,
        /// True when the step carried the lowercase `a` marker.
        alpha: bool,
        /// Step number, `1..=12`.
        step: u8,
    },
    Unmatched,
}

impl ClassMatch<'_> {
    pub fn is_matched(&self) -> bool {
        matches!(self, ClassMatch::Matched { .. })
    }
}

/// Class name matcher over a fixed set of aliases.
///
/// The utility prefix is matched greedily, so when several registered aliases
/// could end a class name the shortest one wins:
///
/// ```rust
/// use preset_radix::{ClassMatch, ClassMatcher};
///
/// let matcher = ClassMatcher::new(["brand", "brandA", "dark-brand"]).unwrap();
/// assert_eq!(
///     matcher.matches("text-dark-brand-a6"),
///     ClassMatch::Matched { prefix: "text-dark", alias: "brand", alpha: true, step: 6 },
/// );
/// assert_eq!(matcher.matches("bg-brand-13"), ClassMatch::Unmatched);
/// assert_eq!(matcher.matches("bg-brand-06"), ClassMatch::Unmatched);
/// ```
#[derive(Debug, Clone)]
pub struct ClassMatcher {
    aliases: Vec<String>,
    pattern: Option<Regex>,
}

impl ClassMatcher {
    /// Builds a matcher for `aliases`. An empty set matches nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::Pattern`](crate::PresetError::Pattern) if the
    /// combined pattern exceeds the regex size limit.
    pub fn new<I, S>(aliases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut aliases: Vec<String> = aliases.into_iter().map(Into::into).collect();
        aliases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        aliases.dedup();

        let pattern = if aliases.is_empty() {
            None
        } else {
            let alternation = aliases
                .iter()
                .map(|alias| regex::escape(alias))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(
                r"^(.+)-({})-(a)?([1-9]|1[0-2])$",
                alternation
            ))?)
        };

        Ok(Self { aliases, pattern })
    }

    /// Registered aliases, longest first.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Matches a single class name.
    pub fn matches<'c>(&self, class: &'c str) -> ClassMatch<'c> {
        let Some(captures) = self.pattern.as_ref().and_then(|p| p.captures(class)) else {
            return ClassMatch::Unmatched;
        };
        match (captures.get(1), captures.get(2), captures.get(4)) {
            (Some(prefix), Some(alias), Some(step)) => match step.as_str().parse() {
                Ok(step) => ClassMatch::Matched {
                    prefix: prefix.as_str(),
                    alias: alias.as_str(),
                    alpha: captures.get(3).is_some(),
                    step,
                },
                Err(_) => ClassMatch::Unmatched,
            },
            _ => ClassMatch::Unmatched,
        }
    }
}
