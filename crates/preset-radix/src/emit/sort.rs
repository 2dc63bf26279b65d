//! Numeric-aware ordering for declaration strings.
//!
//! Approximates a locale collation with numeric collation enabled: runs of
//! digits compare by value, letters compare case-insensitively first, and
//! punctuation sorts before digits, which sort before letters.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compares two strings in natural order.
///
/// ```rust
/// use std::cmp::Ordering;
/// use preset_radix::emit::natural_cmp;
///
/// assert_eq!(natural_cmp("--blue9: #0090ff;", "--blue10: #0588f0;"), Ordering::Less);
/// assert_eq!(natural_cmp("--blue12: #113264;", "--blueA1: #0080ff04;"), Ordering::Less);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    primary_cmp(a, b)
        .then_with(|| case_cmp(a, b))
        .then_with(|| a.cmp(b))
}

/// Sorts declarations in place using [`natural_cmp`].
pub fn sort_natural(items: &mut [String]) {
    items.sort_by(|a, b| natural_cmp(a, b));
}

fn primary_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let ordering = digits_cmp(&take_digits(&mut left), &take_digits(&mut right));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(l), Some(r)) => {
                let ordering = char_key(l).cmp(&char_key(r));
                if ordering != Ordering::Equal {
                    return ordering;
                }
                left.next();
                right.next();
            }
        }
    }
}

/// Lowercase sorts before uppercase at the first letter whose case differs.
///
/// Only letters take part: strings that compare equal so far hold the same
/// letters in the same order, while digit runs may differ in length.
fn case_cmp(a: &str, b: &str) -> Ordering {
    let letters = |s: &'_ str| {
        s.chars()
            .filter(|c| c.is_alphabetic())
            .map(char::is_uppercase)
            .collect::<Vec<_>>()
    };
    letters(a).cmp(&letters(b))
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        digits.push(c);
    }
    digits
}

fn digits_cmp(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn char_key(c: char) -> (u8, char) {
    let class = if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    };
    (class, c.to_lowercase().next().unwrap_or(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_by_value() {
        assert_eq!(natural_cmp("a2", "a10"), Ordering::Less);
        assert_eq!(natural_cmp("a10", "a9"), Ordering::Greater);
        assert_eq!(natural_cmp("a007", "a7"), Ordering::Less);
    }

    #[test]
    fn test_case_tie_break_ignores_length() {
        assert_eq!(natural_cmp("a07", "a7"), Ordering::Less);
        assert_eq!(natural_cmp("a7", "a07"), Ordering::Greater);
        assert_eq!(natural_cmp("x01b", "x1B"), Ordering::Less);
        assert_eq!(natural_cmp("x1B", "x01b"), Ordering::Greater);
    }

    #[test]
    fn test_case_insensitive_first() {
        assert_eq!(natural_cmp("Blue", "apple"), Ordering::Greater);
        assert_eq!(natural_cmp("blue", "Blue"), Ordering::Less);
    }

    #[test]
    fn test_digits_before_letters() {
        assert_eq!(natural_cmp("--blue1: x;", "--blueA1: x;"), Ordering::Less);
    }

    #[test]
    fn test_sort_natural_declarations() {
        let mut items: Vec<String> = [
            "--blue10: #0588f0;",
            "--blueA2: #008cff0b;",
            "--blue2: #f4faff;",
            "--blue1: #fbfdff;",
            "--blue9: #0090ff;",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        sort_natural(&mut items);
        assert_eq!(
            items,
            vec![
                "--blue1: #fbfdff;",
                "--blue2: #f4faff;",
                "--blue9: #0090ff;",
                "--blue10: #0588f0;",
                "--blueA2: #008cff0b;",
            ]
        );
    }

    #[test]
    fn test_equal_strings() {
        assert_eq!(natural_cmp("--a1: b;", "--a1: b;"), Ordering::Equal);
    }
}
