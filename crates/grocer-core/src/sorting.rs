//! Aisle ordering for the shopping list.
//!
//! Aisle labels are typed by hand ("2", "Aisle 10", "dairy"), so they are
//! compared in natural order: runs of digits compare by numeric value and
//! letters compare without regard to case. Items without an aisle go last.

use std::{cmp::Ordering, iter::Peekable, str::Chars};

use crate::models::Item;

/// A maximal run of either digits or non-digit characters.
#[derive(Debug)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(char),
}

struct Chunks<'a> {
    source: &'a str,
    offset: usize,
    chars: Peekable<Chars<'a>>,
}

impl<'a> Chunks<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            chars: source.chars().peekable(),
        }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.chars.next()?;
        let start = self.offset;
        self.offset += first.len_utf8();

        if !first.is_ascii_digit() {
            return Some(Chunk::Text(first));
        }

        while let Some(c) = self.chars.peek().copied() {
            if !c.is_ascii_digit() {
                break;
            }
            self.chars.next();
            self.offset += c.len_utf8();
        }
        Some(Chunk::Digits(&self.source[start..self.offset]))
    }
}

/// Compares two digit runs by magnitude without parsing, so arbitrarily long
/// runs never overflow.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Case-insensitive natural-order comparison of two labels.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use grocer_core::sorting::natural_cmp;
///
/// assert_eq!(natural_cmp("Aisle 2", "Aisle 10"), Ordering::Less);
/// assert_eq!(natural_cmp("dairy", "DAIRY"), Ordering::Equal);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);

    loop {
        let ordering = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Digits(x)), Some(Chunk::Digits(y))) => compare_digits(x, y),
            // Numbers order before any other character
            (Some(Chunk::Digits(_)), Some(Chunk::Text(_))) => Ordering::Less,
            (Some(Chunk::Text(_)), Some(Chunk::Digits(_))) => Ordering::Greater,
            (Some(Chunk::Text(x)), Some(Chunk::Text(y))) => fold_case(x).cmp(&fold_case(y)),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

/// Compares two optional aisle labels; absent or blank labels sort after
/// every present one.
pub fn compare_aisles(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.map(str::trim).filter(|s| !s.is_empty());
    let b = b.map(str::trim).filter(|s| !s.is_empty());
    match (a, b) {
        (Some(x), Some(y)) => natural_cmp(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort of items by aisle.
pub fn sort_by_aisle(items: &mut [Item]) {
    items.sort_by(|a, b| compare_aisles(a.aisle.as_deref(), b.aisle.as_deref()));
}
