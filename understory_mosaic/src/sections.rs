// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section classification and inter-section separators.
//!
//! A section is *non-empty* when it has items, or when it has a header or
//! footer that stays visible for empty sections. Only non-empty sections are
//! separated from one another; the first one never gets a leading separator.

use alloc::vec::Vec;

use crate::source::PatternSource;

/// Returns `true` when `section` should be visually represented.
pub fn is_section_non_empty<S: PatternSource + ?Sized>(
    source: &S,
    section: usize,
    rows: usize,
) -> bool {
    rows > 0
        || source
            .header(section)
            .is_some_and(|header| !header.hidden_when_empty())
        || source
            .footer(section)
            .is_some_and(|footer| !footer.hidden_when_empty())
}

/// The non-empty sections of a layout, in index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NonEmptySections {
    /// Nothing is visible.
    None,
    /// Exactly one visible section; there is nothing to separate.
    Single(usize),
    /// Two or more visible sections, ascending.
    Multiple(Vec<usize>),
}

impl NonEmptySections {
    /// Classifies every section of `dimension`.
    pub fn classify<S: PatternSource + ?Sized>(source: &S, dimension: &[usize]) -> Self {
        let mut sections: Vec<usize> = dimension
            .iter()
            .enumerate()
            .filter(|&(section, &rows)| is_section_non_empty(source, section, rows))
            .map(|(section, _)| section)
            .collect();
        match sections.len() {
            0 => Self::None,
            1 => Self::Single(sections.remove(0)),
            _ => Self::Multiple(sections),
        }
    }

    /// Returns `true` if `section` was classified as non-empty.
    #[must_use]
    pub fn contains(&self, section: usize) -> bool {
        match self {
            Self::None => false,
            Self::Single(only) => *only == section,
            Self::Multiple(sections) => sections.binary_search(&section).is_ok(),
        }
    }

    /// Number of non-empty sections.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Single(_) => 1,
            Self::Multiple(sections) => sections.len(),
        }
    }

    /// Returns `true` if no section is non-empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Space to insert before `section`, given the global between-sections
    /// separator.
    ///
    /// Returns `None` unless the separator is positive, at least two sections
    /// are non-empty, and `section` is non-empty but not the first of them.
    #[must_use]
    pub fn separator_before(&self, section: usize, separator: f64) -> Option<f64> {
        if separator <= 0.0 {
            return None;
        }
        match self {
            Self::Multiple(sections) => sections[1..]
                .binary_search(&section)
                .is_ok()
                .then_some(separator),
            Self::None | Self::Single(_) => None,
        }
    }
}
