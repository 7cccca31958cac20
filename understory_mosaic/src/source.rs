// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where the builder gets per-section patterns and decorations from.

use alloc::sync::Arc;

use hashbrown::{HashMap, HashSet};

use crate::pattern::Pattern;
use crate::supplementary::Supplementary;

/// Per-section layout inputs supplied by the host.
///
/// Only [`pattern`](Self::pattern) is required. Every other method has a
/// default that turns its feature off: no header, no footer, no background,
/// no space between sections.
///
/// Implementations must be pure. The builder may ask for the same section
/// more than once in a single pass.
pub trait PatternSource {
    /// The pattern that tiles `section`.
    fn pattern(&self, section: usize) -> Pattern;

    /// The header for `section`, if any.
    fn header(&self, section: usize) -> Option<Arc<dyn Supplementary>> {
        let _ = section;
        None
    }

    /// The footer for `section`, if any.
    fn footer(&self, section: usize) -> Option<Arc<dyn Supplementary>> {
        let _ = section;
        None
    }

    /// Whether `section` gets a background region behind its content.
    fn background_enabled(&self, section: usize) -> bool {
        let _ = section;
        false
    }

    /// Space inserted between consecutive non-empty sections.
    ///
    /// Values `<= 0` disable the separator.
    fn separator_between_sections(&self) -> f64 {
        0.0
    }
}

impl<S: PatternSource + ?Sized> PatternSource for &S {
    fn pattern(&self, section: usize) -> Pattern {
        (**self).pattern(section)
    }

    fn header(&self, section: usize) -> Option<Arc<dyn Supplementary>> {
        (**self).header(section)
    }

    fn footer(&self, section: usize) -> Option<Arc<dyn Supplementary>> {
        (**self).footer(section)
    }

    fn background_enabled(&self, section: usize) -> bool {
        (**self).background_enabled(section)
    }

    fn separator_between_sections(&self) -> f64 {
        (**self).separator_between_sections()
    }
}

/// A [`PatternSource`] built from fixed values.
///
/// Every section uses the default pattern unless overridden. Headers, footers,
/// and backgrounds are opt-in per section.
///
/// ```rust
/// use std::sync::Arc;
///
/// use understory_mosaic::{Direction, Pattern, StaticSource, StripBlock, StripSupplementary};
///
/// let row = Pattern::repeating(Arc::new(StripBlock::new(Direction::Vertical, 44.0))).unwrap();
/// let source = StaticSource::new(row)
///     .with_section_separator(16.0)
///     .with_header(0, Arc::new(StripSupplementary::new(Direction::Vertical, 28.0)))
///     .with_background(0, true);
/// # let _ = source;
/// ```
#[derive(Clone)]
pub struct StaticSource {
    default_pattern: Pattern,
    patterns: HashMap<usize, Pattern>,
    headers: HashMap<usize, Arc<dyn Supplementary>>,
    footers: HashMap<usize, Arc<dyn Supplementary>>,
    backgrounds: HashSet<usize>,
    section_separator: f64,
}

impl core::fmt::Debug for StaticSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StaticSource")
            .field("default_pattern", &self.default_pattern)
            .field("patterns", &self.patterns.len())
            .field("headers", &self.headers.len())
            .field("footers", &self.footers.len())
            .field("backgrounds", &self.backgrounds)
            .field("section_separator", &self.section_separator)
            .finish()
    }
}

impl StaticSource {
    /// Creates a source where every section uses `default_pattern`.
    #[must_use]
    pub fn new(default_pattern: Pattern) -> Self {
        Self {
            default_pattern,
            patterns: HashMap::new(),
            headers: HashMap::new(),
            footers: HashMap::new(),
            backgrounds: HashSet::new(),
            section_separator: 0.0,
        }
    }

    /// Sets the space between consecutive non-empty sections.
    #[must_use]
    pub fn with_section_separator(mut self, separator: f64) -> Self {
        self.section_separator = separator;
        self
    }

    /// Overrides the pattern of one section.
    #[must_use]
    pub fn with_pattern(mut self, section: usize, pattern: Pattern) -> Self {
        self.patterns.insert(section, pattern);
        self
    }

    /// Attaches a header to one section.
    #[must_use]
    pub fn with_header(mut self, section: usize, header: Arc<dyn Supplementary>) -> Self {
        self.headers.insert(section, header);
        self
    }

    /// Attaches a footer to one section.
    #[must_use]
    pub fn with_footer(mut self, section: usize, footer: Arc<dyn Supplementary>) -> Self {
        self.footers.insert(section, footer);
        self
    }

    /// Turns the background of one section on or off.
    #[must_use]
    pub fn with_background(mut self, section: usize, enabled: bool) -> Self {
        if enabled {
            self.backgrounds.insert(section);
        } else {
            self.backgrounds.remove(&section);
        }
        self
    }
}

impl PatternSource for StaticSource {
    fn pattern(&self, section: usize) -> Pattern {
        self.patterns
            .get(&section)
            .unwrap_or(&self.default_pattern)
            .clone()
    }

    fn header(&self, section: usize) -> Option<Arc<dyn Supplementary>> {
        self.headers.get(&section).cloned()
    }

    fn footer(&self, section: usize) -> Option<Arc<dyn Supplementary>> {
        self.footers.get(&section).cloned()
    }

    fn background_enabled(&self, section: usize) -> bool {
        self.backgrounds.contains(&section)
    }

    fn separator_between_sections(&self) -> f64 {
        self.section_separator
    }
}
