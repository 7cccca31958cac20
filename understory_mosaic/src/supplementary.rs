// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Supplementary regions: section headers, footers, and backgrounds.

use core::fmt;

use kurbo::Rect;

use crate::axis::Direction;

/// The closed set of non-cell regions a section can carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SupplementaryKind {
    /// Region placed before the section's cells.
    Header,
    /// Region placed after the section's cells.
    Footer,
    /// Region spanning the whole section, drawn behind everything else.
    Background,
}

impl SupplementaryKind {
    /// Stable element-kind name for hosts that key views by string.
    ///
    /// Only hosts need these; the layout itself works with the enum.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Header => "SquareMosaicLayoutSectionHeader",
            Self::Footer => "SquareMosaicLayoutSectionFooter",
            Self::Background => "SquareMosaicLayoutSectionBacker",
        }
    }

    /// Resolves an identifier produced by [`identifier`](Self::identifier).
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        [Self::Header, Self::Footer, Self::Background]
            .into_iter()
            .find(|kind| kind.identifier() == identifier)
    }

    /// Stacking order of attributes of this kind.
    #[must_use]
    pub const fn z_index(self) -> i32 {
        match self {
            Self::Header | Self::Footer => 1,
            Self::Background => -1,
        }
    }
}

/// A header or footer.
pub trait Supplementary: Send + Sync {
    /// Computes the region's frame at `origin` along the layout axis, with
    /// `side` as the cross-axis length.
    fn frame(&self, origin: f64, side: f64) -> Rect;

    /// Whether the region is suppressed when its section has no items.
    ///
    /// A region that stays visible keeps an otherwise empty section on screen.
    fn hidden_when_empty(&self) -> bool {
        true
    }
}

/// A full-side strip with a fixed length along the layout axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StripSupplementary {
    direction: Direction,
    length: f64,
    hidden_when_empty: bool,
}

impl StripSupplementary {
    /// Creates a strip that is hidden for empty sections.
    #[must_use]
    pub fn new(direction: Direction, length: f64) -> Self {
        Self {
            direction,
            length,
            hidden_when_empty: true,
        }
    }

    /// Sets whether the strip is hidden for empty sections.
    #[must_use]
    pub fn with_hidden_when_empty(mut self, hidden: bool) -> Self {
        self.hidden_when_empty = hidden;
        self
    }
}

impl Supplementary for StripSupplementary {
    fn frame(&self, origin: f64, side: f64) -> Rect {
        self.direction.span_rect(origin, origin + self.length, side)
    }

    fn hidden_when_empty(&self) -> bool {
        self.hidden_when_empty
    }
}

/// A supplementary region backed by a closure.
pub struct FnSupplementary<F> {
    frame: F,
    hidden_when_empty: bool,
}

impl<F> FnSupplementary<F>
where
    F: Fn(f64, f64) -> Rect + Send + Sync,
{
    /// Creates a region computed by `frame`, hidden for empty sections.
    #[must_use]
    pub fn new(frame: F) -> Self {
        Self {
            frame,
            hidden_when_empty: true,
        }
    }

    /// Sets whether the region is hidden for empty sections.
    #[must_use]
    pub fn with_hidden_when_empty(mut self, hidden: bool) -> Self {
        self.hidden_when_empty = hidden;
        self
    }
}

impl<F> fmt::Debug for FnSupplementary<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSupplementary")
            .field("hidden_when_empty", &self.hidden_when_empty)
            .finish_non_exhaustive()
    }
}

impl<F> Supplementary for FnSupplementary<F>
where
    F: Fn(f64, f64) -> Rect + Send + Sync,
{
    fn frame(&self, origin: f64, side: f64) -> Rect {
        (self.frame)(origin, side)
    }

    fn hidden_when_empty(&self) -> bool {
        self.hidden_when_empty
    }
}
