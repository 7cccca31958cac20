// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout direction and the axis math that depends on it.

use kurbo::{Rect, Size};

/// Which axis accumulates the running offset.
///
/// The other axis has a fixed length, called the *side*: the container width
/// when scrolling vertically, its height when scrolling horizontally.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Sections and blocks stack along `y`; the side is the width.
    #[default]
    Vertical,
    /// Sections and blocks stack along `x`; the side is the height.
    Horizontal,
}

impl Direction {
    /// Returns `true` for [`Direction::Vertical`].
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }

    /// Picks the cross-axis length out of a container size.
    #[must_use]
    pub fn side_of(self, size: Size) -> f64 {
        match self {
            Self::Vertical => size.width,
            Self::Horizontal => size.height,
        }
    }

    /// Edge of `rect` closest to the layout origin, along the layout axis.
    #[must_use]
    pub fn leading_edge(self, rect: Rect) -> f64 {
        match self {
            Self::Vertical => rect.min_y(),
            Self::Horizontal => rect.min_x(),
        }
    }

    /// Edge of `rect` farthest from the layout origin, along the layout axis.
    #[must_use]
    pub fn trailing_edge(self, rect: Rect) -> f64 {
        match self {
            Self::Vertical => rect.max_y(),
            Self::Horizontal => rect.max_x(),
        }
    }

    /// Builds a rectangle covering `[start, end]` along the layout axis and
    /// `[0, side]` across it.
    #[must_use]
    pub fn span_rect(self, start: f64, end: f64, side: f64) -> Rect {
        match self {
            Self::Vertical => Rect::new(0.0, start, side, end),
            Self::Horizontal => Rect::new(start, 0.0, end, side),
        }
    }

    /// Maps a layout-axis length and a cross-axis length to a [`Size`].
    #[must_use]
    pub fn size(self, along: f64, across: f64) -> Size {
        match self {
            Self::Vertical => Size::new(across, along),
            Self::Horizontal => Size::new(along, across),
        }
    }
}
