// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::axis::Direction;
use crate::error::LayoutError;

/// Global settings for one layout pass.
///
/// The cross-axis length is the container's non-scrolling dimension: its
/// width for [`Direction::Vertical`], its height for [`Direction::Horizontal`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    direction: Direction,
    cross_axis_length: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(Direction::Vertical, 0.0)
    }
}

impl LayoutConfig {
    /// Creates a configuration from a direction and a cross-axis length.
    #[must_use]
    pub const fn new(direction: Direction, cross_axis_length: f64) -> Self {
        Self {
            direction,
            cross_axis_length,
        }
    }

    /// Vertical scrolling inside a container `width` wide.
    #[must_use]
    pub const fn vertical(width: f64) -> Self {
        Self::new(Direction::Vertical, width)
    }

    /// Horizontal scrolling inside a container `height` tall.
    #[must_use]
    pub const fn horizontal(height: f64) -> Self {
        Self::new(Direction::Horizontal, height)
    }

    /// Picks the cross-axis length out of the container's size.
    #[must_use]
    pub fn from_size(direction: Direction, size: Size) -> Self {
        Self::new(direction, direction.side_of(size))
    }

    /// The layout direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Sets the layout direction.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// The fixed cross-axis length.
    #[must_use]
    pub const fn cross_axis_length(&self) -> f64 {
        self.cross_axis_length
    }

    /// Sets the fixed cross-axis length.
    pub fn set_cross_axis_length(&mut self, length: f64) {
        self.cross_axis_length = length;
    }

    /// Rejects a negative, NaN, or infinite cross-axis length.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.cross_axis_length.is_finite() && self.cross_axis_length >= 0.0 {
            Ok(())
        } else {
            Err(LayoutError::InvalidCrossAxisLength(self.cross_axis_length))
        }
    }
}
