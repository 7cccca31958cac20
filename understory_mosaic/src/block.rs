// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Blocks: the repeatable visual units a [`Pattern`](crate::Pattern) is made of.
//!
//! A block covers a fixed number of item frames. Given the running offset and
//! the side, it returns those frames in absolute layout coordinates, ordered
//! along the layout axis. Blocks must be pure: the builder may call them once
//! per repetition and expects the same answer for the same arguments.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;
use smallvec::SmallVec;

use crate::axis::Direction;

/// Frames produced by one [`Block`].
///
/// Blocks rarely hold more than a handful of frames, so they live inline.
pub type BlockFrames = SmallVec<[Rect; 8]>;

/// A repeatable unit of cell frames.
pub trait Block: Send + Sync {
    /// Number of item frames this block covers. Must be at least 1.
    fn frame_count(&self) -> usize;

    /// Computes this block's frames starting at `origin` along the layout axis,
    /// with `side` as the cross-axis length.
    ///
    /// The builder reads exactly [`frame_count`](Block::frame_count) frames;
    /// returning fewer is a configuration error.
    fn frames(&self, origin: f64, side: f64) -> BlockFrames;
}

/// A single frame spanning the whole side with a fixed length along the layout axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StripBlock {
    direction: Direction,
    length: f64,
}

impl StripBlock {
    /// Creates a strip of `length` along `direction`'s layout axis.
    #[must_use]
    pub fn new(direction: Direction, length: f64) -> Self {
        Self { direction, length }
    }

    /// Length of the strip along the layout axis.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }
}

impl Block for StripBlock {
    fn frame_count(&self) -> usize {
        1
    }

    fn frames(&self, origin: f64, side: f64) -> BlockFrames {
        let mut frames = BlockFrames::new();
        frames.push(self.direction.span_rect(origin, origin + self.length, side));
        frames
    }
}

/// Square-mosaic block described in unit space.
///
/// Each frame is a rectangle whose `x` coordinates are fractions of the cross
/// axis and whose `y` coordinates are fractions of the layout axis, both scaled
/// by the side. With a vertical direction and a side of 100, the unit frame
/// `(0.5, 0.0, 1.0, 0.5)` becomes `(50, origin, 100, origin + 50)`. Layout-axis
/// fractions may exceed 1 for blocks longer than they are wide.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitBlock {
    direction: Direction,
    frames: Vec<Rect>,
}

impl UnitBlock {
    /// Creates a block from unit-space frames, in layout order.
    #[must_use]
    pub fn new(direction: Direction, frames: impl IntoIterator<Item = Rect>) -> Self {
        Self {
            direction,
            frames: frames.into_iter().collect(),
        }
    }

    /// One row of `columns` equal squares across the side.
    ///
    /// `columns == 0` yields a block with no frames, which
    /// [`Pattern::new`](crate::Pattern::new) rejects.
    #[must_use]
    pub fn grid(direction: Direction, columns: usize) -> Self {
        let step = 1.0 / columns.max(1) as f64;
        let frames = (0..columns).map(|column| {
            let x0 = column as f64 * step;
            Rect::new(x0, 0.0, x0 + step, step)
        });
        Self::new(direction, frames)
    }

    /// The unit-space frames.
    #[must_use]
    pub fn unit_frames(&self) -> &[Rect] {
        &self.frames
    }

    fn place(&self, unit: Rect, origin: f64, side: f64) -> Rect {
        let across0 = unit.x0 * side;
        let across1 = unit.x1 * side;
        let along0 = origin + unit.y0 * side;
        let along1 = origin + unit.y1 * side;
        match self.direction {
            Direction::Vertical => Rect::new(across0, along0, across1, along1),
            Direction::Horizontal => Rect::new(along0, across0, along1, across1),
        }
    }
}

impl Block for UnitBlock {
    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn frames(&self, origin: f64, side: f64) -> BlockFrames {
        self.frames
            .iter()
            .map(|unit| self.place(*unit, origin, side))
            .collect()
    }
}

/// A block backed by a closure.
pub struct FnBlock<F> {
    frame_count: usize,
    frames: F,
}

impl<F> FnBlock<F>
where
    F: Fn(f64, f64) -> BlockFrames + Send + Sync,
{
    /// Creates a block that reports `frame_count` frames and computes them with `frames`.
    #[must_use]
    pub fn new(frame_count: usize, frames: F) -> Self {
        Self {
            frame_count,
            frames,
        }
    }
}

impl<F> fmt::Debug for FnBlock<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnBlock")
            .field("frame_count", &self.frame_count)
            .finish_non_exhaustive()
    }
}

impl<F> Block for FnBlock<F>
where
    F: Fn(f64, f64) -> BlockFrames + Send + Sync,
{
    fn frame_count(&self) -> usize {
        self.frame_count
    }

    fn frames(&self, origin: f64, side: f64) -> BlockFrames {
        (self.frames)(origin, side)
    }
}
