// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.
//!
//! Everything that can go wrong is detected eagerly: pattern problems when a
//! [`Pattern`](crate::Pattern) is constructed, source and block problems while
//! [`build`](crate::build) runs. A [`LayoutResult`](crate::LayoutResult) that
//! was returned successfully is always internally consistent, and queries
//! against it never fail (absence is reported as `None`).

use thiserror::Error;

use crate::pattern::SeparatorPosition;

/// A [`Pattern`](crate::Pattern) that could never cover a section.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The block list is empty, so expansion could never produce a frame.
    #[error("pattern has no blocks")]
    NoBlocks,
    /// A block reports zero frames.
    #[error("block {index} reports zero frames")]
    EmptyBlock {
        /// Position of the offending block in the pattern.
        index: usize,
    },
    /// The repeating tail points past the end of the block list.
    #[error("tail index {tail} is out of range for {len} blocks")]
    TailOutOfRange {
        /// Requested tail index.
        tail: usize,
        /// Number of blocks in the pattern.
        len: usize,
    },
    /// A separator is NaN or infinite.
    #[error("{position:?} separator is not finite")]
    NonFiniteSeparator {
        /// Which of the pattern's separators was rejected.
        position: SeparatorPosition,
    },
}

/// Errors raised while building a [`LayoutResult`](crate::LayoutResult).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LayoutError {
    /// The cross-axis length is negative, NaN, or infinite.
    #[error("cross-axis length {0} must be finite and non-negative")]
    InvalidCrossAxisLength(f64),
    /// The source returned a NaN or infinite between-sections separator.
    #[error("separator between sections {0} is not finite")]
    NonFiniteSectionSeparator(f64),
    /// A block produced fewer frames than its declared frame count.
    #[error(
        "block {block} in section {section} produced {actual} frames but declares {expected}"
    )]
    MissingFrames {
        /// Section being laid out.
        section: usize,
        /// Position of the block in the expanded sequence.
        block: usize,
        /// Value of [`Block::frame_count`](crate::Block::frame_count).
        expected: usize,
        /// Number of frames the block actually returned.
        actual: usize,
    },
}
