// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Patterns: the per-section block sequence and its separators.
//!
//! A [`Pattern`] lists the [`Block`]s that tile one section, in order. When a
//! section holds more items than the list covers, the pattern is expanded:
//!
//! - if a *tail* block is designated, the blocks before it are laid out once
//!   and the tail repeats until the items are covered (anything after the tail
//!   is never used);
//! - otherwise the whole list repeats.
//!
//! Patterns are validated on construction so that expansion always terminates:
//! every block covers at least one frame.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::block::Block;
use crate::error::PatternError;

/// Identifies one of a pattern's three separators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SeparatorPosition {
    /// Space before the first block, only when the section has items.
    Before,
    /// Space between consecutive placed blocks.
    Between,
    /// Space after the last block, only when the section has items.
    After,
}

/// Separator amounts applied around and between a section's blocks.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BlockSeparators {
    /// Space before the first block.
    pub before: f64,
    /// Space between consecutive blocks.
    pub between: f64,
    /// Space after the last block.
    pub after: f64,
}

impl BlockSeparators {
    /// Creates separators from explicit amounts.
    #[must_use]
    pub const fn new(before: f64, between: f64, after: f64) -> Self {
        Self {
            before,
            between,
            after,
        }
    }

    /// The same amount in all three positions.
    #[must_use]
    pub const fn uniform(amount: f64) -> Self {
        Self::new(amount, amount, amount)
    }

    /// Returns the amount at `position`.
    #[must_use]
    pub const fn get(&self, position: SeparatorPosition) -> f64 {
        match position {
            SeparatorPosition::Before => self.before,
            SeparatorPosition::Between => self.between,
            SeparatorPosition::After => self.after,
        }
    }

    fn validate(&self) -> Result<(), PatternError> {
        [
            SeparatorPosition::Before,
            SeparatorPosition::Between,
            SeparatorPosition::After,
        ]
        .into_iter()
        .find(|position| !self.get(*position).is_finite())
        .map_or(Ok(()), |position| {
            Err(PatternError::NonFiniteSeparator { position })
        })
    }
}

/// A validated block sequence for one section.
///
/// Cloning is cheap: blocks are shared.
#[derive(Clone)]
pub struct Pattern {
    blocks: Vec<Arc<dyn Block>>,
    tail: Option<usize>,
    separators: BlockSeparators,
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame_counts: Vec<usize> = self.blocks.iter().map(|b| b.frame_count()).collect();
        f.debug_struct("Pattern")
            .field("frame_counts", &frame_counts)
            .field("tail", &self.tail)
            .field("separators", &self.separators)
            .finish_non_exhaustive()
    }
}

impl Pattern {
    /// Creates a pattern that repeats `blocks` as a whole, with no separators.
    pub fn new(blocks: impl IntoIterator<Item = Arc<dyn Block>>) -> Result<Self, PatternError> {
        blocks
            .into_iter()
            .fold(Self::builder(), PatternBuilder::block)
            .build()
    }

    /// Creates a pattern made of a single block that repeats forever.
    pub fn repeating(block: Arc<dyn Block>) -> Result<Self, PatternError> {
        Self::builder().block(block).tail(0).build()
    }

    /// Starts a pattern with the builder API.
    #[must_use]
    pub fn builder() -> PatternBuilder {
        PatternBuilder::default()
    }

    /// The blocks, in declaration order.
    #[must_use]
    pub fn blocks(&self) -> &[Arc<dyn Block>] {
        &self.blocks
    }

    /// Index of the repeating tail block, if any.
    #[must_use]
    pub fn tail(&self) -> Option<usize> {
        self.tail
    }

    /// The pattern's separators.
    #[must_use]
    pub fn separators(&self) -> BlockSeparators {
        self.separators
    }

    /// Returns the separator amount at `position`.
    #[must_use]
    pub fn separator(&self, position: SeparatorPosition) -> f64 {
        self.separators.get(position)
    }

    /// Expands the block list until it covers at least `required` frames.
    ///
    /// The result may cover more than `required`; callers stop consuming
    /// frames once they have what they need. Without a tail, the whole list is
    /// emitted at least once even when `required` is zero.
    #[must_use]
    pub fn expand(&self, required: usize) -> Vec<&dyn Block> {
        match self.tail {
            Some(tail) => {
                let prefix = &self.blocks[..tail];
                let repeated = &self.blocks[tail];
                let covered = frame_sum(prefix);
                let copies = required
                    .saturating_sub(covered)
                    .div_ceil(repeated.frame_count());
                let mut expanded = Vec::with_capacity(prefix.len() + copies);
                expanded.extend(prefix.iter().map(AsRef::as_ref));
                expanded.extend(core::iter::repeat_n(repeated.as_ref(), copies));
                expanded
            }
            None => {
                let per_round = frame_sum(&self.blocks);
                let rounds = required.div_ceil(per_round).max(1);
                let mut expanded = Vec::with_capacity(self.blocks.len() * rounds);
                for _ in 0..rounds {
                    expanded.extend(self.blocks.iter().map(AsRef::as_ref));
                }
                expanded
            }
        }
    }
}

fn frame_sum(blocks: &[Arc<dyn Block>]) -> usize {
    blocks.iter().map(|b| b.frame_count()).sum()
}

/// Builder for [`Pattern`]; validation happens in [`build`](Self::build).
#[derive(Default)]
pub struct PatternBuilder {
    blocks: Vec<Arc<dyn Block>>,
    tail: Option<usize>,
    separators: BlockSeparators,
}

impl fmt::Debug for PatternBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternBuilder")
            .field("blocks", &self.blocks.len())
            .field("tail", &self.tail)
            .field("separators", &self.separators)
            .finish()
    }
}

impl PatternBuilder {
    /// Appends a block.
    #[must_use]
    pub fn block(mut self, block: Arc<dyn Block>) -> Self {
        self.blocks.push(block);
        self
    }

    /// Designates the block at `index` as the repeating tail.
    #[must_use]
    pub fn tail(mut self, index: usize) -> Self {
        self.tail = Some(index);
        self
    }

    /// Designates the most recently added block as the repeating tail.
    #[must_use]
    pub fn repeat_last(mut self) -> Self {
        self.tail = self.blocks.len().checked_sub(1);
        self
    }

    /// Sets all three separators.
    #[must_use]
    pub fn separators(mut self, separators: BlockSeparators) -> Self {
        self.separators = separators;
        self
    }

    /// Sets one separator.
    #[must_use]
    pub fn separator(mut self, position: SeparatorPosition, amount: f64) -> Self {
        match position {
            SeparatorPosition::Before => self.separators.before = amount,
            SeparatorPosition::Between => self.separators.between = amount,
            SeparatorPosition::After => self.separators.after = amount,
        }
        self
    }

    /// Validates and produces the pattern.
    pub fn build(self) -> Result<Pattern, PatternError> {
        if self.blocks.is_empty() {
            return Err(PatternError::NoBlocks);
        }
        if let Some(index) = self.blocks.iter().position(|b| b.frame_count() == 0) {
            return Err(PatternError::EmptyBlock { index });
        }
        if let Some(tail) = self.tail
            && tail >= self.blocks.len()
        {
            return Err(PatternError::TailOutOfRange {
                tail,
                len: self.blocks.len(),
            });
        }
        self.separators.validate()?;
        Ok(Pattern {
            blocks: self.blocks,
            tail: self.tail,
            separators: self.separators,
        })
    }
}
