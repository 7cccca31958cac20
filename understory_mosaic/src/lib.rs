// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_mosaic --heading-base-level=0

//! Understory Mosaic: pattern-driven grid layout along one scroll axis.
//!
//! This crate computes where every cell of a sectioned, scrollable grid goes
//! when each section is tiled by a repeating visual *pattern*. It also places
//! section headers, footers, and backgrounds, and reports the total scrollable
//! extent. It is a pure geometry engine: it renders nothing, recycles no
//! views, and keeps no state between builds.
//!
//! The core concepts are:
//!
//! - [`Block`]: a repeatable unit covering a fixed number of item frames, such
//!   as one full-width row ([`StripBlock`]), a row of squares
//!   ([`UnitBlock::grid`]), or an arbitrary square mosaic ([`UnitBlock`]).
//! - [`Pattern`]: a validated block sequence for one section, with an
//!   optional repeating tail block and `before`/`between`/`after` separators.
//! - [`Supplementary`]: a header or footer region, optionally hidden when its
//!   section has no items.
//! - [`PatternSource`]: the host-side trait supplying patterns, headers,
//!   footers, background flags, and the between-sections separator.
//!   [`StaticSource`] is a ready-made implementation.
//! - [`build`]: the single-pass builder producing a [`LayoutResult`], which
//!   answers cell, rectangle, point, and supplementary queries.
//! - [`MosaicLayout`]: a small controller that caches the last result until a
//!   configuration or dimension change invalidates it.
//!
//! Host frameworks are responsible for:
//!
//! - Owning the scroll view and sizing it to [`LayoutResult::content_size`].
//! - Forwarding "frame for item", "elements in rect", and "frame for
//!   supplementary" requests to [`LayoutResult::cell`],
//!   [`LayoutResult::intersecting`], and [`LayoutResult::supplementary`].
//! - Mapping [`SupplementaryKind`] to their own element-kind identifiers
//!   (see [`SupplementaryKind::identifier`]).
//!
//! ## Minimal example
//!
//! A vertical list of three 44-point rows in a 320-point wide container:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use understory_mosaic::{
//!     Direction, LayoutConfig, Pattern, StaticSource, StripBlock, StripSupplementary,
//!     SupplementaryKind, build,
//! };
//!
//! let row = Pattern::repeating(Arc::new(StripBlock::new(Direction::Vertical, 44.0))).unwrap();
//! let source = StaticSource::new(row)
//!     .with_header(0, Arc::new(StripSupplementary::new(Direction::Vertical, 28.0)));
//!
//! let layout = build(&[3], &source, &LayoutConfig::vertical(320.0)).unwrap();
//!
//! assert_eq!(layout.content_extent(), 28.0 + 3.0 * 44.0);
//! assert_eq!(layout.cell(0, 0).unwrap().frame.y0, 28.0);
//! assert!(layout.supplementary(SupplementaryKind::Header, 0).is_some());
//! assert!(layout.cell(0, 3).is_none());
//! ```
//!
//! ## Patterns and expansion
//!
//! A section with more items than its pattern covers expands the pattern. If
//! a tail block is designated, the blocks before it appear once and the tail
//! repeats; otherwise the whole block list repeats. The last block may be cut
//! short when the items run out, but a frame is never split. Patterns reject
//! empty block lists and zero-frame blocks on construction, so expansion
//! always terminates.
//!
//! ## Sections and separators
//!
//! A section is *non-empty* when it has items or a header/footer that stays
//! visible for empty sections. The between-sections separator is inserted only
//! between non-empty sections. Block separators apply only to sections with
//! items. The running offset never moves backwards.
//!
//! All coordinates are `f64` in a caller-chosen space (typically logical
//! pixels); the engine never rounds. This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod block;
mod builder;
mod config;
mod error;
mod layout;
mod pattern;
mod result;
mod sections;
mod source;
mod supplementary;

pub use axis::Direction;
pub use block::{Block, BlockFrames, FnBlock, StripBlock, UnitBlock};
pub use builder::build;
pub use config::LayoutConfig;
pub use error::{LayoutError, PatternError};
pub use layout::MosaicLayout;
pub use pattern::{BlockSeparators, Pattern, PatternBuilder, SeparatorPosition};
pub use result::{CELL_Z_INDEX, ElementId, IndexPath, LayoutAttribute, LayoutResult};
pub use sections::{NonEmptySections, is_section_non_empty};
pub use source::{PatternSource, StaticSource};
pub use supplementary::{FnSupplementary, StripSupplementary, Supplementary, SupplementaryKind};
