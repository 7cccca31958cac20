// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single-pass layout builder.
//!
//! Sections are visited in order and everything is placed against one running
//! offset along the layout axis. For each section:
//!
//! 1. the between-sections separator, if the section is non-empty and not the
//!    first non-empty one;
//! 2. the header;
//! 3. the pattern's `before` separator, its blocks (with `between` separators),
//!    and its `after` separator, only when the section has items;
//! 4. the footer;
//! 5. the background, spanning everything placed since step 2.
//!
//! The offset never moves backwards: every advance is clamped at zero.

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Rect;
use tracing::{debug, trace, warn};

use crate::axis::Direction;
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::pattern::{Pattern, SeparatorPosition};
use crate::result::{IndexPath, LayoutAttribute, LayoutResult};
use crate::sections::NonEmptySections;
use crate::source::PatternSource;
use crate::supplementary::{Supplementary, SupplementaryKind};

/// Running offset along the layout axis, local to one [`build`] call.
#[derive(Debug)]
struct Cursor {
    direction: Direction,
    side: f64,
    origin: f64,
}

impl Cursor {
    fn new(config: &LayoutConfig) -> Self {
        Self {
            direction: config.direction(),
            side: config.cross_axis_length(),
            origin: 0.0,
        }
    }

    /// Moves forward by `delta`; negative and NaN deltas are ignored.
    fn advance(&mut self, delta: f64) {
        self.origin += delta.max(0.0);
    }

    /// Moves forward to `frame`'s trailing edge if it lies ahead.
    fn advance_past(&mut self, frame: Rect) {
        self.advance(self.direction.trailing_edge(frame) - self.origin);
    }
}

/// Lays out every section of `dimension`.
///
/// `dimension[s]` is the item count of section `s`. The result holds exactly
/// that many cells per section, every header, footer, and background that
/// applies, and the final running offset as the content extent.
///
/// # Errors
///
/// - [`LayoutError::InvalidCrossAxisLength`] if `config` fails validation.
/// - [`LayoutError::NonFiniteSectionSeparator`] if the source's
///   between-sections separator is NaN or infinite.
/// - [`LayoutError::MissingFrames`] if a block returns fewer frames than it
///   declares.
pub fn build<S: PatternSource + ?Sized>(
    dimension: &[usize],
    source: &S,
    config: &LayoutConfig,
) -> Result<LayoutResult, LayoutError> {
    config.validate()?;
    let section_separator = source.separator_between_sections();
    if !section_separator.is_finite() {
        return Err(LayoutError::NonFiniteSectionSeparator(section_separator));
    }

    debug!(
        sections = dimension.len(),
        direction = ?config.direction(),
        side = config.cross_axis_length(),
        "building mosaic layout"
    );

    let non_empty = NonEmptySections::classify(source, dimension);
    let mut result = LayoutResult::new(
        config.direction(),
        config.cross_axis_length(),
        dimension.len(),
    );
    let mut cursor = Cursor::new(config);

    for (section, &rows) in dimension.iter().enumerate() {
        if let Some(separator) = non_empty.separator_before(section, section_separator) {
            cursor.advance(separator);
        }
        let section_origin = cursor.origin;

        place_supplementary(
            &mut result,
            &mut cursor,
            SupplementaryKind::Header,
            source.header(section),
            section,
            rows,
        );

        let pattern = source.pattern(section);
        let cells = place_cells(&mut cursor, &pattern, section, rows)?;
        result.set_section_cells(section, cells);

        place_supplementary(
            &mut result,
            &mut cursor,
            SupplementaryKind::Footer,
            source.footer(section),
            section,
            rows,
        );

        if source.background_enabled(section) && cursor.origin - section_origin > 0.0 {
            let frame = cursor
                .direction
                .span_rect(section_origin, cursor.origin, cursor.side);
            result.push_supplementary(SupplementaryKind::Background, section, frame);
        }

        trace!(
            section,
            rows,
            start = section_origin,
            end = cursor.origin,
            "placed section"
        );
    }

    result.set_content_extent(cursor.origin);
    debug!(
        content_extent = cursor.origin,
        cells = result.cell_count(),
        supplementaries = result.supplementaries().len(),
        "built mosaic layout"
    );
    Ok(result)
}

fn place_supplementary(
    result: &mut LayoutResult,
    cursor: &mut Cursor,
    kind: SupplementaryKind,
    supplementary: Option<Arc<dyn Supplementary>>,
    section: usize,
    rows: usize,
) {
    let Some(supplementary) = supplementary else {
        return;
    };
    if rows == 0 && supplementary.hidden_when_empty() {
        return;
    }
    let frame = supplementary.frame(cursor.origin, cursor.side);
    cursor.advance_past(frame);
    result.push_supplementary(kind, section, frame);
}

fn place_cells(
    cursor: &mut Cursor,
    pattern: &Pattern,
    section: usize,
    rows: usize,
) -> Result<Vec<LayoutAttribute>, LayoutError> {
    let mut cells = Vec::with_capacity(rows);
    if rows == 0 {
        return Ok(cells);
    }

    cursor.advance(pattern.separator(SeparatorPosition::Before));
    for (index, block) in pattern.expand(rows).into_iter().enumerate() {
        if cells.len() == rows {
            break;
        }
        if index > 0 {
            cursor.advance(pattern.separator(SeparatorPosition::Between));
        }

        let start = cursor.origin;
        let declared = block.frame_count();
        let frames = block.frames(start, cursor.side);
        if frames.len() < declared {
            return Err(LayoutError::MissingFrames {
                section,
                block: index,
                expected: declared,
                actual: frames.len(),
            });
        }
        if frames.len() > declared {
            warn!(
                section,
                block = index,
                declared,
                produced = frames.len(),
                "block produced extra frames; ignoring them"
            );
        }

        let take = declared.min(rows - cells.len());
        let mut extent = 0.0_f64;
        for frame in &frames[..take] {
            let row = cells.len();
            cells.push(LayoutAttribute::cell(IndexPath::new(section, row), *frame));
            extent = extent.max(cursor.direction.trailing_edge(*frame) - start);
        }
        cursor.advance(extent);
    }
    cursor.advance(pattern.separator(SeparatorPosition::After));
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use alloc::vec::Vec;

    use kurbo::Rect;

    use super::build;
    use crate::axis::Direction;
    use crate::block::{Block, BlockFrames, FnBlock, StripBlock, UnitBlock};
    use crate::config::LayoutConfig;
    use crate::error::LayoutError;
    use crate::pattern::{BlockSeparators, Pattern};
    use crate::result::IndexPath;
    use crate::source::StaticSource;
    use crate::supplementary::{FnSupplementary, StripSupplementary, SupplementaryKind};

    fn rows(length: f64) -> Pattern {
        Pattern::repeating(Arc::new(StripBlock::new(Direction::Vertical, length))).unwrap()
    }

    fn header(length: f64, hidden: bool) -> Arc<StripSupplementary> {
        Arc::new(StripSupplementary::new(Direction::Vertical, length).with_hidden_when_empty(hidden))
    }

    fn frames(result: &crate::LayoutResult, section: usize) -> Vec<Rect> {
        result
            .section_cells(section)
            .unwrap()
            .iter()
            .map(|a| a.frame)
            .collect()
    }

    #[test]
    fn single_repeating_row_stacks_full_width() {
        let source = StaticSource::new(rows(30.0));
        let result = build(&[3], &source, &LayoutConfig::vertical(100.0)).unwrap();
        assert_eq!(
            frames(&result, 0),
            [
                Rect::new(0.0, 0.0, 100.0, 30.0),
                Rect::new(0.0, 30.0, 100.0, 60.0),
                Rect::new(0.0, 60.0, 100.0, 90.0),
            ]
        );
        assert_eq!(result.content_extent(), 90.0);
    }

    #[test]
    fn block_separators_wrap_and_split_blocks() {
        let pattern = Pattern::builder()
            .block(Arc::new(StripBlock::new(Direction::Vertical, 10.0)))
            .repeat_last()
            .separators(BlockSeparators::new(5.0, 2.0, 7.0))
            .build()
            .unwrap();
        let source = StaticSource::new(pattern);
        let result = build(&[2], &source, &LayoutConfig::vertical(50.0)).unwrap();
        assert_eq!(
            frames(&result, 0),
            [Rect::new(0.0, 5.0, 50.0, 15.0), Rect::new(0.0, 17.0, 50.0, 27.0)]
        );
        assert_eq!(result.content_extent(), 34.0);
    }

    #[test]
    fn block_separators_skip_empty_sections() {
        let pattern = Pattern::builder()
            .block(Arc::new(StripBlock::new(Direction::Vertical, 10.0)))
            .separators(BlockSeparators::uniform(5.0))
            .build()
            .unwrap();
        let source = StaticSource::new(pattern);
        let result = build(&[0], &source, &LayoutConfig::vertical(50.0)).unwrap();
        assert_eq!(result.content_extent(), 0.0);
        assert_eq!(result.cell_count(), 0);
    }

    #[test]
    fn truncates_mid_block() {
        // Four squares per block, six rows: the second block places two.
        let source = StaticSource::new(
            Pattern::new([Arc::new(UnitBlock::grid(Direction::Vertical, 4)) as Arc<dyn Block>])
                .unwrap(),
        );
        let result = build(&[6], &source, &LayoutConfig::vertical(80.0)).unwrap();
        let cells = frames(&result, 0);
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[4], Rect::new(0.0, 20.0, 20.0, 40.0));
        assert_eq!(cells[5], Rect::new(20.0, 20.0, 40.0, 40.0));
        assert_eq!(result.content_extent(), 40.0);
    }

    #[test]
    fn block_advance_uses_tallest_consumed_frame() {
        // Frame 0 is short, frame 1 is tall; only frame 0 is consumed.
        let block = FnBlock::new(2, |origin: f64, side: f64| {
            let mut frames = BlockFrames::new();
            frames.push(Rect::new(0.0, origin, side / 2.0, origin + 10.0));
            frames.push(Rect::new(side / 2.0, origin, side, origin + 40.0));
            frames
        });
        let source = StaticSource::new(Pattern::repeating(Arc::new(block)).unwrap());
        let one = build(&[1], &source, &LayoutConfig::vertical(100.0)).unwrap();
        assert_eq!(one.content_extent(), 10.0);
        let two = build(&[2], &source, &LayoutConfig::vertical(100.0)).unwrap();
        assert_eq!(two.content_extent(), 40.0);
    }

    #[test]
    fn header_and_footer_bracket_cells() {
        let source = StaticSource::new(rows(10.0))
            .with_header(0, header(20.0, true))
            .with_footer(0, header(5.0, true));
        let result = build(&[2], &source, &LayoutConfig::vertical(100.0)).unwrap();
        let head = result.supplementary(SupplementaryKind::Header, 0).unwrap();
        let foot = result.supplementary(SupplementaryKind::Footer, 0).unwrap();
        assert_eq!(head.frame, Rect::new(0.0, 0.0, 100.0, 20.0));
        assert_eq!(result.cell(0, 0).unwrap().frame.y0, 20.0);
        assert_eq!(foot.frame, Rect::new(0.0, 40.0, 100.0, 45.0));
        assert_eq!(result.content_extent(), 45.0);
    }

    #[test]
    fn hidden_header_suppressed_for_empty_section() {
        let source = StaticSource::new(rows(10.0)).with_header(0, header(20.0, true));
        let result = build(&[0], &source, &LayoutConfig::vertical(100.0)).unwrap();
        assert!(result.supplementary(SupplementaryKind::Header, 0).is_none());
        assert_eq!(result.content_extent(), 0.0);
    }

    #[test]
    fn background_spans_section_content() {
        let source = StaticSource::new(rows(10.0))
            .with_section_separator(8.0)
            .with_header(1, header(20.0, true))
            .with_background(1, true);
        let result = build(&[1, 2], &source, &LayoutConfig::vertical(100.0)).unwrap();
        let background = result
            .supplementary(SupplementaryKind::Background, 1)
            .unwrap();
        // Section 1 starts after 10 (section 0) + 8 (separator).
        assert_eq!(background.frame, Rect::new(0.0, 18.0, 100.0, 58.0));
        assert_eq!(background.z_index, -1);
        assert_eq!(result.content_extent(), 58.0);
    }

    #[test]
    fn background_skipped_for_zero_extent() {
        let source = StaticSource::new(rows(10.0)).with_background(0, true);
        let result = build(&[0], &source, &LayoutConfig::vertical(100.0)).unwrap();
        assert!(result.supplementary(SupplementaryKind::Background, 0).is_none());
    }

    #[test]
    fn backwards_supplementary_does_not_regress_offset() {
        let behind = FnSupplementary::new(|origin: f64, side: f64| {
            Rect::new(0.0, origin - 50.0, side, origin - 40.0)
        });
        let source = StaticSource::new(rows(10.0)).with_footer(0, Arc::new(behind));
        let result = build(&[1], &source, &LayoutConfig::vertical(100.0)).unwrap();
        assert_eq!(result.content_extent(), 10.0);
        assert!(result.supplementary(SupplementaryKind::Footer, 0).is_some());
    }

    #[test]
    fn negative_separators_are_clamped() {
        let pattern = Pattern::builder()
            .block(Arc::new(StripBlock::new(Direction::Vertical, 10.0)))
            .repeat_last()
            .separators(BlockSeparators::uniform(-5.0))
            .build()
            .unwrap();
        let source = StaticSource::new(pattern).with_section_separator(-3.0);
        let result = build(&[2, 1], &source, &LayoutConfig::vertical(100.0)).unwrap();
        assert_eq!(result.content_extent(), 30.0);
        assert_eq!(result.cell(1, 0).unwrap().frame.y0, 20.0);
    }

    #[test]
    fn horizontal_stacks_along_x() {
        let pattern =
            Pattern::repeating(Arc::new(StripBlock::new(Direction::Horizontal, 25.0))).unwrap();
        let source = StaticSource::new(pattern);
        let result = build(&[2], &source, &LayoutConfig::horizontal(60.0)).unwrap();
        assert_eq!(
            frames(&result, 0),
            [Rect::new(0.0, 0.0, 25.0, 60.0), Rect::new(25.0, 0.0, 50.0, 60.0)]
        );
        assert_eq!(result.content_extent(), 50.0);
        assert_eq!(result.content_size(), kurbo::Size::new(50.0, 60.0));
    }

    #[test]
    fn short_block_is_a_configuration_error() {
        let liar = FnBlock::new(3, |origin: f64, side: f64| {
            let mut frames = BlockFrames::new();
            frames.push(Rect::new(0.0, origin, side, origin + 10.0));
            frames
        });
        let source = StaticSource::new(Pattern::repeating(Arc::new(liar)).unwrap());
        assert_eq!(
            build(&[2], &source, &LayoutConfig::vertical(10.0)).unwrap_err(),
            LayoutError::MissingFrames {
                section: 0,
                block: 0,
                expected: 3,
                actual: 1
            }
        );
    }

    #[test]
    fn extra_frames_are_ignored() {
        let generous = FnBlock::new(1, |origin: f64, side: f64| {
            let mut frames = BlockFrames::new();
            frames.push(Rect::new(0.0, origin, side, origin + 10.0));
            frames.push(Rect::new(0.0, origin, side, origin + 500.0));
            frames
        });
        let source = StaticSource::new(Pattern::repeating(Arc::new(generous)).unwrap());
        let result = build(&[2], &source, &LayoutConfig::vertical(10.0)).unwrap();
        assert_eq!(result.cell_count(), 2);
        assert_eq!(result.content_extent(), 20.0);
    }

    #[test]
    fn rejects_invalid_inputs() {
        let source = StaticSource::new(rows(10.0));
        assert_eq!(
            build(&[1], &source, &LayoutConfig::vertical(-1.0)).unwrap_err(),
            LayoutError::InvalidCrossAxisLength(-1.0)
        );
        let source = StaticSource::new(rows(10.0)).with_section_separator(f64::INFINITY);
        assert_eq!(
            build(&[1], &source, &LayoutConfig::vertical(10.0)).unwrap_err(),
            LayoutError::NonFiniteSectionSeparator(f64::INFINITY)
        );
    }

    #[test]
    fn row_indices_are_contiguous() {
        let source = StaticSource::new(rows(1.0));
        let result = build(&[4, 0, 2], &source, &LayoutConfig::vertical(1.0)).unwrap();
        for section in 0..3 {
            for (row, cell) in result.section_cells(section).unwrap().iter().enumerate() {
                assert_eq!(cell.index_path(), Some(IndexPath::new(section, row)));
            }
        }
        assert!(result.section_cells(1).unwrap().is_empty());
    }
}
