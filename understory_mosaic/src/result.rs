// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built layouts and the queries hosts run against them.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};

use crate::axis::Direction;
use crate::supplementary::SupplementaryKind;

/// Stacking order of cell attributes.
pub const CELL_Z_INDEX: i32 = 0;

/// Address of a cell: its section and its row within the section.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    /// Section index.
    pub section: usize,
    /// Row index within the section.
    pub row: usize,
}

impl IndexPath {
    /// Creates an index path.
    #[must_use]
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// What a [`LayoutAttribute`] positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// An item cell.
    Cell(IndexPath),
    /// A header, footer, or background of a section.
    Supplementary {
        /// Which region.
        kind: SupplementaryKind,
        /// Owning section.
        section: usize,
    },
}

impl ElementId {
    /// The section this element belongs to.
    #[must_use]
    pub const fn section(self) -> usize {
        match self {
            Self::Cell(path) => path.section,
            Self::Supplementary { section, .. } => section,
        }
    }
}

/// One positioned element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutAttribute {
    /// What is positioned.
    pub id: ElementId,
    /// Where it is, in layout coordinates.
    pub frame: Rect,
    /// Stacking order: cells `0`, headers and footers `1`, backgrounds `-1`.
    pub z_index: i32,
}

impl LayoutAttribute {
    /// Creates a cell attribute.
    #[must_use]
    pub const fn cell(path: IndexPath, frame: Rect) -> Self {
        Self {
            id: ElementId::Cell(path),
            frame,
            z_index: CELL_Z_INDEX,
        }
    }

    /// Creates a supplementary attribute with the kind's stacking order.
    #[must_use]
    pub const fn supplementary(kind: SupplementaryKind, section: usize, frame: Rect) -> Self {
        Self {
            id: ElementId::Supplementary { kind, section },
            frame,
            z_index: kind.z_index(),
        }
    }

    /// Returns the index path for cell attributes.
    #[must_use]
    pub const fn index_path(&self) -> Option<IndexPath> {
        match self.id {
            ElementId::Cell(path) => Some(path),
            ElementId::Supplementary { .. } => None,
        }
    }

    /// Returns the supplementary kind for non-cell attributes.
    #[must_use]
    pub const fn kind(&self) -> Option<SupplementaryKind> {
        match self.id {
            ElementId::Cell(_) => None,
            ElementId::Supplementary { kind, .. } => Some(kind),
        }
    }
}

/// Rectangle intersection that counts shared edges.
fn touches(a: Rect, b: Rect) -> bool {
    a.min_x() <= b.max_x()
        && b.min_x() <= a.max_x()
        && a.min_y() <= b.max_y()
        && b.min_y() <= a.max_y()
}

/// The immutable output of one layout pass.
///
/// Produced by [`build`](crate::build); there is no way to modify it. A new
/// input produces a new result.
#[derive(Clone, Debug, Default)]
pub struct LayoutResult {
    cells: Vec<Vec<LayoutAttribute>>,
    supplementaries: Vec<LayoutAttribute>,
    supplementary_index: HashMap<(SupplementaryKind, usize), usize>,
    content_extent: f64,
    direction: Direction,
    cross_axis_length: f64,
}

impl LayoutResult {
    pub(crate) fn new(direction: Direction, cross_axis_length: f64, sections: usize) -> Self {
        let mut cells = Vec::with_capacity(sections);
        cells.resize_with(sections, Vec::new);
        Self {
            cells,
            supplementaries: Vec::new(),
            supplementary_index: HashMap::new(),
            content_extent: 0.0,
            direction,
            cross_axis_length,
        }
    }

    pub(crate) fn set_section_cells(&mut self, section: usize, cells: Vec<LayoutAttribute>) {
        self.cells[section] = cells;
    }

    pub(crate) fn push_supplementary(
        &mut self,
        kind: SupplementaryKind,
        section: usize,
        frame: Rect,
    ) {
        let slot = self.supplementaries.len();
        let previous = self.supplementary_index.insert((kind, section), slot);
        debug_assert!(previous.is_none(), "{kind:?} placed twice in section {section}");
        self.supplementaries
            .push(LayoutAttribute::supplementary(kind, section, frame));
    }

    pub(crate) fn set_content_extent(&mut self, extent: f64) {
        self.content_extent = extent;
    }

    /// Total length along the layout axis.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        self.content_extent
    }

    /// Scrollable size: the content extent along the layout axis and the
    /// cross-axis length across it.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.direction.size(self.content_extent, self.cross_axis_length)
    }

    /// Direction the layout was built for.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cross-axis length the layout was built for.
    #[must_use]
    pub fn cross_axis_length(&self) -> f64 {
        self.cross_axis_length
    }

    /// Number of sections recorded at build time.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.cells.len()
    }

    /// Total number of cell attributes.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    /// The attribute of the cell at (`section`, `row`), or `None` when out of range.
    #[must_use]
    pub fn cell(&self, section: usize, row: usize) -> Option<&LayoutAttribute> {
        self.cells.get(section)?.get(row)
    }

    /// All cell attributes of `section`, ordered by row.
    #[must_use]
    pub fn section_cells(&self, section: usize) -> Option<&[LayoutAttribute]> {
        self.cells.get(section).map(Vec::as_slice)
    }

    /// The header, footer, or background of `section`, if one was placed.
    #[must_use]
    pub fn supplementary(&self, kind: SupplementaryKind, section: usize) -> Option<&LayoutAttribute> {
        let slot = *self.supplementary_index.get(&(kind, section))?;
        self.supplementaries.get(slot)
    }

    /// All supplementary attributes, in placement order.
    #[must_use]
    pub fn supplementaries(&self) -> &[LayoutAttribute] {
        &self.supplementaries
    }

    /// Every attribute: cells in section and row order, then supplementaries.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutAttribute> + '_ {
        self.cells.iter().flatten().chain(self.supplementaries.iter())
    }

    /// Attributes whose frame intersects `rect`, cells first.
    ///
    /// Frames that only share an edge with `rect` are included.
    pub fn intersecting(&self, rect: Rect) -> impl Iterator<Item = &LayoutAttribute> + '_ {
        self.iter().filter(move |attribute| touches(attribute.frame, rect))
    }

    /// Topmost attribute whose frame contains `point`.
    ///
    /// Higher `z_index` wins; among equal `z_index`, the first in
    /// [`iter`](Self::iter) order wins.
    #[must_use]
    pub fn hit_test_point(&self, point: Point) -> Option<&LayoutAttribute> {
        self.iter()
            .filter(|attribute| attribute.frame.contains(point))
            .fold(None, |best: Option<&LayoutAttribute>, candidate| match best {
                Some(best) if best.z_index >= candidate.z_index => Some(best),
                _ => Some(candidate),
            })
    }
}
