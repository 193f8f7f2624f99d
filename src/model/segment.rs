// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipegrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipegrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeSet, VecDeque};

use thiserror::Error;

use super::colour::ColourLabel;
use super::coord::{Coord, BOARD_CELLS};

/// Which end of a segment an operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum End {
    First,
    Last,
}

/// One pipe: a colour plus the ordered run of cells it occupies.
///
/// Segments are never empty. The colour is fixed at construction; any cell attached later is
/// painted with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    colour: ColourLabel,
    cells: VecDeque<Coord>,
}

impl Segment {
    pub fn new(
        colour: ColourLabel,
        cells: impl IntoIterator<Item = Coord>,
    ) -> Result<Self, GraphError> {
        let cells: VecDeque<Coord> = cells.into_iter().collect();
        if cells.is_empty() {
            return Err(GraphError::EmptySegment { colour });
        }
        Ok(Self { colour, cells })
    }

    /// The starting shape of a colour: the whole board row matching its label.
    pub fn full_row(colour: ColourLabel) -> Self {
        Self {
            colour,
            cells: Coord::all().filter(|coord| coord.row() == colour.get()).collect(),
        }
    }

    pub fn colour(&self) -> ColourLabel {
        self.colour
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> impl ExactSizeIterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    pub fn first(&self) -> Coord {
        self.cells[0]
    }

    pub fn last(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    pub fn endpoint(&self, end: End) -> Coord {
        match end {
            End::First => self.first(),
            End::Last => self.last(),
        }
    }

    /// Detaches the cell at `end`. Refuses to remove the sole remaining cell.
    pub fn take_endpoint(&mut self, end: End) -> Option<Coord> {
        if self.cells.len() <= 1 {
            return None;
        }
        match end {
            End::First => self.cells.pop_front(),
            End::Last => self.cells.pop_back(),
        }
    }

    pub fn attach(&mut self, end: End, coord: Coord) {
        match end {
            End::First => self.cells.push_front(coord),
            End::Last => self.cells.push_back(coord),
        }
    }

    /// True when every consecutive pair of cells is adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.cells
            .iter()
            .zip(self.cells.iter().skip(1))
            .all(|(a, b)| a.is_adjacent(*b))
    }
}

/// The ordered set of segments that together tile the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentGraph {
    segments: Vec<Segment>,
}

impl SegmentGraph {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segment_lengths(&self) -> Vec<usize> {
        self.segments.iter().map(Segment::len).collect()
    }

    /// Moves the `from_end` cell of segment `from` onto the `to_end` of segment `to`.
    ///
    /// Returns the moved cell, or `None` when the indices coincide, are out of range, or the
    /// donor has only one cell left.
    pub fn transfer(
        &mut self,
        from: usize,
        from_end: End,
        to: usize,
        to_end: End,
    ) -> Option<Coord> {
        if from == to || from >= self.segments.len() || to >= self.segments.len() {
            return None;
        }
        let coord = self.segments[from].take_endpoint(from_end)?;
        self.segments[to].attach(to_end, coord);
        Some(coord)
    }

    /// Checks that the segments cover every board cell exactly once.
    pub fn validate(&self) -> Result<(), GraphError> {
        let mut seen = BTreeSet::new();
        for segment in &self.segments {
            if segment.is_empty() {
                return Err(GraphError::EmptySegment {
                    colour: segment.colour(),
                });
            }
            for coord in segment.cells() {
                if !seen.insert(coord) {
                    return Err(GraphError::DuplicateCell { coord });
                }
            }
        }

        if seen.len() != BOARD_CELLS {
            if let Some(coord) = Coord::all().find(|coord| !seen.contains(coord)) {
                return Err(GraphError::MissingCell { coord });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("segment with colour {colour} has no cells")]
    EmptySegment { colour: ColourLabel },
    #[error("cell {coord} is claimed by more than one segment")]
    DuplicateCell { coord: Coord },
    #[error("cell {coord} is not covered by any segment")]
    MissingCell { coord: Coord },
}
