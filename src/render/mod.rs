// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipegrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipegrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Grid rendering.
//!
//! Projects a [`SegmentGraph`] onto the flat 8x8 display arrays served to the front-end: the
//! puzzle view (segment endpoints only) and the solution view (every cell filled).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::{ColourLabel, Coord, SegmentGraph, BOARD_SIZE};

/// Which of the two display grids to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderView {
    /// Endpoints only.
    Puzzle,
    /// Every cell of every segment.
    Solution,
}

/// One display cell. Serialized as the label text, `"0"` when empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GridCell {
    #[default]
    Empty,
    Colour(ColourLabel),
}

impl GridCell {
    /// Wire text of an empty cell.
    pub const EMPTY_LABEL: &'static str = "0";

    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str(Self::EMPTY_LABEL),
            Self::Colour(label) => write!(f, "{label}"),
        }
    }
}

impl Serialize for GridCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GridCell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == Self::EMPTY_LABEL {
            return Ok(Self::Empty);
        }
        raw.parse::<ColourLabel>()
            .map(Self::Colour)
            .map_err(serde::de::Error::custom)
    }
}

/// An 8x8 display grid, indexed `[row][col]` from zero.
///
/// Serializes as a JSON array of eight rows of eight label strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[GridCell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    pub fn empty() -> Self {
        Self {
            cells: [[GridCell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, coord: Coord) -> GridCell {
        let (row, col) = coord.zero_based();
        self.cells[row][col]
    }

    pub fn set(&mut self, coord: Coord, cell: GridCell) {
        let (row, col) = coord.zero_based();
        self.cells[row][col] = cell;
    }

    pub fn rows(&self) -> &[[GridCell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn populated_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            if index + 1 < BOARD_SIZE {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

/// Renders `graph` into a fresh grid. Pure; cells not written stay empty.
pub fn render_grid(graph: &SegmentGraph, view: RenderView) -> Grid {
    let mut grid = Grid::empty();

    for segment in graph.segments() {
        let cell = GridCell::Colour(segment.colour());
        match view {
            RenderView::Solution => {
                for coord in segment.cells() {
                    grid.set(coord, cell);
                }
            }
            RenderView::Puzzle => {
                grid.set(segment.first(), cell);
                grid.set(segment.last(), cell);
            }
        }
    }

    grid
}

pub fn render_puzzle(graph: &SegmentGraph) -> Grid {
    render_grid(graph, RenderView::Puzzle)
}

pub fn render_solution(graph: &SegmentGraph) -> Grid {
    render_grid(graph, RenderView::Solution)
}

#[cfg(test)]
mod tests;
