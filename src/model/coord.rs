// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipegrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipegrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use thiserror::Error;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 8;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// A board cell addressed by 1-based `(row, col)`, both in `1..=BOARD_SIZE`.
///
/// All board arithmetic goes through this type so 0-based array indexing and 1-based display
/// coordinates never mix implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    pub fn new(row: u8, col: u8) -> Result<Self, CoordError> {
        if !on_board(row) || !on_board(col) {
            return Err(CoordError::OutOfBoard { row, col });
        }
        Ok(Self { row, col })
    }

    pub fn from_zero_based(row: usize, col: usize) -> Result<Self, CoordError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(CoordError::OutOfBoard {
                row: u8::try_from(row.saturating_add(1)).unwrap_or(u8::MAX),
                col: u8::try_from(col.saturating_add(1)).unwrap_or(u8::MAX),
            });
        }
        // Both values are below BOARD_SIZE, so the narrowing is lossless.
        Ok(Self {
            row: row as u8 + 1,
            col: col as u8 + 1,
        })
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// `(row, col)` as 0-based array indices.
    pub fn zero_based(self) -> (usize, usize) {
        (usize::from(self.row - 1), usize::from(self.col - 1))
    }

    /// Two cells are adjacent when they differ by exactly one step along exactly one axis
    /// (Euclidean distance exactly 1).
    pub fn is_adjacent(self, other: Coord) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr + dc == 1
    }

    /// Every board cell in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (1..=BOARD_SIZE as u8)
            .flat_map(|row| (1..=BOARD_SIZE as u8).map(move |col| Coord { row, col }))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

fn on_board(value: u8) -> bool {
    (1..=BOARD_SIZE as u8).contains(&value)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("coordinate ({row},{col}) is outside the 8x8 board")]
    OutOfBoard { row: u8, col: u8 },
}
