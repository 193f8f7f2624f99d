// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipegrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipegrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Board data model.
//!
//! A puzzle is a [`SegmentGraph`]: eight coloured [`Segment`]s whose cells tile the 8x8 board.

pub mod colour;
pub mod coord;
pub mod segment;

pub use colour::{ColourLabel, ColourLabelError};
pub use coord::{Coord, CoordError, BOARD_CELLS, BOARD_SIZE};
pub use segment::{End, GraphError, Segment, SegmentGraph};
