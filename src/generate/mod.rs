// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipegrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipegrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Puzzle generation.
//!
//! Generation starts from [`create_grid`] (every colour owns one full row) and then runs a fixed
//! number of rounds. Each round performs at most one endpoint transfer between two segments
//! ([`randomise_solution`]) followed by a shuffle of the segment order. Transfers only ever move
//! a segment endpoint onto an adjacent endpoint of another segment, so every segment stays a
//! contiguous path and the board stays tiled: the rendered endpoints always have a solution.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::model::{ColourLabel, Coord, End, Segment, SegmentGraph};
use crate::render::{render_grid, Grid, RenderView};

/// Donor segments at exactly this length are skipped.
///
/// The cap is only consulted for the donor, so a receiving segment can still grow past it.
pub const MAX_SEGMENT_LEN: usize = 4;

/// Rounds run by [`generate_graph`] for a session puzzle.
pub const GENERATION_ROUNDS: usize = 100;

const TRANSFER_PROBABILITY: f64 = 0.5;

/// Endpoints are examined last-then-first, for receivers and donors alike.
const ENDPOINT_SCAN_ORDER: [End; 2] = [End::Last, End::First];

/// A single endpoint move performed by [`randomise_solution`].
///
/// Indices refer to segment positions at the time of the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub from: usize,
    pub from_end: End,
    pub to: usize,
    pub to_end: End,
    pub coord: Coord,
}

/// A finished puzzle: the graph plus both of its renderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    pub graph: SegmentGraph,
    pub puzzle: Grid,
    pub solution: Grid,
}

/// The unshuffled board: colour `i` owns row `i`, cells in column order.
pub fn create_grid() -> SegmentGraph {
    SegmentGraph::new(ColourLabel::all().map(Segment::full_row).collect())
}

/// Performs at most one endpoint transfer and returns it.
///
/// Receivers are scanned in segment order. For each receiver endpoint, every other segment is
/// considered as a donor unless it sits at [`MAX_SEGMENT_LEN`] or has a single cell left. An
/// adjacent donor endpoint is accepted with probability one half; the cell then moves onto the
/// receiver's examined end and takes the receiver's colour. Returns `None` when a full scan
/// moved nothing.
pub fn randomise_solution<R: Rng + ?Sized>(
    graph: &mut SegmentGraph,
    rng: &mut R,
) -> Option<Transfer> {
    let count = graph.len();

    for to in 0..count {
        for to_end in ENDPOINT_SCAN_ORDER {
            let anchor = graph.segments()[to].endpoint(to_end);

            for from in 0..count {
                if from == to {
                    continue;
                }
                let donor = &graph.segments()[from];
                if donor.len() == MAX_SEGMENT_LEN || donor.len() <= 1 {
                    continue;
                }

                for from_end in ENDPOINT_SCAN_ORDER {
                    let candidate = graph.segments()[from].endpoint(from_end);
                    if !anchor.is_adjacent(candidate) || !rng.random_bool(TRANSFER_PROBABILITY) {
                        continue;
                    }

                    let Some(coord) = graph.transfer(from, from_end, to, to_end) else {
                        continue;
                    };
                    debug!(%coord, from, to, ?to_end, "moved segment endpoint");
                    return Some(Transfer {
                        from,
                        from_end,
                        to,
                        to_end,
                        coord,
                    });
                }
            }
        }
    }

    None
}

/// Runs `rounds` step-then-shuffle rounds from the unshuffled board.
///
/// The round count is fixed; there is no convergence check.
pub fn generate_graph<R: Rng + ?Sized>(rng: &mut R, rounds: usize) -> SegmentGraph {
    let mut graph = create_grid();
    let mut transfers = 0usize;

    for _ in 0..rounds {
        if randomise_solution(&mut graph, rng).is_some() {
            transfers += 1;
        }
        graph.segments_mut().shuffle(rng);
    }

    debug!(
        rounds,
        transfers,
        lengths = ?graph.segment_lengths(),
        "generated segment graph"
    );
    graph
}

/// Generates a session puzzle with [`GENERATION_ROUNDS`] rounds and renders both views.
pub fn generate_puzzle<R: Rng + ?Sized>(rng: &mut R) -> GeneratedPuzzle {
    let graph = generate_graph(rng, GENERATION_ROUNDS);
    let puzzle = render_grid(&graph, RenderView::Puzzle);
    let solution = render_grid(&graph, RenderView::Solution);
    GeneratedPuzzle {
        graph,
        puzzle,
        solution,
    }
}
