// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipegrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipegrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use pipegrid::generate::generate_puzzle;
use pipegrid::model::{ColourLabel, Coord, BOARD_CELLS, BOARD_SIZE};
use pipegrid::render::{render_solution, GridCell};
use pipegrid::session::PuzzleSession;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;

#[rstest]
#[case(0)]
#[case(1)]
#[case(7)]
#[case(2026)]
#[case(u64::MAX)]
fn generated_puzzles_are_solvable_boards(#[case] seed: u64) {
    let generated = generate_puzzle(&mut StdRng::seed_from_u64(seed));
    let graph = &generated.graph;

    graph.validate().expect("segments tile the board");
    assert_eq!(graph.len(), BOARD_SIZE);
    assert_eq!(graph.segment_lengths().iter().sum::<usize>(), BOARD_CELLS);
    for segment in graph.segments() {
        assert!(!segment.is_empty());
        assert!(segment.is_contiguous(), "segment {} broke apart", segment.colour());
    }

    assert_eq!(generated.solution.populated_count(), BOARD_CELLS);
    assert_eq!(generated.solution, render_solution(graph));

    let expected_endpoints: usize = graph
        .segments()
        .iter()
        .map(|segment| if segment.len() == 1 { 1 } else { 2 })
        .sum();
    assert_eq!(generated.puzzle.populated_count(), expected_endpoints);

    for segment in graph.segments() {
        let colour = GridCell::Colour(segment.colour());
        assert_eq!(generated.puzzle.get(segment.first()), colour);
        assert_eq!(generated.puzzle.get(segment.last()), colour);
    }
}

#[test]
fn every_colour_appears_once_per_board() {
    let generated = generate_puzzle(&mut StdRng::seed_from_u64(99));
    let mut colours: Vec<ColourLabel> =
        generated.graph.segments().iter().map(|segment| segment.colour()).collect();
    colours.sort();
    assert_eq!(colours, ColourLabel::all().collect::<Vec<_>>());
}

#[test]
fn puzzle_cells_agree_with_solution_cells() {
    let generated = generate_puzzle(&mut StdRng::seed_from_u64(5));
    for coord in Coord::all() {
        let shown = generated.puzzle.get(coord);
        if !shown.is_empty() {
            assert_eq!(shown, generated.solution.get(coord), "mismatch at {coord}");
        }
    }
}

#[test]
fn session_serves_the_latest_generation() {
    let mut session = PuzzleSession::new();
    let mut rng = StdRng::seed_from_u64(8);

    session.generate(&mut rng);
    let latest = session.generate(&mut rng).clone();

    assert_eq!(session.current_puzzle().expect("puzzle"), &latest);
    assert_eq!(session.generation(), 2);
}

#[test]
fn grids_serialize_as_label_strings() {
    let generated = generate_puzzle(&mut StdRng::seed_from_u64(12));
    let json = serde_json::to_value(&generated.puzzle).expect("serialize");

    let rows = json.as_array().expect("rows");
    assert_eq!(rows.len(), 8);
    for row in rows {
        for cell in row.as_array().expect("cells") {
            let label = cell.as_str().expect("string label");
            assert!(label.parse::<u8>().is_ok_and(|value| value <= 8), "bad label {label}");
        }
    }
}
