// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipegrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipegrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;

use super::{render_grid, render_puzzle, render_solution, Grid, GridCell, RenderView};
use crate::generate::{create_grid, generate_graph, GENERATION_ROUNDS};
use crate::model::{ColourLabel, Coord, Segment, SegmentGraph};

fn c(row: u8, col: u8) -> Coord {
    Coord::new(row, col).expect("coord")
}

fn colour(value: u8) -> ColourLabel {
    ColourLabel::new(value).expect("colour")
}

const UNSHUFFLED_SOLUTION: &str = "\
11111111
22222222
33333333
44444444
55555555
66666666
77777777
88888888";

const UNSHUFFLED_PUZZLE: &str = "\
10000001
20000002
30000003
40000004
50000005
60000006
70000007
80000008";

#[test]
fn unshuffled_board_renders_rows() {
    let graph = create_grid();
    assert_eq!(render_solution(&graph).to_string(), UNSHUFFLED_SOLUTION);
    assert_eq!(render_puzzle(&graph).to_string(), UNSHUFFLED_PUZZLE);
}

#[test]
fn single_cell_segment_renders_one_endpoint() {
    let graph = SegmentGraph::new(vec![
        Segment::new(colour(3), [c(5, 5)]).unwrap(),
        Segment::new(colour(4), [c(1, 1), c(1, 2), c(2, 2)]).unwrap(),
    ]);

    let puzzle = render_grid(&graph, RenderView::Puzzle);
    assert_eq!(puzzle.populated_count(), 3);
    assert_eq!(puzzle.get(c(5, 5)), GridCell::Colour(colour(3)));
    assert_eq!(puzzle.get(c(1, 1)), GridCell::Colour(colour(4)));
    assert_eq!(puzzle.get(c(2, 2)), GridCell::Colour(colour(4)));
    assert_eq!(puzzle.get(c(1, 2)), GridCell::Empty);

    let solution = render_grid(&graph, RenderView::Solution);
    assert_eq!(solution.populated_count(), 4);
    assert_eq!(solution.get(c(1, 2)), GridCell::Colour(colour(4)));
}

#[rstest]
#[case(0)]
#[case(5)]
#[case(31337)]
fn generated_views_satisfy_population_bounds(#[case] seed: u64) {
    let graph = generate_graph(&mut StdRng::seed_from_u64(seed), GENERATION_ROUNDS);

    let solution = render_solution(&graph);
    assert!(solution.rows().iter().flatten().all(|cell| !cell.is_empty()));

    let puzzle = render_puzzle(&graph);
    let expected: usize = graph
        .segments()
        .iter()
        .map(|segment| if segment.len() == 1 { 1 } else { 2 })
        .sum();
    assert_eq!(puzzle.populated_count(), expected);
    assert!(puzzle.populated_count() <= 16);
}

#[test]
fn rendering_is_deterministic() {
    let graph = generate_graph(&mut StdRng::seed_from_u64(8), GENERATION_ROUNDS);
    assert_eq!(render_puzzle(&graph), render_puzzle(&graph));
    assert_eq!(render_solution(&graph), render_solution(&graph));
}

#[test]
fn grid_serializes_as_nested_label_strings() {
    let json = serde_json::to_value(render_puzzle(&create_grid())).expect("serialize");
    let rows = json.as_array().expect("array of rows");
    assert_eq!(rows.len(), 8);
    assert_eq!(
        rows[0],
        serde_json::json!(["1", "0", "0", "0", "0", "0", "0", "1"])
    );

    let back: Grid = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, render_puzzle(&create_grid()));
}

#[test]
fn unknown_cell_labels_are_rejected() {
    let mut rows = vec![vec!["0"; 8]; 8];
    rows[2][3] = "9";
    let result: Result<Grid, _> = serde_json::from_value(serde_json::json!(rows));
    assert!(result.is_err());
}
