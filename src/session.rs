// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipegrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipegrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The puzzle currently being played.
//!
//! Created empty at startup and replaced wholesale by every generation. Nothing here survives a
//! restart.

use rand::Rng;
use thiserror::Error;
use tracing::info;

use crate::generate::{generate_puzzle, GeneratedPuzzle};
use crate::render::Grid;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActivePuzzle {
    puzzle: Grid,
    solution: Grid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleSession {
    active: Option<ActivePuzzle>,
    generation: u64,
}

impl PuzzleSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a new puzzle, replacing both grids, and returns the puzzle view.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Grid {
        let generated = generate_puzzle(rng);
        self.install(generated)
    }

    /// Replaces the active puzzle with an already generated one.
    pub fn install(&mut self, generated: GeneratedPuzzle) -> &Grid {
        self.generation = self.generation.wrapping_add(1);
        info!(
            generation = self.generation,
            endpoints = generated.puzzle.populated_count(),
            "installed new puzzle"
        );
        let active = self.active.insert(ActivePuzzle {
            puzzle: generated.puzzle,
            solution: generated.solution,
        });
        &active.puzzle
    }

    pub fn current_puzzle(&self) -> Result<&Grid, SessionError> {
        self.active
            .as_ref()
            .map(|active| &active.puzzle)
            .ok_or(SessionError::NotGenerated)
    }

    pub fn current_solution(&self) -> Result<&Grid, SessionError> {
        self.active
            .as_ref()
            .map(|active| &active.solution)
            .ok_or(SessionError::NotGenerated)
    }

    /// Number of puzzles generated since startup.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No puzzle has been generated yet")]
    NotGenerated,
}
