// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipegrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipegrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pipegrid: 8x8 pipe-connection puzzle server.
//!
//! `generate` builds a randomized segment graph, `render` turns it into puzzle and solution
//! grids, `session` holds the puzzle being played, `store` keeps the leaderboard, and `server`
//! exposes all of it over HTTP.

pub mod generate;
pub mod model;
pub mod render;
pub mod server;
pub mod session;
pub mod store;
