// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipegrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipegrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Leaderboard persistence.
//!
//! The leaderboard is a line-oriented text store (one completion time per line) kept sorted at
//! rest. [`LineStore`] abstracts the storage; [`FileLineStore`] is the on-disk implementation.

pub mod leaderboard;
pub mod line_store;

pub use leaderboard::{
    insertion_sort_by, EntryOrdering, Leaderboard, TimeValue, LEADERBOARD_LIMIT,
};
pub use line_store::{FileLineStore, LineStore, MemoryLineStore, StoreError, WriteDurability};
