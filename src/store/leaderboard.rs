// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipegrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipegrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;
use tracing::{debug, info};

use super::line_store::{LineStore, StoreError};

/// Entries returned by [`Leaderboard::top`].
pub const LEADERBOARD_LIMIT: usize = 10;

/// How leaderboard lines are compared when the store is re-sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryOrdering {
    /// Plain string comparison. `"12.5"` sorts before `"3.2"`.
    #[default]
    Lexicographic,
    /// Entries that parse as finite numbers compare by value and sort before anything else;
    /// the rest compare as strings.
    Numeric,
}

impl EntryOrdering {
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Lexicographic => a.cmp(b),
            Self::Numeric => match (parse_finite(a), parse_finite(b)) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => a.cmp(b),
            },
        }
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Stable in-place insertion sort.
///
/// Each element is swapped towards the front while its predecessor compares `Greater`, so equal
/// elements keep their relative order.
pub fn insertion_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for outer in 1..items.len() {
        let mut inner = outer;
        while inner > 0 && compare(&items[inner - 1], &items[inner]) == Ordering::Greater {
            items.swap(inner - 1, inner);
            inner -= 1;
        }
    }
}

/// A completion time in the text form it is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeValue(String);

impl TimeValue {
    /// Canonical text for a submitted JSON value; `None` for `null`.
    ///
    /// Strings are kept verbatim and numbers use their shortest round-trip form (`12.5`, `3`).
    /// Arrays and objects fall back to compact JSON.
    pub fn from_json(value: &Value) -> Option<Self> {
        let text = match value {
            Value::Null => return None,
            Value::String(text) => text.clone(),
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            other => other.to_string(),
        };
        Some(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TimeValue {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Completion times kept sorted at rest in a [`LineStore`].
#[derive(Debug, Clone)]
pub struct Leaderboard<S> {
    store: S,
    ordering: EntryOrdering,
}

impl<S: LineStore> Leaderboard<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            ordering: EntryOrdering::default(),
        }
    }

    pub fn with_ordering(mut self, ordering: EntryOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn ordering(&self) -> EntryOrdering {
        self.ordering
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Writes `time` as a new trailing line. Does not re-sort.
    pub fn append(&mut self, time: &TimeValue) -> Result<(), StoreError> {
        if time.as_str().contains(['\n', '\r']) {
            return Err(StoreError::InvalidEntry {
                entry: time.as_str().to_owned(),
            });
        }
        self.store.append_line(time.as_str())
    }

    /// Re-sorts the whole store and rewrites it. Returns the number of entries.
    ///
    /// An absent store stays absent.
    pub fn sort(&mut self) -> Result<usize, StoreError> {
        let Some(mut entries) = self.store.read_lines()? else {
            return Ok(0);
        };

        let ordering = self.ordering;
        insertion_sort_by(&mut entries, |a, b| ordering.compare(a, b));
        self.store.replace_lines(&entries)?;

        debug!(entries = entries.len(), ?ordering, "leaderboard re-sorted");
        Ok(entries.len())
    }

    /// Records a completion time: append, then re-sort so the store stays ordered at rest.
    pub fn submit(&mut self, time: &TimeValue) -> Result<usize, StoreError> {
        self.append(time)?;
        let entries = self.sort()?;
        info!(time = %time, entries, "recorded completion time");
        Ok(entries)
    }

    /// Up to `limit` leading entries in stored order. An absent store yields nothing.
    pub fn top_n(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        Ok(self.store.read_leading_lines(limit)?.unwrap_or_default())
    }

    pub fn top(&self) -> Result<Vec<String>, StoreError> {
        self.top_n(LEADERBOARD_LIMIT)
    }

    /// Every entry in stored order.
    pub fn entries(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.store.read_lines()?.unwrap_or_default())
    }
}
