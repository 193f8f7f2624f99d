// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipegrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipegrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

/// Puzzle and leaderboard cases run in microseconds, so short windows still collect enough
/// iterations per sample.
const DEFAULT_SAMPLE_SIZE: usize = 100;
const DEFAULT_WARMUP_MS: u64 = 500;
const DEFAULT_MEASUREMENT_MS: u64 = 2_000;
const DEFAULT_PROFILE_HZ: i32 = 997;

fn knob<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

/// Criterion config for the `generate` and `leaderboard` targets, with a flamegraph profiler.
///
/// Tune with `PIPEGRID_BENCH_SAMPLES`, `PIPEGRID_BENCH_MS` (measurement window) and
/// `PIPEGRID_PROFILE_HZ`.
pub fn criterion() -> Criterion {
    let sample_size = knob("PIPEGRID_BENCH_SAMPLES", DEFAULT_SAMPLE_SIZE).clamp(10, 1_000);
    let measurement_ms = knob("PIPEGRID_BENCH_MS", DEFAULT_MEASUREMENT_MS).clamp(100, 60_000);
    let frequency = knob("PIPEGRID_PROFILE_HZ", DEFAULT_PROFILE_HZ).clamp(1, 10_000);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_millis(DEFAULT_WARMUP_MS.min(measurement_ms)))
        .measurement_time(Duration::from_millis(measurement_ms))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
