// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipegrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipegrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pipegrid CLI entrypoint.
//!
//! By default this serves the puzzle API at `http://127.0.0.1:<port>/`.
//!
//! Use `--print` to generate a single puzzle and write both views to stdout instead.

use std::error::Error;
use std::net::IpAddr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pipegrid::generate::generate_puzzle;
use pipegrid::server::{serve, AppState};
use pipegrid::store::{EntryOrdering, FileLineStore, Leaderboard, WriteDurability};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_BIND: &str = "127.0.0.1";
const DEFAULT_LEADERBOARD: &str = "leaderboard.csv";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--port <port>] [--bind <ip>] [--leaderboard <path>] [--numeric-order] [--durable-writes]\n  {program} --print [--seed <u64>]\n\nServer mode (default) listens on {DEFAULT_BIND}:{DEFAULT_PORT} unless --bind/--port say otherwise.\n--leaderboard selects the completion-time file (default {DEFAULT_LEADERBOARD}).\n--numeric-order sorts leaderboard entries by numeric value instead of as text.\n--durable-writes opts into slower, best-effort durable persistence (fsync where supported).\n\n--print generates one puzzle, prints the puzzle and solution grids, and exits.\n--seed makes --print reproducible.\n\nLog verbosity follows RUST_LOG (default info)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    port: Option<u16>,
    bind: Option<IpAddr>,
    leaderboard: Option<String>,
    numeric_order: bool,
    durable_writes: bool,
    print: bool,
    seed: Option<u64>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--port" => {
                if options.port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.port = Some(raw.parse().map_err(|_| ())?);
            }
            "--bind" => {
                if options.bind.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.bind = Some(raw.parse().map_err(|_| ())?);
            }
            "--leaderboard" => {
                if options.leaderboard.is_some() {
                    return Err(());
                }
                options.leaderboard = Some(args.next().ok_or(())?);
            }
            "--numeric-order" => {
                if options.numeric_order {
                    return Err(());
                }
                options.numeric_order = true;
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            "--print" => {
                if options.print {
                    return Err(());
                }
                options.print = true;
            }
            "--seed" => {
                if options.seed.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.seed = Some(raw.parse().map_err(|_| ())?);
            }
            _ => return Err(()),
        }
    }

    if options.seed.is_some() && !options.print {
        return Err(());
    }

    if options.print
        && (options.port.is_some()
            || options.bind.is_some()
            || options.leaderboard.is_some()
            || options.numeric_order
            || options.durable_writes)
    {
        return Err(());
    }

    Ok(options)
}

fn print_puzzle(seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let generated = generate_puzzle(&mut rng);
    println!("puzzle:\n{}\nsolution:\n{}", generated.puzzle, generated.solution);
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "pipegrid".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.print {
            print_puzzle(options.seed);
            return Ok(());
        }

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();

        let path = options.leaderboard.unwrap_or_else(|| DEFAULT_LEADERBOARD.to_owned());
        let store = if options.durable_writes {
            FileLineStore::new(&path).with_durability(WriteDurability::Durable)
        } else {
            FileLineStore::new(&path)
        };
        let ordering = if options.numeric_order {
            EntryOrdering::Numeric
        } else {
            EntryOrdering::Lexicographic
        };
        let durability = store.durability();
        let leaderboard = Leaderboard::new(store).with_ordering(ordering);
        info!(
            leaderboard = %path,
            ordering = ?leaderboard.ordering(),
            ?durability,
            "starting"
        );
        let state = AppState::new(leaderboard);

        let bind = options.bind.unwrap_or(IpAddr::from([127, 0, 0, 1]));
        let port = options.port.unwrap_or(DEFAULT_PORT);

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind((bind, port)).await?;
            serve(listener, state, shutdown_signal()).await
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("pipegrid: {err}");
        std::process::exit(1);
    }
}
