use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;

use fluxstore::config::Settings;
use fluxstore::counter::{self, CounterAction, CounterState, CounterStore};
use fluxstore::logging::init_tracing;
use fluxstore::script::Script;
use fluxstore::store::{DispatchOutcome, StoreError};

#[derive(Debug, Parser)]
#[command(name = "fluxstore", version, about = "Replay actions against the counter store")]
struct Cli {
    /// Path to config file (default: ~/.config/fluxstore/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Dispatch every action of a TOML script and print the final state as JSON.
    Replay { script: PathBuf },
    /// List the registered action types.
    Types,
}

#[derive(Debug, Default, PartialEq)]
struct ReplayStats {
    /// Script actions whose own reducer ran and was installed.
    dispatched: usize,
    /// State transitions installed, follow-ups included.
    transitions: usize,
    unhandled: usize,
    /// Script actions whose own reducer failed (state unchanged).
    failed: usize,
    /// Script actions that applied but a queued follow-up failed.
    follow_up_failed: usize,
}

fn replay(store: &CounterStore, actions: Vec<CounterAction>) -> anyhow::Result<ReplayStats> {
    let transitions = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&transitions);
    let subscription = store.subscribe(move |new: &CounterState, previous: &CounterState| {
        counter.fetch_add(1, Ordering::Relaxed);
        tracing::info!(from = previous.count, to = new.count, "State changed");
    });

    let mut stats = ReplayStats::default();
    let mut fatal = None;
    for action in actions {
        let action_type = action.action_type().clone();
        match store.dispatch(action) {
            Ok(DispatchOutcome::Applied) => stats.dispatched += 1,
            Ok(DispatchOutcome::Unhandled(_)) => stats.unhandled += 1,
            Ok(DispatchOutcome::Queued) => {}
            Err(err) if err.is_fatal() => {
                let err = anyhow::Error::new(err).context(format!("dispatching {action_type}"));
                fatal = Some(err);
                break;
            }
            Err(err @ StoreError::FollowUpFailed { .. }) => {
                tracing::error!(%action_type, error = %err, "Follow-up action failed");
                stats.dispatched += 1;
                stats.follow_up_failed += 1;
            }
            Err(err) => {
                tracing::error!(%action_type, error = %err, "Action failed");
                stats.failed += 1;
            }
        }
    }

    store.unsubscribe(subscription);
    if let Some(err) = fatal {
        return Err(err);
    }
    stats.transitions = transitions.load(Ordering::Relaxed);
    Ok(stats)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("loading configuration")?;

    let store = counter::create_store(settings.store)?;

    match cli.command {
        Command::Replay { script } => {
            let script = Script::load(&script)?;
            tracing::info!(actions = script.len(), "Replaying script");

            let stats = replay(&store, script.into_actions())?;

            let report = json!({
                "state": *store.state(),
                "dispatched": stats.dispatched,
                "transitions": stats.transitions,
                "unhandled": stats.unhandled,
                "failed": stats.failed,
                "follow_up_failed": stats.follow_up_failed,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Types => {
            for action_type in store.action_types() {
                let description = store
                    .meta(&action_type)
                    .and_then(|meta| meta.get("description"))
                    .and_then(|value| value.as_str())
                    .unwrap_or("");
                println!("{action_type:<16} {description}");
            }
        }
    }

    Ok(())
}
