//! Chest Tracker CLI - interactive tracker for collected chests per video

use clap::Parser;
use chest_tracker::storage::{ChestStore, StoreHandle};
use chest_tracker::ui::Console;
use chest_tracker::{config, Session};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
const LOG_ENV: &str = "CHEST_TRACKER_LOG";

#[derive(Parser)]
#[command(name = "chest-tracker")]
#[command(version)]
#[command(about = "Track collected chests per video")]
#[command(long_about = r#"
Chest Tracker keeps a count of collected chests for each video in a local
SQLite database and lets you add, update and delete entries from a menu.

It takes no arguments. The database lives in db_files/ next to the
executable unless chest-tracker.toml or CHEST_TRACKER_DB points elsewhere.
Set CHEST_TRACKER_LOG (e.g. "debug") to enable logging on stderr.
"#)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let database = config::database_path()?;
    tracing::info!("Using database {:?}", database);
    let store = StoreHandle::new(ChestStore::open(&database)?);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let outcome = runtime.block_on(run_until_interrupt(store.clone()));

    // The blocking session may still be parked on a console read after an
    // interrupt; do not wait for it.
    runtime.shutdown_background();

    store.close()?;
    outcome
}

/// Drive the session on a blocking thread, racing it against Ctrl-C.
async fn run_until_interrupt(store: StoreHandle) -> anyhow::Result<()> {
    let mut session = tokio::task::spawn_blocking(move || {
        Session::new(store, Console::stdio()).run()
    });

    tokio::select! {
        joined = &mut session => {
            joined??;
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            tracing::info!("Interrupted, closing store");
            println!("\n");
        }
    }
    Ok(())
}
