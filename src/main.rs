//! pinboard - A terminal Kanban board.
//!
//! This is the main binary that launches the TUI application with a
//! seeded demo board.

use anyhow::Context;
use pinboard_core::dummy::{dummy_board, sample_users};
use pinboard_tui::{App, terminal};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Name of the log file written next to the working directory.
const LOG_FILE: &str = "pinboard.log";

/// Initializes file-based logging when `PINBOARD_LOG` is set.
///
/// The TUI owns stdout, so log lines go to [`LOG_FILE`] instead. The
/// variable's value is the filter directive (e.g. `debug` or
/// `pinboard_core=trace`). Returns the guard that flushes buffered
/// lines on drop; it must stay alive for the process lifetime.
fn init_logging() -> anyhow::Result<Option<WorkerGuard>> {
    let Ok(directives) = std::env::var("PINBOARD_LOG") else {
        return Ok(None);
    };

    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid PINBOARD_LOG filter: {directives}"))?;
    let appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = init_logging()?;

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(dummy_board(), sample_users());

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
