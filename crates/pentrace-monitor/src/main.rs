//! PenTrace monitor application entry point.
//!
//! Wires together the infrastructure services and starts the Tokio async
//! runtime.  The demo build feeds a scripted stroke through the full
//! pipeline; a platform driver adapter would replace the replay source.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()          -- TOML settings or defaults
//!  └─ TabletMonitor::new()   -- builds the initial mapping contexts
//!  └─ start services
//!       ├─ ReplayEventSource (background replay thread)
//!       └─ event pump        (Tokio task draining the channel)
//! ```

use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use pentrace_monitor::application::configure_mapping::MappingToggles;
use pentrace_monitor::application::monitor_events::TabletMonitor;
use pentrace_monitor::infrastructure::display::{ConsoleDisplay, TracingCursorDriver};
use pentrace_monitor::infrastructure::event_source::replay::ReplayEventSource;
use pentrace_monitor::infrastructure::event_source::EventSource;
use pentrace_monitor::infrastructure::storage::config::{load_config, save_config};
use pentrace_monitor::infrastructure::surfaces::StaticSurfaces;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Malformed or missing config falls back to defaults; the effective
    // config is written back below so the user has a file to edit.
    let config = load_config().unwrap_or_default();

    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.monitor.log_level)),
        )
        .init();

    info!("PenTrace monitor starting");

    if let Err(e) = save_config(&config) {
        warn!("could not persist effective config: {e}");
    }

    let tablet_area = config.tablet.area();
    let toggles = MappingToggles {
        moves_cursor: config.monitor.moves_cursor,
        constrained_to_window: config.monitor.constrain_to_window,
        use_left_half: config.monitor.use_left_half,
        split_tablet: config.monitor.split_tablet,
    };

    let mut monitor = TabletMonitor::new(
        toggles,
        tablet_area,
        config.screen.window_region(),
        config.screen.desktop_region(),
        Arc::new(ConsoleDisplay),
        Arc::new(TracingCursorDriver),
        Arc::new(StaticSurfaces::with_fallback(tablet_area)),
    )?;

    // ── Event source ──────────────────────────────────────────────────────────
    let source = ReplayEventSource::demo_stroke(tablet_area);
    let raw_rx = source.start()?;
    info!("replay event source started");

    // Bridge the blocking channel into the async runtime.
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for event in raw_rx {
            if tx.send(event).is_err() {
                break;
            }
        }
    });

    // ── Event pump ────────────────────────────────────────────────────────────
    loop {
        tokio::select! {
            maybe_event = rx.recv() => match maybe_event {
                Some(event) => {
                    if let Err(e) = monitor.handle_event(event).await {
                        error!("event handling failed: {e}");
                    }
                }
                None => {
                    info!("event source drained");
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received");
                source.stop();
                break;
            }
        }
    }

    info!("PenTrace monitor stopped");
    Ok(())
}
