mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;

use crate::core::models::{CaptureState, UserSettings};
use crate::ports::CaptureTriggerListener;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    let settings = UserSettings::load().unwrap_or_else(|e| {
        log::warn!("[MAIN] Failed to load settings: {}, using defaults", e);
        UserSettings::default()
    });

    println!("{}", global_constants::STARTUP_BANNER);

    let capture_app = app::CaptureApp::build(&settings);
    let outcomes = capture_app
        .run(CaptureTriggerListener::create_event_stream())
        .await;

    for outcome in &outcomes {
        match (&outcome.final_state, &outcome.result) {
            (CaptureState::Failed, _) => log::warn!(
                "[MAIN] capture {} failed while shutting down",
                outcome.ticket.short_id()
            ),
            (_, Some(result)) => log::debug!(
                "[MAIN] capture {} finished: {:?}",
                outcome.ticket.short_id(),
                result
            ),
            _ => {}
        }
    }

    log::info!("[MAIN] Exiting application");
    Ok(())
}
