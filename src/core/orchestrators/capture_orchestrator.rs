use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

use crate::core::models::{current_unix_millis, CaptureOutcome, CaptureTicket};
use crate::core::orchestrators::FrameUploader;
use crate::global_constants::LOG_TAG_ORCHESTRATOR;

pub struct CaptureOrchestrator {
    uploader: Arc<FrameUploader>,
    in_flight: Mutex<Vec<JoinHandle<CaptureOutcome>>>,
}

impl CaptureOrchestrator {
    pub fn build(uploader: FrameUploader) -> Self {
        Self {
            uploader: Arc::new(uploader),
            in_flight: Mutex::new(Vec::new()),
        }
    }

    pub fn trigger_capture(&self) -> CaptureTicket {
        let ticket = CaptureTicket::issue(current_unix_millis());
        log::info!(
            "{} capture {} triggered at {}",
            LOG_TAG_ORCHESTRATOR,
            ticket.short_id(),
            ticket.triggered_at_millis
        );

        let uploader = Arc::clone(&self.uploader);
        let task_ticket = ticket.clone();
        let handle = tokio::spawn(async move { uploader.capture_and_upload(task_ticket).await });

        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        in_flight.retain(|pending| !pending.is_finished());
        in_flight.push(handle);

        ticket
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .filter(|pending| !pending.is_finished())
            .count()
    }

    /// Awaits every capture still tracked and returns their outcomes in
    /// completion order.
    pub async fn wait_for_in_flight(&self) -> Vec<CaptureOutcome> {
        let pending: Vec<JoinHandle<CaptureOutcome>> = {
            let mut in_flight = self
                .in_flight
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            in_flight.drain(..).collect()
        };

        if !pending.is_empty() {
            log::info!(
                "{} waiting for {} capture(s) in flight",
                LOG_TAG_ORCHESTRATOR,
                pending.len()
            );
        }

        let mut outcomes = Vec::with_capacity(pending.len());
        let mut remaining: futures::stream::FuturesUnordered<_> = pending.into_iter().collect();

        while let Some(joined) = futures::StreamExt::next(&mut remaining).await {
            match joined {
                Ok(outcome) => {
                    log::debug!(
                        "{} capture {} finished as {}",
                        LOG_TAG_ORCHESTRATOR,
                        outcome.ticket.short_id(),
                        outcome.final_state
                    );
                    outcomes.push(outcome);
                }
                Err(error) => {
                    log::error!("{} capture task aborted: {}", LOG_TAG_ORCHESTRATOR, error);
                }
            }
        }

        outcomes
    }
}
