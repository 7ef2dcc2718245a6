use std::io::BufRead;

use futures::channel::mpsc;
use futures::Stream;

use crate::global_constants::{
    LOG_TAG_TRIGGER, TRIGGER_COMMAND_CAPTURE, TRIGGER_COMMAND_QUIT, TRIGGER_COMMAND_QUIT_LONG,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureTriggerEvent {
    Capture,
    Quit,
}

pub struct CaptureTriggerListener;

impl CaptureTriggerListener {
    pub fn create_event_stream() -> impl Stream<Item = CaptureTriggerEvent> {
        Self::create_event_stream_from(std::io::BufReader::new(std::io::stdin()))
    }

    /// Reads commands line by line on a background thread. End of input is
    /// delivered as `Quit`.
    pub fn create_event_stream_from<R>(reader: R) -> impl Stream<Item = CaptureTriggerEvent>
    where
        R: BufRead + Send + 'static,
    {
        let (event_sender, event_receiver) = mpsc::unbounded();

        std::thread::spawn(move || {
            log::info!("{} Starting capture trigger listener thread", LOG_TAG_TRIGGER);

            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(error) => {
                        log::error!("{} Failed to read input: {}", LOG_TAG_TRIGGER, error);
                        break;
                    }
                };

                if let Some(event) = parse_trigger_line(&line) {
                    let is_quit = event == CaptureTriggerEvent::Quit;
                    if event_sender.unbounded_send(event).is_err() || is_quit {
                        return;
                    }
                }
            }

            log::debug!("{} input closed", LOG_TAG_TRIGGER);
            let _ = event_sender.unbounded_send(CaptureTriggerEvent::Quit);
        });

        event_receiver
    }
}

fn parse_trigger_line(line: &str) -> Option<CaptureTriggerEvent> {
    let command = line.trim().to_lowercase();

    if command.is_empty() || command == TRIGGER_COMMAND_CAPTURE {
        log::debug!("{} capture requested", LOG_TAG_TRIGGER);
        Some(CaptureTriggerEvent::Capture)
    } else if command == TRIGGER_COMMAND_QUIT || command == TRIGGER_COMMAND_QUIT_LONG {
        log::debug!("{} quit requested", LOG_TAG_TRIGGER);
        Some(CaptureTriggerEvent::Quit)
    } else {
        log::warn!("{} ignoring unknown command {:?}", LOG_TAG_TRIGGER, command);
        None
    }
}
