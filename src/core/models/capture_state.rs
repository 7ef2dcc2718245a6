use std::fmt;

use uuid::Uuid;

use crate::core::models::UploadResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Encoding,
    Uploading,
    Done,
    Failed,
}

impl fmt::Display for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureState::Idle => write!(f, "Idle"),
            CaptureState::Encoding => write!(f, "Encoding"),
            CaptureState::Uploading => write!(f, "Uploading"),
            CaptureState::Done => write!(f, "Done"),
            CaptureState::Failed => write!(f, "Failed"),
        }
    }
}

impl CaptureState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, CaptureState::Done | CaptureState::Failed)
    }

    pub fn can_transition_to(&self, next: CaptureState) -> bool {
        matches!(
            (self, next),
            (CaptureState::Idle, CaptureState::Encoding)
                | (CaptureState::Encoding, CaptureState::Uploading)
                | (CaptureState::Encoding, CaptureState::Failed)
                | (CaptureState::Uploading, CaptureState::Done)
                | (CaptureState::Uploading, CaptureState::Failed)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTicket {
    pub id: Uuid,
    pub triggered_at_millis: u128,
}

impl CaptureTicket {
    pub fn issue(triggered_at_millis: u128) -> Self {
        Self {
            id: Uuid::new_v4(),
            triggered_at_millis,
        }
    }

    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

#[derive(Debug)]
pub struct CaptureProgress {
    ticket: CaptureTicket,
    state: CaptureState,
}

impl CaptureProgress {
    pub fn start(ticket: CaptureTicket) -> Self {
        Self {
            ticket,
            state: CaptureState::Idle,
        }
    }

    pub fn ticket(&self) -> &CaptureTicket {
        &self.ticket
    }

    pub fn advance(&mut self, next: CaptureState) {
        if !self.state.can_transition_to(next) {
            log::warn!(
                "[CAPTURE_STATE] {} unexpected transition {} -> {}",
                self.ticket.short_id(),
                self.state,
                next
            );
        } else {
            log::debug!(
                "[CAPTURE_STATE] {} {} -> {}",
                self.ticket.short_id(),
                self.state,
                next
            );
        }
        self.state = next;
    }

    pub fn finish(self, result: Option<UploadResult>) -> CaptureOutcome {
        if !self.state.is_terminal() {
            log::warn!(
                "[CAPTURE_STATE] {} finished while still {}",
                self.ticket.short_id(),
                self.state
            );
        }
        CaptureOutcome {
            ticket: self.ticket,
            final_state: self.state,
            result,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CaptureOutcome {
    pub ticket: CaptureTicket,
    pub final_state: CaptureState,
    pub result: Option<UploadResult>,
}
