use std::sync::{Arc, RwLock};

use crate::core::interfaces::ports::VideoStream;
use crate::core::models::VideoFrame;

#[derive(Clone, Default)]
pub struct VideoSurface {
    stream_slot: Arc<RwLock<Option<Arc<dyn VideoStream>>>>,
}

impl std::fmt::Debug for VideoSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoSurface")
            .field("populated", &self.is_populated())
            .finish()
    }
}

impl VideoSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, stream: Arc<dyn VideoStream>) {
        let mut slot = self
            .stream_slot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(previous) = slot.replace(stream) {
            log::debug!("[VIDEO_SURFACE] replacing previously attached stream");
            previous.stop();
        }
    }

    pub fn is_populated(&self) -> bool {
        self.stream_slot
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    /// Samples the frame currently shown; an unpopulated surface yields an empty frame.
    pub fn current_frame(&self) -> VideoFrame {
        let slot = self
            .stream_slot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match slot.as_ref() {
            Some(stream) => stream.latest_frame(),
            None => VideoFrame::empty(),
        }
    }

    pub fn release(&self) {
        let mut slot = self
            .stream_slot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(stream) = slot.take() {
            log::info!("[VIDEO_SURFACE] stopping attached stream");
            stream.stop();
        }
    }
}
