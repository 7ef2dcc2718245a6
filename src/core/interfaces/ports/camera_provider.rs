use std::sync::Arc;

use async_trait::async_trait;

use crate::core::models::{CameraError, MediaConstraints, VideoFrame};

pub trait VideoStream: Send + Sync {
    fn latest_frame(&self) -> VideoFrame;
    fn stop(&self);
}

#[async_trait]
pub trait CameraProvider: Send + Sync {
    async fn request_stream(
        &self,
        constraints: MediaConstraints,
    ) -> Result<Arc<dyn VideoStream>, CameraError>;
}
