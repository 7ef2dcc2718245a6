use async_trait::async_trait;

use crate::core::models::{CaptureError, VideoFrame};

#[async_trait]
pub trait FrameEncoder: Send + Sync {
    async fn encode_frame(&self, frame: VideoFrame) -> Result<Vec<u8>, CaptureError>;
}
