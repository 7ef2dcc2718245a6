use std::sync::Arc;

use crate::core::interfaces::ports::CameraProvider;
use crate::core::models::{MediaConstraints, VideoSurface};
use crate::global_constants::LOG_TAG_ACQUIRER;

pub struct StreamAcquirer {
    camera_provider: Arc<dyn CameraProvider>,
    surface: VideoSurface,
}

impl StreamAcquirer {
    pub fn build(camera_provider: Arc<dyn CameraProvider>, surface: VideoSurface) -> Self {
        Self {
            camera_provider,
            surface,
        }
    }

    pub async fn acquire_stream(&self) -> bool {
        let constraints = MediaConstraints::video_only();
        log::info!(
            "{} requesting camera stream (video={}, audio={})",
            LOG_TAG_ACQUIRER,
            constraints.video,
            constraints.audio
        );

        match self.camera_provider.request_stream(constraints).await {
            Ok(stream) => {
                let preview = stream.latest_frame();
                log::info!(
                    "{} stream attached, current frame {}x{}",
                    LOG_TAG_ACQUIRER,
                    preview.width,
                    preview.height
                );
                self.surface.attach(stream);
                true
            }
            Err(error) => {
                log::error!("{} Error accessing camera: {}", LOG_TAG_ACQUIRER, error);
                false
            }
        }
    }
}
