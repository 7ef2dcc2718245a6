use std::sync::Arc;

use async_trait::async_trait;

use crate::core::interfaces::ports::{CameraProvider, VideoStream};
use crate::core::models::{CameraError, MediaConstraints};
use crate::global_constants::LOG_TAG_CAMERA;

pub struct UnavailableCamera {
    device_index: u32,
}

impl UnavailableCamera {
    pub fn initialize(device_index: u32) -> Self {
        log::warn!(
            "{} native camera support not compiled in (enable the native-camera feature)",
            LOG_TAG_CAMERA
        );
        Self { device_index }
    }
}

#[async_trait]
impl CameraProvider for UnavailableCamera {
    async fn request_stream(
        &self,
        _constraints: MediaConstraints,
    ) -> Result<Arc<dyn VideoStream>, CameraError> {
        Err(CameraError::NoDevice(format!(
            "camera device #{} requires the native-camera feature",
            self.device_index
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_request_stream_reports_no_device() {
        let camera = UnavailableCamera::initialize(0);

        let result = camera.request_stream(MediaConstraints::video_only()).await;

        assert!(matches!(result, Err(CameraError::NoDevice(_))));
    }
}
