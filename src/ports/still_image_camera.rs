use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::interfaces::ports::{CameraProvider, VideoStream};
use crate::core::models::{CameraError, MediaConstraints, VideoFrame};
use crate::global_constants::LOG_TAG_CAMERA;

pub struct StillImageCamera {
    image_path: PathBuf,
}

impl StillImageCamera {
    pub fn initialize(image_path: PathBuf) -> Self {
        log::debug!(
            "{} initializing still image camera from {:?}",
            LOG_TAG_CAMERA,
            image_path
        );
        Self { image_path }
    }

    fn map_io_error(&self, error: std::io::Error) -> CameraError {
        let detail = format!("{}: {}", self.image_path.display(), error);
        match error.kind() {
            std::io::ErrorKind::NotFound => CameraError::NoDevice(detail),
            std::io::ErrorKind::PermissionDenied => CameraError::PermissionDenied(detail),
            std::io::ErrorKind::ResourceBusy => CameraError::DeviceBusy(detail),
            _ => CameraError::Other(detail),
        }
    }

    fn decode_frame(&self, encoded: &[u8]) -> Result<VideoFrame, CameraError> {
        let decoded = image::load_from_memory(encoded)
            .map_err(|error| CameraError::Other(format!("{}: {}", self.image_path.display(), error)))?
            .to_rgba8();

        let (width, height) = decoded.dimensions();
        VideoFrame::build_from_raw_data(width, height, decoded.into_raw())
            .map_err(|error| CameraError::Other(error.to_string()))
    }
}

#[async_trait]
impl CameraProvider for StillImageCamera {
    async fn request_stream(
        &self,
        constraints: MediaConstraints,
    ) -> Result<Arc<dyn VideoStream>, CameraError> {
        if !constraints.video {
            return Err(CameraError::VideoNotRequested);
        }

        let encoded = tokio::fs::read(&self.image_path)
            .await
            .map_err(|error| self.map_io_error(error))?;
        let frame = self.decode_frame(&encoded)?;

        log::info!(
            "{} still image stream ready: {}x{}",
            LOG_TAG_CAMERA,
            frame.width,
            frame.height
        );

        Ok(Arc::new(StillImageStream {
            frame,
            is_stopped: AtomicBool::new(false),
        }))
    }
}

struct StillImageStream {
    frame: VideoFrame,
    is_stopped: AtomicBool,
}

impl VideoStream for StillImageStream {
    fn latest_frame(&self) -> VideoFrame {
        if self.is_stopped.load(Ordering::SeqCst) {
            return VideoFrame::empty();
        }
        self.frame.clone()
    }

    fn stop(&self) {
        self.is_stopped.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_test_png(width: u32, height: u32) -> PathBuf {
        let path = std::env::temp_dir().join(format!("still-camera-{}.png", uuid::Uuid::new_v4()));
        image::RgbaImage::from_pixel(width, height, image::Rgba([255, 255, 255, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[tokio::test]
    async fn test_stream_frame_matches_image_dimensions() {
        let path = write_test_png(640, 480);
        let camera = StillImageCamera::initialize(path.clone());

        let stream = camera
            .request_stream(MediaConstraints::video_only())
            .await
            .unwrap();

        let frame = stream.latest_frame();
        assert_eq!((frame.width, frame.height), (640, 480));

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_missing_file_is_reported_as_no_device() {
        let camera = StillImageCamera::initialize(PathBuf::from("/nonexistent/frame.png"));

        let result = camera.request_stream(MediaConstraints::video_only()).await;

        assert!(matches!(result, Err(CameraError::NoDevice(_))));
    }

    #[tokio::test]
    async fn test_undecodable_file_is_reported_as_other_error() {
        let path = std::env::temp_dir().join(format!("still-camera-{}.png", uuid::Uuid::new_v4()));
        std::fs::write(&path, b"not an image").unwrap();
        let camera = StillImageCamera::initialize(path.clone());

        let result = camera.request_stream(MediaConstraints::video_only()).await;

        assert!(matches!(result, Err(CameraError::Other(_))));
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_audio_only_constraints_are_rejected() {
        let camera = StillImageCamera::initialize(PathBuf::from("unused.png"));
        let constraints = MediaConstraints {
            video: false,
            audio: true,
        };

        let result = camera.request_stream(constraints).await;

        assert!(matches!(result, Err(CameraError::VideoNotRequested)));
    }

    #[tokio::test]
    async fn test_stopped_stream_yields_empty_frames() {
        let path = write_test_png(4, 4);
        let stream = StillImageCamera::initialize(path.clone())
            .request_stream(MediaConstraints::video_only())
            .await
            .unwrap();

        stream.stop();

        assert!(stream.latest_frame().is_empty());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_busy_image_source_is_reported_as_device_busy() {
        let camera = StillImageCamera::initialize(PathBuf::from("/dev/locked-frame.png"));

        let error = camera.map_io_error(std::io::Error::from(std::io::ErrorKind::ResourceBusy));

        assert!(matches!(error, CameraError::DeviceBusy(_)));
        assert!(error.to_string().contains("/dev/locked-frame.png"));
    }
}
