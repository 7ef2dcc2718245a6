use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::{Camera, NokhwaError};

use crate::core::interfaces::ports::{CameraProvider, VideoStream};
use crate::core::models::{CameraError, MediaConstraints, VideoFrame};
use crate::global_constants::{
    CAMERA_FRAME_RETRY_DELAY_MS, CAMERA_MAX_CONSECUTIVE_FRAME_FAILURES, LOG_TAG_CAMERA,
};

pub struct NokhwaCamera {
    device_index: u32,
}

impl NokhwaCamera {
    pub fn initialize(device_index: u32) -> Self {
        log::debug!(
            "{} initializing native camera #{}",
            LOG_TAG_CAMERA,
            device_index
        );
        Self { device_index }
    }

    fn open_camera(device_index: u32) -> Result<Camera, CameraError> {
        let requested_format =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);

        let mut camera = Camera::new(CameraIndex::Index(device_index), requested_format)
            .map_err(map_nokhwa_error)?;
        camera.open_stream().map_err(map_nokhwa_error)?;

        let resolution = camera.resolution();
        log::info!(
            "{} opened camera #{} at {}x{}",
            LOG_TAG_CAMERA,
            device_index,
            resolution.width(),
            resolution.height()
        );
        Ok(camera)
    }

    fn read_frame(camera: &mut Camera) -> Result<VideoFrame, CameraError> {
        let decoded = camera
            .frame()
            .and_then(|buffer| buffer.decode_image::<RgbFormat>())
            .map_err(map_nokhwa_error)?;

        let (width, height) = (decoded.width(), decoded.height());
        let rgba: Vec<u8> = decoded
            .into_raw()
            .chunks_exact(3)
            .flat_map(|pixel| [pixel[0], pixel[1], pixel[2], 255])
            .collect();

        VideoFrame::build_from_raw_data(width, height, rgba)
            .map_err(|error| CameraError::Other(error.to_string()))
    }

    fn run_capture_loop(
        mut camera: Camera,
        latest_frame: Arc<RwLock<VideoFrame>>,
        is_stopped: Arc<AtomicBool>,
    ) {
        run_frame_loop(
            || Self::read_frame(&mut camera),
            &latest_frame,
            &is_stopped,
            FrameRetryPolicy::default(),
        );

        if let Err(error) = camera.stop_stream() {
            log::warn!("{} failed to stop camera stream: {}", LOG_TAG_CAMERA, error);
        }
        log::info!("{} camera stream stopped", LOG_TAG_CAMERA);
    }
}

#[derive(Debug, Clone, Copy)]
struct FrameRetryPolicy {
    max_consecutive_failures: usize,
    retry_delay: Duration,
}

impl Default for FrameRetryPolicy {
    fn default() -> Self {
        Self {
            max_consecutive_failures: CAMERA_MAX_CONSECUTIVE_FRAME_FAILURES,
            retry_delay: Duration::from_millis(CAMERA_FRAME_RETRY_DELAY_MS),
        }
    }
}

#[derive(Debug, PartialEq)]
enum FrameLoopExit {
    Stopped,
    GaveUp,
}

fn run_frame_loop<F>(
    mut read_frame: F,
    latest_frame: &RwLock<VideoFrame>,
    is_stopped: &AtomicBool,
    policy: FrameRetryPolicy,
) -> FrameLoopExit
where
    F: FnMut() -> Result<VideoFrame, CameraError>,
{
    let mut consecutive_failures = 0;

    while !is_stopped.load(Ordering::SeqCst) {
        match read_frame() {
            Ok(frame) => {
                consecutive_failures = 0;
                if let Ok(mut slot) = latest_frame.write() {
                    *slot = frame;
                }
            }
            Err(error) => {
                consecutive_failures += 1;
                if consecutive_failures >= policy.max_consecutive_failures {
                    log::error!(
                        "{} giving up after {} consecutive frame failures, last: {}",
                        LOG_TAG_CAMERA,
                        consecutive_failures,
                        error
                    );
                    if let Ok(mut slot) = latest_frame.write() {
                        *slot = VideoFrame::empty();
                    }
                    return FrameLoopExit::GaveUp;
                }
                log::debug!("{} dropped frame: {}", LOG_TAG_CAMERA, error);
                std::thread::sleep(policy.retry_delay);
            }
        }
    }

    FrameLoopExit::Stopped
}

fn map_nokhwa_error(error: NokhwaError) -> CameraError {
    let detail = error.to_string();
    let lowered = detail.to_lowercase();

    if lowered.contains("permission") || lowered.contains("denied") {
        CameraError::PermissionDenied(detail)
    } else if lowered.contains("busy") {
        CameraError::DeviceBusy(detail)
    } else if matches!(error, NokhwaError::OpenDeviceError(..)) {
        CameraError::NoDevice(detail)
    } else {
        CameraError::Other(detail)
    }
}

#[async_trait]
impl CameraProvider for NokhwaCamera {
    async fn request_stream(
        &self,
        constraints: MediaConstraints,
    ) -> Result<Arc<dyn VideoStream>, CameraError> {
        if !constraints.video {
            return Err(CameraError::VideoNotRequested);
        }

        let device_index = self.device_index;
        let latest_frame = Arc::new(RwLock::new(VideoFrame::empty()));
        let is_stopped = Arc::new(AtomicBool::new(false));
        let (opened_sender, opened_receiver) = oneshot::channel();

        let thread_frame = Arc::clone(&latest_frame);
        let thread_stopped = Arc::clone(&is_stopped);
        std::thread::spawn(move || match Self::open_camera(device_index) {
            Ok(camera) => {
                if opened_sender.send(Ok(())).is_ok() {
                    Self::run_capture_loop(camera, thread_frame, thread_stopped);
                }
            }
            Err(error) => {
                let _ = opened_sender.send(Err(error));
            }
        });

        opened_receiver
            .await
            .map_err(|_| CameraError::Other("camera thread exited before opening".to_string()))??;

        Ok(Arc::new(NokhwaStream {
            latest_frame,
            is_stopped,
        }))
    }
}

struct NokhwaStream {
    latest_frame: Arc<RwLock<VideoFrame>>,
    is_stopped: Arc<AtomicBool>,
}

impl VideoStream for NokhwaStream {
    fn latest_frame(&self) -> VideoFrame {
        self.latest_frame
            .read()
            .map(|frame| frame.clone())
            .unwrap_or_else(|_| VideoFrame::empty())
    }

    fn stop(&self) {
        self.is_stopped.store(true, Ordering::SeqCst);
    }
}

impl Drop for NokhwaStream {
    fn drop(&mut self) {
        self.stop();
    }
}
