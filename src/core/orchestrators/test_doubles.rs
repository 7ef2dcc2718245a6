use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::core::interfaces::adapters::{FrameEncoder, OcrUploadService};
use crate::core::interfaces::ports::{CameraProvider, UserNotifier, VideoStream};
use crate::core::models::{
    CameraError, CaptureError, CapturedImage, MediaConstraints, UploadResult, VideoFrame,
    VideoSurface,
};

pub struct StaticStream {
    frame: VideoFrame,
}

impl StaticStream {
    pub fn sized(width: u32, height: u32) -> Arc<Self> {
        let raw = vec![128u8; (width * height * 4) as usize];
        Arc::new(Self {
            frame: VideoFrame::build_from_raw_data(width, height, raw).unwrap(),
        })
    }
}

impl VideoStream for StaticStream {
    fn latest_frame(&self) -> VideoFrame {
        self.frame.clone()
    }

    fn stop(&self) {}
}

pub fn populated_surface(width: u32, height: u32) -> VideoSurface {
    let surface = VideoSurface::new();
    surface.attach(StaticStream::sized(width, height));
    surface
}

#[derive(Default)]
pub struct MockFrameEncoder {
    pub encoded_dimensions: Mutex<Vec<(u32, u32)>>,
    pub should_fail: bool,
}

#[async_trait]
impl FrameEncoder for MockFrameEncoder {
    async fn encode_frame(&self, frame: VideoFrame) -> Result<Vec<u8>, CaptureError> {
        self.encoded_dimensions
            .lock()
            .unwrap()
            .push((frame.width, frame.height));
        if self.should_fail {
            return Err(CaptureError::Encoding("encoder failure in test".to_string()));
        }
        Ok(vec![0x89, b'P', b'N', b'G'])
    }
}

pub enum ScriptedResponse {
    Result(UploadResult),
    TransportFailure,
    MalformedBody,
}

pub struct MockOcrUploadService {
    script: Mutex<VecDeque<(Duration, ScriptedResponse)>>,
    pub uploaded_file_names: Mutex<Vec<String>>,
    pub uploaded_sizes: Mutex<Vec<usize>>,
}

impl MockOcrUploadService {
    pub fn scripted(responses: Vec<(Duration, ScriptedResponse)>) -> Self {
        Self {
            script: Mutex::new(responses.into_iter().collect()),
            uploaded_file_names: Mutex::new(Vec::new()),
            uploaded_sizes: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(response: ScriptedResponse) -> Self {
        Self::scripted(vec![(Duration::ZERO, response)])
    }

    pub fn upload_count(&self) -> usize {
        self.uploaded_file_names.lock().unwrap().len()
    }
}

#[async_trait]
impl OcrUploadService for MockOcrUploadService {
    async fn upload_image(&self, image: &CapturedImage) -> Result<UploadResult, CaptureError> {
        self.uploaded_file_names
            .lock()
            .unwrap()
            .push(image.file_name().to_string());
        self.uploaded_sizes.lock().unwrap().push(image.size_in_bytes());

        let next = self.script.lock().unwrap().pop_front();
        let (delay, response) = next.expect("no scripted response left");

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match response {
            ScriptedResponse::Result(result) => Ok(result),
            ScriptedResponse::TransportFailure => {
                Err(CaptureError::Transport("connection refused".to_string()))
            }
            ScriptedResponse::MalformedBody => {
                Err(CaptureError::MalformedResponse("expected value at line 1".to_string()))
            }
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn recorded(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl UserNotifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub struct MockCameraProvider {
    pub should_grant: bool,
}

#[async_trait]
impl CameraProvider for MockCameraProvider {
    async fn request_stream(
        &self,
        _constraints: MediaConstraints,
    ) -> Result<Arc<dyn VideoStream>, CameraError> {
        if self.should_grant {
            Ok(StaticStream::sized(640, 480))
        } else {
            Err(CameraError::PermissionDenied("denied in test".to_string()))
        }
    }
}
