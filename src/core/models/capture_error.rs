use thiserror::Error;

#[derive(Error, Debug)]
pub enum CameraError {
    #[error("Camera permission denied: {0}")]
    PermissionDenied(String),
    #[error("No camera device available: {0}")]
    NoDevice(String),
    #[error("Camera device busy: {0}")]
    DeviceBusy(String),
    #[error("Video capture is not enabled in the requested constraints")]
    VideoNotRequested,
    #[error("Camera error: {0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Failed to encode frame as PNG: {0}")]
    Encoding(String),
    #[error("Upload request failed: {0}")]
    Transport(String),
    #[error("OCR service returned a malformed response: {0}")]
    MalformedResponse(String),
}
