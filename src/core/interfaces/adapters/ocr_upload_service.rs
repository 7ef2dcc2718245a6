use async_trait::async_trait;

use crate::core::models::{CaptureError, CapturedImage, UploadResult};

#[async_trait]
pub trait OcrUploadService: Send + Sync {
    async fn upload_image(&self, image: &CapturedImage) -> Result<UploadResult, CaptureError>;
}
