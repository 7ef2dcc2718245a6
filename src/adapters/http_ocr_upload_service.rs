use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::core::interfaces::adapters::OcrUploadService;
use crate::core::models::{CaptureError, CapturedImage, UploadResponseBody, UploadResult};
use crate::global_constants::{LOG_TAG_HTTP, UPLOAD_FIELD_NAME, UPLOAD_MIME_TYPE};

pub struct HttpOcrUploadService {
    client: reqwest::Client,
    endpoint_url: String,
}

impl HttpOcrUploadService {
    pub fn new(endpoint_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint_url,
        }
    }

    fn build_form(image: &CapturedImage) -> Result<Form, CaptureError> {
        let image_part = Part::bytes(image.png_bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(UPLOAD_MIME_TYPE)
            .map_err(|error| CaptureError::Transport(error.to_string()))?;

        Ok(Form::new().part(UPLOAD_FIELD_NAME, image_part))
    }
}

#[async_trait]
impl OcrUploadService for HttpOcrUploadService {
    async fn upload_image(&self, image: &CapturedImage) -> Result<UploadResult, CaptureError> {
        log::info!(
            "{} Uploading {} ({} bytes) to {}",
            LOG_TAG_HTTP,
            image.file_name(),
            image.size_in_bytes(),
            self.endpoint_url
        );

        let form = Self::build_form(image)?;
        let response = self
            .client
            .post(&self.endpoint_url)
            .multipart(form)
            .send()
            .await
            .map_err(|error| CaptureError::Transport(error.to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|error| CaptureError::Transport(error.to_string()))?;
        log::debug!("{} Server response ({}): {}", LOG_TAG_HTTP, status, response_text);

        let body: UploadResponseBody = serde_json::from_str(&response_text)
            .map_err(|error| CaptureError::MalformedResponse(error.to_string()))?;

        if let Some(message) = body.message.as_deref() {
            log::info!("{} Server message: {}", LOG_TAG_HTTP, message);
        }

        Ok(UploadResult::from_response(
            status.is_success(),
            &status.to_string(),
            body,
        ))
    }
}
