use std::sync::Arc;

use crate::core::interfaces::adapters::{FrameEncoder, OcrUploadService};
use crate::core::interfaces::ports::UserNotifier;
use crate::core::models::{
    current_unix_millis, CaptureError, CaptureOutcome, CaptureProgress, CaptureState,
    CaptureTicket, CapturedImage, UploadResult, VideoSurface,
};
use crate::global_constants::LOG_TAG_UPLOADER;

pub struct FrameUploader {
    surface: VideoSurface,
    frame_encoder: Arc<dyn FrameEncoder>,
    upload_service: Arc<dyn OcrUploadService>,
    notifier: Arc<dyn UserNotifier>,
}

impl FrameUploader {
    pub fn build(
        surface: VideoSurface,
        frame_encoder: Arc<dyn FrameEncoder>,
        upload_service: Arc<dyn OcrUploadService>,
        notifier: Arc<dyn UserNotifier>,
    ) -> Self {
        Self {
            surface,
            frame_encoder,
            upload_service,
            notifier,
        }
    }

    pub async fn capture_and_upload(&self, ticket: CaptureTicket) -> CaptureOutcome {
        let mut progress = CaptureProgress::start(ticket);

        progress.advance(CaptureState::Encoding);
        let captured_image = match self.capture_image(progress.ticket()).await {
            Ok(image) => image,
            Err(error) => {
                log::error!(
                    "{} {} capture failed: {}",
                    LOG_TAG_UPLOADER,
                    progress.ticket().short_id(),
                    error
                );
                progress.advance(CaptureState::Failed);
                return progress.finish(None);
            }
        };

        progress.advance(CaptureState::Uploading);
        match self.upload_service.upload_image(&captured_image).await {
            Ok(result) => {
                self.report_result(progress.ticket(), &result);
                progress.advance(CaptureState::Done);
                progress.finish(Some(result))
            }
            Err(error) => {
                log::error!(
                    "{} {} Error uploading image: {}",
                    LOG_TAG_UPLOADER,
                    progress.ticket().short_id(),
                    error
                );
                progress.advance(CaptureState::Failed);
                progress.finish(None)
            }
        }
    }

    async fn capture_image(&self, ticket: &CaptureTicket) -> Result<CapturedImage, CaptureError> {
        let frame = self.surface.current_frame();
        log::debug!(
            "{} {} sampled frame {}x{}",
            LOG_TAG_UPLOADER,
            ticket.short_id(),
            frame.width,
            frame.height
        );

        let png_bytes = if frame.is_empty() {
            log::warn!(
                "{} {} video surface has no frame, uploading an empty image",
                LOG_TAG_UPLOADER,
                ticket.short_id()
            );
            Vec::new()
        } else {
            self.frame_encoder.encode_frame(frame).await?
        };

        let captured_image = CapturedImage::build(png_bytes, current_unix_millis());
        log::info!(
            "{} {} encoded {} ({} bytes)",
            LOG_TAG_UPLOADER,
            ticket.short_id(),
            captured_image.file_name(),
            captured_image.size_in_bytes()
        );

        Ok(captured_image)
    }

    fn report_result(&self, ticket: &CaptureTicket, result: &UploadResult) {
        match result {
            UploadResult::Text(text) => {
                log::info!(
                    "{} {} Extracted Text: {}",
                    LOG_TAG_UPLOADER,
                    ticket.short_id(),
                    text
                );
            }
            UploadResult::ServerError(error) => {
                log::error!("{} {} Error: {}", LOG_TAG_UPLOADER, ticket.short_id(), error);
            }
        }

        self.notifier.notify(&result.notification_message());
    }
}
