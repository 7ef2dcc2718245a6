mod frame_encoder;
mod ocr_upload_service;

pub use frame_encoder::FrameEncoder;
pub use ocr_upload_service::OcrUploadService;
