mod console_notifier;
mod http_ocr_upload_service;
mod png_frame_encoder;

pub use console_notifier::ConsoleNotifier;
pub use http_ocr_upload_service::HttpOcrUploadService;
pub use png_frame_encoder::PngFrameEncoder;
