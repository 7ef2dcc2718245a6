#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "Frame OCR Capture";
pub const SETTINGS_DIRECTORY_NAME: &str = "frame-ocr-capture";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_ACQUIRER: &str = "[ACQUIRER]";
pub const LOG_TAG_UPLOADER: &str = "[UPLOADER]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_TRIGGER: &str = "[TRIGGER]";
pub const LOG_TAG_CAMERA: &str = "[CAMERA]";
pub const LOG_TAG_ENCODER: &str = "[PNG_ENCODER]";
pub const LOG_TAG_HTTP: &str = "[OCR_HTTP]";

pub const DEFAULT_UPLOAD_ENDPOINT_URL: &str = "http://localhost:5000/upload-image";
pub const DEFAULT_CAMERA_INDEX: u32 = 0;
pub const CAMERA_MAX_CONSECUTIVE_FRAME_FAILURES: usize = 50;
pub const CAMERA_FRAME_RETRY_DELAY_MS: u64 = 100;

pub const UPLOAD_FIELD_NAME: &str = "image";
pub const UPLOAD_FILE_PREFIX: &str = "captured_frame_";
pub const UPLOAD_FILE_EXTENSION: &str = ".png";
pub const UPLOAD_MIME_TYPE: &str = "image/png";

pub const NOTIFICATION_TEXT_PREFIX: &str = "Text extracted: ";
pub const NOTIFICATION_ERROR_PREFIX: &str = "Error: ";

pub const TRIGGER_COMMAND_CAPTURE: &str = "c";
pub const TRIGGER_COMMAND_QUIT: &str = "q";
pub const TRIGGER_COMMAND_QUIT_LONG: &str = "quit";

pub const STARTUP_BANNER: &str = r#"
╔════════════════════════════════════════════════════════╗
║  Frame OCR Capture                                     ║
║                                                        ║
║  Press Enter (or type c) to capture a frame            ║
║  Type q to quit                                        ║
║                                                        ║
╚════════════════════════════════════════════════════════╝
"#;
