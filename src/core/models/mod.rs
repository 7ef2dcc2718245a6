mod capture_error;
mod capture_state;
mod captured_image;
mod media_constraints;
mod upload_result;
mod user_settings;
mod video_frame;
mod video_surface;

pub use capture_error::{CameraError, CaptureError};
pub use capture_state::{CaptureOutcome, CaptureProgress, CaptureState, CaptureTicket};
pub use captured_image::{current_unix_millis, CapturedImage};
pub use media_constraints::MediaConstraints;
pub use upload_result::{UploadResponseBody, UploadResult};
pub use user_settings::{CameraSource, UserSettings};
pub use video_frame::VideoFrame;
pub use video_surface::VideoSurface;
