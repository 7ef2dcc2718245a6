mod camera_provider;
mod user_notifier;

pub use camera_provider::{CameraProvider, VideoStream};
pub use user_notifier::UserNotifier;
