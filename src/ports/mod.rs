mod capture_trigger_listener;
#[cfg(feature = "native-camera")]
mod nokhwa_camera;
mod still_image_camera;
#[cfg(not(feature = "native-camera"))]
mod unavailable_camera;

pub use capture_trigger_listener::{CaptureTriggerEvent, CaptureTriggerListener};
#[cfg(feature = "native-camera")]
pub use nokhwa_camera::NokhwaCamera;
pub use still_image_camera::StillImageCamera;
#[cfg(not(feature = "native-camera"))]
pub use unavailable_camera::UnavailableCamera;
