mod capture_orchestrator;
mod frame_uploader;
mod stream_acquirer;
#[cfg(test)]
pub(crate) mod test_doubles;

pub use capture_orchestrator::CaptureOrchestrator;
pub use frame_uploader::FrameUploader;
pub use stream_acquirer::StreamAcquirer;
