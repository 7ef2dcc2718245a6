use std::sync::Arc;

use futures::{Stream, StreamExt};

use crate::adapters::{ConsoleNotifier, HttpOcrUploadService, PngFrameEncoder};
use crate::core::interfaces::adapters::{FrameEncoder, OcrUploadService};
use crate::core::interfaces::ports::{CameraProvider, UserNotifier};
use crate::core::models::{CameraSource, CaptureOutcome, UserSettings, VideoSurface};
use crate::core::orchestrators::{CaptureOrchestrator, FrameUploader, StreamAcquirer};
use crate::global_constants::LOG_TAG_APP;
use crate::ports::{CaptureTriggerEvent, StillImageCamera};

pub struct CaptureApp {
    surface: VideoSurface,
    stream_acquirer: StreamAcquirer,
    orchestrator: CaptureOrchestrator,
}

impl CaptureApp {
    pub fn build(settings: &UserSettings) -> Self {
        log::info!("{} Initializing application", LOG_TAG_APP);
        log::info!(
            "{} camera source: {}, upload endpoint: {}",
            LOG_TAG_APP,
            settings.camera_source,
            settings.upload_endpoint_url
        );

        Self::build_with(
            Self::build_camera_provider(&settings.camera_source),
            Arc::new(PngFrameEncoder::new()),
            Arc::new(HttpOcrUploadService::new(
                settings.upload_endpoint_url.clone(),
            )),
            Arc::new(ConsoleNotifier::stdout()),
        )
    }

    pub fn build_with(
        camera_provider: Arc<dyn CameraProvider>,
        frame_encoder: Arc<dyn FrameEncoder>,
        upload_service: Arc<dyn OcrUploadService>,
        notifier: Arc<dyn UserNotifier>,
    ) -> Self {
        let surface = VideoSurface::new();
        let stream_acquirer = StreamAcquirer::build(camera_provider, surface.clone());
        let uploader = FrameUploader::build(surface.clone(), frame_encoder, upload_service, notifier);

        Self {
            surface,
            stream_acquirer,
            orchestrator: CaptureOrchestrator::build(uploader),
        }
    }

    fn build_camera_provider(source: &CameraSource) -> Arc<dyn CameraProvider> {
        match source {
            CameraSource::StillImage { path } => Arc::new(StillImageCamera::initialize(path.clone())),
            #[cfg(feature = "native-camera")]
            CameraSource::Device { index } => Arc::new(crate::ports::NokhwaCamera::initialize(*index)),
            #[cfg(not(feature = "native-camera"))]
            CameraSource::Device { index } => {
                Arc::new(crate::ports::UnavailableCamera::initialize(*index))
            }
        }
    }

    pub async fn run<S>(&self, trigger_events: S) -> Vec<CaptureOutcome>
    where
        S: Stream<Item = CaptureTriggerEvent>,
    {
        if !self.stream_acquirer.acquire_stream().await {
            log::warn!(
                "{} continuing without a live stream; captures will be empty",
                LOG_TAG_APP
            );
        }

        futures::pin_mut!(trigger_events);
        while let Some(event) = trigger_events.next().await {
            match event {
                CaptureTriggerEvent::Capture => {
                    self.orchestrator.trigger_capture();
                }
                CaptureTriggerEvent::Quit => {
                    log::info!(
                        "{} quit requested with {} capture(s) in flight",
                        LOG_TAG_APP,
                        self.orchestrator.in_flight_count()
                    );
                    break;
                }
            }
        }

        let outcomes = self.orchestrator.wait_for_in_flight().await;
        self.surface.release();

        log::info!("{} exiting after {} pending capture(s)", LOG_TAG_APP, outcomes.len());
        outcomes
    }
}
