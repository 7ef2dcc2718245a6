#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaConstraints {
    pub video: bool,
    pub audio: bool,
}

impl MediaConstraints {
    pub fn video_only() -> Self {
        Self {
            video: true,
            audio: false,
        }
    }
}
