use async_trait::async_trait;
use image::{DynamicImage, RgbaImage};

use crate::core::interfaces::adapters::FrameEncoder;
use crate::core::models::{CaptureError, VideoFrame};
use crate::global_constants::LOG_TAG_ENCODER;

pub struct PngFrameEncoder;

impl PngFrameEncoder {
    pub fn new() -> Self {
        Self
    }

    fn encode_frame_blocking(frame: VideoFrame) -> Result<Vec<u8>, CaptureError> {
        let (width, height) = (frame.width, frame.height);
        let rgba_image = RgbaImage::from_raw(width, height, frame.into_raw_rgba())
            .ok_or_else(|| CaptureError::Encoding("Failed to create image from raw data".to_string()))?;

        let mut buffer = Vec::new();
        DynamicImage::ImageRgba8(rgba_image)
            .write_to(&mut std::io::Cursor::new(&mut buffer), image::ImageFormat::Png)
            .map_err(|error| CaptureError::Encoding(error.to_string()))?;

        log::debug!(
            "{} encoded {}x{} frame into {} bytes",
            LOG_TAG_ENCODER,
            width,
            height,
            buffer.len()
        );
        Ok(buffer)
    }
}

#[async_trait]
impl FrameEncoder for PngFrameEncoder {
    async fn encode_frame(&self, frame: VideoFrame) -> Result<Vec<u8>, CaptureError> {
        tokio::task::spawn_blocking(move || Self::encode_frame_blocking(frame))
            .await
            .map_err(|error| CaptureError::Encoding(format!("encoder task failed: {}", error)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[tokio::test]
    async fn test_encode_frame_produces_png_with_same_dimensions() {
        let raw = vec![200u8; 640 * 480 * 4];
        let frame = VideoFrame::build_from_raw_data(640, 480, raw).unwrap();

        let png_bytes = PngFrameEncoder::new().encode_frame(frame).await.unwrap();

        assert_eq!(&png_bytes[..8], &PNG_SIGNATURE);
        let decoded = image::load_from_memory(&png_bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (640, 480));
    }

    #[tokio::test]
    async fn test_encode_frame_preserves_pixels() {
        let raw = vec![10, 20, 30, 255, 40, 50, 60, 255];
        let frame = VideoFrame::build_from_raw_data(2, 1, raw.clone()).unwrap();

        let png_bytes = PngFrameEncoder::new().encode_frame(frame).await.unwrap();

        let decoded = image::load_from_memory(&png_bytes).unwrap().to_rgba8();
        assert_eq!(decoded.into_raw(), raw);
    }
}
