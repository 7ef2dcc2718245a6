use anyhow::Result;

#[derive(Clone, PartialEq)]
pub struct VideoFrame {
    pub width: u32,
    pub height: u32,
    raw_data: Vec<u8>,
}

impl std::fmt::Debug for VideoFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.raw_data.len())
            .finish()
    }
}

impl VideoFrame {
    pub fn build_from_raw_data(width_pixels: u32, height_pixels: u32, raw_rgba_data: Vec<u8>) -> Result<Self> {
        let expected_length = width_pixels as usize * height_pixels as usize * 4;
        if raw_rgba_data.len() != expected_length {
            anyhow::bail!(
                "RGBA buffer holds {} bytes, expected {} for {}x{}",
                raw_rgba_data.len(),
                expected_length,
                width_pixels,
                height_pixels
            );
        }

        log::trace!("[VIDEO_FRAME] building frame: {}x{}", width_pixels, height_pixels);

        Ok(Self {
            width: width_pixels,
            height: height_pixels,
            raw_data: raw_rgba_data,
        })
    }

    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            raw_data: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn into_raw_rgba(self) -> Vec<u8> {
        self.raw_data
    }
}
