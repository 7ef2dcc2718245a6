use std::time::{SystemTime, UNIX_EPOCH};

use crate::global_constants::{UPLOAD_FILE_EXTENSION, UPLOAD_FILE_PREFIX};

#[derive(Clone)]
pub struct CapturedImage {
    file_name: String,
    png_bytes: Vec<u8>,
}

impl std::fmt::Debug for CapturedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapturedImage")
            .field("file_name", &self.file_name)
            .field("bytes", &self.png_bytes.len())
            .finish()
    }
}

impl CapturedImage {
    pub fn build(png_bytes: Vec<u8>, captured_at_millis: u128) -> Self {
        Self {
            file_name: Self::file_name_for_timestamp(captured_at_millis),
            png_bytes,
        }
    }

    pub fn file_name_for_timestamp(captured_at_millis: u128) -> String {
        format!(
            "{}{}{}",
            UPLOAD_FILE_PREFIX, captured_at_millis, UPLOAD_FILE_EXTENSION
        )
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png_bytes
    }

    pub fn size_in_bytes(&self) -> usize {
        self.png_bytes.len()
    }
}

pub fn current_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}
