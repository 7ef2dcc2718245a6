use serde::{Deserialize, Serialize};

use crate::global_constants::{NOTIFICATION_ERROR_PREFIX, NOTIFICATION_TEXT_PREFIX};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UploadResponseBody {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadResult {
    Text(String),
    ServerError(String),
}

impl UploadResult {
    /// 2xx maps to the `text` field, anything else to the `error` field.
    pub fn from_response(is_success_status: bool, status_text: &str, body: UploadResponseBody) -> Self {
        if is_success_status {
            UploadResult::Text(body.text.unwrap_or_default())
        } else {
            UploadResult::ServerError(body.error.unwrap_or_else(|| status_text.to_string()))
        }
    }

    pub fn notification_message(&self) -> String {
        match self {
            UploadResult::Text(text) => format!("{}{}", NOTIFICATION_TEXT_PREFIX, text),
            UploadResult::ServerError(error) => format!("{}{}", NOTIFICATION_ERROR_PREFIX, error),
        }
    }
}
