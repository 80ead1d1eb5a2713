use async_trait::async_trait;
use contracts::domain::a001_upload_form::{FormInput, UploadResponse, UPLOAD_PATH};
use gloo_net::http::Request;
use thiserror::Error;

use crate::shared::api_utils::ApiConfig;

/// Причина неудачной отправки.
///
/// Нужна только для лога: форма показывает пользователю одно и то же
/// сообщение независимо от варианта.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Failed to send request: {0}")]
    Transport(String),
    #[error("Upload failed: HTTP {0}")]
    Status(u16),
    #[error("Failed to read response: {0}")]
    Decode(String),
}

/// Клиент отправки формы
#[async_trait(?Send)]
pub trait UploadApi {
    /// Одна попытка отправки, без повторов и таймаута
    async fn upload(&self, input: &FormInput) -> Result<UploadResponse, UploadError>;
}

/// HTTP-клиент: `POST {base}/upload` с JSON-телом
#[derive(Debug, Clone)]
pub struct HttpUploadApi {
    url: String,
}

impl HttpUploadApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            url: config.url(UPLOAD_PATH),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl UploadApi for HttpUploadApi {
    async fn upload(&self, input: &FormInput) -> Result<UploadResponse, UploadError> {
        let response = Request::post(&self.url)
            .header("Content-Type", "application/json")
            .json(input)
            .map_err(|e| UploadError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(UploadError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Decode(e.to_string()))?;

        Ok(parse_response_body(&body))
    }
}

/// Тело успешного ответа: JSON, если разбирается, иначе строка как есть.
/// Пустое тело даёт `null`.
pub fn parse_response_body(body: &str) -> UploadResponse {
    if body.trim().is_empty() {
        return UploadResponse::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| UploadResponse::String(body.to_string()))
}
