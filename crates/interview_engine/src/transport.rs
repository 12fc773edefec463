use interview_core::UploadOutcome;
use interview_logging::{client_debug, client_warn};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{TransportError, TransportErrorKind, TransportSettings};

/// Network contract used by the upload pipeline.
#[async_trait::async_trait]
pub trait ResumeTransport: Send + Sync {
    /// Lightweight health check. Never fails: any error reports `false`.
    async fn probe_health(&self) -> bool;

    /// Sends `bytes` as the single multipart part `file` and decodes the
    /// analysis. Exactly one exchange, no retries.
    async fn upload(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        content_type: &str,
    ) -> Result<UploadOutcome, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base: Url,
}

impl ReqwestTransport {
    pub fn new(settings: &TransportSettings) -> Result<Self, TransportError> {
        let base = settings
            .base()
            .map_err(|err| TransportError::new(TransportErrorKind::InvalidRequest, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| TransportError::new(TransportErrorKind::Network, err.to_string()))?;
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        self.base
            .join(path)
            .map_err(|err| TransportError::new(TransportErrorKind::InvalidRequest, err.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        let url = self.endpoint(path)?;
        client_debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, TransportError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        client_debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json(response).await
    }
}

#[async_trait::async_trait]
impl ResumeTransport for ReqwestTransport {
    async fn probe_health(&self) -> bool {
        let url = match self.endpoint("health") {
            Ok(url) => url,
            Err(err) => {
                client_warn!("Health probe could not build url: {}", err);
                return false;
            }
        };
        match self.client.get(url).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                client_warn!("Health probe returned {}", response.status());
                false
            }
            Err(err) => {
                client_warn!("Health probe failed: {}", err);
                false
            }
        }
    }

    async fn upload(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        content_type: &str,
    ) -> Result<UploadOutcome, TransportError> {
        let url = self.endpoint("resume/upload")?;
        let byte_len = bytes.len();
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(content_type)
            .map_err(|err| TransportError::new(TransportErrorKind::InvalidRequest, err.to_string()))?;
        let form = Form::new().part("file", part);

        client_debug!("POST {} bytes={} filename={}", url, byte_len, filename);
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json(response).await
    }
}

/// Checks the status and decodes a JSON body. Non-2xx responses keep the raw
/// body on the error for diagnostics.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, TransportError> {
    let status = response.status();
    if !status.is_success() {
        let body = match response.text().await {
            Ok(text) if !text.is_empty() => text,
            _ => "(no body)".to_string(),
        };
        client_debug!("HTTP {} body={}", status.as_u16(), body);
        return Err(TransportError::new(
            TransportErrorKind::HttpStatus(status.as_u16()),
            status.to_string(),
        )
        .with_body(body));
    }

    let bytes = response.bytes().await.map_err(map_reqwest_error)?;
    if bytes.is_empty() {
        return Err(TransportError::new(
            TransportErrorKind::InvalidBody,
            "empty response body",
        ));
    }
    serde_json::from_slice(&bytes)
        .map_err(|err| TransportError::new(TransportErrorKind::InvalidBody, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::new(TransportErrorKind::Timeout, err.to_string());
    }
    TransportError::new(TransportErrorKind::Network, err.to_string())
}
