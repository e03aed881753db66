use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{error, info};

use super::model::ResponseEnvelope;
use crate::errors::ParamError;

/// Delivers the response envelope back to CloudFormation.
#[async_trait]
pub trait ResponseSink: Send + Sync {
    async fn send(
        &self,
        response_url: &str,
        envelope: &ResponseEnvelope,
    ) -> Result<(), ParamError>;
}

/// Serializes the envelope and builds the headers the presigned S3 URL expects.
///
/// The URL is signed without a content type, so the header is sent empty.
///
/// # Errors
///
/// Returns an error if the envelope cannot be serialized.
pub fn encode_envelope(envelope: &ResponseEnvelope) -> Result<(String, HeaderMap), ParamError> {
    let body = serde_json::to_string(envelope)?;
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(""));
    headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
    Ok((body, headers))
}

/// `ResponseSink` that PUTs the envelope with reqwest.
#[derive(Debug, Clone)]
pub struct HttpResponseSink {
    client: HttpClient,
}

impl HttpResponseSink {
    #[must_use]
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResponseSink for HttpResponseSink {
    async fn send(
        &self,
        response_url: &str,
        envelope: &ResponseEnvelope,
    ) -> Result<(), ParamError> {
        let (body, headers) = encode_envelope(envelope)?;
        let resp = self
            .client
            .put(response_url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        info!("Status code: {}", status);
        if !status.is_success() {
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!(
                "Callback PUT rejected: status={} body={}",
                status, body_text
            );
            return Err(ParamError::HttpError(format!(
                "callback returned status {status}"
            )));
        }
        Ok(())
    }
}
