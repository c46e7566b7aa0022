use std::sync::Arc;

use metrics::counter;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::application::session::Session;
use crate::config::ApiSettings;
use crate::domain::payload::{FormPayload, PayloadEncoding};
use crate::infra::telemetry::{API_FAILURES_TOTAL, API_REQUESTS_TOTAL};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status(),
            _ => None,
        }
    }
}

/// The one HTTP client of the process. The bearer token is read from the
/// session on every request, so login and logout take effect immediately.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base: Url,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings, session: Arc<Session>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(settings.timeout)
            .build()?;
        Ok(Self {
            client,
            base: settings.base_url.clone(),
            session,
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("catalog-admin/", env!("CARGO_PKG_VERSION"))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(ApiError::Url)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.client.get(self.url(path)?);
        let bytes = self.execute(Method::GET, path, req).await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Sends a create or update submission. The response body is discarded;
    /// callers re-fetch to pick up server-computed fields.
    pub async fn send_form(
        &self,
        method: Method,
        path: &str,
        payload: &FormPayload,
        encoding: PayloadEncoding,
    ) -> Result<(), ApiError> {
        let req = self.client.request(method.clone(), self.url(path)?);
        let req = match encoding {
            PayloadEncoding::Json => req.json(&payload.to_json()),
            PayloadEncoding::Multipart => req.multipart(multipart_form(payload)?),
        };
        self.execute(method, path, req).await?;
        Ok(())
    }

    pub async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let req = self.client.put(self.url(path)?).json(body);
        self.execute(Method::PUT, path, req).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let req = self.client.delete(self.url(path)?);
        self.execute(Method::DELETE, path, req).await?;
        Ok(())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        req: RequestBuilder,
    ) -> Result<Vec<u8>, ApiError> {
        let req = match self.session.bearer() {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        counter!(API_REQUESTS_TOTAL, "method" => method.as_str().to_owned()).increment(1);
        debug!(%method, path, "sending request");

        let result = Self::read(req).await;
        if let Err(err) = &result {
            counter!(API_FAILURES_TOTAL, "method" => method.as_str().to_owned()).increment(1);
            warn!(%method, path, error = %err, "request failed");
        }
        result
    }

    async fn read(req: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            return Err(ApiError::Status { status, body });
        }
        Ok(bytes.to_vec())
    }
}

fn multipart_form(payload: &FormPayload) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for (name, value) in payload.fields() {
        form = form.text(*name, value.clone());
    }
    if let Some(upload) = payload.upload() {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)?;
        form = form.part(FormPayload::IMAGE_FIELD, part);
    }
    Ok(form)
}
