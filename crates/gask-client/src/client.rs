use std::time::Instant;

use bytes::Bytes;
use serde_json::Value;
use tracing::{info, warn};
use wreq::{Method, Proxy};

use gask_protocol::{GenerateContentRequest, GenerateContentResponse};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult, TransportErrorKind};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GenerateClient {
    http: wreq::Client,
    config: ClientConfig,
}

impl GenerateClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let mut builder = wreq::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout);
        if let Some(proxy) = normalize_proxy(config.proxy.as_deref()) {
            builder = builder.proxy(Proxy::all(proxy).map_err(transport_failure)?);
        }
        let http = builder.build().map_err(transport_failure)?;
        Ok(Self { http, config })
    }

    /// Full endpoint URL with the API key appended as a query parameter.
    pub fn generate_url(&self, model: &str) -> String {
        let base = self
            .config
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/');
        format!(
            "{base}{}?key={}",
            generate_path(model),
            urlencoding::encode(&self.config.api_key)
        )
    }

    /// One POST, one parsed reply. The body is parsed as JSON regardless of
    /// status so provider error objects survive intact.
    pub async fn generate(
        &self,
        req: &GenerateContentRequest,
    ) -> ClientResult<GenerateContentResponse> {
        let url = self.generate_url(&req.path.model);
        let body = serde_json::to_vec(&req.body)?;

        let path = generate_path(&req.path.model);
        info!(
            event = "generate_request",
            method = "POST",
            path = %path,
            model = %req.path.model
        );
        let started = Instant::now();

        let response = self
            .http
            .request(Method::POST, &url)
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .body(Bytes::from(body))
            .send()
            .await
            .map_err(|err| {
                warn!(
                    event = "generate_response",
                    status = "error",
                    elapsed_ms = started.elapsed().as_millis(),
                    error = %err
                );
                transport_failure(err)
            })?;

        let status = response.status();
        info!(
            event = "generate_response",
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis()
        );

        let bytes = response.bytes().await.map_err(transport_failure)?;
        let value: Value = serde_json::from_slice(&bytes)?;
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body: value,
            });
        }
        Ok(serde_json::from_value(value)?)
    }
}

fn generate_path(model: &str) -> String {
    if model.starts_with("models/") {
        format!("/v1beta/{model}:generateContent")
    } else {
        format!("/v1beta/models/{model}:generateContent")
    }
}

fn normalize_proxy(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|item| !item.is_empty())
}

fn transport_failure(err: wreq::Error) -> ClientError {
    ClientError::Transport {
        kind: classify_wreq_error(&err),
        message: err.to_string(),
    }
}

fn classify_wreq_error(err: &wreq::Error) -> TransportErrorKind {
    let message = err.to_string().to_ascii_lowercase();
    if err.is_timeout() {
        return TransportErrorKind::Timeout;
    }
    if err.is_connect() {
        if message.contains("dns") || message.contains("resolve") {
            return TransportErrorKind::Dns;
        }
        if message.contains("tls") || message.contains("ssl") {
            return TransportErrorKind::Tls;
        }
        return TransportErrorKind::Connect;
    }
    if message.contains("tls") || message.contains("ssl") {
        return TransportErrorKind::Tls;
    }
    TransportErrorKind::Other
}
