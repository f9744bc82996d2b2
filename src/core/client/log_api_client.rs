use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::AppConfig;
use crate::core::client::client_error::ClientError;
use crate::core::client::log_api_client_trait::{LogApiClient, PageRequest, LOGS_PATH, UPLOAD_PATH};
use crate::domain::log::model::{LogGroup, LogRecord, LogUpload};

/// reqwest-backed [`LogApiClient`].
#[derive(Clone)]
pub struct HttpLogApiClient {
    client: Client,
    base_url: String,
}

impl HttpLogApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = cfg.http_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ClientError::Build)?;
        Ok(Self::with_client(client, cfg.api_base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, url: &str, req: reqwest::RequestBuilder) -> Result<Response, ClientError> {
        let resp = req.send().await.map_err(|source| ClientError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = resp.status();
        debug!(%url, %status, "Log API responded");
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }
        Ok(resp)
    }

    async fn parse_json<T: DeserializeOwned>(url: &str, resp: Response) -> Result<T, ClientError> {
        resp.json::<T>().await.map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl LogApiClient for HttpLogApiClient {
    async fn upload_log(&self, upload: &LogUpload) -> Result<Value, ClientError> {
        let url = self.url(UPLOAD_PATH);
        let part = Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
        let form = Form::new().part("file", part);

        let resp = self.send(&url, self.client.post(&url).multipart(form)).await?;
        Self::parse_json(&url, resp).await
    }

    async fn list_logs(&self, page: Option<PageRequest>) -> Result<Vec<LogRecord>, ClientError> {
        let url = self.url(LOGS_PATH);
        let mut req = self.client.get(&url);
        if let Some(page) = page {
            req = req.query(&[("limit", page.limit), ("offset", page.offset)]);
        }

        let resp = self.send(&url, req).await?;
        Self::parse_json(&url, resp).await
    }

    async fn get_log(&self, log_id: i64) -> Result<LogRecord, ClientError> {
        let url = self.url(&format!("{LOGS_PATH}{log_id}"));
        let resp = self.send(&url, self.client.get(&url)).await?;
        Self::parse_json(&url, resp).await
    }

    async fn list_groups(&self, log_id: i64) -> Result<Vec<LogGroup>, ClientError> {
        let url = self.url(&format!("{LOGS_PATH}{log_id}/groups/"));
        let resp = self.send(&url, self.client.get(&url)).await?;
        Self::parse_json(&url, resp).await
    }

    async fn delete_all_logs(&self) -> Result<Value, ClientError> {
        let url = self.url(LOGS_PATH);
        let resp = self.send(&url, self.client.delete(&url)).await?;
        Self::parse_json(&url, resp).await
    }
}
