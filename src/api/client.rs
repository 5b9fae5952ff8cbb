use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::types::{Announcement, AnnouncementPayload, BellScheduleDay, CreatedAnnouncement};

/// What a successful request resolved to, before typed decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// The response declared `application/json` and parsed as such.
    Json(Value),
    /// Anything else is handed back as raw text.
    Text(String),
}

/// Thin wrapper over the school information REST API.
///
/// No retries and no client-side timeout: a hung request hangs the
/// caller. The server (or the OS defaults) own that behavior.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /bell-schedule`
    pub async fn bell_schedule(&self) -> Result<Vec<BellScheduleDay>, ApiError> {
        let body = self
            .request(Method::GET, "/bell-schedule", HeaderMap::new(), None)
            .await?;
        decode("/bell-schedule", body)
    }

    /// `GET /announcements?active_only=true`
    ///
    /// The server filters to currently-active announcements; the client
    /// never re-filters.
    pub async fn active_announcements(&self) -> Result<Vec<Announcement>, ApiError> {
        let path = "/announcements?active_only=true";
        let body = self
            .request(Method::GET, path, HeaderMap::new(), None)
            .await?;
        decode(path, body)
    }

    /// `POST /announcements` with the admin token attached as the
    /// `X-Admin-Token` header.
    pub async fn create_announcement(
        &self,
        payload: &AnnouncementPayload,
        admin_token: &str,
    ) -> Result<CreatedAnnouncement, ApiError> {
        let path = "/announcements";
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(admin_token) {
            headers.insert("X-Admin-Token", value);
        }

        let body = serde_json::to_value(payload).map_err(|e| ApiError::Decode {
            path: path.to_string(),
            source: e,
        })?;
        let body = self.request(Method::POST, path, headers, Some(body)).await?;
        decode(path, body)
    }

    /// Issues one request against the configured base URL.
    ///
    /// Non-success statuses fail with the response body text as the
    /// message (`HTTP <status>` when the body is empty or unreadable).
    /// Successful responses are parsed as JSON only when the server says
    /// they are JSON.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
        body: Option<Value>,
    ) -> Result<ResponseBody, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "issuing request");

        let mut builder = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .headers(headers);

        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(|e| ApiError::Transport {
            path: path.to_string(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            // A failed body read still yields a displayable error.
            let text = response.text().await.unwrap_or_default();
            let message = if text.is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                text
            };
            debug!(status = status.as_u16(), %message, "request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));

        let text = response.text().await.map_err(|e| ApiError::Transport {
            path: path.to_string(),
            source: e,
        })?;

        if is_json {
            let value = serde_json::from_str(&text).map_err(|e| ApiError::Decode {
                path: path.to_string(),
                source: e,
            })?;
            Ok(ResponseBody::Json(value))
        } else {
            Ok(ResponseBody::Text(text))
        }
    }
}

/// Typed decoding of a resolved body. Text where JSON was expected goes
/// through one more parse attempt so the mismatch surfaces as a decode
/// error rather than a panic.
fn decode<T: DeserializeOwned>(path: &str, body: ResponseBody) -> Result<T, ApiError> {
    match body {
        ResponseBody::Json(value) => {
            serde_json::from_value(value).map_err(|e| ApiError::Decode {
                path: path.to_string(),
                source: e,
            })
        }
        ResponseBody::Text(text) => serde_json::from_str(&text).map_err(|e| ApiError::Decode {
            path: path.to_string(),
            source: e,
        }),
    }
}
