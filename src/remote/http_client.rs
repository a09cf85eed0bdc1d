use std::fmt;

use reqwest::blocking::{RequestBuilder, Response};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::*;

impl ApiClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base, path)
    }

    fn with_actor(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.config.user {
            Some(user) => req.header("x-user", user),
            None => req,
        }
    }

    pub(super) fn send(&self, req: RequestBuilder, endpoint: &str) -> ApiResult<Response> {
        let resp = self
            .with_actor(req)
            .send()
            .map_err(|source| ApiError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;
        self.ensure_ok(resp, endpoint)
    }

    pub(super) fn ensure_ok(&self, resp: Response, endpoint: &str) -> ApiResult<Response> {
        let status = resp.status();
        tracing::debug!(endpoint, status = status.as_u16(), "api response");
        if status.is_success() {
            return Ok(resp);
        }
        let body = error_body(endpoint, resp.text());
        tracing::warn!(endpoint, status = status.as_u16(), %body, "api request failed");
        Err(ApiError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        })
    }

    pub(super) fn decode<T: DeserializeOwned>(resp: Response, endpoint: &str) -> ApiResult<T> {
        resp.json().map_err(|source| ApiError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    /// Cache-disabled GET, decoded as `T`.
    pub(super) fn get_json<T: DeserializeOwned>(&self, endpoint: &str, path: &str) -> ApiResult<T> {
        let req = self
            .client
            .get(self.url(path))
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache");
        let resp = self.send(req, endpoint)?;
        Self::decode(resp, endpoint)
    }

    pub(super) fn write_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        endpoint: &str,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<T> {
        let mut req = self.client.request(method, self.url(path));
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = self.send(req, endpoint)?;
        Self::decode(resp, endpoint)
    }
}

/// Body of a failed response, or a placeholder naming why it could not be read.
fn error_body<E: fmt::Display>(endpoint: &str, text: Result<String, E>) -> String {
    match text {
        Ok(body) => body,
        Err(err) => {
            tracing::debug!(endpoint, error = %err, "read error body");
            format!("<unreadable response body: {}>", err)
        }
    }
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
