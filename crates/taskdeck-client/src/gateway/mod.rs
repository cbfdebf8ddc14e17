//! API Gateway
//!
//! Single chokepoint for every call to the task service. The gateway owns
//! headers, body encoding and response classification; the [`Transport`]
//! underneath only moves bytes.

mod reqwest_transport;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

pub use reqwest_transport::ReqwestTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP exchange. No retries, no timeout.
///
/// Not `Send`: in the browser every exchange runs on the page's single
/// event loop.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> ClientResult<HttpResponse>;
}

pub struct ApiGateway<T: Transport> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> ApiGateway<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends one request and classifies the response.
    ///
    /// `Ok(None)` means 204 No Content; the body is never parsed in that case.
    pub async fn request<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> ClientResult<Option<R>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = match body {
            Some(b) => Some(serde_json::to_string(b)?),
            None => None,
        };
        let response = self.exchange(method, path, body, token).await?;
        if response.status == 204 {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&response.body)?))
    }

    /// Performs the exchange and turns any non-2xx status into an error.
    async fn exchange(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        token: Option<&str>,
    ) -> ClientResult<HttpResponse> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        let request = HttpRequest {
            method,
            url: self.config.url(path),
            headers,
            body,
        };

        debug!("{} {}", method.as_str(), path);
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let err = ClientError::from_response(response.status, &response.body);
            warn!("{} {} failed with {}: {}", method.as_str(), path, response.status, err);
            return Err(err);
        }
        debug!("{} {} -> {}", method.as_str(), path, response.status);
        Ok(response)
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> ClientResult<R> {
        self.request::<(), R>(Method::Get, path, None, token)
            .await?
            .ok_or(ClientError::EmptyBody)
    }

    pub async fn post<B, R>(&self, path: &str, body: &B, token: Option<&str>) -> ClientResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::Post, path, Some(body), token)
            .await?
            .ok_or(ClientError::EmptyBody)
    }

    pub async fn put<B, R>(&self, path: &str, body: &B, token: Option<&str>) -> ClientResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::Put, path, Some(body), token)
            .await?
            .ok_or(ClientError::EmptyBody)
    }

    /// PATCH without a body (the completion toggle)
    pub async fn patch<R: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> ClientResult<R> {
        self.request::<(), R>(Method::Patch, path, None, token)
            .await?
            .ok_or(ClientError::EmptyBody)
    }

    /// DELETE; any response body on success is ignored
    pub async fn delete(&self, path: &str, token: Option<&str>) -> ClientResult<()> {
        self.exchange(Method::Delete, path, None, token).await?;
        Ok(())
    }
}
