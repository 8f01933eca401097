// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP remote implementation using reqwest.
//!
//! Endpoints, relative to the configured base URL:
//!
//! | Operation     | Request                  |
//! |---------------|--------------------------|
//! | `load_fines`  | `GET    {base}/fines`    |
//! | `add_fine`    | `POST   {base}/fines`    |
//! | `update_fine` | `PATCH  {base}/fines/id` |
//! | `delete_fine` | `DELETE {base}/fines/id` |

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use finetrack_core::{Fine, FinePatch};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::remote::{Remote, RemoteError, RemoteFuture, RemoteResult};
use crate::config::RemoteConfig;
use crate::error::{Error, Result};

/// Upper bound on establishing a TCP/TLS connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for the reachability probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Remote fine service reached over HTTP.
pub struct HttpRemote {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    /// Optimistic until a request fails to connect.
    online: AtomicBool,
}

impl HttpRemote {
    /// Create a client for the configured service.
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        config.validate()?;

        let base_url = Url::parse(&config.url)
            .map_err(|e| Error::Config(format!("invalid remote URL '{}': {}", config.url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "invalid remote URL '{}': must be an http:// or https:// URL",
                config.url
            )));
        }

        let timeout = config.timeout();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(CONNECT_TIMEOUT))
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(HttpRemote {
            client,
            base_url,
            api_key: config.api_key.clone(),
            online: AtomicBool::new(true),
        })
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/seg/seg...`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.client.request(method, url);
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    /// Send a request, tracking reachability and rejecting non-2xx answers.
    async fn send(&self, request: RequestBuilder, url: &Url) -> RemoteResult<Response> {
        match request.send().await {
            Ok(response) => {
                self.online.store(true, Ordering::SeqCst);
                let status = response.status();
                debug!(url = %url, status = status.as_u16(), "remote response");
                if status.is_success() {
                    Ok(response)
                } else {
                    Err(RemoteError::Status {
                        status: status.as_u16(),
                        url: url.to_string(),
                    })
                }
            }
            Err(e) => {
                let err = classify(e, url);
                if err.is_connectivity() {
                    self.online.store(false, Ordering::SeqCst);
                }
                Err(err)
            }
        }
    }
}

/// Decode a JSON response body.
async fn decode<T: DeserializeOwned>(response: Response, url: &Url) -> RemoteResult<T> {
    response.json::<T>().await.map_err(|e| classify(e, url))
}

/// Map a reqwest error onto the remote error taxonomy.
fn classify(e: reqwest::Error, url: &Url) -> RemoteError {
    let url = url.to_string();
    if e.is_timeout() {
        RemoteError::Timeout { url }
    } else if e.is_connect() {
        RemoteError::Connect {
            url,
            reason: e.to_string(),
        }
    } else if e.is_decode() {
        RemoteError::Decode {
            url,
            reason: e.to_string(),
        }
    } else {
        RemoteError::Request {
            url,
            reason: e.to_string(),
        }
    }
}

impl Remote for HttpRemote {
    fn load_fines(&self) -> RemoteFuture<'_, Vec<Fine>> {
        Box::pin(async move {
            let url = self.endpoint(&["fines"]);
            let response = self
                .send(self.request(Method::GET, url.clone()), &url)
                .await?;
            decode(response, &url).await
        })
    }

    fn add_fine<'a>(&'a self, fine: &'a Fine) -> RemoteFuture<'a, Fine> {
        Box::pin(async move {
            let url = self.endpoint(&["fines"]);
            let request = self.request(Method::POST, url.clone()).json(fine);
            let response = self.send(request, &url).await?;
            decode(response, &url).await
        })
    }

    fn update_fine<'a>(&'a self, id: &'a str, updates: &'a FinePatch) -> RemoteFuture<'a, Fine> {
        Box::pin(async move {
            let url = self.endpoint(&["fines", id]);
            let request = self.request(Method::PATCH, url.clone()).json(updates);
            let response = self.send(request, &url).await?;
            decode(response, &url).await
        })
    }

    fn delete_fine<'a>(&'a self, id: &'a str) -> RemoteFuture<'a, ()> {
        Box::pin(async move {
            let url = self.endpoint(&["fines", id]);
            self.send(self.request(Method::DELETE, url.clone()), &url)
                .await?;
            Ok(())
        })
    }

    fn is_reachable(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    /// Any HTTP answer to a `HEAD` of the base URL counts as reachable.
    fn probe(&self) -> std::pin::Pin<Box<dyn std::future::Future<Output = bool> + Send + '_>> {
        Box::pin(async move {
            let request = self
                .request(Method::HEAD, self.base_url.clone())
                .timeout(PROBE_TIMEOUT);
            let reachable = match request.send().await {
                Ok(_) => true,
                Err(e) => {
                    debug!(url = %self.base_url, error = %e, "probe failed");
                    false
                }
            };
            self.online.store(reachable, Ordering::SeqCst);
            reachable
        })
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
