// Catalog API HTTP client
//
// Wraps `reqwest::Client` with storelight-specific URL construction,
// bearer authentication, and envelope unwrapping. All methods return
// unwrapped `data` payloads -- the envelope is stripped before the
// caller sees it.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::model::{ApiErrorBody, CatalogResponse, ProductRecord};

/// Raw HTTP client for the hosted catalog API.
///
/// Handles the `{ data: [...] }` envelope and versioned path construction.
/// Authentication is a bearer API key applied to every request.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: SecretString,
}

impl CatalogClient {
    /// Create a new client with its own connection pool.
    ///
    /// `base_url` is the service root (e.g. `https://catalog.example.com`).
    pub fn new(base_url: Url, api_key: SecretString, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::Transport)?;
        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// Use this in tests or when sharing a connection pool.
    pub fn with_client(http: reqwest::Client, base_url: Url, api_key: SecretString) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// Build a full URL for a versioned API path: `{base}/v1/{path}`.
    fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/v1/{path}");
        Url::parse(&full).map_err(|e| Error::Api {
            message: format!("invalid API URL {full:?}: {e}"),
        })
    }

    /// Fetch the full product list.
    pub async fn list_products(&self) -> Result<Vec<ProductRecord>, Error> {
        self.get(self.api_url("products")?).await
    }

    /// Send a GET request and unwrap the `{ data: [...] }` envelope.
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .bearer_auth(self.api_key.expose_secret())
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::parse_envelope(resp).await
    }

    /// Parse the `{ data }` envelope, returning `data` on success or a
    /// typed error for HTTP failures and in-band `{ error: ... }` bodies.
    async fn parse_envelope<T: DeserializeOwned>(resp: reqwest::Response) -> Result<Vec<T>, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "invalid or expired API key".into(),
            });
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                message: format!("HTTP {status}: {}", truncate_utf8(&body, 200)),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        // The service sometimes reports errors in-band with HTTP 200.
        if let Ok(wrapper) = serde_json::from_str::<ApiErrorBody>(&body) {
            if let Some(err) = wrapper.error {
                let msg = err.message.unwrap_or_default();
                return Err(if err.code == 401 {
                    Error::Authentication { message: msg }
                } else {
                    Error::Api {
                        message: format!("catalog error {}: {msg}", err.code),
                    }
                });
            }
        }

        let envelope: CatalogResponse<T> = serde_json::from_str(&body).map_err(|e| {
            let preview = truncate_utf8(&body, 200);
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
            }
        })?;

        Ok(envelope.data)
    }
}

/// Truncate to at most `max` bytes without splitting a multi-byte
/// character.
fn truncate_utf8(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::truncate_utf8;

    #[test]
    fn truncate_backs_off_to_char_boundary() {
        let mut s = "x".repeat(199);
        s.push('é'); // two bytes, straddling the cutoff

        let out = truncate_utf8(&s, 200);

        assert_eq!(out.len(), 199);
        assert!(out.chars().all(|c| c == 'x'));
    }

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate_utf8("héllo", 200), "héllo");
        assert_eq!(truncate_utf8("", 200), "");
    }
}
