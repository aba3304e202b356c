//! `reqwest`-backed [`Transport`].

use std::time::Duration;

use reqwest::Client;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, Method, Transport};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Per-instance transport settings. Nothing here touches process-wide state.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Verify the server's TLS certificate. Turning this off accepts any
    /// certificate and should only be done against a sandbox.
    pub verify_tls: bool,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            verify_tls: true,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Transport over a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(10);

        if !config.verify_tls {
            tracing::warn!("TLS certificate verification is disabled for this transport");
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut req = self.client.request(method, &request.url).query(&request.query);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            req = req.body(body);
        }

        let resp = req.send().await.map_err(map_error)?;

        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = resp.text().await.map_err(map_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// The client timeout covers the body read too, so both phases map here.
fn map_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Reqwest(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one connection: answer with `head`, then stall.
    async fn stalling_server(head: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket.write_all(head.as_bytes()).await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });
        format!("http://{}/boletos", addr)
    }

    fn short_timeout() -> ReqwestTransport {
        ReqwestTransport::new(&TransportConfig {
            timeout: Duration::from_millis(200),
            ..TransportConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_transport_config_defaults_to_verified_tls() {
        let config = TransportConfig::default();
        assert!(config.verify_tls);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_transport_builds_with_and_without_verification() {
        assert!(ReqwestTransport::new(&TransportConfig::default()).is_ok());
        let insecure = TransportConfig {
            verify_tls: false,
            ..TransportConfig::default()
        };
        assert!(ReqwestTransport::new(&insecure).is_ok());
    }

    #[tokio::test]
    async fn test_timeout_before_headers() {
        let url = stalling_server("").await;
        let err = short_timeout().send(HttpRequest::get(url)).await.unwrap_err();
        assert!(matches!(err, TransportError::Timeout), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_timeout_while_reading_body() {
        let url = stalling_server("HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\npartial").await;
        let err = short_timeout().send(HttpRequest::get(url)).await.unwrap_err();
        assert!(matches!(err, TransportError::Timeout), "got {:?}", err);
    }
}
