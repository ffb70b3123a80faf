//! IANA TLD registry feed.
//!
//! The feed is plain text: `#` comment lines, then one uppercase TLD per line,
//! terminated by a trailing newline.

use crate::error::{Result, TldSweepError};
use crate::types::CheckConfig;
use reqwest::Client;

pub const FETCH_FAILED_MESSAGE: &str = "Error: Could not fetch the list of TLDs";
pub const READ_FAILED_MESSAGE: &str = "Error: Could not read the response body";

/// HTTP client for the registry fetch. No timeout unless one is configured.
pub fn registry_client(config: &CheckConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(concat!("tld-sweep/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = config.fetch_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| {
        TldSweepError::config(format!("Could not build HTTP client: {}", e))
    })
}

/// Fetch and parse the TLD list at `url`
pub async fn fetch_tld_list(client: &Client, url: &str) -> Result<Vec<String>> {
    tracing::info!(url = %url, "Fetching TLD list");

    let response = client.get(url).send().await.map_err(|e| {
        tracing::debug!(url = %url, error = %e, "TLD list request failed");
        e
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(TldSweepError::network(
            FETCH_FAILED_MESSAGE,
            Some(status.as_u16()),
            Some(url.to_string()),
        ));
    }

    let body = response.text().await.map_err(|e| {
        tracing::debug!(url = %url, error = %e, "TLD list body read failed");
        e
    })?;

    let tlds = parse_tld_list(&body);
    tracing::info!(count = tlds.len(), "Fetched TLD list");
    Ok(tlds)
}

/// Parse the registry feed into lowercase TLDs, in file order.
///
/// Everything from a `#` to the end of its line is a comment. Blank and
/// whitespace-only lines are dropped.
pub fn parse_tld_list(body: &str) -> Vec<String> {
    body.lines()
        .map(|line| match line.find('#') {
            Some(idx) => &line[..idx],
            None => line,
        })
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one raw HTTP response on a local port, then close
    async fn serve_raw(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });

        format!("http://{}/TLD/tlds-alpha-by-domain.txt", addr)
    }

    /// Serve one well-formed HTTP response on a local port
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        serve_raw(format!(
            "{}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        ))
        .await
    }

    #[test]
    fn test_parse_synthetic_feed() {
        let tlds = parse_tld_list("# comment\nAAA\nBBB\n\nCCC\n");
        assert_eq!(tlds, vec!["aaa", "bbb", "ccc"]);
    }

    #[test]
    fn test_parse_real_header() {
        let body = "# Version 2026101700, Last Updated Sat Oct 17 07:07:01 2026 UTC\nAAA\nAARP\nCOM\nXN--11B4C3D\nZW\n";
        assert_eq!(
            parse_tld_list(body),
            vec!["aaa", "aarp", "com", "xn--11b4c3d", "zw"]
        );
    }

    #[test]
    fn test_parse_whitespace_and_crlf() {
        let tlds = parse_tld_list("#c\r\nCOM\r\n   \r\n\tNET\r\n");
        assert_eq!(tlds, vec!["com", "net"]);
    }

    #[test]
    fn test_parse_without_trailing_newline_keeps_last() {
        assert_eq!(parse_tld_list("COM\nORG"), vec!["com", "org"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_tld_list("").is_empty());
        assert!(parse_tld_list("# only a comment\n").is_empty());
    }

    #[tokio::test]
    async fn test_fetch_parses_body() {
        let url = serve_once("HTTP/1.1 200 OK", "# Version 1\nCOM\nNET\n").await;
        let client = registry_client(&CheckConfig::default()).unwrap();
        let tlds = fetch_tld_list(&client, &url).await.unwrap();
        assert_eq!(tlds, vec!["com", "net"]);
    }

    #[tokio::test]
    async fn test_fetch_rejects_error_status() {
        let url = serve_once("HTTP/1.1 404 Not Found", "not here").await;
        let client = registry_client(&CheckConfig::default()).unwrap();
        let err = fetch_tld_list(&client, &url).await.unwrap_err();
        match err {
            TldSweepError::Network { status_code, .. } => assert_eq!(status_code, Some(404)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_truncated_body() {
        // promises more bytes than it sends
        let url = serve_raw(
            "HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\nCOM\n".to_string(),
        )
        .await;
        let client = registry_client(&CheckConfig::default()).unwrap();
        let err = fetch_tld_list(&client, &url).await.unwrap_err();
        assert!(matches!(err, TldSweepError::Io { .. }));
        assert_eq!(err.user_message(), READ_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = registry_client(&CheckConfig::default()).unwrap();
        let err = fetch_tld_list(&client, &format!("http://{}/tlds.txt", addr))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
    }
}
