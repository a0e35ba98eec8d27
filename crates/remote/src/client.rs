//! Remote sync API client for the placeholder quote endpoint.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use quotesync_core::quotes::QuoteRecord;
use quotesync_core::sync::RemoteEndpoint;

use crate::error::{RemoteSyncError, Result};
use crate::types::{CreatePostRequest, CreatePostResponse, PostItem};

/// Default base URL of the placeholder endpoint.
pub const DEFAULT_REMOTE_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How many remote items one fetch maps into quote records.
const FETCH_LIMIT: usize = 10;

/// The `userId` attached to pushed records; the placeholder API requires
/// the field but does not authenticate it.
const PUSH_USER_ID: i64 = 1;

const MAX_LOG_BODY_CHARS: usize = 512;

/// Client for the placeholder posts API.
#[derive(Debug, Clone)]
pub struct RemoteSyncClient {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteSyncClient {
    /// Create a new remote sync client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the endpoint (e.g.,
    ///   "https://jsonplaceholder.typicode.com")
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn log_response(status: reqwest::StatusCode, body: &str) {
        if status.is_success() {
            debug!("API response status: {}", status);
            return;
        }

        let mut preview = body.chars().take(MAX_LOG_BODY_CHARS).collect::<String>();
        if body.chars().count() > MAX_LOG_BODY_CHARS {
            preview.push_str("...");
        }
        debug!("API response error ({}): {}", status, preview);
    }

    /// Parse a JSON response body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        Self::log_response(status, &body);

        if !status.is_success() {
            return Err(RemoteSyncError::api(
                status.as_u16(),
                format!("Request failed: {}", body),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            RemoteSyncError::api(status.as_u16(), format!("Failed to parse response: {}", e))
        })
    }

    /// List remote items.
    ///
    /// GET /posts
    pub async fn fetch_posts(&self) -> Result<Vec<PostItem>> {
        let url = format!("{}/posts", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::parse_response(response).await
    }

    /// Submit one item.
    ///
    /// POST /posts
    pub async fn create_post(&self, request: CreatePostRequest) -> Result<CreatePostResponse> {
        let url = format!("{}/posts", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;
        Self::parse_response(response).await
    }
}

/// Map one generic remote item into the local record shape.
///
/// The remote supplies no last-modified time, so the fetch instant stands
/// in as the merge timestamp.
fn quote_from_post(post: PostItem, fetched_at: i64) -> QuoteRecord {
    QuoteRecord {
        text: post.body.lines().next().unwrap_or_default().to_string(),
        category: post
            .title
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string(),
        server_id: Some(post.id),
        timestamp: Some(fetched_at),
    }
}

#[async_trait]
impl RemoteEndpoint for RemoteSyncClient {
    async fn fetch_quotes(&self) -> quotesync_core::Result<Vec<QuoteRecord>> {
        let posts = self.fetch_posts().await?;
        let fetched_at = Utc::now().timestamp_millis();
        Ok(posts
            .into_iter()
            .take(FETCH_LIMIT)
            .map(|post| quote_from_post(post, fetched_at))
            .collect())
    }

    async fn push_quote(&self, record: &QuoteRecord) -> quotesync_core::Result<i64> {
        let created = self
            .create_post(CreatePostRequest {
                title: record.category.clone(),
                body: record.text.clone(),
                user_id: PUSH_USER_ID,
            })
            .await?;
        Ok(created.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::Mutex as TokioMutex;

    #[derive(Debug, Clone)]
    struct CapturedRequest {
        request_line: String,
        body: String,
    }

    async fn read_request(stream: &mut tokio::net::TcpStream) -> Option<CapturedRequest> {
        let mut buffer = Vec::new();
        let header_end = loop {
            let mut chunk = [0_u8; 2048];
            let read = stream.read(&mut chunk).await.ok()?;
            if read == 0 {
                return None;
            }
            buffer.extend_from_slice(&chunk[..read]);
            if let Some(position) = buffer.windows(4).position(|window| window == b"\r\n\r\n") {
                break position;
            }
        };

        let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
        let request_line = head.lines().next().unwrap_or_default().to_string();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        let mut body = buffer[header_end + 4..].to_vec();
        while body.len() < content_length {
            let mut chunk = [0_u8; 2048];
            let read = stream.read(&mut chunk).await.ok()?;
            if read == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..read]);
        }

        Some(CapturedRequest {
            request_line,
            body: String::from_utf8_lossy(&body).to_string(),
        })
    }

    fn status_text(status: u16) -> &'static str {
        match status {
            200 => "OK",
            201 => "Created",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "Error",
        }
    }

    /// Serve the scripted responses, one per connection, capturing each
    /// request as it arrives.
    async fn start_mock_server(
        responses: Vec<(u16, String)>,
    ) -> (
        String,
        Arc<TokioMutex<Vec<CapturedRequest>>>,
        tokio::task::JoinHandle<()>,
    ) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener addr");
        let captured = Arc::new(TokioMutex::new(Vec::<CapturedRequest>::new()));
        let captured_clone = Arc::clone(&captured);

        let handle = tokio::spawn(async move {
            for (status, body) in responses {
                let (mut stream, _) = match listener.accept().await {
                    Ok(value) => value,
                    Err(_) => break,
                };
                let Some(request) = read_request(&mut stream).await else {
                    continue;
                };
                captured_clone.lock().await.push(request);

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    status_text(status),
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.flush().await;
            }
        });

        (format!("http://{}", addr), captured, handle)
    }

    fn post_item(id: i64, title: &str, body: &str) -> PostItem {
        PostItem {
            id,
            title: title.to_string(),
            body: body.to_string(),
            user_id: 1,
        }
    }

    #[tokio::test]
    async fn fetch_posts_parses_the_item_list() {
        let body =
            r#"[{"id":1,"title":"Motivation daily","body":"Keep going.\nEven uphill.","userId":3}]"#;
        let (base_url, captured, server) =
            start_mock_server(vec![(200, body.to_string())]).await;

        let client = RemoteSyncClient::new(&base_url);
        let posts = client.fetch_posts().await.expect("fetch posts");

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[0].title, "Motivation daily");

        let requests = captured.lock().await.clone();
        assert_eq!(requests[0].request_line, "GET /posts HTTP/1.1");

        server.abort();
    }

    #[tokio::test]
    async fn non_success_status_maps_to_api_error() {
        let (base_url, _captured, server) =
            start_mock_server(vec![(500, r#"{"error":"kaput"}"#.to_string())]).await;

        let client = RemoteSyncClient::new(&base_url);
        let err = client.fetch_posts().await.expect_err("must fail");

        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.retry_class(), crate::error::RemoteRetryClass::Retryable);

        server.abort();
    }

    #[tokio::test]
    async fn create_post_sends_payload_and_returns_the_assigned_id() {
        let (base_url, captured, server) =
            start_mock_server(vec![(201, r#"{"id":101}"#.to_string())]).await;

        // Trailing slash in the configured URL must not double up in paths.
        let client = RemoteSyncClient::new(&format!("{}/", base_url));
        let created = client
            .create_post(CreatePostRequest {
                title: "Success".to_string(),
                body: "Stay hungry, stay foolish.".to_string(),
                user_id: 1,
            })
            .await
            .expect("create post");

        assert_eq!(created.id, 101);
        let requests = captured.lock().await.clone();
        assert_eq!(requests[0].request_line, "POST /posts HTTP/1.1");
        assert!(requests[0].body.contains(r#""title":"Success""#));
        assert!(requests[0].body.contains(r#""userId":1"#));

        server.abort();
    }

    #[tokio::test]
    async fn fetch_quotes_maps_and_limits_remote_items() {
        let posts: Vec<PostItem> = (1..=12)
            .map(|id| post_item(id, "Wisdom collected", "First line.\nSecond line."))
            .collect();
        let body = serde_json::to_string(&posts).unwrap();
        let (base_url, _captured, server) = start_mock_server(vec![(200, body)]).await;

        let client = RemoteSyncClient::new(&base_url);
        let quotes = client.fetch_quotes().await.expect("fetch quotes");

        assert_eq!(quotes.len(), 10);
        assert_eq!(quotes[0].text, "First line.");
        assert_eq!(quotes[0].category, "Wisdom");
        assert_eq!(quotes[0].server_id, Some(1));
        assert!(quotes[0].timestamp.is_some());

        server.abort();
    }

    #[tokio::test]
    async fn push_quote_failure_surfaces_as_remote_unavailable() {
        let (base_url, _captured, server) =
            start_mock_server(vec![(500, r#"{"error":"kaput"}"#.to_string())]).await;

        let client = RemoteSyncClient::new(&base_url);
        let record = QuoteRecord::new("Be the change.", "Inspiration").unwrap();
        let err = client.push_quote(&record).await.expect_err("must fail");

        assert!(matches!(
            err,
            quotesync_core::Error::RemoteUnavailable(_)
        ));

        server.abort();
    }

    #[test]
    fn post_mapping_takes_first_body_line_and_first_title_word() {
        let record = quote_from_post(post_item(7, "Life lessons", "Line one.\nLine two."), 42);
        assert_eq!(record.text, "Line one.");
        assert_eq!(record.category, "Life");
        assert_eq!(record.server_id, Some(7));
        assert_eq!(record.timestamp, Some(42));

        let record = quote_from_post(post_item(8, "", ""), 42);
        assert!(record.text.is_empty());
        assert!(record.category.is_empty());
    }
}
