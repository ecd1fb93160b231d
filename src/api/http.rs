//! HTTP implementation of [`BookApi`] using a blocking reqwest client
//!
//! Each call is a single GET. Book names are pushed as URL path segments, so
//! slashes, spaces and non-ASCII characters are percent-encoded and a name
//! can never escape its segment.

use super::error::{ApiError, Result};
use super::types::{Book, BookMetadata, Chapter, ChapterContent};
use super::BookApi;
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Book API client backed by `reqwest::blocking`
#[derive(Debug, Clone)]
pub struct HttpApi {
    http: Client,
    base: Url,
}

impl HttpApi {
    /// Create a client for the server at `server_url`
    ///
    /// A `timeout` of `None` leaves requests unbounded.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the URL cannot be parsed or cannot
    /// carry a path, and `ApiError::Transport` if the client cannot be built.
    pub fn new(server_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut base = Url::parse(server_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{server_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(server_url.to_string()));
        }
        base.set_query(None);
        base.set_fragment(None);

        let http = Client::builder()
            .user_agent(concat!("readr/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { http, base })
    }

    /// The server base URL
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Build `{base}/api/{segments...}` with each segment percent-encoded
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the base URL cannot carry a path.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| ApiError::InvalidUrl(self.base.to_string()))?;
            path.pop_if_empty();
            path.push("api");
            path.extend(segments);
        }
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");
        let response = self.http.get(url.clone()).send()?;
        let status = response.status();
        let body = response.text()?;
        tracing::debug!(%url, %status, bytes = body.len(), "response");
        Self::decode_json_from_body(status, &body)
    }

    /// Decode a response body, treating any non-2xx status as failure
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` for non-success statuses and
    /// `ApiError::Decode` for bodies that do not match `T`.
    pub fn decode_json_from_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: body.to_string(),
            });
        }

        serde_json::from_str(body).map_err(Into::into)
    }
}

impl BookApi for HttpApi {
    fn books(&self) -> Result<Vec<Book>> {
        self.get_json(self.endpoint(&["books"])?)
    }

    fn chapters(&self, book: &str) -> Result<Vec<Chapter>> {
        self.get_json(self.endpoint(&["chapters", book])?)
    }

    fn metadata(&self, book: &str) -> Result<BookMetadata> {
        self.get_json(self.endpoint(&["metadata", book])?)
    }

    fn content(&self, book: &str, chapter: u32) -> Result<ChapterContent> {
        let chapter = chapter.to_string();
        self.get_json(self.endpoint(&["content", book, &chapter])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpApi {
        HttpApi::new(base, None).unwrap()
    }

    #[test]
    fn test_endpoint_on_root_base() {
        let url = api("http://localhost:8000").endpoint(&["books"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/books");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = api("http://localhost:8000/reader/")
            .endpoint(&["chapters", "A"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/reader/api/chapters/A");
    }

    #[test]
    fn test_endpoint_encodes_book_names() {
        let url = api("http://localhost:8000")
            .endpoint(&["content", "a/b c?", "3"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/content/a%2Fb%20c%3F/3");
    }

    #[test]
    fn test_endpoint_encodes_non_ascii() {
        let url = api("http://localhost:8000").endpoint(&["chapters", "書"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/chapters/%E6%9B%B8");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpApi::new("not a url", None),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpApi::new("mailto:someone@example.com", None),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_success_even_with_valid_body() {
        let result: Result<Vec<Chapter>> =
            HttpApi::decode_json_from_body(StatusCode::NOT_FOUND, "[]");
        assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
    }

    #[test]
    fn test_decode_success_body() {
        let chapters: Vec<Chapter> = HttpApi::decode_json_from_body(
            StatusCode::OK,
            r#"[{"chapter_num":1,"title":"One"},{"chapter_num":2,"title":"Two"}]"#,
        )
        .unwrap();
        assert_eq!(chapters, vec![Chapter::new(1, "One"), Chapter::new(2, "Two")]);
    }

    #[test]
    fn test_decode_malformed_body() {
        let result: Result<ChapterContent> =
            HttpApi::decode_json_from_body(StatusCode::OK, "<html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
