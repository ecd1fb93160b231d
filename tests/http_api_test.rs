//! HTTP client tests against a canned local server
//!
//! The server answers each connection once from a fixed route table and
//! records the request path it saw.

use readr::api::{ApiError, BookApi, Chapter, HttpApi};
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

struct CannedServer {
    url: String,
    seen: Arc<Mutex<Vec<String>>>,
}

/// Start a server that maps request paths to `(status, body)` pairs
///
/// Unknown paths get a 404.
fn serve(routes: &[(&str, u16, &str)]) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let routes: HashMap<String, (u16, String)> = routes
        .iter()
        .map(|(path, status, body)| ((*path).to_string(), (*status, (*body).to_string())))
        .collect();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            // Drain headers
            loop {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) | Err(_) => break,
                    Ok(_) if line == "\r\n" || line == "\n" => break,
                    Ok(_) => {}
                }
            }

            let path = request_line
                .split_whitespace()
                .nth(1)
                .unwrap_or_default()
                .to_string();
            log.lock().unwrap().push(path.clone());

            let (status, body) = routes
                .get(&path)
                .cloned()
                .unwrap_or((404, r#"{"detail":"Not Found"}"#.to_string()));
            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    CannedServer { url, seen }
}

fn client(server: &CannedServer) -> HttpApi {
    HttpApi::new(&server.url, Some(Duration::from_secs(5))).unwrap()
}

#[test]
fn test_books_request() {
    let server = serve(&[(
        "/api/books",
        200,
        r#"[{"book_name":"Dune","author":"Frank Herbert"},{"book_name":"Emma"}]"#,
    )]);
    let books = client(&server).books().unwrap();

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].book_name, "Dune");
    assert_eq!(books[0].author.as_deref(), Some("Frank Herbert"));
    assert_eq!(books[1].author, None);
    assert_eq!(*server.seen.lock().unwrap(), vec!["/api/books"]);
}

#[test]
fn test_chapters_and_content_paths_are_encoded() {
    let server = serve(&[
        (
            "/api/chapters/Sagas%2FNorse%20Myths%3F",
            200,
            r#"[{"chapter_num":1,"title":"One"}]"#,
        ),
        (
            "/api/content/Sagas%2FNorse%20Myths%3F/1",
            200,
            r#"{"title":"One","content":"Well, Prince."}"#,
        ),
    ]);
    let api = client(&server);

    let chapters = api.chapters("Sagas/Norse Myths?").unwrap();
    assert_eq!(chapters, vec![Chapter::new(1, "One")]);

    let content = api.content("Sagas/Norse Myths?", 1).unwrap();
    assert_eq!(content.title, "One");
    assert_eq!(content.content, "Well, Prince.");
}

#[test]
fn test_metadata_request() {
    let server = serve(&[(
        "/api/metadata/Dune",
        200,
        r#"{"author":"Frank Herbert","tags":"sci-fi,,desert"}"#,
    )]);
    let metadata = client(&server).metadata("Dune").unwrap();

    assert_eq!(metadata.author_or_placeholder(), "Frank Herbert");
    assert_eq!(metadata.status_or_placeholder(), "ongoing");
    assert_eq!(metadata.tag_badges(), vec!["sci-fi", "desert"]);
}

#[test]
fn test_not_found_is_a_status_error() {
    let server = serve(&[]);
    let err = client(&server).chapters("Missing").unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}

#[test]
fn test_server_error_with_json_body_still_fails() {
    let server = serve(&[("/api/content/Dune/1", 500, r#"{"title":"x","content":"y"}"#)]);
    let err = client(&server).content("Dune", 1).unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}

#[test]
fn test_malformed_body_is_a_decode_error() {
    let server = serve(&[("/api/books", 200, "<html>oops</html>")]);
    let err = client(&server).books().unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn test_unreachable_server_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let api = HttpApi::new(&format!("http://127.0.0.1:{port}"), Some(Duration::from_secs(2)))
        .unwrap();

    assert!(matches!(api.books(), Err(ApiError::Transport(_))));
}
