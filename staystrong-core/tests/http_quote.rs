use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use staystrong_core::quote::{HttpQuoteSource, QuoteSource, QuoteState, FALLBACK_QUOTES};
use staystrong_core::QuoteError;

/// Answer exactly one request with a canned response; returns the URL.
fn serve_once(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });
    format!("http://{addr}/reasons")
}

fn source(url: String) -> HttpQuoteSource {
    HttpQuoteSource::new(url, Duration::from_secs(5))
}

#[test]
fn reads_reason_field() {
    let url = serve_once("200 OK", r#"{"reason":"You are worth the effort.","lang":"en"}"#);
    assert_eq!(source(url).fetch().unwrap(), "You are worth the effort.");
}

#[test]
fn server_error_is_status_failure() {
    let url = serve_once("500 Internal Server Error", "{}");
    match source(url).fetch() {
        Err(QuoteError::Status(500)) => {}
        other => panic!("expected HTTP 500 failure, got {other:?}"),
    }
}

#[test]
fn server_error_shows_fallback_and_clears_loading() {
    let url = serve_once("500 Internal Server Error", "{}");
    let http = source(url);
    let mut state = QuoteState::default();
    state.refresh(&http, &mut StdRng::seed_from_u64(3));
    assert!(!state.is_loading());
    assert!(FALLBACK_QUOTES.contains(&state.text()));
}

#[test]
fn non_json_body_is_malformed() {
    let url = serve_once("200 OK", "<html>hello</html>");
    assert!(matches!(source(url).fetch(), Err(QuoteError::Malformed(_))));
}

#[test]
fn missing_reason_is_malformed() {
    let url = serve_once("200 OK", r#"{"lang":"en"}"#);
    assert!(matches!(source(url).fetch(), Err(QuoteError::Malformed(_))));
}

#[test]
fn blank_reason_is_malformed() {
    let url = serve_once("200 OK", r#"{"reason":"   "}"#);
    assert!(matches!(source(url).fetch(), Err(QuoteError::Malformed(_))));
}

#[test]
fn refused_connection_is_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let result = source(format!("http://{addr}/reasons")).fetch();
    assert!(matches!(result, Err(QuoteError::Transport(_))));
}
