//! Integration tests for the Kroki client using wiremock.
//!
//! These tests mock the rendering service to verify request layout and
//! response handling without hitting a real Kroki server.

#![cfg(feature = "kroki")]

use std::time::Duration;

use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use diagen::{
    RenderError, Renderer, config::RendererConfig, format::OutputFormat, kroki::KrokiClient,
};

const GRAPHVIZ_SVG: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n\
<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\"\n \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n\
<!-- Generated by graphviz version 2.43.0 -->\n\
<svg width=\"62pt\" height=\"116pt\"></svg>\n";

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR<?xml";

/// Renders on a blocking thread; the blocking client must stay off the
/// async runtime.
async fn render(
    endpoint: String,
    source: &str,
    diagram_type: &str,
    format: OutputFormat,
) -> Result<Vec<u8>, RenderError> {
    let source = source.to_string();
    let diagram_type = diagram_type.to_string();

    tokio::task::spawn_blocking(move || {
        let config = RendererConfig::new(endpoint, Duration::from_secs(5));
        let client = KrokiClient::new(&config).expect("Failed to create client");
        client.render(&source, &diagram_type, format)
    })
    .await
    .expect("Render task panicked")
}

/// Test that an SVG response has its XML prolog stripped.
#[tokio::test]
async fn test_svg_response_is_stripped_to_root_element() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphviz/svg"))
        .and(header("content-type", "text/plain; charset=utf-8"))
        .and(header("accept", "image/svg+xml"))
        .and(body_string("digraph G {A->B}"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/svg+xml")
                .set_body_string(GRAPHVIZ_SVG),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let bytes = render(mock_server.uri(), "digraph G {A->B}", "graphviz", OutputFormat::Svg)
        .await
        .expect("Rendering should succeed");

    assert!(
        bytes.starts_with(b"<svg width=\"62pt\""),
        "unexpected payload: {}",
        String::from_utf8_lossy(&bytes)
    );
}

/// Test that a rejected request carries the status and the service's message.
#[tokio::test]
async fn test_bad_request_with_message_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphviz/svg"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string("Error 400: syntax error in line 1 near '->'\n"),
        )
        .mount(&mock_server)
        .await;

    let err = render(mock_server.uri(), "digraph G {A->", "graphviz", OutputFormat::Svg)
        .await
        .unwrap_err();

    match err {
        RenderError::Rejected { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Error 400: syntax error in line 1 near '->'");
        }
        other => panic!("Expected a rejection, got {other:?}"),
    }
}

/// Test that an empty error body falls back to the status reason phrase.
#[tokio::test]
async fn test_bad_request_without_body_uses_reason_phrase() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mermaid/svg"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;

    let err = render(mock_server.uri(), "graph TD; A-->", "mermaid", OutputFormat::Svg)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RenderError::Rejected { status: 400, ref message } if message == "Bad Request"
    ));
}

/// Test that non-SVG payloads are passed through byte for byte.
#[tokio::test]
async fn test_png_response_is_returned_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphviz/png"))
        .and(header("accept", "image/png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(PNG_BYTES),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let bytes = render(mock_server.uri(), "digraph G {A->B}", "graphviz", OutputFormat::Png)
        .await
        .expect("Rendering should succeed");

    assert_eq!(bytes, PNG_BYTES);
}

/// Test that an unreachable service is reported as a backend failure.
#[test]
fn test_unreachable_service_is_a_backend_error() {
    // Nothing listens on the reserved TCP port 1.
    let config = RendererConfig::new("http://127.0.0.1:1", Duration::from_secs(5));
    let client = KrokiClient::new(&config).expect("Failed to create client");

    let err = client
        .render("digraph G {A->B}", "graphviz", OutputFormat::Svg)
        .unwrap_err();

    assert!(matches!(err, RenderError::Backend(_)), "{err:?}");
}
