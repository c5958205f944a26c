use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use nukr_common::target::Target;
use nukr_core::securitytrails::SecurityTrails;
use nukr_core::targets::{AcquireError, RemoteEnumeration, TargetSource};

/// Canned API endpoint. Answers `/v1/ping` with a success body and every
/// other path with `subdomains_body`, always using `status_line`.
async fn spawn_api(status_line: &'static str, subdomains_body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 2048];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).into_owned();

                let body = if request.starts_with("GET /v1/ping") {
                    r#"{"success":true}"#
                } else {
                    subdomains_body
                };
                let response = format!(
                    "{status_line}\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
            });
        }
    });

    format!("http://{addr}/v1")
}

/// Labels come back qualified against the domain, in response order,
/// duplicates and all.
#[tokio::test]
async fn remote_enumeration_qualifies_in_response_order() {
    let root = spawn_api(
        "HTTP/1.1 200 OK",
        r#"{"subdomains":["www","mail","www","api"]}"#,
    )
    .await;
    let source = RemoteEnumeration::with_client(SecurityTrails::with_root("key", root));

    let hosts = source
        .collect(&Target::new("example.com"))
        .await
        .expect("collect failed");

    assert_eq!(
        hosts,
        [
            "www.example.com",
            "mail.example.com",
            "www.example.com",
            "api.example.com"
        ]
    );
}

#[tokio::test]
async fn rejected_credential_fails_before_lookup() {
    let root = spawn_api("HTTP/1.1 403 Forbidden", "{}").await;
    let source = RemoteEnumeration::with_client(SecurityTrails::with_root("bad-key", root));

    match source.collect(&Target::new("example.com")).await {
        Err(AcquireError::CredentialRejected) => {}
        other => panic!("expected CredentialRejected, got {:?}", other),
    }
}

/// A domain the service knows nothing about must abort the run before
/// any target list is written.
#[tokio::test]
async fn empty_enumeration_result_is_fatal() {
    let root = spawn_api("HTTP/1.1 200 OK", "{}").await;
    let source = RemoteEnumeration::with_client(SecurityTrails::with_root("key", root));

    match source.collect(&Target::new("example.com")).await {
        Err(AcquireError::NoSubdomains { domain }) => assert_eq!(domain, "example.com"),
        other => panic!("expected NoSubdomains, got {:?}", other),
    }
}
