//! Endpoint tests against a live server instance.
//!
//! Each test binds an ephemeral port, serves the real router on a background
//! task, and issues requests over the loopback interface.
//!
//! Run with: cargo test --test health_check_tests

use std::net::SocketAddr;

use greeter::routes::create_router;

/// Bind an ephemeral port and serve the application router on it.
async fn spawn_app() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().expect("failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, create_router())
            .await
            .expect("server task failed");
    });

    addr
}

#[tokio::test]
async fn hello_returns_greeting() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/hello"))
        .await
        .expect("request failed");

    assert_eq!(response.status(), 200);
    let cache_control = response
        .headers()
        .get("cache-control")
        .expect("missing cache-control header")
        .to_str()
        .expect("cache-control is not valid ascii")
        .to_owned();
    assert!(
        cache_control.contains("immutable"),
        "unexpected cache-control: {cache_control}"
    );
    assert_eq!(
        response.text().await.expect("failed to read body"),
        "Hello, World!"
    );
}

#[tokio::test]
async fn health_returns_ok() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/health"))
        .await
        .expect("request failed");

    assert_eq!(response.status(), 200);
    assert!(
        response.headers().get("cache-control").is_none(),
        "health responses must not be cached"
    );
    assert_eq!(response.text().await.expect("failed to read body"), "OK");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/nope"))
        .await
        .expect("request failed");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn responses_are_stable_across_requests() {
    let addr = spawn_app().await;
    let url = format!("http://{addr}/hello");

    for _ in 0..3 {
        let body = reqwest::get(&url)
            .await
            .expect("request failed")
            .text()
            .await
            .expect("failed to read body");
        assert_eq!(body, "Hello, World!");
    }
}
