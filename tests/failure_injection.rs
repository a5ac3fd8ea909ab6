//! Upstream failure behavior: status propagation, timeouts, and the
//! single-attempt policy.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use so_profile_api::http::ErrorBody;

mod common;

const SERVER_FAULT_BODY: &str = r#"{"error_id":500,"error_name":"internal_error","error_message":"An error occurred while processing the request."}"#;

const THROTTLE_BODY: &str = r#"{"error_id":502,"error_name":"throttle_violation","error_message":"too many requests from this IP, more requests will be allowed in 60 seconds"}"#;

const BAD_PARAMETER_BODY: &str = r#"{"error_id":400,"error_name":"bad_parameter","error_message":"ids"}"#;

#[tokio::test]
async fn test_upstream_500_propagates_status_and_body() {
    let upstream = common::start_mock_upstream(500, SERVER_FAULT_BODY).await;
    let (addr, shutdown) = common::start_service(common::test_config(upstream)).await;

    let res = common::client()
        .get(format!("http://{}/api/stackoverflow/jonskeet", addr))
        .send()
        .await
        .expect("service unreachable");
    assert_eq!(res.status(), 500);

    let body: ErrorBody = res.json().await.unwrap();
    assert_eq!(body.upstream_status, Some(500));
    assert_eq!(body.upstream_body.as_deref(), Some(SERVER_FAULT_BODY));
    assert!(
        body.error.contains("internal_error"),
        "message should carry the upstream summary: {}",
        body.error
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_upstream_503_keeps_status() {
    let upstream = common::start_mock_upstream(503, SERVER_FAULT_BODY).await;
    let (addr, shutdown) = common::start_service(common::test_config(upstream)).await;

    let res = common::client()
        .get(format!("http://{}/api/stackoverflow/id/22656", addr))
        .send()
        .await
        .expect("service unreachable");
    assert_eq!(res.status(), 503);

    shutdown.trigger();
}

#[tokio::test]
async fn test_upstream_429_surfaces_throttle_summary() {
    let upstream = common::start_mock_upstream(429, THROTTLE_BODY).await;
    let (addr, shutdown) = common::start_service(common::test_config(upstream)).await;

    let res = common::client()
        .get(format!("http://{}/api/stackoverflow/jonskeet", addr))
        .send()
        .await
        .expect("service unreachable");
    assert_eq!(res.status(), 429);

    let body: ErrorBody = res.json().await.unwrap();
    assert!(body.error.contains("throttle_violation"), "got: {}", body.error);
    assert_eq!(body.upstream_status, Some(429));

    shutdown.trigger();
}

#[tokio::test]
async fn test_upstream_400_becomes_not_found() {
    let upstream = common::start_mock_upstream(400, BAD_PARAMETER_BODY).await;
    let (addr, shutdown) = common::start_service(common::test_config(upstream)).await;

    let res = common::client()
        .get(format!("http://{}/api/stackoverflow/id/99999999", addr))
        .send()
        .await
        .expect("service unreachable");
    assert_eq!(res.status(), 404, "an upstream 400 means the subject does not exist");

    let body: ErrorBody = res.json().await.unwrap();
    assert!(body.error.contains("99999999"));
    assert!(body.upstream_status.is_none(), "not-found hides upstream plumbing");

    shutdown.trigger();
}

#[tokio::test]
async fn test_upstream_timeout_reports_plainly() {
    let upstream = common::start_programmable_upstream(|_| async move {
        tokio::time::sleep(Duration::from_secs(4)).await;
        (200, "{\"items\": []}".to_string())
    })
    .await;
    let (addr, shutdown) = common::start_service(common::test_config(upstream)).await;

    let res = common::client()
        .get(format!("http://{}/api/stackoverflow/jonskeet", addr))
        .send()
        .await
        .expect("service unreachable");
    assert_eq!(res.status(), 500);

    let body: ErrorBody = res.json().await.unwrap();
    assert!(body.error.contains("timed out"), "got: {}", body.error);
    assert!(body.upstream_status.is_none());

    shutdown.trigger();
}

#[tokio::test]
async fn test_unreachable_upstream_is_internal_error() {
    // Grab a port nothing listens on.
    let dead = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let (addr, shutdown) = common::start_service(common::test_config(dead)).await;

    let res = common::client()
        .get(format!("http://{}/api/stackoverflow/jonskeet", addr))
        .send()
        .await
        .expect("service unreachable");
    assert_eq!(res.status(), 500);

    let body: ErrorBody = res.json().await.unwrap();
    assert!(body.error.contains("could not reach"), "got: {}", body.error);

    shutdown.trigger();
}

#[tokio::test]
async fn test_failed_lookups_are_not_retried() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();
    let upstream = common::start_programmable_upstream(move |_| {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            (500, SERVER_FAULT_BODY.to_string())
        }
    })
    .await;
    let (addr, shutdown) = common::start_service(common::test_config(upstream)).await;

    let res = common::client()
        .get(format!("http://{}/api/stackoverflow/jonskeet", addr))
        .send()
        .await
        .expect("service unreachable");
    assert_eq!(res.status(), 500);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1, "a failed call must not be retried");

    shutdown.trigger();
}
