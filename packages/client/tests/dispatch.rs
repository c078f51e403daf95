//! Dispatch scenarios against a scripted transport.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use http::{Method, StatusCode};
use serde_json::{Map, Value};

use common::{session_over, ApiError, MockTransport, Token};
use tandem_client::{ApiRequest, RawExchange};

fn token_request(
    session: &tandem_client::Session,
    params: Map<String, Value>,
) -> ApiRequest<Token, ApiError> {
    ApiRequest::new(
        session,
        Method::POST,
        "https://example.com/token".parse().expect("url"),
        common::token_classifier,
    )
    .expect("recognized verb")
    .with_parameters(params)
}

fn grant_type_password() -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("grant_type".into(), Value::from("password"));
    params
}

#[tokio::test]
async fn post_submits_one_wire_request_with_the_serialized_body() {
    let transport = MockTransport::ok(StatusCode::OK, r#"{"access_token":"tok-1"}"#);
    let session = session_over(Arc::clone(&transport));

    let token = token_request(&session, grant_type_password())
        .dispatch()
        .await
        .expect("canned success classifies");

    assert_eq!(token.access_token, "tok-1");
    assert_eq!(transport.calls(), 1);

    let wire = transport.last_seen().expect("one submission recorded");
    assert_eq!(wire.method, Method::POST);
    assert_eq!(wire.url.as_str(), "https://example.com/token");
    assert_eq!(
        wire.body.as_deref(),
        Some(br#"{"grant_type":"password"}"#.as_slice())
    );
    assert_eq!(
        wire.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
}

#[tokio::test]
async fn classifier_runs_exactly_once_per_dispatch() {
    let transport = MockTransport::ok(StatusCode::OK, "{}");
    let session = session_over(Arc::clone(&transport));
    let applications = Arc::new(AtomicUsize::new(0));

    let probe = Arc::clone(&applications);
    let request = ApiRequest::new(
        &session,
        Method::GET,
        "https://example.com/ping".parse().expect("url"),
        move |_: RawExchange| {
            probe.fetch_add(1, Ordering::SeqCst);
            Ok::<_, ApiError>(())
        },
    )
    .expect("recognized verb");

    request.dispatch().await.expect("canned success");

    assert_eq!(applications.load(Ordering::SeqCst), 1);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn transport_failure_reaches_the_classifier_without_retry() {
    let transport = MockTransport::refusing();
    let session = session_over(Arc::clone(&transport));

    let err = token_request(&session, grant_type_password())
        .dispatch()
        .await
        .expect_err("refused connection classifies as failure");

    assert!(matches!(err, ApiError::Transport(ref msg) if msg.contains("connection")));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn error_status_maps_through_the_classifier() {
    let transport = MockTransport::ok(StatusCode::UNAUTHORIZED, r#"{"error":"bad_creds"}"#);
    let session = session_over(Arc::clone(&transport));

    let err = token_request(&session, grant_type_password())
        .dispatch()
        .await
        .expect_err("401 classifies as failure");

    assert_eq!(err, ApiError::Status(401));
}

#[tokio::test]
async fn session_stats_track_classified_outcomes() {
    let transport = MockTransport::replying(vec![
        common::Canned::Success {
            status: StatusCode::OK,
            body: r#"{"access_token":"tok-1"}"#,
        },
        common::Canned::ConnectionRefused,
    ]);
    let session = session_over(Arc::clone(&transport));

    let request = token_request(&session, grant_type_password());
    request.dispatch().await.expect("first canned result");
    request.dispatch().await.expect_err("second canned result");

    let snapshot = session.stats().snapshot();
    assert_eq!(snapshot.total_dispatches, 2);
    assert_eq!(snapshot.succeeded, 1);
    assert_eq!(snapshot.failed, 1);
}

#[tokio::test]
async fn attached_tracer_sees_both_sides_of_the_exchange() {
    let transport = MockTransport::ok(StatusCode::OK, "{}");
    let session = session_over(Arc::clone(&transport));
    let tracer = Arc::new(common::CountingTracer::default());

    let request = ApiRequest::new(
        &session,
        Method::GET,
        "https://example.com/ping".parse().expect("url"),
        |_: RawExchange| Ok::<_, ApiError>(()),
    )
    .expect("recognized verb")
    .with_tracer(Arc::clone(&tracer) as Arc<dyn tandem_client::Tracer>);

    request.dispatch().await.expect("canned success");

    assert_eq!(tracer.outgoing.load(Ordering::SeqCst), 1);
    assert_eq!(tracer.incoming.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn verbose_sessions_keep_the_adopted_tracer() {
    let transport = MockTransport::ok(StatusCode::OK, "{}");
    let session = tandem_client::Session::builder()
        .transport(Arc::clone(&transport) as Arc<dyn tandem_client::Transport>)
        .diagnostics(tandem_client::DiagnosticsConfig::from_json_slice(
            br#"{"client_id":"abc","domain":"example.com","verbose_logging":true}"#,
        ))
        .build();
    let tracer = Arc::new(common::CountingTracer::default());

    let request = ApiRequest::new(
        &session,
        Method::GET,
        "https://example.com/ping".parse().expect("url"),
        |_: RawExchange| Ok::<_, ApiError>(()),
    )
    .expect("recognized verb")
    .with_tracer(Arc::clone(&tracer) as Arc<dyn tandem_client::Tracer>);

    assert!(request.is_traced());
    request.dispatch().await.expect("canned success");

    // The default tracer adopted at construction stayed in place.
    assert_eq!(tracer.outgoing.load(Ordering::SeqCst), 0);
    assert_eq!(tracer.incoming.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn untraced_dispatch_stays_silent() {
    let transport = MockTransport::ok(StatusCode::OK, "{}");
    let session = session_over(Arc::clone(&transport));

    let request = ApiRequest::new(
        &session,
        Method::GET,
        "https://example.com/ping".parse().expect("url"),
        |_: RawExchange| Ok::<_, ApiError>(()),
    )
    .expect("recognized verb");

    assert!(!request.is_traced());
    request.dispatch().await.expect("canned success");
}
