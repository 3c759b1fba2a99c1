use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::testing::client_at;
use crate::net::token::TokenStore;

// =============================================================
// Outbound step: bearer attachment
// =============================================================

#[test]
fn attaches_bearer_header_when_token_present() {
    let (api, tokens, _nav) = client_at("/dashboard");
    tokens.set("abc");
    api.transport().push_response(200, "{}");

    block_on(api.dispatch(ApiRequest::get("/events"))).expect("success");

    let sent = api.transport().sent.borrow();
    assert_eq!(sent[0].header("Authorization"), Some("Bearer abc"));
}

#[test]
fn no_authorization_header_without_token() {
    let (api, _tokens, _nav) = client_at("/dashboard");
    api.transport().push_response(200, "{}");

    block_on(api.dispatch(ApiRequest::get("/events"))).expect("success");

    let sent = api.transport().sent.borrow();
    assert_eq!(sent[0].header("Authorization"), None);
}

#[test]
fn token_is_read_at_dispatch_time_not_construction() {
    let (api, tokens, _nav) = client_at("/dashboard");
    api.transport().push_response(200, "{}");
    api.transport().push_response(200, "{}");

    block_on(api.dispatch(ApiRequest::get("/events"))).expect("success");
    tokens.set("late");
    block_on(api.dispatch(ApiRequest::get("/events"))).expect("success");

    let sent = api.transport().sent.borrow();
    assert_eq!(sent[0].header("Authorization"), None);
    assert_eq!(sent[1].header("Authorization"), Some("Bearer late"));
}

#[test]
fn token_cleared_between_requests_stops_attachment() {
    // Another in-flight request's 401 handler may clear the store at any
    // point; the next dispatch must see the cleared state.
    let (api, tokens, _nav) = client_at("/dashboard");
    tokens.set("abc");
    api.transport().push_response(200, "{}");
    api.transport().push_response(200, "{}");

    block_on(api.dispatch(ApiRequest::get("/events"))).expect("success");
    tokens.clear();
    block_on(api.dispatch(ApiRequest::get("/events"))).expect("success");

    let sent = api.transport().sent.borrow();
    assert_eq!(sent[0].header("Authorization"), Some("Bearer abc"));
    assert_eq!(sent[1].header("Authorization"), None);
}

// =============================================================
// Inbound step: 401 handling
// =============================================================

#[test]
fn unauthorized_clears_token_store() {
    let (api, tokens, _nav) = client_at("/dashboard");
    tokens.set("stale");
    api.transport().push_response(401, r#"{"detail":"expired"}"#);

    let err = block_on(api.dispatch(ApiRequest::get("/events"))).unwrap_err();

    assert!(tokens.get().is_none());
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 401,
            detail: Some("expired".to_owned()),
            message: None,
        }
    );
}

#[test]
fn unauthorized_away_from_login_navigates_to_login() {
    let (api, _tokens, nav) = client_at("/dashboard");
    api.transport().push_response(401, "{}");

    let _ = block_on(api.dispatch(ApiRequest::get("/events")));

    assert_eq!(*nav.visited.borrow(), vec![LOGIN_PATH.to_owned()]);
}

#[test]
fn each_unauthorized_response_navigates_once() {
    let (api, _tokens, nav) = client_at("/dashboard");
    api.transport().push_response(401, "{}");
    api.transport().push_response(401, "{}");

    let _ = block_on(api.dispatch(ApiRequest::get("/events")));
    let _ = block_on(api.dispatch(ApiRequest::get("/alerts")));

    assert_eq!(nav.visited.borrow().len(), 2);
}

#[test]
fn unauthorized_on_login_view_never_navigates() {
    let (api, tokens, nav) = client_at("/login");
    api.transport().push_response(401, r#"{"detail":"Invalid credentials"}"#);
    api.transport().push_response(401, r#"{"detail":"Invalid credentials"}"#);

    let _ = block_on(api.dispatch(ApiRequest::post("/auth/login")));
    let _ = block_on(api.dispatch(ApiRequest::post("/auth/login")));

    assert!(nav.visited.borrow().is_empty());
    assert!(tokens.get().is_none());
}

// =============================================================
// Pass-through and error surfacing
// =============================================================

#[test]
fn non_401_rejection_has_no_session_side_effects() {
    let (api, tokens, nav) = client_at("/dashboard");
    tokens.set("abc");
    api.transport().push_response(500, r#"{"detail":"boom"}"#);

    let err = block_on(api.dispatch(ApiRequest::get("/events"))).unwrap_err();

    assert_eq!(tokens.get().as_deref(), Some("abc"));
    assert!(nav.visited.borrow().is_empty());
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 500,
            detail: Some("boom".to_owned()),
            message: None,
        }
    );
}

#[test]
fn transport_failure_surfaces_unchanged() {
    let (api, tokens, nav) = client_at("/dashboard");
    tokens.set("abc");
    api.transport()
        .push_failure(ApiError::Transport("connection refused".to_owned()));

    let err = block_on(api.dispatch(ApiRequest::get("/events"))).unwrap_err();

    assert_eq!(err, ApiError::Transport("connection refused".to_owned()));
    assert_eq!(tokens.get().as_deref(), Some("abc"));
    assert!(nav.visited.borrow().is_empty());
}

#[test]
fn body_and_query_are_forwarded_to_the_transport() {
    let (api, _tokens, _nav) = client_at("/dashboard");
    api.transport().push_response(200, "{}");

    let req = ApiRequest::post("/events")
        .with_query(vec![("severity".to_owned(), "high".to_owned())])
        .with_body(&serde_json::json!({"event_type": "intrusion"}))
        .expect("serializable body");
    block_on(api.dispatch(req)).expect("success");

    let sent = api.transport().sent.borrow();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].query, vec![("severity".to_owned(), "high".to_owned())]);
    assert_eq!(
        sent[0].body,
        Some(serde_json::json!({"event_type": "intrusion"}))
    );
}

#[test]
fn json_decode_failure_is_a_local_error() {
    let (api, _tokens, _nav) = client_at("/dashboard");
    api.transport().push_response(200, "not json");

    let result: Result<Vec<String>, ApiError> = block_on(api.get_json("/events"));

    assert!(matches!(result, Err(ApiError::Local(_))));
}
