use futures::executor::block_on;

use super::*;
use crate::net::http::Method;
use crate::net::testing::client_at;

// =============================================================
// Generic collection helper
// =============================================================

#[test]
fn list_hits_the_collection_path_with_query() {
    let (api, _tokens, _nav) = client_at("/events");
    api.transport().push_response(200, "[]");

    let query = vec![("severity".to_owned(), "high".to_owned())];
    let events = block_on(EVENTS.list(&api, query.clone())).expect("list");

    assert!(events.is_empty());
    let sent = api.transport().sent.borrow();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].path, "/events");
    assert_eq!(sent[0].query, query);
}

#[test]
fn fetch_builds_the_id_path() {
    let (api, _tokens, _nav) = client_at("/events");
    api.transport().push_response(
        200,
        r#"{"id":"ev-1","event_type":"intrusion","severity":"high"}"#,
    );

    let event = block_on(EVENTS.fetch(&api, "ev-1")).expect("fetch");

    assert_eq!(event.id, "ev-1");
    assert_eq!(event.event_type, "intrusion");
    assert_eq!(api.transport().sent.borrow()[0].path, "/events/ev-1");
}

#[test]
fn create_posts_the_payload() {
    let (api, _tokens, _nav) = client_at("/events");
    api.transport().push_response(
        200,
        r#"{"id":"ev-9","event_type":"stockout"}"#,
    );

    let payload = serde_json::json!({"event_type": "stockout", "source": "shelf-cam-3"});
    let event = block_on(EVENTS.create(&api, &payload)).expect("create");

    assert_eq!(event.id, "ev-9");
    let sent = api.transport().sent.borrow();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].body, Some(payload));
}

#[test]
fn list_decodes_full_records() {
    let (api, _tokens, _nav) = client_at("/alerts");
    api.transport().push_response(
        200,
        r#"[{"id":"al-1","rule_id":"r-1","severity":"critical","status":"open","message":"freezer temp high"}]"#,
    );

    let alerts = block_on(ALERTS.list(&api, Vec::new())).expect("list");

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].message, "freezer temp high");
    assert!(alerts[0].acknowledged_at.is_none());
}

// =============================================================
// Resource-specific verbs
// =============================================================

#[test]
fn acknowledge_patches_the_acknowledge_path() {
    let (api, _tokens, _nav) = client_at("/alerts");
    api.transport().push_response(
        200,
        r#"{"id":"al-1","status":"acknowledged","acknowledged_at":"2024-01-01T00:00:00Z"}"#,
    );

    let alert = block_on(acknowledge_alert(&api, "al-1")).expect("ack");

    assert_eq!(alert.status, "acknowledged");
    let sent = api.transport().sent.borrow();
    assert_eq!(sent[0].method, Method::Patch);
    assert_eq!(sent[0].path, "/alerts/al-1/acknowledge");
    assert!(sent[0].body.is_none());
}

#[test]
fn update_rule_puts_to_the_rule_path() {
    let (api, _tokens, _nav) = client_at("/rules");
    api.transport().push_response(
        200,
        r#"{"id":"r-1","name":"Freezer temp","enabled":false}"#,
    );

    let body = serde_json::json!({"name": "Freezer temp", "enabled": false});
    let rule = block_on(update_rule(&api, "r-1", &body)).expect("update");

    assert!(!rule.enabled);
    let sent = api.transport().sent.borrow();
    assert_eq!(sent[0].method, Method::Put);
    assert_eq!(sent[0].path, "/rules/r-1");
}

#[test]
fn delete_rule_ignores_the_response_body() {
    let (api, _tokens, _nav) = client_at("/rules");
    api.transport().push_response(204, "");

    block_on(delete_rule(&api, "r-1")).expect("delete");

    let sent = api.transport().sent.borrow();
    assert_eq!(sent[0].method, Method::Delete);
    assert_eq!(sent[0].path, "/rules/r-1");
}
