//! Typed clients for the events, alerts, and rules resources.
//!
//! The three resources share the same list/fetch/create surface, so they
//! go through one generic [`Collection`] helper parameterized by base
//! path. Resource-specific verbs (acknowledge, update, delete) sit
//! alongside it. The `load_*`/action functions at the bottom are the
//! browser-side entry points used by pages; their errors collapse to
//! display text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::http::{ApiClient, Transport};
use super::types::{Alert, Event, Rule};

/// A REST collection rooted at `base` with elements of type `T`.
pub struct Collection<T> {
    base: &'static str,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> Collection<T> {
    pub const fn new(base: &'static str) -> Self {
        Self {
            base,
            _marker: PhantomData,
        }
    }

    /// List elements, optionally filtered by query parameters.
    pub async fn list<Tr: Transport>(
        &self,
        api: &ApiClient<Tr>,
        query: Vec<(String, String)>,
    ) -> Result<Vec<T>, ApiError> {
        api.get_json_query(self.base, query).await
    }

    /// Fetch a single element by id.
    pub async fn fetch<Tr: Transport>(&self, api: &ApiClient<Tr>, id: &str) -> Result<T, ApiError> {
        api.get_json(&format!("{}/{id}", self.base)).await
    }

    /// Create an element from `payload`.
    pub async fn create<Tr: Transport, B: Serialize>(
        &self,
        api: &ApiClient<Tr>,
        payload: &B,
    ) -> Result<T, ApiError> {
        api.post_json(self.base, payload).await
    }
}

pub const EVENTS: Collection<Event> = Collection::new("/events");
pub const ALERTS: Collection<Alert> = Collection::new("/alerts");
pub const RULES: Collection<Rule> = Collection::new("/rules");

/// PATCH `/alerts/{id}/acknowledge`.
pub async fn acknowledge_alert<T: Transport>(
    api: &ApiClient<T>,
    id: &str,
) -> Result<Alert, ApiError> {
    api.patch_json(&format!("/alerts/{id}/acknowledge")).await
}

/// PUT `/rules/{id}`.
pub async fn update_rule<T: Transport, B: Serialize>(
    api: &ApiClient<T>,
    id: &str,
    rule: &B,
) -> Result<Rule, ApiError> {
    api.put_json(&format!("/rules/{id}"), rule).await
}

/// DELETE `/rules/{id}`.
pub async fn delete_rule<T: Transport>(api: &ApiClient<T>, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/rules/{id}")).await
}

/// List events for the events and dashboard pages.
pub async fn load_events() -> Result<Vec<Event>, String> {
    #[cfg(feature = "hydrate")]
    {
        let api = super::http::browser_client();
        EVENTS
            .list(&api, Vec::new())
            .await
            .map_err(|e| e.user_message("Loading events"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// List alerts for the alerts and dashboard pages.
pub async fn load_alerts() -> Result<Vec<Alert>, String> {
    #[cfg(feature = "hydrate")]
    {
        let api = super::http::browser_client();
        ALERTS
            .list(&api, Vec::new())
            .await
            .map_err(|e| e.user_message("Loading alerts"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// List rules for the rules page.
pub async fn load_rules() -> Result<Vec<Rule>, String> {
    #[cfg(feature = "hydrate")]
    {
        let api = super::http::browser_client();
        RULES
            .list(&api, Vec::new())
            .await
            .map_err(|e| e.user_message("Loading rules"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Acknowledge an alert from the alerts page.
pub async fn ack_alert(id: String) -> Result<Alert, String> {
    #[cfg(feature = "hydrate")]
    {
        let api = super::http::browser_client();
        acknowledge_alert(&api, &id)
            .await
            .map_err(|e| e.user_message("Acknowledging alert"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Flip a rule's enabled flag from the rules page.
pub async fn toggle_rule(rule: Rule) -> Result<Rule, String> {
    #[cfg(feature = "hydrate")]
    {
        let api = super::http::browser_client();
        let updated = Rule {
            enabled: !rule.enabled,
            ..rule.clone()
        };
        update_rule(&api, &rule.id, &updated)
            .await
            .map_err(|e| e.user_message("Updating rule"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = rule;
        Err("not available on server".to_owned())
    }
}

/// Delete a rule from the rules page.
pub async fn remove_rule(id: String) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let api = super::http::browser_client();
        delete_rule(&api, &id)
            .await
            .map_err(|e| e.user_message("Deleting rule"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
