//! Page components, one per route.

pub mod alerts;
pub mod dashboard;
pub mod events;
pub mod login;
pub mod register;
pub mod rules;
