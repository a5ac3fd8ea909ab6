//! Rust client for the Stack Overflow profile lookup service.

pub mod client;

pub use client::{Badges, HealthStatus, LookupReply, ProfileClient, ProfileSummary};
