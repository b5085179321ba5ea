//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients and adapters for external services like mail delivery.

pub mod mail;
