//! HTTP transport layer
//!
//! Holds the handler behind the `/api/home` route.

pub mod handlers;
