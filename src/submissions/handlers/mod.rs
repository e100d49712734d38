//! HTTP handlers for the `/submissions` routes.

pub mod root;
