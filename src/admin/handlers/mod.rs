//! HTTP handlers for the `/admin` routes.

pub mod publish;
