//! HTTP handlers for the `/cases` routes.

pub mod root;
pub mod latest;
pub mod demo;
