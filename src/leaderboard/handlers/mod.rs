//! HTTP handlers for the `/leaderboard` routes.

pub mod root;
