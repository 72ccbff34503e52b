//! Network helpers for talking to the feed reader backend.

pub mod api;
