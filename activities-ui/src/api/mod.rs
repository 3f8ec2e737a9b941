//! HTTP API Client
//!
//! Browser implementation of the activities backend calls.

mod client;

pub use client::GlooActivityApi;
