//! Filelink Server Library
//!
//! Deterministic file links and usage statistics for forwarded media.
//! The server binary is in main.rs.
//!
//! # Modules
//!
//! - `links`: Canonical encoding, SHA-256 tokens and link issuing
//! - `stats`: Daily usage counters (aggregator and reporter)
//! - `events`: Processing of inbound file events
//! - `db`: SQLite persistence
//! - `routes`: HTTP API

pub mod config;
pub mod db;
pub mod error;
pub mod events;
pub mod links;
pub mod routes;
pub mod state;
pub mod stats;
