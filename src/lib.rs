//! Visual Touch: the landing page with its lead form, plus a JSON API over
//! the `users` table in SQLite.
//!
//! `main.rs` wires config, store and server together; the modules are public
//! so `tests/` can build the router against an in-memory store.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
