//! Core stack-navigation library for the two-screen demo.
//!
//! Main components:
//! - [`config`] — screen configuration tags.
//! - [`stack`] — the never-empty navigation stack.
//! - [`store`] — the navigation store and its subscribers.
//! - [`component`] — root and per-screen components.
//! - [`types`] — shared type aliases.

pub mod component;
pub mod config;
pub mod stack;
pub mod store;
pub mod types;
