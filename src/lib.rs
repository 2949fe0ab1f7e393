//! Task list UI over the 4Geeks playground Task Service.
//!
//! A single Leptos CSR view backed by a thin HTTP client. The synchronization
//! flows (load with bounded create-user recovery, add, delete, clear-all)
//! live in [`sync`] and [`state`] so the native test suite can drive them
//! against the in-memory service in [`api`].

pub mod api;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod state;
pub mod sync;

mod app;

pub use app::App;
