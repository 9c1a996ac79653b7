//! # Showcase Architecture
//!
//! Showcase holds the browsing logic of the component-library demo: catalogs of items, a
//! category + text filter over them, like toggles, and an edit-in-place account form. It is a
//! UI-agnostic library with a terminal client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and shell lines, renders results        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the open Session                                    │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - State transitions of one view, one input at a time       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (filter.rs, likes.rs, draft.rs, session.rs)           │
//! │  Sources (store/): built-in catalogs or a JSON directory    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## View State
//!
//! Each view owns its state exclusively. Opening a view creates fresh defaults (all categories,
//! empty query, no likes beyond the catalog's pre-liked items, no draft); leaving it drops
//! everything. Nothing is persisted and nothing is shared between views.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user action
//! - [`filter`]: The catalog filter
//! - [`likes`]: Liked-id sets
//! - [`draft`]: Edit-in-place sessions
//! - [`session`]: The open view and its state
//! - [`store`]: Catalog sources
//! - [`model`]: Core data types (`CatalogItem`, `Catalog`, `Profile`, `ViewKind`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod filter;
pub mod likes;
pub mod model;
pub mod session;
pub mod store;
