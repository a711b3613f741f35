//! # Biblio Architecture
//!
//! Biblio is a **UI-agnostic library-catalogue manager**: books, members and
//! loans over flat CSV files, gated behind two roles (librarian, member).
//! The terminal shell in `main.rs` is just one client of the library.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (main.rs)                                            │
//! │  - Menus, prompts, output formatting                        │
//! │  - The ONLY place that knows about stdout/stdin/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade; owns the single active Session              │
//! │  - Stamps operations with the current date                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Auth (auth.rs)             │
//! │  - Business logic and role gating, pure Rust types          │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, never touches stdout/stderr and never assumes a
//! terminal. The same core could serve a GUI or a web front end.
//!
//! Sessions are explicit values: `login` produces one, gated commands take
//! one. Nothing reads authentication state from ambient globals.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`auth`]: Credential verification and member registration
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Book`, `Member`, `Loan`, `Session`)
//! - [`config`]: Configuration management
//! - [`init`]: Context wiring for file-backed deployments
//! - [`error`]: Error types

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
