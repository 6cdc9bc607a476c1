//! # Nbscrub Architecture
//!
//! Nbscrub is a **UI-agnostic notebook-scrubbing library** with a thin CLI client.
//! It walks a directory tree for Jupyter notebooks, rewrites hard-coded API-key
//! literals in code cells to `os.getenv(...)` lookups, and injects the dotenv
//! preamble once per file so the rewritten notebook still runs.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs)                                        │
//! │  - Prints the banner, status lines, and summary             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the batch loop and its failure isolation            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure per-operation logic (discover, sanitize)            │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model Layer (model.rs)                                     │
//! │  - Lossless serde view of a notebook                        │
//! │  - Everything this tool does not edit passes through intact │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns `Result`
//! values, and never writes to stdout/stderr or calls `std::process::exit`.
//! The CLI is one possible client, not the reason the library exists.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Per-operation logic (`discover`, `sanitize`)
//! - [`model`]: Lossless notebook data types (`Notebook`, `Cell`, `SourceText`)
//! - [`patterns`]: The key-literal rewrite table and the env preamble
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod patterns;
