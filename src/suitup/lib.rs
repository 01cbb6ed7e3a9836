//! # SuitUp Architecture
//!
//! SuitUp is a **UI-agnostic rental-catalog library**. This is not a CLI
//! application that happens to have some library code. It's a library
//! that happens to ship with a CLI client, and that distinction drives the
//! architecture.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract CatalogStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The rental lifecycle
//!
//! A suit either sits on the shelf or carries one rental attachment:
//! customer, contact data, delivery and return dates. The attachment is
//! all-or-nothing: [`validation`] rejects partial ones at the submission
//! boundary, while [`model::repair`] tolerates whatever legacy shapes the
//! stored catalog contains. [`classify`] derives the shop's four working
//! views (available, rented, overdue, returned) plus the reminder window
//! from the same collection; nothing is stored twice.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust values, returns regular
//! Rust types, never writes to stdout and never reads the clock; the
//! reference date is injected. The same core could serve a desktop app or
//! an HTTP API.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types and integrity repair
//! - [`validation`]: Rental attachment rules
//! - [`classify`]: Lifecycle classification, sorting, reminders
//! - [`company`]: Company profile for receipts
//! - [`seed`]: Sample catalog
//! - [`dates`]: Calendar-date helpers
//! - [`error`]: Error types

pub mod api;
pub mod classify;
pub mod commands;
pub mod company;
pub mod dates;
pub mod error;
pub mod model;
pub mod seed;
pub mod store;
pub mod validation;
