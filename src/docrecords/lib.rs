//! # Docrecords Architecture
//!
//! Docrecords keeps track of converted documents. Each [`model::Record`]
//! pairs an uploaded file with its HTML rendering and its JSONL export, and
//! lives in a concurrent in-memory store for as long as the process runs.
//!
//! It is a library first. The bundled binary is one client; an HTTP service
//! would be another, built on the same [`api::RecordsApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front end (binary: cli/, main.rs; or HTTP handlers)        │
//! │  - Parses input, prints output, owns exit codes             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + transfer objects (dto.rs)             │
//! │  - Thin facade, request validation                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Create, list, get, update html, delete, export, merge    │
//! │  - Maps absent records to `RecordNotFound` where callers    │
//! │    asked for a specific record                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait, InMemoryRecordStore                   │
//! │  - Infallible, thread-safe, newest-first listings           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Document conversion (spreadsheet or word file to HTML + JSONL) is not
//! done here. [`convert::DocumentConverter`] is the seam where a converter
//! plugs in; a record is only created once conversion has succeeded.
//!
//! ## Errors and logging
//!
//! Everything above the store returns [`error::Result`]. The store itself
//! never fails. Library code logs through `tracing` and never installs a
//! subscriber; the binary does that.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic per operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: `Record` and `FileKind`
//! - [`dto`]: Request/response shapes for front ends
//! - [`convert`]: Conversion contract and the sidecar converter
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod convert;
pub mod dto;
pub mod error;
pub mod model;
pub mod store;
