//! GAWD DOC - Design-document template editor with print-ready export
//!
//! The crate models the GAWD DOC template (a long-form engineering design
//! document) as a static content catalog, keeps the user's answers in an
//! explicit document store, and exports the filled-in document as a clean
//! print artifact that is attached, printed and then always cleaned up.
//!
//! # Layout
//!
//! - `domain` - Catalog, document state, render surface and artifact construction
//! - `ports` - Print surface and print host contracts
//! - `adapters` - In-memory, spool-directory and system-command implementations
//! - `application` - Command handlers for editing and exporting
//! - `config` - Environment-driven configuration
//! - `telemetry` - Tracing subscriber setup

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
