//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `provision.rs` — run/range/list/prefixed/periodic/standardized.
//! - `byline.rs` — byline display and optional playback.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod byline;
pub mod provision;

pub use byline::handle_byline_commands;
pub use provision::handle_provision_commands;
