//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `provision.rs` — the five folder-creation operations + demonstration run.
//! - `byline.rs` — fixed practice profile, derived statistics, byline text.
//! - `stats.rs` — min/max/mean/sample standard deviation helpers.
//! - `speech.rs` — external speech-engine adapter.
//! - `logfile.rs` — size-rotated log file writer + tracing setup.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod byline;
pub mod logfile;
pub mod output;
pub mod provision;
pub mod speech;
pub mod stats;
