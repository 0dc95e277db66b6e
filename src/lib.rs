//! Heuristic quality scanner for C-like source text.
//!
//! The core entry point is [`analysis::analyze`], a pure function from source
//! text to an [`types::AnalysisReport`]. Everything else (discovery, config,
//! rendering, the CLI) is plumbing around it.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod reporting;
pub mod types;
