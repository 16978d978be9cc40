//! Build-range compatibility checking for IntelliJ Platform plugins
//!
//! A plugin manifest declares the IDE builds it supports as a
//! `since-build`/`until-build` pair (`243`, `251.*`). This crate parses such
//! declarations, compares them against a catalog of known IDE releases, and
//! turns the outcomes plus externally collected API-usage findings into a
//! structured report with an actionable range suggestion.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    build    │────▶│    check    │◀────│   catalog   │
//! │ (numbers,   │     │ (evaluate,  │     │ (releases,  │
//! │  ranges)    │     │  report)    │     │  lookup)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`build`]: Build numbers and declared compatibility ranges
//! - [`catalog`]: The immutable table of known IDE releases
//! - [`check`]: Range evaluation, API-usage issues, and report building
//! - [`config`]: Catalog source resolution (flag, env var, user file, bundled)
//!
//! All core operations are pure and synchronous; the catalog is loaded once
//! and read-only afterwards, so everything here is safely callable from
//! concurrent callers without locking.

pub mod build;
pub mod catalog;
pub mod check;
pub mod config;
