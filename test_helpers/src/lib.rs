//! Test helpers shared across crates.
//!
//! This crate provides declaration builders with predictable anchors, a
//! `figment::Jail` wrapper for option-loading tests and text helpers for
//! comparing rendered source.

pub mod declarations;
pub mod figment;
pub mod text;
