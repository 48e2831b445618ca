//! Portfolio domain crate.
//!
//! Holds the static content catalog and the pure logic layered on top of it:
//! category filtering, media resolution for cards and detail views, and the
//! local-only contact form rules. Nothing in here performs network I/O.

pub mod catalog;
pub mod contact;
pub mod error;
pub mod filter;
pub mod media;
pub mod models;
pub mod types;
