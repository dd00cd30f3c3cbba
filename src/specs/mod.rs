// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific knowledge: *where the ground truth lives in the HTML* and how
//! to read it. A spec is pure parsing. It takes markup and returns raw text rows;
//! it never fetches, coerces types, or writes files.
//!
//! ## Typical call chain
//! ```text
//! cli / gui → runner::run → scrape::collect_snapshot
//!                              ├─ core::net::http_get
//!                              ├─ specs::countries::extract   (markup → RawRecord)
//!                              └─ scrape::clean::normalize     (RawRecord → Snapshot)
//! ```
//!
//! ## Conventions
//! - Case-insensitive tag detection, local scanning inside the located table.
//! - Column positions live in one named map per page, so layout drift is a
//!   one-line change.
//! - Layout drift is an error, never a silent fallback.
pub mod countries;
