//! # API Route Modules
//!
//! - `boxes` — the box document endpoints: read the current list, overwrite
//!   it. Both delegate directly to the GitHub contents client.
//! - `pages` — the static landing page.

pub mod boxes;
pub mod pages;
