//! Report rendering.
//!
//! Two renderers consume the same summary tree: a JSON export that preserves
//! the full client -> size -> phase -> kind hierarchy, and a self-contained
//! HTML document with one table per client.

pub mod format;
pub mod html;
pub mod json;
