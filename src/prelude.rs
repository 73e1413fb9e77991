//! Internal re-exports of the derive macros used across the crate.

pub use derive_more::Display;
