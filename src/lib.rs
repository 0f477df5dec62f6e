// src/lib.rs

pub mod error;
pub mod render;
pub mod stamp;

/// Application version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
