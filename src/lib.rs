//! Track CSV loader - shared modules for the trackdb binary.

pub mod load;
pub mod models;
pub mod progress;
pub mod schema;
