//! User-facing console output

pub mod summary;

pub use summary::print_summary;
