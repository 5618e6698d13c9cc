//! Internal utility modules.

pub mod log_sanitizer;
