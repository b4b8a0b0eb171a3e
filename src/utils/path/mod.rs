//! Path utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `resolve_path`)
//! - [`segment`]: Component-wise matching (`segments`, `contains_segments`)

pub mod fs;
pub mod segment;

pub use fs::{normalize_path, resolve_path};
pub use segment::{contains_segments, segments};
