//! Remap Diagnostic - configuration-error reporting.
//!
//! Errors raised while generating mapping code are static configuration
//! defects: a mapping entry names a path that resolves to nothing, or an
//! aggregate-function registration that cannot generate code. They abort
//! the configuration build for the owning class; there is nothing to
//! retry.
//!
//! # Structured Error Categories
//!
//! `ConfigErrorKind` provides typed categories for programmatic matching.
//! Factory functions (e.g., `invalid_aggregate_path()`) are the public
//! construction API — they populate both `kind` and the rendered message.

mod errors;

pub use errors::{
    invalid_aggregate_path, unknown_function, unsupported_implementation, ConfigError,
    ConfigErrorKind, ConfigResult,
};
