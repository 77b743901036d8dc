//! Variant Gate Core
//!
//! Exhaustive runtime selection between mutually-exclusive behavior variants.
//!
//! # Overview
//!
//! - **Selector**: the closed set of legal variant tags, fixed at construction
//! - **Selection**: one legal tag, used to pick from caller-supplied mappings
//! - **VariantMap**: tag-keyed mapping validated for exact coverage at dispatch
//!
//! Use a plain `enum` and `match` when the variants are known at compile time.
//! This crate is for variant sets that only exist at runtime, such as the
//! enumerated values of a configuration option.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use vgate_core::Selector;
//!
//! let formats = Selector::new(["line", "json"]);
//! let format = formats.choose("line").unwrap();
//!
//! let prefix = format
//!     .value_from(HashMap::from([("line", "> "), ("json", "{")]))
//!     .unwrap();
//! assert_eq!(prefix, "> ");
//!
//! // Forgetting a variant is caught at the call site
//! let err = format.value_from(HashMap::from([("line", "> ")])).unwrap_err();
//! assert_eq!(err.to_string(), "missing options for [json]");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod map;
mod selection;
mod selector;
mod sink;

// Re-exports
pub use error::SelectError;
pub use map::VariantMap;
pub use selection::Selection;
pub use selector::{Selector, VariantTag, Variants, DEFAULT_LABEL};
pub use sink::{LogSink, TracingSink};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for selection and dispatch
    pub use crate::{LogSink, SelectError, Selection, Selector, VariantMap, VariantTag, Variants};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
