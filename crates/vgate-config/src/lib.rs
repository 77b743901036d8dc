//! Variant Gate Config
//!
//! Enumerated configuration options backed by [`vgate_core::Selector`].
//!
//! A [`SchemaSet`] is loaded once from JSON or YAML. Each option's legal
//! values become a selector, and configured values are resolved into
//! [`vgate_core::Selection`]s that dispatch exhaustively.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use vgate_config::SchemaSet;
//!
//! let set = SchemaSet::from_yaml(
//!     r#"
//! options:
//!   - name: log_format
//!     label: log format
//!     choices: [line, json]
//!     default: line
//! "#,
//! )
//! .unwrap();
//!
//! let format = set.resolve("log_format", None).unwrap();
//! let writer = format
//!     .value_from(HashMap::from([
//!         ("line".to_string(), "plain"),
//!         ("json".to_string(), "structured"),
//!     ]))
//!     .unwrap();
//! assert_eq!(writer, "plain");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod schema;
pub mod set;

// Re-exports
pub use error::ConfigError;
pub use schema::ChoiceSchema;
pub use set::{SchemaDocument, SchemaSet};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
