//! Error types for variant selection and dispatch
//!
//! Every failure is an invalid-argument error raised at the call site:
//! - an unsupported candidate tag passed to [`Selector::choose`](crate::Selector::choose)
//! - a mapping that omits legal tags
//! - a mapping that carries tags outside the legal set

use std::fmt;

/// Selection and dispatch errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// Candidate tag is not in the legal set
    #[error("unsupported {label} '{tag}'; expected one of {}", render_tags(.expected))]
    Unsupported {
        /// Caller label used in the message (`"choice"` by default)
        label: String,
        /// Rejected candidate
        tag: String,
        /// Legal tags in construction order
        expected: Vec<String>,
    },

    /// Mapping is missing legal tags
    #[error("missing options for {}", render_tags(.tags))]
    Missing {
        /// Legal tags absent from the mapping
        tags: Vec<String>,
    },

    /// Mapping carries tags outside the legal set
    #[error("unsupported options {}", render_tags(.tags))]
    Unknown {
        /// Mapping tags absent from the legal set
        tags: Vec<String>,
    },
}

impl SelectError {
    /// Create unsupported-candidate error
    #[must_use]
    pub fn unsupported<Q, I>(label: &str, tag: &Q, expected: I) -> Self
    where
        Q: fmt::Display + ?Sized,
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        Self::Unsupported {
            label: label.to_string(),
            tag: tag.to_string(),
            expected: expected.into_iter().map(|t| ToString::to_string(&t)).collect(),
        }
    }

    /// Create missing-tags error
    #[must_use]
    pub fn missing<I>(tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        Self::Missing {
            tags: tags.into_iter().map(|t| ToString::to_string(&t)).collect(),
        }
    }

    /// Create unknown-tags error
    #[must_use]
    pub fn unknown<I>(tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        Self::Unknown {
            tags: tags.into_iter().map(|t| ToString::to_string(&t)).collect(),
        }
    }

    /// Check if the candidate tag was rejected
    #[inline]
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    /// Check if the mapping was missing tags
    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    /// Check if the mapping carried extra tags
    #[inline]
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }

    /// Tags named by this error
    ///
    /// For [`SelectError::Unsupported`] this is the rejected candidate alone.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        match self {
            Self::Unsupported { tag, .. } => std::slice::from_ref(tag),
            Self::Missing { tags } | Self::Unknown { tags } => tags,
        }
    }
}

/// Render tags as `[a, b, c]`
pub(crate) fn render_tags(tags: &[String]) -> String {
    format!("[{}]", tags.join(", "))
}
